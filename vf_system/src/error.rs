use crate::realtime::transport::TransportError;

pub type Result<T> = std::result::Result<T, SessionError>;

error_set::error_set! {
    SessionError = {
        #[display("{variable} environment variable not set")]
        Configuration {
            variable: String,
        },
        #[display("OpenAI API error: {body}")]
        Upstream {
            status: u16,
            body: String,
        },
        #[display("Failed to connect to OpenAI API: {0}")]
        Connectivity(TransportError),
        #[display("OpenAI API returned a malformed session: {0}")]
        MalformedSession(serde_json::Error),
    };
}

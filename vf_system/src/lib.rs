//! All content related to the back-end systems, namely minting realtime voice sessions with the upstream provider.

pub use crate::realtime::{RealtimeSession, SessionProxy, SessionProxyHandle};

pub mod realtime;
pub mod error;

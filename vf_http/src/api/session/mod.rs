pub use routes::config;

pub mod routes;

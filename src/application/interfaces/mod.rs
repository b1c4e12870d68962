mod chat_client;
mod http_transport;

pub use chat_client::*;
pub use http_transport::*;

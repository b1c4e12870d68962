mod completion_client;
mod mock_chat_client;
mod reqwest_transport;

pub use completion_client::*;
pub use mock_chat_client::*;
pub use reqwest_transport::*;

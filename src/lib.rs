pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    ChatClient, ChatSessionUseCase, HttpRequest, HttpResponse, HttpTransport, APOLOGY_TEXT,
};

pub use cli::Commands;

pub use connector::{
    CompletionClient, CompletionConfig, MockChatClient, ReqwestTransport, APP_TITLE,
    DEFAULT_BASE_URL, DEFAULT_ORIGIN, EMPTY_INPUT_REPLY,
};

pub use domain::{ChatMessage, CompletionError, MessageFactory, WELCOME_TEXT};

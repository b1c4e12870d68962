mod message_factory;

pub use message_factory::*;

mod dto;
mod error;
mod freedesktop_push_service;
mod push_service;

pub use dto::PushServiceConfig;
pub use error::*;
pub use freedesktop_push_service::*;
pub use push_service::*;

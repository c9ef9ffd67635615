mod push_service_config;

pub use push_service_config::*;

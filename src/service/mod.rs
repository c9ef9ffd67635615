pub mod activity_mapper;
pub mod config_service;
pub mod notifications_service;
pub mod push_service;

mod activity_mapper;

pub use activity_mapper::*;

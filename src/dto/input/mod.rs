mod activity;
mod notification;

pub use activity::*;
pub use notification::*;

pub mod core;
pub mod refresher;

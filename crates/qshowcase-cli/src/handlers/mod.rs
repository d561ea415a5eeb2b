pub mod browse;
pub mod code;
pub mod show;
pub mod topics;

//! Language server process handle

pub mod manager;

pub use manager::{ServerLaunch, ServerProcess};

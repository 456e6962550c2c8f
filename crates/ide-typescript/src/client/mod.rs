//! Notification routing between the language server and the client library

pub mod connection;
pub mod protocol;

pub use connection::{LanguageClientConnection, NotificationHandler, NotificationRouter};
pub use protocol::JsonRpcNotification;

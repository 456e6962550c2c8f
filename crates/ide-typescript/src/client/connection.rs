//! Custom notification handlers on a language client connection

use std::collections::HashMap;

use serde_json::Value;
use tokio::sync::broadcast;
use tracing::trace;

use super::protocol::JsonRpcNotification;
use crate::error::Result;

/// Notification handler callback
pub type NotificationHandler = Box<dyn Fn(Option<Value>) + Send + Sync>;

/// Connection hooks the client library exposes before initialization
pub trait LanguageClientConnection: Send {
    /// Handle a custom (non-standard) notification method
    fn on_custom(&mut self, method: &str, handler: NotificationHandler);
}

/// Routes server notifications to custom handlers or the default path
///
/// A notification with a registered custom handler goes only to that
/// handler. Everything else is broadcast to subscribers.
pub struct NotificationRouter {
    custom_handlers: HashMap<String, NotificationHandler>,
    notification_tx: broadcast::Sender<JsonRpcNotification>,
}

impl NotificationRouter {
    /// Create a router with no custom handlers
    pub fn new() -> Self {
        let (notification_tx, _) = broadcast::channel(100);
        Self {
            custom_handlers: HashMap::new(),
            notification_tx,
        }
    }

    /// Subscribe to notifications on the default path
    pub fn subscribe(&self) -> broadcast::Receiver<JsonRpcNotification> {
        self.notification_tx.subscribe()
    }

    /// Whether a custom handler is registered for `method`
    pub fn has_custom_handler(&self, method: &str) -> bool {
        self.custom_handlers.contains_key(method)
    }

    /// Route a notification; returns true when a custom handler took it
    pub fn dispatch(&self, notification: JsonRpcNotification) -> bool {
        if let Some(handler) = self.custom_handlers.get(&notification.method) {
            trace!(method = %notification.method, "Custom notification handler");
            handler(notification.params);
            return true;
        }

        // No subscribers is fine
        let _ = self.notification_tx.send(notification);
        false
    }

    /// Parse and route a raw notification body
    pub fn dispatch_raw(&self, body: &str) -> Result<bool> {
        let notification = JsonRpcNotification::parse(body)?;
        Ok(self.dispatch(notification))
    }
}

impl LanguageClientConnection for NotificationRouter {
    fn on_custom(&mut self, method: &str, handler: NotificationHandler) {
        self.custom_handlers.insert(method.to_string(), handler);
    }
}

impl Default for NotificationRouter {
    fn default() -> Self {
        Self::new()
    }
}

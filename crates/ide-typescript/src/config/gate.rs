//! Configuration gate
//!
//! Every decision reads the provider at call time. Nothing is cached here,
//! so a setting changed in the host takes effect on the next decision.

use std::sync::Arc;

use serde_json::Value;

use super::{keys, qualified};
use crate::{host::ConfigProvider, scopes, types::ReturnTypePlacement};

/// Suggestion priority when this package's completions go first
pub const PRIORITY_FIRST: i32 = 2;

/// Suggestion priority otherwise
pub const PRIORITY_DEFAULT: i32 = 1;

/// Translates package settings into adapter behavior
#[derive(Clone)]
pub struct ConfigurationGate {
    provider: Arc<dyn ConfigProvider>,
}

impl ConfigurationGate {
    /// Create a gate reading from the given provider
    pub fn new(provider: Arc<dyn ConfigProvider>) -> Self {
        Self { provider }
    }

    fn get(&self, name: &str) -> Option<Value> {
        self.provider.get(&qualified(name))
    }

    /// Any value other than `false`, `null`, `0` or `""` counts as on
    fn truthy(&self, name: &str) -> bool {
        match self.get(name) {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => b,
            Some(Value::Number(n)) => n.as_f64().map_or(false, |f| f != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        }
    }

    /// Only the boolean `true` counts as on
    fn strictly_true(&self, name: &str) -> bool {
        self.get(name) == Some(Value::Bool(true))
    }

    /// Whether JavaScript is handled alongside TypeScript
    pub fn javascript_support(&self) -> bool {
        self.truthy(keys::JAVASCRIPT_SUPPORT)
    }

    /// Grammar scopes the server attaches to
    pub fn grammar_scopes(&self) -> Vec<String> {
        scopes::grammar_scopes(self.javascript_support())
    }

    /// Extensions the file-watch filter accepts
    pub fn supported_extensions(&self) -> Vec<String> {
        scopes::supported_extensions(self.javascript_support())
    }

    /// Whether diagnostics reach the linter UI
    pub fn diagnostics_enabled(&self) -> bool {
        self.strictly_true(keys::DIAGNOSTICS_ENABLED)
    }

    /// Whether projects with a `.flowconfig` are skipped
    pub fn ignore_flow(&self) -> bool {
        self.strictly_true(keys::IGNORE_FLOW)
    }

    /// Ordering priority of this package's completions
    pub fn suggestion_priority(&self) -> i32 {
        if self.truthy(keys::AUTOCOMPLETE_RESULTS_FIRST) {
            PRIORITY_FIRST
        } else {
            PRIORITY_DEFAULT
        }
    }

    /// Where completion return types are displayed
    pub fn return_type_placement(&self) -> ReturnTypePlacement {
        match self.get(keys::RETURN_TYPE_IN_AUTOCOMPLETE) {
            Some(Value::String(s)) if s == "left" => ReturnTypePlacement::Left,
            _ => ReturnTypePlacement::Right,
        }
    }
}

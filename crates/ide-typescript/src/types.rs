//! Core data structures shared by the adapter

use serde::{Deserialize, Serialize};

/// A single completion candidate as rendered by the autocomplete UI
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    /// Text inserted when the suggestion is accepted
    pub text: String,
    /// Symbol name shown in the list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_text: Option<String>,
    /// Snippet inserted instead of `text`, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    /// Suggestion kind used to pick an icon (e.g. "function", "property")
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub suggestion_type: Option<String>,
    /// Label on the left of the display text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_label: Option<String>,
    /// Label on the right of the display text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_label: Option<String>,
    /// Longer description shown below the list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Suggestion {
    /// Create a suggestion with the given insertion text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Set the display text
    pub fn with_display_text(mut self, display_text: impl Into<String>) -> Self {
        self.display_text = Some(display_text.into());
        self
    }

    /// Set the right-hand label
    pub fn with_right_label(mut self, right_label: impl Into<String>) -> Self {
        self.right_label = Some(right_label.into());
        self
    }

    /// Set the left-hand label
    pub fn with_left_label(mut self, left_label: impl Into<String>) -> Self {
        self.left_label = Some(left_label.into());
        self
    }

    /// Set the suggestion kind
    pub fn with_type(mut self, suggestion_type: impl Into<String>) -> Self {
        self.suggestion_type = Some(suggestion_type.into());
        self
    }
}

/// Where the return type of a completion signature is displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnTypePlacement {
    /// Parameters on the right, return type on the left
    Left,
    /// Parameters and return type together on the right
    #[default]
    Right,
}

impl ReturnTypePlacement {
    /// Setting value for this placement
    pub fn as_str(&self) -> &'static str {
        match self {
            ReturnTypePlacement::Left => "left",
            ReturnTypePlacement::Right => "right",
        }
    }
}

/// Autocomplete provider registration handed to the autocomplete UI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteProvider {
    /// Scope selector the provider is active for
    pub selector: String,
    /// Scope selector the provider is disabled for
    pub disable_for_selector: String,
    /// Priority among providers included for the same scope
    pub inclusion_priority: i32,
    /// Hide results from lower-priority providers
    pub exclude_lower_priority: bool,
    /// Ordering of this provider's suggestions relative to others
    pub suggestion_priority: i32,
    /// Let the UI fuzzy-filter suggestions
    pub filter_suggestions: bool,
}

impl Default for AutocompleteProvider {
    fn default() -> Self {
        Self {
            selector: String::new(),
            disable_for_selector: ".source .comment".to_string(),
            inclusion_priority: 1,
            exclude_lower_priority: false,
            suggestion_priority: 1,
            filter_suggestions: true,
        }
    }
}

/// State of the language server process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientState {
    /// Not started
    Stopped,
    /// Starting up
    Starting,
    /// Running
    Running,
    /// Shutting down
    ShuttingDown,
    /// Exited on its own
    Crashed,
}

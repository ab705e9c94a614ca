//! Configuration carried by every pipeline

use serde::{Deserialize, Serialize};

use crate::error::StreamResult;

/// Per-pipeline settings, inherited by every pipeline derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Name used in log lines
    pub label: Option<String>,
    /// Capacity reserved up front by the eager sort buffer
    pub initial_capacity: usize,
    /// Maximum number of elements `sorted` may buffer
    pub sort_buffer_limit: Option<usize>,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            label: None,
            initial_capacity: 16,
            sort_buffer_limit: None,
        }
    }
}

impl StreamConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> StreamResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the label shown in log lines
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the capacity reserved for eager buffers
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Cap the number of elements `sorted` may buffer
    pub fn sort_buffer_limit(mut self, limit: usize) -> Self {
        self.sort_buffer_limit = Some(limit);
        self
    }

    pub(crate) fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or("<unnamed>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StreamError;

    #[test]
    fn test_builder_overrides_defaults() {
        let config = StreamConfig::new()
            .label("orders")
            .initial_capacity(64)
            .sort_buffer_limit(1_000);
        assert_eq!(config.label.as_deref(), Some("orders"));
        assert_eq!(config.initial_capacity, 64);
        assert_eq!(config.sort_buffer_limit, Some(1_000));
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let config = StreamConfig::from_json(r#"{ "sort_buffer_limit": 10 }"#).unwrap();
        assert_eq!(config.label, None);
        assert_eq!(config.initial_capacity, 16);
        assert_eq!(config.sort_buffer_limit, Some(10));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = StreamConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, StreamError::Config(_)));
    }

    #[test]
    fn test_display_label() {
        assert_eq!(StreamConfig::default().display_label(), "<unnamed>");
        assert_eq!(StreamConfig::new().label("x").display_label(), "x");
    }
}

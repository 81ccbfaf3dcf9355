//! Textual descriptions and named entities.

use crate::lifetime::Tracked;

/// An entity that can describe its current state.
pub trait Describable {
    /// Human-readable description of the current state.
    fn describe(&self) -> String;
}

/// An immutable label, rendered as `Object name <label>`.
#[derive(Debug)]
pub struct Named {
    label: String,
    tracked: Tracked,
}

impl Clone for Named {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            tracked: self.tracked.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.label.clone_from(&source.label);
        self.tracked.clone_from(&source.tracked);
    }
}

impl Named {
    /// Create a new label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            tracked: Tracked::new(),
        }
    }

    /// Get the label.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Describable for Named {
    fn describe(&self) -> String {
        format!("Object name {}", self.label)
    }
}

//! Per-element-type behavior: argument slots and fanout flags.
//!
//! The table is plain data. Hosts can start from
//! [`BehaviorTable::default()`], adjust individual rows, or load a whole
//! table from JSON.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::field::Arguments;

/// How one element type is treated by the fanout renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Behavior {
    /// Names given to positional arguments, in order.
    pub slots: Vec<String>,
    /// Render one copy of the element per locale.
    #[serde(rename = "clone")]
    pub fanout: bool,
    /// Decorate the label with the locale indicator template.
    pub indicator: bool,
}

impl Behavior {
    pub fn new(slots: &[&str]) -> Self {
        Self {
            slots: slots.iter().map(|s| s.to_string()).collect(),
            fanout: false,
            indicator: false,
        }
    }

    /// Fan the element out over locales.
    pub fn cloned(mut self) -> Self {
        self.fanout = true;
        self
    }

    /// Fan out and decorate the label.
    pub fn translatable(mut self) -> Self {
        self.fanout = true;
        self.indicator = true;
        self
    }
}

/// Lookup table from element type to [`Behavior`].
///
/// # Example
/// ```
/// use polyform::behavior::{Behavior, BehaviorTable};
///
/// let table = BehaviorTable::default().with("wysiwyg", Behavior::new(&["label", "name"]).translatable());
/// assert!(table.classify("wysiwyg").fanout);
/// assert!(!table.classify("open").fanout);
/// assert!(table.classify("unknown").slots.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BehaviorTable {
    rows: HashMap<String, Behavior>,
}

static UNKNOWN: Behavior = Behavior {
    slots: Vec::new(),
    fanout: false,
    indicator: false,
};

impl BehaviorTable {
    /// A table with no rows. Every type classifies as unknown.
    pub fn empty() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }

    /// Look up the behavior of `element_type`.
    ///
    /// Unknown types get no slots and no fanout.
    pub fn classify(&self, element_type: &str) -> &Behavior {
        self.rows.get(element_type).unwrap_or(&UNKNOWN)
    }

    pub fn contains(&self, element_type: &str) -> bool {
        self.rows.contains_key(element_type)
    }

    /// Add or replace a row.
    pub fn insert(&mut self, element_type: impl Into<String>, behavior: Behavior) -> Option<Behavior> {
        self.rows.insert(element_type.into(), behavior)
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, element_type: impl Into<String>, behavior: Behavior) -> Self {
        self.insert(element_type, behavior);
        self
    }

    pub fn remove(&mut self, element_type: &str) -> Option<Behavior> {
        self.rows.remove(element_type)
    }

    /// Load a table from a JSON object keyed by element type.
    pub fn from_json(json: &str) -> Result<Self, crate::error::ConfigError> {
        serde_json::from_str(json).map_err(|e| crate::error::ConfigError::Parse(e.to_string()))
    }

    /// Name positional arguments after the type's slots.
    ///
    /// Arguments beyond the last slot are dropped; slots without an
    /// argument stay absent.
    pub fn map_arguments(&self, element_type: &str, args: Vec<Value>) -> Arguments {
        let slots = &self.classify(element_type).slots;
        let mut mapped = Arguments::new();
        for (slot, value) in slots.iter().zip(args) {
            mapped.set(slot.clone(), value);
        }
        mapped
    }
}

impl Default for BehaviorTable {
    fn default() -> Self {
        let value_input = ["label", "name", "value"];
        let plain_input = ["label", "name"];

        let mut table = Self::empty();
        for ty in ["text", "date", "email", "file", "inputGroup", "radio", "inlineRadio"] {
            table.insert(ty, Behavior::new(&value_input).translatable());
        }
        for ty in ["textarea", "password", "checkbox", "inlineCheckbox"] {
            table.insert(ty, Behavior::new(&plain_input).translatable());
        }
        table
            .with("select", Behavior::new(&["label", "name", "options"]).translatable())
            .with("button", Behavior::new(&["label", "name", "type"]).cloned())
            .with("submit", Behavior::new(&["value", "type"]).cloned())
            .with("hidden", Behavior::new(&["name"]).cloned())
            .with("label", Behavior::new(&["label"]))
            .with("open", Behavior::new(&[]))
            .with("openHorizontal", Behavior::new(&["columnSizes"]))
            .with("bind", Behavior::new(&["model"]))
            .with("close", Behavior::new(&[]))
    }
}

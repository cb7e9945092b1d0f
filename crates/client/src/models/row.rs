//! Dashboard rows.
//!
//! A row owns its panels and numbers them when encoded on its own.

use serde::{Deserialize, Serialize};

use super::field::ForceString;
use super::panel::Panel;
use super::probe::known_only;
use crate::serde_helpers::null_as_default;

/// A horizontal group of panels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    #[serde(rename = "collapse", default, deserialize_with = "null_as_default")]
    pub collapsed: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub editable: bool,
    #[serde(default)]
    pub height: ForceString,
    /// Panels in display order. Panels of unknown type are dropped on decode.
    #[serde(default, deserialize_with = "known_only")]
    pub panels: Vec<Panel>,
    /// Name of the variable this row is repeated for; empty when not repeated.
    #[serde(rename = "repeat", default, deserialize_with = "null_as_default")]
    pub repeat_for: String,
    #[serde(rename = "showTitle", default, deserialize_with = "null_as_default")]
    pub show_title: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Heading size token, e.g. `h6`.
    #[serde(rename = "titleSize", default, deserialize_with = "null_as_default")]
    pub title_size: String,
}

impl Row {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            editable: true,
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn add_panel(&mut self, panel: impl Into<Panel>) {
        self.panels.push(panel.into());
    }

    /// Number this row's panels `1..=n`.
    pub fn assign_panel_ids(&mut self) {
        self.number_panels_from(1);
    }

    /// Number panels consecutively starting at `first_id`; returns the next free id.
    pub(crate) fn number_panels_from(&mut self, first_id: u32) -> u32 {
        let mut next = first_id;
        for panel in &mut self.panels {
            panel.prepare_encode(next);
            next += 1;
        }
        next
    }
}

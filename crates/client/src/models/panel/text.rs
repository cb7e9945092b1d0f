//! The text panel: static markdown, HTML or plain text.

use serde::{Deserialize, Serialize};

use super::GeneralOptions;
use crate::serde_helpers::null_as_default;

/// How a text panel renders its content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextMode {
    Html,
    #[default]
    Markdown,
    Text,
}

/// A panel showing static text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextPanel {
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mode: TextMode,
    #[serde(flatten)]
    pub general: GeneralOptions,
}

impl TextPanel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            general: GeneralOptions {
                title: title.into(),
                ..GeneralOptions::default()
            },
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Panel;
    use serde_json::json;

    #[test]
    fn test_text_panel_decodes_flat_object() {
        let value = json!({
            "type": "text",
            "id": 3,
            "content": "# Hello",
            "mode": "markdown",
            "height": 250,
            "span": 6,
            "title": "Notes",
            "links": null
        });
        let Some(Panel::Text(panel)) = Panel::from_value(value).unwrap() else {
            panic!("expected a text panel");
        };
        assert_eq!(panel.content, "# Hello");
        assert_eq!(panel.mode, TextMode::Markdown);
        assert_eq!(panel.general.id(), 3);
        assert_eq!(panel.general.height, "250");
        assert_eq!(panel.general.span, 6);
        assert_eq!(panel.general.title, "Notes");
    }

    #[test]
    fn test_null_scalars_decode_as_defaults() {
        let value = json!({
            "type": "text",
            "title": null,
            "description": null,
            "minSpan": null,
            "content": null,
            "mode": null
        });
        let Some(Panel::Text(panel)) = Panel::from_value(value).unwrap() else {
            panic!("expected a text panel");
        };
        assert_eq!(panel.general.title, "");
        assert_eq!(panel.general.description, "");
        assert_eq!(panel.general.min_span, 0);
        assert_eq!(panel.content, "");
        assert_eq!(panel.mode, TextMode::Markdown);
    }

    #[test]
    fn test_text_mode_rejects_unknown_value() {
        let value = json!({ "type": "text", "mode": "latex" });
        assert!(Panel::from_value(value).is_err());
    }
}

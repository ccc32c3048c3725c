//! Sections, the unit of page composition, and their per-device visibility.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::lenient;
use crate::models::DeviceClass;

/// One visual unit of a page.
///
/// `section_type` is an open-ended discriminator; the engine never enumerates
/// it. `settings` is opaque renderer configuration. A `Section` is treated as
/// immutable for the duration of a render pass: edits produce a new value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(rename = "type")]
    pub section_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub settings: Map<String, Value>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub hide_on_mobile: bool,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub hide_on_desktop: bool,
}

impl Section {
    /// Create a section of the given type with empty settings.
    pub fn new(section_type: impl Into<String>) -> Self {
        Self {
            section_type: section_type.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    pub fn hidden_on_mobile(mut self) -> Self {
        self.hide_on_mobile = true;
        self
    }

    pub fn hidden_on_desktop(mut self) -> Self {
        self.hide_on_desktop = true;
        self
    }

    /// Label used for this section's tab: `title`, else `name`, else `""`.
    pub fn tab_label(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_default()
    }

    /// Whether the section participates in layout on `device`.
    #[inline]
    pub fn is_visible_on(&self, device: DeviceClass) -> bool {
        match device {
            DeviceClass::Mobile => !self.hide_on_mobile,
            DeviceClass::Desktop => !self.hide_on_desktop,
        }
    }

    /// String setting by key.
    pub fn setting_str(&self, key: &str) -> Option<&str> {
        self.settings.get(key).and_then(Value::as_str)
    }

    /// Identifier setting by key, accepting either a string or a number.
    pub fn setting_id(&self, key: &str) -> Option<String> {
        self.settings.get(key).and_then(lenient::id_from_value)
    }
}

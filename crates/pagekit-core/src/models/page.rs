//! Served configuration shapes: pages, gated regions, sites, widgets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::lenient;
use super::{Condition, PageLayout, Section};
use crate::error::{ConfigError, RenderError};

/// Key of the page shown for an empty route.
pub const HOME_PAGE_KEY: &str = "home";

/// Presentation hints and fallback content for a locked region.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockedLayout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_height: Option<u32>,
    /// Sections shown while locked. Rendered as an unprotected stack.
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// A page definition as stored by the builder.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub layout: PageLayout,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_protected: bool,
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked_layout: Option<LockedLayout>,
}

impl Page {
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            sections,
            ..Default::default()
        }
    }

    pub fn with_layout(mut self, layout: PageLayout) -> Self {
        self.layout = layout;
        self
    }

    /// The protection wrapper for this page, if it is protected.
    ///
    /// The region owns a copy of the page's sections and layout as its
    /// protected payload.
    pub fn gated_region(&self) -> Option<GatedRegion> {
        self.is_protected.then(|| GatedRegion {
            conditions: self.conditions.clone(),
            sections: self.sections.clone(),
            layout: self.layout,
            locked_layout: self.locked_layout.clone().unwrap_or_default(),
        })
    }
}

/// Protection boundary around one payload of sections.
///
/// Used both for whole protected pages and for `gated` sections that wrap a
/// sub-list of sections inside an otherwise public page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatedRegion {
    #[serde(default)]
    pub conditions: Vec<Condition>,
    /// Protected payload, released only once the gate is satisfied.
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub layout: PageLayout,
    #[serde(default)]
    pub locked_layout: LockedLayout,
}

impl GatedRegion {
    /// Read a region out of a `gated` section's settings record.
    pub fn from_settings(settings: &Map<String, Value>) -> Result<Self, RenderError> {
        serde_json::from_value(Value::Object(settings.clone())).map_err(|e| {
            RenderError::InvalidSetting {
                key: "conditions",
                reason: e.to_string(),
            }
        })
    }
}

/// Root of a served site configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub pages: BTreeMap<String, Page>,
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Look up a page; an empty key means the home page.
    pub fn page(&self, key: &str) -> Result<&Page, ConfigError> {
        let key = if key.is_empty() { HOME_PAGE_KEY } else { key };
        self.pages
            .get(key)
            .ok_or_else(|| ConfigError::PageNotFound(key.to_string()))
    }

    pub fn page_keys(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }
}

/// A reusable block of sections embedded by `widget` sections.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    #[serde(deserialize_with = "lenient::id_string")]
    pub id: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub layout: PageLayout,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LayoutKind;

    const SITE: &str = r#"{
        "name": "demo",
        "pages": {
            "home": {
                "title": "Home",
                "sections": [
                    { "type": "markdown", "settings": { "content": "hi" } },
                    { "type": "video", "hideOnDesktop": true }
                ],
                "layout": { "kind": "tabs" }
            },
            "members": {
                "isProtected": true,
                "conditions": [{
                    "type": "coin",
                    "address": "0x0000000000000000000000000000000000000001",
                    "chainId": 1,
                    "amount": "1"
                }],
                "lockedLayout": { "message": "Holders only" },
                "sections": [{ "type": "markdown" }]
            }
        },
        "theme": { "ignored": true }
    }"#;

    #[test]
    fn test_site_config_parsing() {
        let site = SiteConfig::from_json(SITE).unwrap();
        assert_eq!(site.name.as_deref(), Some("demo"));
        assert_eq!(site.page_keys().collect::<Vec<_>>(), vec!["home", "members"]);

        let home = site.page("").unwrap();
        assert_eq!(home.sections.len(), 2);
        assert_eq!(home.layout.kind, LayoutKind::Tabs);
        assert!(home.gated_region().is_none());
    }

    #[test]
    fn test_protected_page_region() {
        let site = SiteConfig::from_json(SITE).unwrap();
        let region = site.page("members").unwrap().gated_region().unwrap();
        assert_eq!(region.conditions.len(), 1);
        assert_eq!(region.sections.len(), 1);
        assert_eq!(region.locked_layout.message.as_deref(), Some("Holders only"));
    }

    #[test]
    fn test_missing_page() {
        let site = SiteConfig::from_json(SITE).unwrap();
        assert!(matches!(
            site.page("nope"),
            Err(ConfigError::PageNotFound(key)) if key == "nope"
        ));
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        assert!(matches!(
            SiteConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_gated_region_from_settings() {
        let section: Section = serde_json::from_str(
            r#"{
                "type": "gated",
                "settings": {
                    "conditions": [],
                    "sections": [{ "type": "markdown" }, { "type": "video" }],
                    "layout": { "kind": "stack" }
                }
            }"#,
        )
        .unwrap();
        let region = GatedRegion::from_settings(&section.settings).unwrap();
        assert_eq!(region.sections.len(), 2);
        assert!(region.locked_layout.sections.is_empty());
    }

    #[test]
    fn test_gated_region_from_bad_settings() {
        let mut settings = Map::new();
        settings.insert("sections".into(), Value::String("oops".into()));
        assert!(matches!(
            GatedRegion::from_settings(&settings),
            Err(RenderError::InvalidSetting { .. })
        ));
    }

    #[test]
    fn test_widget_numeric_id() {
        let widget: WidgetConfig =
            serde_json::from_str(r#"{ "id": 42, "sections": [] }"#).unwrap();
        assert_eq!(widget.id, "42");
    }
}

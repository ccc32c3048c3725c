//! Page layout descriptor.
//!
//! Unknown `kind` values decode as [`LayoutKind::Stack`] and unknown tab
//! positions as "top", so a malformed descriptor degrades instead of failing
//! the whole page.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::lenient;

/// Arrangement strategy for a page's sections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    #[default]
    Stack,
    Tabs,
}

impl FromStr for LayoutKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stack" => Ok(Self::Stack),
            "tabs" => Ok(Self::Tabs),
            _ => Err(()),
        }
    }
}

/// Tab strip position on desktop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DesktopTabPosition {
    #[default]
    Top,
    Side,
}

impl FromStr for DesktopTabPosition {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "side" => Ok(Self::Side),
            _ => Err(()),
        }
    }
}

/// Tab strip position on mobile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MobileTabPosition {
    #[default]
    Top,
    Bottom,
}

impl FromStr for MobileTabPosition {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopTabs {
    #[serde(default, deserialize_with = "lenient::enum_or_default")]
    pub position: DesktopTabPosition,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MobileTabs {
    #[serde(default, deserialize_with = "lenient::enum_or_default")]
    pub position: MobileTabPosition,
}

/// Page-scoped layout descriptor.
///
/// `desktop`/`mobile` are only consulted when `kind` is [`LayoutKind::Tabs`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLayout {
    #[serde(default, alias = "type", deserialize_with = "lenient::enum_or_default")]
    pub kind: LayoutKind,
    #[serde(default)]
    pub desktop: DesktopTabs,
    #[serde(default)]
    pub mobile: MobileTabs,
}

impl PageLayout {
    pub fn stack() -> Self {
        Self::default()
    }

    pub fn tabs(desktop: DesktopTabPosition, mobile: MobileTabPosition) -> Self {
        Self {
            kind: LayoutKind::Tabs,
            desktop: DesktopTabs { position: desktop },
            mobile: MobileTabs { position: mobile },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_descriptor() {
        let json = r#"{ "kind": "tabs", "desktop": { "position": "side" }, "mobile": { "position": "bottom" } }"#;
        let layout: PageLayout = serde_json::from_str(json).unwrap();
        assert_eq!(
            layout,
            PageLayout::tabs(DesktopTabPosition::Side, MobileTabPosition::Bottom)
        );
    }

    #[test]
    fn test_missing_fields_default() {
        let layout: PageLayout = serde_json::from_str("{}").unwrap();
        assert_eq!(layout, PageLayout::stack());

        let layout: PageLayout = serde_json::from_str(r#"{ "kind": "tabs" }"#).unwrap();
        assert_eq!(layout.kind, LayoutKind::Tabs);
        assert_eq!(layout.desktop.position, DesktopTabPosition::Top);
        assert_eq!(layout.mobile.position, MobileTabPosition::Top);
    }

    #[test]
    fn test_type_alias_for_kind() {
        let layout: PageLayout = serde_json::from_str(r#"{ "type": "tabs" }"#).unwrap();
        assert_eq!(layout.kind, LayoutKind::Tabs);
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let json = r#"{ "kind": "carousel", "desktop": { "position": "left" }, "mobile": { "position": 3 } }"#;
        let layout: PageLayout = serde_json::from_str(json).unwrap();
        assert_eq!(layout.kind, LayoutKind::Stack);
        assert_eq!(layout.desktop.position, DesktopTabPosition::Top);
        assert_eq!(layout.mobile.position, MobileTabPosition::Top);
    }

    #[test]
    fn test_null_kind_is_stack() {
        let layout: PageLayout = serde_json::from_str(r#"{ "kind": null }"#).unwrap();
        assert_eq!(layout.kind, LayoutKind::Stack);
    }
}

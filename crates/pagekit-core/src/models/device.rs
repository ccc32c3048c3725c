//! Device classification.
//!
//! The breakpoint lives in one place: [`DeviceClass::from_viewport_width`]
//! and [`DeviceClass::mobile_media_query`] both derive from
//! `MOBILE_BREAKPOINT_PX`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::MOBILE_BREAKPOINT_PX;

/// Device classification driving visibility and layout decisions.
///
/// Resolved once per render pass, either from the viewport width or from an
/// explicit override (preview/testing), and passed to every engine call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Mobile,
    #[default]
    Desktop,
}

impl DeviceClass {
    /// Classify a viewport width in CSS pixels.
    pub fn from_viewport_width(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT_PX {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    /// CSS media query matching exactly the widths classified as mobile.
    pub fn mobile_media_query() -> String {
        format!("not all and (min-width: {}px)", MOBILE_BREAKPOINT_PX)
    }

    #[inline]
    pub fn is_mobile(self) -> bool {
        self == Self::Mobile
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeviceClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mobile" => Ok(Self::Mobile),
            "desktop" => Ok(Self::Desktop),
            other => Err(format!("unknown device class '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_viewport_width() {
        assert_eq!(DeviceClass::from_viewport_width(375.0), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_viewport_width(899.5), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_viewport_width(900.0), DeviceClass::Desktop);
        assert_eq!(DeviceClass::from_viewport_width(1440.0), DeviceClass::Desktop);
    }

    #[test]
    fn test_mobile_media_query() {
        assert_eq!(
            DeviceClass::mobile_media_query(),
            "not all and (min-width: 900px)"
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("mobile".parse(), Ok(DeviceClass::Mobile));
        assert_eq!(" Desktop ".parse(), Ok(DeviceClass::Desktop));
        assert!("tablet".parse::<DeviceClass>().is_err());
    }
}

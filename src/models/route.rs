//! Hash-based page routing.
//!
//! URL format: `#/` for the home page, `#/<page-key>` for any other page.
//! A `?device=mobile|desktop` suffix forces the device class, which is how
//! authors preview the other layout from a desktop browser.

use pagekit_core::DeviceClass;

use crate::utils::dom;

/// Current page and device override.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageRoute {
    /// Page key; empty means the home page
    pub key: String,
    /// Forced device class, if any
    pub device: Option<DeviceClass>,
}

impl PageRoute {
    pub fn page(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            device: None,
        }
    }

    /// Parse a URL hash into a route.
    ///
    /// Unknown `device` values are ignored rather than rejected.
    pub fn from_hash(hash: &str) -> Self {
        let rest = hash.trim_start_matches('#');
        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
        let key = path.trim_matches('/').to_string();

        let device = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(name, _)| *name == "device")
            .and_then(|(_, value)| value.parse().ok());

        Self { key, device }
    }

    /// Convert the route to a URL hash.
    pub fn to_hash(&self) -> String {
        let mut hash = format!("#/{}", self.key);
        if let Some(device) = self.device {
            hash.push_str("?device=");
            hash.push_str(device.as_str());
        }
        hash
    }

    /// Route for the current browser URL.
    pub fn current() -> Self {
        Self::from_hash(&dom::current_hash())
    }

    /// Navigate to this route.
    pub fn push(&self) {
        dom::set_hash(&self.to_hash());
    }
}

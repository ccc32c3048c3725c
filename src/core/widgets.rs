//! HTTP widget resolver.

use pagekit_core::{WidgetConfig, WidgetResolver};

use crate::config::{WIDGETS_BASE_URL, cache::WIDGET_KEY_PREFIX};
use crate::utils::{cache, fetch_json_cached};

/// Resolves widgets from `{base}/{id}.json`, cached for the session.
#[derive(Clone, Copy, Debug)]
pub struct HttpWidgetResolver {
    base_url: &'static str,
}

impl Default for HttpWidgetResolver {
    fn default() -> Self {
        Self {
            base_url: WIDGETS_BASE_URL,
        }
    }
}

impl HttpWidgetResolver {
    fn url_for(&self, id: &str) -> String {
        format!(
            "{}/{}.json",
            self.base_url.trim_end_matches('/'),
            String::from(js_sys::encode_uri_component(id))
        )
    }
}

impl WidgetResolver for HttpWidgetResolver {
    async fn resolve(&self, id: &str) -> Option<WidgetConfig> {
        let url = self.url_for(id);
        let key = cache::key(WIDGET_KEY_PREFIX, id);
        match fetch_json_cached::<WidgetConfig>(&url, &key).await {
            Ok(widget) => Some(widget),
            Err(e) => {
                log::warn!("widget '{}' unavailable: {}", id, e);
                None
            }
        }
    }
}

//! Widget embedding.
//!
//! A widget section refers to a reusable section list by id. The host
//! resolves the id through a [`WidgetResolver`] and renders the result with
//! the same composition rules as a page. Embeds can nest, so each branch of
//! the render tree carries an [`EmbedTrail`]; entering an id already on the
//! trail, or exceeding [`MAX_EMBED_DEPTH`], is refused and renders nothing.

use std::collections::HashMap;
use std::fmt;

use crate::config::MAX_EMBED_DEPTH;
use crate::models::WidgetConfig;

/// Widget lookup by id.
#[allow(async_fn_in_trait)]
pub trait WidgetResolver {
    /// `None` while the widget is unknown or unavailable.
    async fn resolve(&self, id: &str) -> Option<WidgetConfig>;
}

/// In-memory widget catalog.
#[derive(Clone, Debug, Default)]
pub struct WidgetCatalog {
    widgets: HashMap<String, WidgetConfig>,
}

impl WidgetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, widget: WidgetConfig) {
        self.widgets.insert(widget.id.clone(), widget);
    }

    pub fn get(&self, id: &str) -> Option<&WidgetConfig> {
        self.widgets.get(id)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

impl FromIterator<WidgetConfig> for WidgetCatalog {
    fn from_iter<T: IntoIterator<Item = WidgetConfig>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for widget in iter {
            catalog.insert(widget);
        }
        catalog
    }
}

impl WidgetResolver for WidgetCatalog {
    async fn resolve(&self, id: &str) -> Option<WidgetConfig> {
        self.get(id).cloned()
    }
}

/// Why an embed was refused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EmbedRefusal {
    /// The widget is already being rendered further up this branch
    Cycle(String),
    /// The branch is nested too deeply
    TooDeep(usize),
}

impl fmt::Display for EmbedRefusal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cycle(id) => write!(f, "widget '{}' embeds itself", id),
            Self::TooDeep(depth) => write!(f, "widget nesting exceeds depth {}", depth),
        }
    }
}

/// Widget ids on the path from the page root to the current render point.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmbedTrail {
    ids: Vec<String>,
}

impl EmbedTrail {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.ids.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|seen| seen == id)
    }

    /// Trail for rendering widget `id` below the current point.
    pub fn enter(&self, id: &str) -> Result<EmbedTrail, EmbedRefusal> {
        if self.contains(id) {
            return Err(EmbedRefusal::Cycle(id.to_string()));
        }
        if self.depth() >= MAX_EMBED_DEPTH {
            return Err(EmbedRefusal::TooDeep(MAX_EMBED_DEPTH));
        }
        let mut ids = self.ids.clone();
        ids.push(id.to_string());
        Ok(EmbedTrail { ids })
    }
}

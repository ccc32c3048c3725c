//! Section dispatcher.
//!
//! Resolves a section's type tag through the [`SectionRegistry`] and invokes
//! the renderer with the section's settings. Two outcomes produce nothing
//! instead of an error:
//!
//! - the tag is unknown (stored pages outlive renderer catalogs), and
//! - the renderer failed (one broken section must not blank the page).

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::config::SYNTHESIZED_ID_LEN;
use crate::error::RenderError;
use crate::models::Section;
use crate::registry::SectionRegistry;

/// Ambient placement information handed to renderers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LayoutHints {
    /// Position in the filtered list
    pub position: usize,
    /// Tab index, when rendered inside a tab panel
    pub tab_index: Option<usize>,
    /// Key of the page being rendered
    pub page_key: Option<String>,
    /// Enclosing composition for nested lists (gated payloads, locked
    /// fallbacks, widget embeds); `None` at page level
    pub scope: Option<String>,
}

impl LayoutHints {
    pub fn at(position: usize) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn in_tab(index: usize) -> Self {
        Self {
            position: index,
            tab_index: Some(index),
            page_key: None,
            scope: None,
        }
    }

    pub fn with_page_key(mut self, key: impl Into<String>) -> Self {
        self.page_key = Some(key.into());
        self
    }

    /// Place the section inside a nested composition. Positions restart at
    /// zero there, so the scope keeps synthesized ids apart.
    pub fn with_scope(mut self, scope: Option<String>) -> Self {
        self.scope = scope;
        self
    }
}

/// What a renderer receives.
#[derive(Clone, Copy, Debug)]
pub struct RenderProps<'a> {
    pub section: &'a Section,
    pub hints: &'a LayoutHints,
}

impl<'a> RenderProps<'a> {
    #[inline]
    pub fn settings(&self) -> &'a Map<String, Value> {
        &self.section.settings
    }

    /// Whether the section is being rendered inside a tab panel.
    #[inline]
    pub fn in_tab(&self) -> bool {
        self.hints.tab_index.is_some()
    }

    /// DOM-safe identifier for the section.
    ///
    /// Uses `settings.id` when supplied. Otherwise synthesizes a stable one
    /// from the page key, nesting scope, position, and type, so tab-embedded
    /// variants that need an anchor still get the same id on every render.
    pub fn element_id(&self) -> String {
        if let Some(id) = self.section.setting_id("id") {
            return id;
        }
        let mut hasher = Sha256::new();
        hasher.update(self.hints.page_key.as_deref().unwrap_or_default());
        hasher.update([0u8]);
        if let Some(scope) = &self.hints.scope {
            hasher.update(scope.as_bytes());
            hasher.update([0u8]);
        }
        hasher.update(self.hints.position.to_le_bytes());
        hasher.update(self.section.section_type.as_bytes());
        let digest = hex::encode(hasher.finalize());
        format!("section-{}", &digest[..SYNTHESIZED_ID_LEN])
    }
}

/// A renderer for one section type, producing host output `V`.
pub trait SectionRenderer<V> {
    fn render(&self, props: &RenderProps<'_>) -> Result<V, RenderError>;
}

impl<V, F> SectionRenderer<V> for F
where
    F: Fn(&RenderProps<'_>) -> Result<V, RenderError>,
{
    fn render(&self, props: &RenderProps<'_>) -> Result<V, RenderError> {
        self(props)
    }
}

/// Dispatches sections to the renderers registered for their tags.
#[derive(Debug)]
pub struct Dispatcher<'r, H> {
    registry: &'r SectionRegistry<H>,
}

impl<H> Clone for Dispatcher<'_, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H> Copy for Dispatcher<'_, H> {}

impl<'r, H> Dispatcher<'r, H> {
    pub fn new(registry: &'r SectionRegistry<H>) -> Self {
        Self { registry }
    }

    /// Render one section, or nothing.
    ///
    /// Unknown tags are logged at debug level, renderer failures at warn
    /// level; neither propagates.
    pub fn render<V>(&self, section: &Section, hints: &LayoutHints) -> Option<V>
    where
        H: SectionRenderer<V>,
    {
        let Some(renderer) = self.registry.resolve(&section.section_type) else {
            log::debug!(
                "no renderer for section type '{}', skipping",
                section.section_type
            );
            return None;
        };

        let props = RenderProps { section, hints };
        match renderer.render(&props) {
            Ok(output) => Some(output),
            Err(e) => {
                log::warn!(
                    "section '{}' at position {} failed to render: {}",
                    section.section_type,
                    hints.position,
                    e
                );
                None
            }
        }
    }

    /// Render a list in order, positions taken from the list itself.
    pub fn render_all<'s, V, I>(&self, sections: I, page_key: Option<&str>) -> Vec<V>
    where
        H: SectionRenderer<V>,
        I: IntoIterator<Item = &'s Section>,
    {
        sections
            .into_iter()
            .enumerate()
            .filter_map(|(position, section)| {
                let hints = LayoutHints {
                    position,
                    tab_index: None,
                    page_key: page_key.map(str::to_string),
                    scope: None,
                };
                self.render(section, &hints)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TextRenderer = fn(&RenderProps<'_>) -> Result<String, RenderError>;

    fn render_markdown(props: &RenderProps<'_>) -> Result<String, RenderError> {
        props
            .section
            .setting_str("content")
            .map(|c| format!("md:{}", c))
            .ok_or(RenderError::MissingSetting("content"))
    }

    fn render_video(props: &RenderProps<'_>) -> Result<String, RenderError> {
        Ok(format!("video@{}", props.hints.position))
    }

    fn registry() -> SectionRegistry<TextRenderer> {
        SectionRegistry::from_entries([
            ("markdown", render_markdown as TextRenderer),
            ("video", render_video as TextRenderer),
        ])
    }

    #[test]
    fn test_known_type_renders() {
        let registry = registry();
        let dispatcher = Dispatcher::new(&registry);
        let section = Section::new("markdown").with_setting("content", "hello");
        assert_eq!(
            dispatcher.render::<String>(&section, &LayoutHints::at(0)),
            Some("md:hello".to_string())
        );
    }

    #[test]
    fn test_unknown_type_renders_nothing() {
        let registry = registry();
        let dispatcher = Dispatcher::new(&registry);
        let section = Section::new("exchange");
        assert_eq!(dispatcher.render::<String>(&section, &LayoutHints::at(0)), None);
    }

    #[test]
    fn test_unknown_type_among_valid_ones() {
        let registry = registry();
        let dispatcher = Dispatcher::new(&registry);
        let sections = vec![
            Section::new("video"),
            Section::new("markdown").with_setting("content", "a"),
            Section::new("future-section-type"),
            Section::new("video"),
        ];
        let out: Vec<String> = dispatcher.render_all(&sections, None);
        assert_eq!(out, vec!["video@0", "md:a", "video@3"]);
    }

    #[test]
    fn test_renderer_failure_is_isolated() {
        let registry = registry();
        let dispatcher = Dispatcher::new(&registry);
        let sections = vec![
            Section::new("markdown"),
            Section::new("video"),
        ];
        let out: Vec<String> = dispatcher.render_all(&sections, None);
        assert_eq!(out, vec!["video@1"]);
    }

    #[test]
    fn test_element_id_prefers_setting() {
        let section = Section::new("video").with_setting("id", "intro");
        let hints = LayoutHints::in_tab(1);
        let props = RenderProps {
            section: &section,
            hints: &hints,
        };
        assert_eq!(props.element_id(), "intro");
        assert!(props.in_tab());
    }

    #[test]
    fn test_element_id_is_synthesized_and_stable() {
        let section = Section::new("video");
        let hints = LayoutHints::in_tab(2).with_page_key("home");
        let props = RenderProps {
            section: &section,
            hints: &hints,
        };
        let id = props.element_id();
        assert!(id.starts_with("section-"));
        assert_eq!(id.len(), "section-".len() + SYNTHESIZED_ID_LEN);
        assert_eq!(id, props.element_id());

        let other_hints = LayoutHints::in_tab(3).with_page_key("home");
        let other = RenderProps {
            section: &section,
            hints: &other_hints,
        };
        assert_ne!(id, other.element_id());
    }

    #[test]
    fn test_element_id_differs_across_nesting() {
        let section = Section::new("markdown");
        let outer_hints = LayoutHints::at(0).with_page_key("home");
        let outer = RenderProps {
            section: &section,
            hints: &outer_hints,
        };
        let outer_id = outer.element_id();

        let gated = Section::new("gated");
        let gated_hints = LayoutHints::at(1).with_page_key("home");
        let gated_id = RenderProps {
            section: &gated,
            hints: &gated_hints,
        }
        .element_id();

        let nested_hints = LayoutHints::at(0)
            .with_page_key("home")
            .with_scope(Some(gated_id.clone()));
        let nested = RenderProps {
            section: &section,
            hints: &nested_hints,
        };
        assert_ne!(outer_id, nested.element_id());

        let fallback_hints = LayoutHints::at(0)
            .with_page_key("home")
            .with_scope(Some(format!("{}/locked", gated_id)));
        let fallback = RenderProps {
            section: &section,
            hints: &fallback_hints,
        };
        assert_ne!(nested.element_id(), fallback.element_id());
        assert_ne!(outer_id, fallback.element_id());
    }
}

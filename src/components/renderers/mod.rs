//! Built-in section renderers.
//!
//! Each renderer turns one section's settings into a view, or fails with a
//! [`RenderError`] that the dispatcher contains. Adding a section type means
//! adding one module and one registry entry.

mod call_to_action;
mod featured;
mod gated;
mod markdown;
mod video;
mod widget;

use std::sync::LazyLock;

use leptos::prelude::*;
use pagekit_core::section_types;
use pagekit_core::{RenderError, RenderProps, SectionRegistry};

stylance::import_crate_style!(css, "src/components/renderers/renderers.module.css");

/// View renderer signature.
pub type ViewRenderer = fn(&RenderProps<'_>) -> Result<AnyView, RenderError>;

static REGISTRY: LazyLock<SectionRegistry<ViewRenderer>> = LazyLock::new(|| {
    SectionRegistry::from_entries([
        (section_types::MARKDOWN, markdown::render as ViewRenderer),
        (section_types::VIDEO, video::render as ViewRenderer),
        (section_types::CALL_TO_ACTION, call_to_action::render as ViewRenderer),
        (section_types::FEATURED, featured::render as ViewRenderer),
        (section_types::WIDGET, widget::render as ViewRenderer),
        (section_types::GATED, gated::render as ViewRenderer),
    ])
});

/// The renderer table shared by every composition.
pub fn registry() -> &'static SectionRegistry<ViewRenderer> {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_built_in_type_is_registered() {
        for tag in section_types::BUILT_IN {
            assert!(registry().contains(tag), "missing renderer for {}", tag);
        }
        assert_eq!(registry().len(), section_types::BUILT_IN.len());
    }
}

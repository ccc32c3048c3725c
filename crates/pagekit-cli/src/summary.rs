//! One-line text renderers for the built-in section types.
//!
//! The CLI registers these in a [`SectionRegistry`] the same way the browser
//! registers view constructors, so unknown tags and failing sections drop
//! out of the preview exactly as they would on the page.

use pagekit_core::models::GatedRegion;
use pagekit_core::section_types::{self, WIDGET_ID_KEY};
use pagekit_core::{RenderError, RenderProps, SectionRegistry};

/// Summary renderer signature.
pub type SummaryFn = fn(&RenderProps<'_>) -> Result<String, RenderError>;

const EXCERPT_LEN: usize = 40;

/// Registry of every built-in summary renderer.
pub fn registry() -> SectionRegistry<SummaryFn> {
    SectionRegistry::from_entries([
        (section_types::MARKDOWN, markdown as SummaryFn),
        (section_types::VIDEO, video as SummaryFn),
        (section_types::CALL_TO_ACTION, call_to_action as SummaryFn),
        (section_types::FEATURED, featured as SummaryFn),
        (section_types::WIDGET, widget as SummaryFn),
        (section_types::GATED, gated as SummaryFn),
    ])
}

fn excerpt(text: &str) -> String {
    let line = text.lines().find(|l| !l.trim().is_empty()).unwrap_or("").trim();
    if line.chars().count() > EXCERPT_LEN {
        let cut: String = line.chars().take(EXCERPT_LEN).collect();
        format!("{}...", cut)
    } else {
        line.to_string()
    }
}

fn markdown(props: &RenderProps<'_>) -> Result<String, RenderError> {
    let content = props
        .section
        .setting_str("content")
        .ok_or(RenderError::MissingSetting("content"))?;
    Ok(format!("markdown \"{}\"", excerpt(content)))
}

fn video(props: &RenderProps<'_>) -> Result<String, RenderError> {
    let url = props
        .section
        .setting_str("url")
        .ok_or(RenderError::MissingSetting("url"))?;
    Ok(format!("video {}", url))
}

fn call_to_action(props: &RenderProps<'_>) -> Result<String, RenderError> {
    let label = props.section.setting_str("label").unwrap_or("Learn more");
    let href = props
        .section
        .setting_str("href")
        .ok_or(RenderError::MissingSetting("href"))?;
    Ok(format!("call-to-action [{}] -> {}", label, href))
}

fn featured(props: &RenderProps<'_>) -> Result<String, RenderError> {
    let items = props
        .settings()
        .get("items")
        .and_then(|v| v.as_array())
        .ok_or(RenderError::MissingSetting("items"))?;
    Ok(format!("featured ({} items)", items.len()))
}

fn widget(props: &RenderProps<'_>) -> Result<String, RenderError> {
    let id = props
        .section
        .setting_id(WIDGET_ID_KEY)
        .ok_or(RenderError::MissingSetting(WIDGET_ID_KEY))?;
    Ok(format!("widget {}", id))
}

fn gated(props: &RenderProps<'_>) -> Result<String, RenderError> {
    let region = GatedRegion::from_settings(props.settings())?;
    Ok(format!(
        "gated ({} conditions, {} sections)",
        region.conditions.len(),
        region.sections.len()
    ))
}

#[cfg(test)]
mod tests {
    use pagekit_core::{Dispatcher, LayoutHints, Section};
    use serde_json::json;

    use super::*;

    fn summarize(section: &Section) -> Option<String> {
        let registry = registry();
        Dispatcher::new(&registry).render(section, &LayoutHints::at(0))
    }

    #[test]
    fn test_registry_covers_built_ins() {
        let registry = registry();
        let tags: Vec<_> = registry.tags().collect();
        assert_eq!(tags, section_types::BUILT_IN);
    }

    #[test]
    fn test_markdown_excerpt() {
        let section = Section::new("markdown").with_setting("content", "\n# Welcome\nbody");
        assert_eq!(summarize(&section).as_deref(), Some("markdown \"# Welcome\""));

        let long = "x".repeat(60);
        let section = Section::new("markdown").with_setting("content", long);
        assert!(summarize(&section).unwrap().ends_with("...\""));
    }

    #[test]
    fn test_missing_settings_render_nothing() {
        assert_eq!(summarize(&Section::new("video")), None);
        assert_eq!(summarize(&Section::new("call-to-action")), None);
    }

    #[test]
    fn test_widget_and_gated() {
        let section = Section::new("widget").with_setting(WIDGET_ID_KEY, 42);
        assert_eq!(summarize(&section).as_deref(), Some("widget 42"));

        let section = Section::new("gated")
            .with_setting("conditions", json!([]))
            .with_setting("sections", json!([{ "type": "markdown" }]));
        assert_eq!(
            summarize(&section).as_deref(),
            Some("gated (0 conditions, 1 sections)")
        );
    }
}

//! Built-in section type tags.
//!
//! Hosts register renderers against these tags. The list is not closed:
//! stored pages may carry tags no host knows about, and those sections are
//! skipped at dispatch time.

pub const MARKDOWN: &str = "markdown";
pub const VIDEO: &str = "video";
pub const CALL_TO_ACTION: &str = "call-to-action";
pub const FEATURED: &str = "featured";
pub const WIDGET: &str = "widget";
pub const GATED: &str = "gated";

/// Every tag the bundled hosts provide a renderer for.
pub const BUILT_IN: &[&str] = &[MARKDOWN, VIDEO, CALL_TO_ACTION, FEATURED, WIDGET, GATED];

/// Settings key holding the embedded widget id for [`WIDGET`] sections.
pub const WIDGET_ID_KEY: &str = "widgetId";

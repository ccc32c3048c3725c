//! Engine constants.
//!
//! Hosts may read these to keep their chrome in agreement with the plans
//! the engine produces (e.g. the side tab strip width).

use std::time::Duration;

// =============================================================================
// Lazy Mounting
// =============================================================================

/// Number of leading sections (in filtered order) that mount eagerly.
pub const EAGER_MOUNT_COUNT: usize = 3;

/// Viewport margin used by hosts as the "near the viewport" threshold.
pub const LAZY_ROOT_MARGIN: &str = "200px";

// =============================================================================
// Layout
// =============================================================================

/// Share of horizontal space reserved for a side tab strip.
pub const SIDE_TAB_STRIP_FRACTION: f32 = 0.25;

/// Viewport widths strictly below this are classified as mobile.
pub const MOBILE_BREAKPOINT_PX: f64 = 900.0;

// =============================================================================
// Access Gate
// =============================================================================

/// Delay between a failed eligibility check and the error becoming visible.
pub const ERROR_DISPLAY_DELAY: Duration = Duration::from_millis(1500);

// =============================================================================
// Widget Embedding
// =============================================================================

/// Hard cap on nested widget embeds along a single branch.
pub const MAX_EMBED_DEPTH: usize = 8;

/// Length of identifiers synthesized for sections that did not supply one.
pub const SYNTHESIZED_ID_LEN: usize = 12;

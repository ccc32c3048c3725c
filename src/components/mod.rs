//! UI components built with Leptos.
//!
//! - [`router`] - Site loading and hash routing (main entry point)
//! - [`page`] - One page: public composition or gated region
//! - [`layout`] - Stack and tab compositions, lazy mounting
//! - [`section`] - Per-section dispatch into the renderer table
//! - [`renderers`] - Built-in section renderers
//! - [`gate`] - Gated region lifecycle and locked view
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`status`] - Header with navigation, wallet, and device controls

pub mod gate;
pub mod icons;
pub mod layout;
pub mod page;
pub mod renderers;
pub mod router;
pub mod section;
pub mod status;

pub use router::AppRouter;

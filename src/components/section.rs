//! Section dispatch into the renderer table.

use leptos::prelude::*;
use pagekit_core::{Dispatcher, LayoutHints, Section};

use crate::components::renderers;

/// Render one section with the renderer registered for its type.
///
/// Unknown types and renderer failures render nothing; neighbours are
/// unaffected.
#[component]
pub fn SectionView(section: Section, hints: LayoutHints) -> impl IntoView {
    Dispatcher::new(renderers::registry()).render::<AnyView>(&section, &hints)
}

use leptos::prelude::*;
use pagekit_core::{LayoutHints, MountMode, StackEntry};

use super::{LazySection, css};
use crate::components::section::SectionView;

/// Sections one after another. Entries past the eager count mount when
/// they approach the viewport.
#[component]
pub fn StackView(
    entries: Vec<StackEntry>,
    page_key: String,
    scope: Option<String>,
) -> impl IntoView {
    let items = entries
        .into_iter()
        .map(|entry| {
            let hints = LayoutHints::at(entry.position)
                .with_page_key(page_key.clone())
                .with_scope(scope.clone());
            match entry.mount {
                MountMode::Eager => view! { <SectionView section=entry.section hints=hints /> }
                    .into_any(),
                MountMode::Deferred => view! { <LazySection section=entry.section hints=hints /> }
                    .into_any(),
            }
        })
        .collect_view();

    view! { <div class=css::stack>{items}</div> }
}

use leptos::html::Div;
use leptos::prelude::*;
use leptos_use::{
    UseIntersectionObserverOptions, UseIntersectionObserverReturn,
    use_intersection_observer_with_options,
};
use pagekit_core::config::LAZY_ROOT_MARGIN;
use pagekit_core::{LayoutHints, LazyMount, MountMode, Section};

use super::css;
use crate::components::section::SectionView;

/// Placeholder that mounts its section the first time it comes within
/// `LAZY_ROOT_MARGIN` of the viewport.
///
/// Mounting is one-shot: scrolling away never unmounts. The observer is
/// stopped after the first trigger and on teardown.
#[component]
pub fn LazySection(section: Section, hints: LayoutHints) -> impl IntoView {
    let target = NodeRef::<Div>::new();
    let mount = RwSignal::new(LazyMount::new(MountMode::Deferred));

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            if entries.iter().any(|entry| entry.is_intersecting()) {
                mount.try_update(|m| m.trigger());
            }
        },
        UseIntersectionObserverOptions::default().root_margin(LAZY_ROOT_MARGIN.to_string()),
    );

    Effect::new(move |_| {
        if mount.get().is_mounted() {
            stop();
        }
    });

    on_cleanup(move || {
        mount.try_update(|m| m.cancel());
    });

    let section = StoredValue::new(section);
    let hints = StoredValue::new(hints);

    view! {
        <div node_ref=target class=css::lazy>
            <Show
                when=move || mount.get().is_mounted()
                fallback=|| view! { <div class=css::placeholder aria-hidden="true" /> }
            >
                <SectionView section=section.get_value() hints=hints.get_value() />
            </Show>
        </div>
    }
}

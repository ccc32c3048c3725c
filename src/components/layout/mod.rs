//! Layout composer components.
//!
//! - [`Composition`] - Composes a section list for the current device
//! - [`StackView`] - Vertical stack with lazy mounting past the first sections
//! - [`TabsView`] - Tab strip plus panels
//! - [`LazySection`] - Viewport-triggered one-shot mount

mod lazy;
mod stack;
mod tabs;

use leptos::prelude::*;
use pagekit_core::{ActiveTabState, CompositionPlan, PageLayout, Section, compose};

use crate::app::AppContext;

pub use lazy::LazySection;
pub use stack::StackView;
pub use tabs::TabsView;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

fn tab_count(plan: &CompositionPlan) -> usize {
    match plan {
        CompositionPlan::Tabs(tabs) => tabs.len(),
        CompositionPlan::Empty | CompositionPlan::Stack { .. } => 0,
    }
}

/// Compose `sections` according to `layout` and render the plan.
///
/// Recomposes when the device class changes. The tab selection belongs to
/// this instance and is clamped when the tab count changes.
///
/// Nested compositions (gated payloads, locked fallbacks, widget embeds)
/// pass the enclosing section's id as `scope` so synthesized ids stay
/// distinct from the page-level ones.
#[component]
pub fn Composition(
    sections: Vec<Section>,
    layout: PageLayout,
    #[prop(into)] page_key: String,
    #[prop(optional_no_strip)] scope: Option<String>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let sections = StoredValue::new(sections);
    let page_key = StoredValue::new(page_key);
    let scope = StoredValue::new(scope);

    let plan = Memo::new(move |_| {
        let device = ctx.device.get();
        sections.with_value(|s| compose(s, &layout, device))
    });

    let active = RwSignal::new(ActiveTabState::new(plan.with_untracked(tab_count)));
    Effect::new(move |_| {
        let len = plan.with(tab_count);
        if active.with_untracked(|a| a.len() != len) {
            active.update(|a| a.clamp_to(len));
        }
    });

    move || match plan.get() {
        CompositionPlan::Empty => ().into_any(),
        CompositionPlan::Stack { entries } => {
            view! {
                <StackView entries=entries page_key=page_key.get_value() scope=scope.get_value() />
            }
            .into_any()
        }
        CompositionPlan::Tabs(tabs) => view! {
            <TabsView
                plan=tabs
                active=active
                page_key=page_key.get_value()
                scope=scope.get_value()
            />
        }
        .into_any(),
    }
}

use leptos::prelude::*;
use pagekit_core::{ActiveTabState, LayoutHints, Orientation, TabPlacement, TabsPlan};

use super::css;
use crate::components::section::SectionView;

fn container_class(placement: TabPlacement) -> &'static str {
    match placement {
        TabPlacement::Top => css::tabsTop,
        TabPlacement::Side => css::tabsSide,
        TabPlacement::Bottom => css::tabsBottom,
    }
}

/// Tab strip plus one panel per section.
///
/// Panel mounting follows [`TabsPlan::panel_states`]: with the bottom strip
/// every panel stays mounted and inactive ones are hidden, otherwise only
/// the selected panel exists.
#[component]
pub fn TabsView(
    plan: TabsPlan,
    active: RwSignal<ActiveTabState>,
    page_key: String,
    scope: Option<String>,
) -> impl IntoView {
    let placement = plan.placement;
    let orientation = match placement.orientation() {
        Orientation::Horizontal => "horizontal",
        Orientation::Vertical => "vertical",
    };
    let strip_style = placement
        .strip_fraction()
        .map(|fraction| format!("flex: 0 0 {}%;", fraction * 100.0));

    let tabs = plan
        .tabs
        .iter()
        .map(|tab| {
            let index = tab.index;
            let selected = move || active.with(|a| a.selected() == index);
            view! {
                <button
                    role="tab"
                    class=move || if selected() { css::tabActive } else { css::tab }
                    aria-selected=move || selected().to_string()
                    on:click=move |_| {
                        active.maybe_update(|a| a.select(index));
                    }
                >
                    {tab.label.clone()}
                </button>
            }
        })
        .collect_view();

    let panels = plan.panels.clone();
    let plan = StoredValue::new(plan);
    let states = Memo::new(move |_| {
        let active = active.get();
        plan.with_value(|p| p.panel_states(&active))
    });

    let panels = panels
        .into_iter()
        .enumerate()
        .map(|(index, section)| {
            let hints = LayoutHints::in_tab(index)
                .with_page_key(page_key.clone())
                .with_scope(scope.clone());
            let hints = StoredValue::new(hints);
            let section = StoredValue::new(section);
            let mounted = move || states.with(|s| s.get(index).is_some_and(|p| p.mounted));
            let display = move || {
                if states.with(|s| s.get(index).is_some_and(|p| p.visible)) {
                    "block"
                } else {
                    "none"
                }
            };
            view! {
                <Show when=mounted>
                    <div role="tabpanel" class=css::panel style:display=display>
                        <SectionView section=section.get_value() hints=hints.get_value() />
                    </div>
                </Show>
            }
        })
        .collect_view();

    view! {
        <div class=container_class(placement)>
            <nav
                role="tablist"
                class=css::strip
                style=strip_style
                aria-orientation=orientation
            >
                {tabs}
            </nav>
            <div class=css::panels>{panels}</div>
        </div>
    }
}

//! Page view: resolves the routed page and picks its wrapper.

use leptos::prelude::*;
use pagekit_core::{SiteConfig, models::HOME_PAGE_KEY};

use crate::app::AppContext;
use crate::components::gate::GatedRegionView;
use crate::components::layout::Composition;

stylance::import_crate_style!(css, "src/components/router.module.css");

/// Renders the page named by the current route.
///
/// Protected pages go through the gate; everything else is composed
/// directly. Only a change of page key rebuilds the tree, so toggling the
/// device override keeps gate sessions alive.
#[component]
pub fn PageView(site: SiteConfig) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let site = StoredValue::new(site);
    let key = Memo::new(move |_| ctx.route.with(|r| r.key.clone()));

    move || {
        let key = key.get();
        site.with_value(|site| match site.page(&key) {
            Ok(page) => {
                let page_key = if key.is_empty() {
                    HOME_PAGE_KEY.to_string()
                } else {
                    key.clone()
                };
                match page.gated_region() {
                    Some(region) => view! { <GatedRegionView region=region page_key=page_key /> }
                        .into_any(),
                    None => view! {
                        <Composition
                            sections=page.sections.clone()
                            layout=page.layout
                            page_key=page_key
                        />
                    }
                    .into_any(),
                }
            }
            Err(e) => {
                log::info!("{}", e);
                view! {
                    <div class=css::notFound>
                        <h1>"Page not found"</h1>
                        <a href="#/">"Back to home"</a>
                    </div>
                }
                .into_any()
            }
        })
    }
}

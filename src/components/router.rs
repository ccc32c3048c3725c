//! Application router component.
//!
//! Loads the site configuration once and renders the page named by the URL
//! hash. Uses native hashchange events instead of leptos_router, so
//! back/forward buttons work on static hosting.

use leptos::prelude::*;
use pagekit_core::SiteConfig;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

#[cfg(target_arch = "wasm32")]
use crate::app::AppContext;
use crate::components::page::PageView;
use crate::components::status::Status;
use crate::config::{APP_NAME, SITE_CONFIG_URL, cache::SITE_CONFIG_KEY};
use crate::utils::fetch_json_cached;

stylance::import_crate_style!(css, "src/components/router.module.css");

/// Main application router.
///
/// - `#/` → home page
/// - `#/<key>` → page `<key>`
/// - `?device=mobile|desktop` → forced device class
#[component]
pub fn AppRouter() -> impl IntoView {
    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        use crate::models::PageRoute;
        use crate::utils::dom;

        let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
        let closure = Closure::wrap(Box::new(move || {
            let next = PageRoute::current();
            let page_changed = ctx.route.with_untracked(|r| r.key != next.key);
            ctx.route.set(next);
            if page_changed {
                dom::scroll_to_top();
            }
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let site = LocalResource::new(|| fetch_json_cached::<SiteConfig>(SITE_CONFIG_URL, SITE_CONFIG_KEY));

    view! {
        <Suspense fallback=move || view! { <div class=css::loading>"Loading..."</div> }>
            {move || site.get().map(|result| match result {
                Ok(site) => {
                    let name = site.name.clone().unwrap_or_else(|| APP_NAME.to_string());
                    let pages = site
                        .pages
                        .iter()
                        .map(|(key, page)| {
                            (key.clone(), page.title.clone().unwrap_or_else(|| key.clone()))
                        })
                        .collect::<Vec<_>>();
                    view! {
                        <Status site_name=name pages=pages />
                        <main class=css::main>
                            <PageView site=site />
                        </main>
                    }
                    .into_any()
                }
                Err(e) => {
                    log::error!("site configuration unavailable: {}", e);
                    view! {
                        <div class=css::fatal role="alert">
                            <p>"This site could not be loaded."</p>
                            <p class=css::detail>{e.to_string()}</p>
                        </div>
                    }
                    .into_any()
                }
            })}
        </Suspense>
    }
}

//! Status bar component.
//!
//! Displays the site name, page navigation, wallet session, network, and
//! the device class compositions are using. The device button forces the
//! other class through the route, so authors can preview both layouts.

use leptos::prelude::*;
use leptos_icons::Icon;
use pagekit_core::DeviceClass;
use pagekit_core::models::HOME_PAGE_KEY;

use crate::app::{AppContext, sign_in, sign_out};
use crate::components::icons as ic;
use crate::core::wallet;
use crate::models::{PageRoute, WalletState};

stylance::import_crate_style!(css, "src/components/status/status.module.css");

/// Header bar.
///
/// `pages` holds `(key, label)` pairs in navigation order.
#[component]
pub fn Status(#[prop(into)] site_name: String, pages: Vec<(String, String)>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    // Derived signals for reactive display
    let session_name = Signal::derive(move || ctx.wallet.with(|w| w.display_name()));
    let network_name = Signal::derive(move || {
        ctx.wallet.with(|w| {
            w.chain_id()
                .map(|id| wallet::chain_name(id).to_string())
                .unwrap_or_else(|| "—".to_string())
        })
    });

    let nav = pages
        .into_iter()
        .map(|(key, label)| {
            let href = PageRoute::page(key.clone()).to_hash();
            let current = move || {
                ctx.route
                    .with(|r| r.key == key || (r.key.is_empty() && key == HOME_PAGE_KEY))
            };
            view! {
                <a
                    href=href
                    class=move || if current() { css::navActive } else { css::navLink }
                >
                    {label}
                </a>
            }
        })
        .collect_view();

    let toggle_device = move |_: leptos::ev::MouseEvent| {
        let mut route = ctx.route.get_untracked();
        route.device = Some(match ctx.device.get_untracked() {
            DeviceClass::Mobile => DeviceClass::Desktop,
            DeviceClass::Desktop => DeviceClass::Mobile,
        });
        route.push();
    };
    let device_title = Signal::derive(move || match ctx.device.get() {
        DeviceClass::Mobile => "Mobile layout (switch to desktop)",
        DeviceClass::Desktop => "Desktop layout (switch to mobile)",
    });

    view! {
        <header class=css::bar>
            <a href="#/" class=css::siteName>{site_name}</a>

            <nav class=css::nav>{nav}</nav>

            <div class=css::section>
                // Session
                <span class=css::label>
                    <span class=css::labelIcon><Icon icon=ic::USER /></span>
                    <span class=css::value>{session_name}</span>
                </span>

                // Network
                <span class=css::labelPurple>
                    <span class=css::labelIcon><Icon icon=ic::NETWORK /></span>
                    <span class=css::value>{network_name}</span>
                </span>

                <button class=css::iconButton on:click=toggle_device title=device_title>
                    {move || match ctx.device.get() {
                        DeviceClass::Mobile => view! { <Icon icon=ic::MOBILE /> }.into_any(),
                        DeviceClass::Desktop => view! { <Icon icon=ic::DESKTOP /> }.into_any(),
                    }}
                </button>

                {move || match ctx.wallet.get() {
                    WalletState::Connected { signed_in: true, .. } => view! {
                        <button class=css::walletButton on:click=move |_| sign_out(ctx)>
                            <Icon icon=ic::UNLOCK />
                            "Sign out"
                        </button>
                    }
                    .into_any(),
                    WalletState::Connecting => view! {
                        <button class=css::walletButton disabled=true>"Connecting..."</button>
                    }
                    .into_any(),
                    WalletState::Connected { .. } | WalletState::Disconnected => view! {
                        <button class=css::walletButton on:click=move |_| sign_in(ctx)>
                            <Icon icon=ic::WALLET />
                            "Sign in"
                        </button>
                    }
                    .into_any(),
                }}
            </div>
        </header>
    }
}

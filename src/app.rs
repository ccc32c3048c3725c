//! Root application module.
//!
//! Contains the main App component, the AppContext definition, and
//! application-level setup (wallet restore and provider listeners).

use leptos::prelude::*;
use leptos_use::use_media_query;
use pagekit_core::{DeviceClass, IdentityStatus};

use crate::components::AppRouter;
use crate::core::wallet;
use crate::models::{PageRoute, WalletState};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read with
/// `use_context::<AppContext>()`. All fields are signals, so the struct is
/// `Copy`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Wallet connection state.
    pub wallet: RwSignal<WalletState>,

    /// Current route (page key plus device override).
    pub route: RwSignal<PageRoute>,

    /// Device class every composition uses: the route override if present,
    /// otherwise the viewport classification.
    pub device: Signal<DeviceClass>,

    /// Gating identity derived from the wallet.
    pub identity: Memo<IdentityStatus>,
}

impl AppContext {
    /// Creates the context. Must run inside a reactive owner.
    pub fn new() -> Self {
        let wallet = RwSignal::new(WalletState::default());
        let route = RwSignal::new(PageRoute::current());
        let is_mobile = use_media_query(DeviceClass::mobile_media_query());

        let device = Signal::derive(move || {
            route.with(|r| r.device).unwrap_or(if is_mobile.get() {
                DeviceClass::Mobile
            } else {
                DeviceClass::Desktop
            })
        });
        let identity = Memo::new(move |_| wallet.with(|w| w.identity()));

        Self {
            wallet,
            route,
            device,
            identity,
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Wallet Lifecycle
// ============================================================================

/// Explicit sign-in from the header button.
pub fn sign_in(ctx: AppContext) {
    wasm_bindgen_futures::spawn_local(async move {
        if !wallet::is_available() {
            log::warn!("sign-in requested but no wallet provider is installed");
            return;
        }

        ctx.wallet.set(WalletState::Connecting);
        match wallet::connect().await {
            Ok(address) => {
                wallet::save_session();
                let chain_id = wallet::get_chain_id().await;
                log::info!("signed in as {}", address);
                ctx.wallet.set(WalletState::Connected {
                    address: address.clone(),
                    ens_name: None,
                    chain_id,
                    signed_in: true,
                });
                resolve_ens_name(ctx, address).await;
            }
            Err(e) => {
                log::warn!("wallet connection failed: {}", e);
                ctx.wallet.set(WalletState::Disconnected);
            }
        }
    });
}

/// Sign out, forgetting the session.
pub fn sign_out(ctx: AppContext) {
    wallet::clear_session();
    ctx.wallet.set(WalletState::Disconnected);
}

async fn resolve_ens_name(ctx: AppContext, address: String) {
    if let Some(name) = wallet::resolve_ens(&address).await {
        ctx.wallet.update(|w| {
            if let WalletState::Connected {
                address: current,
                ens_name,
                ..
            } = w
                && *current == address
            {
                *ens_name = Some(name);
            }
        });
    }
}

/// Restore a previous session and follow provider events.
fn init_wallet(ctx: AppContext) {
    let on_accounts = wallet::on_accounts_changed(move |account| {
        ctx.wallet.update(|w| match account {
            None => *w = WalletState::Disconnected,
            Some(address) => {
                let same = matches!(w, WalletState::Connected { address: a, .. } if a.eq_ignore_ascii_case(&address));
                if !same {
                    // A different account has not signed in yet.
                    *w = WalletState::Connected {
                        address,
                        ens_name: None,
                        chain_id: w.chain_id(),
                        signed_in: false,
                    };
                }
            }
        });
    });
    let on_chain = wallet::on_chain_changed(move |id| {
        ctx.wallet.update(|w| {
            if let WalletState::Connected { chain_id, .. } = w {
                *chain_id = id;
            }
        });
    });
    if let Err(e) = on_accounts.and(on_chain) {
        log::debug!("wallet events unavailable: {}", e);
    }

    if !wallet::has_session() {
        return;
    }
    wasm_bindgen_futures::spawn_local(async move {
        let Some(address) = wallet::get_account().await else {
            wallet::clear_session();
            return;
        };
        let chain_id = wallet::get_chain_id().await;
        ctx.wallet.set(WalletState::Connected {
            address: address.clone(),
            ens_name: None,
            chain_id,
            signed_in: true,
        });
        resolve_ens_name(ctx, address).await;
    });
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);
    init_wallet(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: 100vh;
                    padding: 2rem;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #d64545; margin-bottom: 1rem;">"Something went wrong"</h1>
                    <ul style="color: #666; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="padding: 0.75rem 2rem; border-radius: 4px; cursor: pointer;"
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}

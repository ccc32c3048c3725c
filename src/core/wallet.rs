//! Wallet access through the injected EIP-1193 provider.
//!
//! Supplies the viewer identity the gate evaluates against. Talks to
//! `window.ethereum` directly via the Reflect API.

use js_sys::{Array, Function, Object, Promise, Reflect};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::JsFuture;

use crate::config::{WALLET_SESSION_KEY, WALLET_TIMEOUT_MS};
use crate::core::error::WalletError;
use crate::utils::{dom, fetch_json};

/// Get the window.ethereum object injected by the wallet extension.
fn get_ethereum() -> Result<Object, WalletError> {
    let window = dom::window().ok_or(WalletError::NoWindow)?;
    Reflect::get(&window, &"ethereum".into())
        .ok()
        .and_then(|v| v.dyn_into::<Object>().ok())
        .ok_or(WalletError::NotInstalled)
}

fn provider_method(ethereum: &Object, name: &str) -> Result<Function, WalletError> {
    Reflect::get(ethereum, &name.into())
        .map_err(|_| WalletError::RequestCreationFailed)?
        .dyn_into::<Function>()
        .map_err(|_| WalletError::RequestCreationFailed)
}

/// Start `ethereum.request({ method })` and return its promise.
fn request_promise(method: &str) -> Result<Promise, WalletError> {
    let ethereum = get_ethereum()?;

    let args = Object::new();
    Reflect::set(&args, &"method".into(), &method.into())
        .map_err(|_| WalletError::RequestCreationFailed)?;

    let request = provider_method(&ethereum, "request")?;
    request
        .call1(&ethereum, &args)
        .map(Promise::from)
        .map_err(|_| WalletError::RequestCreationFailed)
}

async fn ethereum_request(method: &str) -> Result<JsValue, WalletError> {
    JsFuture::from(request_promise(method)?)
        .await
        .map_err(|e| WalletError::RequestRejected(format!("{:?}", e)))
}

fn first_account(accounts: &JsValue) -> Option<String> {
    Array::from(accounts).get(0).as_string()
}

/// Check if a wallet provider is installed
pub fn is_available() -> bool {
    get_ethereum().is_ok()
}

/// Get current chain ID
pub async fn get_chain_id() -> Option<u64> {
    let result = ethereum_request("eth_chainId").await.ok()?;
    parse_chain_id(&result.as_string()?)
}

/// Parse a hex chain id as reported by the provider (`"0x1"`).
pub fn parse_chain_id(hex: &str) -> Option<u64> {
    u64::from_str_radix(hex.trim_start_matches("0x"), 16).ok()
}

/// Convert chain ID to network name
pub fn chain_name(chain_id: u64) -> &'static str {
    match chain_id {
        1 => "Ethereum",
        11155111 => "Sepolia",
        42161 => "Arbitrum",
        10 => "Optimism",
        8453 => "Base",
        137 => "Polygon",
        56 => "BNB Chain",
        43114 => "Avalanche",
        _ => "Unknown",
    }
}

/// Request wallet connection (shows the wallet popup)
pub async fn connect() -> Result<String, WalletError> {
    let result = ethereum_request("eth_requestAccounts").await?;
    first_account(&result).ok_or(WalletError::NoAccount)
}

/// Currently exposed account, without a popup.
///
/// Gives up after `WALLET_TIMEOUT_MS`; some providers never settle
/// `eth_accounts` while locked.
pub async fn get_account() -> Option<String> {
    let request = request_promise("eth_accounts").ok()?;
    let window = dom::window()?;

    let timeout = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            &resolve,
            WALLET_TIMEOUT_MS,
        );
    });
    let race = Promise::race(&Array::of2(&request, &timeout));

    match JsFuture::from(race).await {
        Ok(result) if !result.is_undefined() => first_account(&result),
        _ => None,
    }
}

/// ENS API response structure
#[derive(Deserialize)]
struct EnsResponse {
    name: Option<String>,
}

/// Resolve ENS name for an address using ENS API
pub async fn resolve_ens(address: &str) -> Option<String> {
    let url = format!("https://api.ensideas.com/ens/resolve/{}", address);
    fetch_json::<EnsResponse>(&url).await.ok()?.name
}

/// Check if the user has previously signed in (localStorage flag).
pub fn has_session() -> bool {
    dom::local_storage()
        .and_then(|s| s.get_item(WALLET_SESSION_KEY).ok().flatten())
        .is_some()
}

/// Save sign-in session to localStorage.
pub fn save_session() {
    if let Some(storage) = dom::local_storage() {
        let _ = storage.set_item(WALLET_SESSION_KEY, "1");
    }
}

/// Clear sign-in session from localStorage.
pub fn clear_session() {
    if let Some(storage) = dom::local_storage() {
        let _ = storage.remove_item(WALLET_SESSION_KEY);
    }
}

// ============================================================================
// Event Listeners
// ============================================================================

/// Subscribe to a provider event. The listener lives as long as the page.
fn listen(event: &str, callback: impl Fn(JsValue) + 'static) -> Result<(), WalletError> {
    let ethereum = get_ethereum()?;
    let closure = Closure::wrap(Box::new(callback) as Box<dyn Fn(JsValue)>);

    provider_method(&ethereum, "on")?
        .call2(&ethereum, &event.into(), closure.as_ref())
        .map_err(|_| WalletError::RequestCreationFailed)?;

    closure.forget();
    Ok(())
}

/// Register a callback for when the exposed account changes.
///
/// The callback receives `None` when the wallet disconnects.
pub fn on_accounts_changed(callback: impl Fn(Option<String>) + 'static) -> Result<(), WalletError> {
    listen("accountsChanged", move |accounts| callback(first_account(&accounts)))
}

/// Register a callback for when the connected chain changes.
pub fn on_chain_changed(callback: impl Fn(Option<u64>) + 'static) -> Result<(), WalletError> {
    listen("chainChanged", move |chain_id| {
        callback(chain_id.as_string().as_deref().and_then(parse_chain_id))
    })
}

//! Browser-side data models.
//!
//! - [`PageRoute`] - Hash-based page routing with device override
//! - [`WalletState`] - Wallet connection state and the gating identity it yields
//!
//! Page, section, and condition shapes live in `pagekit_core::models`.

mod route;
mod wallet;

pub use route::PageRoute;
pub use wallet::WalletState;

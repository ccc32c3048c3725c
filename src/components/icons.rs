//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuCheck as Check, LuExternalLink as ExternalLink, LuGlobe as Network, LuLock as Lock,
        LuLockOpen as Unlock, LuMonitor as Desktop, LuRefreshCw as Refresh,
        LuSmartphone as Mobile, LuUser as User, LuWallet as Wallet, LuX as Cross,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowClockwise as Refresh, BsBoxArrowUpRight as ExternalLink, BsCheckLg as Check,
        BsDisplay as Desktop, BsGlobe as Network, BsLockFill as Lock, BsPerson as User,
        BsPhone as Mobile, BsUnlockFill as Unlock, BsWallet2 as Wallet, BsXLg as Cross,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(LOCK, Lock);
themed_icon!(UNLOCK, Unlock);
themed_icon!(USER, User);
themed_icon!(NETWORK, Network);
themed_icon!(REFRESH, Refresh);
themed_icon!(CHECK, Check);
themed_icon!(CROSS, Cross);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(WALLET, Wallet);
themed_icon!(DESKTOP, Desktop);
themed_icon!(MOBILE, Mobile);

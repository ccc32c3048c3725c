//! Data model and wire format.
//!
//! Contains domain types for:
//! - [`Section`] - One declaratively configured unit of page content
//! - [`PageLayout`], [`LayoutKind`] - Stack/tabs arrangement descriptor
//! - [`DeviceClass`] - Mobile/desktop classification
//! - [`Condition`], [`ConditionCheckResult`], [`IdentityStatus`] - Gating inputs and outputs
//! - [`Page`], [`GatedRegion`], [`SiteConfig`], [`WidgetConfig`] - Served configuration shapes
//!
//! Every shape tolerates unknown fields and defaults missing optional ones,
//! so stored configurations stay readable as the engine evolves.

mod condition;
mod device;
mod layout;
mod lenient;
mod page;
mod section;

pub use condition::{
    Combinator, Condition, ConditionCheckResult, ConditionKind, Identity, IdentityStatus,
};
pub use device::DeviceClass;
pub use layout::{
    DesktopTabPosition, DesktopTabs, LayoutKind, MobileTabPosition, MobileTabs, PageLayout,
};
pub use page::{GatedRegion, LockedLayout, Page, SiteConfig, WidgetConfig, HOME_PAGE_KEY};
pub use section::Section;

//! Section composition and access-gating engine.
//!
//! A page is data: an ordered list of typed [`Section`] records plus an
//! optional [`PageLayout`] and protection descriptor. This crate turns that
//! data into a [`CompositionPlan`] for one [`DeviceClass`] and drives the
//! lifecycle of gated regions. Nothing here touches the DOM; hosts supply
//! renderers, timers, evaluators, and widget resolvers.
//!
//! - [`registry`] - Tag to renderer lookup ([`SectionRegistry`])
//! - [`visibility`] - Per-device section pruning
//! - [`lazy`] - Eager/deferred mount policy and the one-shot [`LazyMount`]
//! - [`layout`] - Stack/tabs composition and [`ActiveTabState`]
//! - [`dispatch`] - Per-section renderer invocation with failure isolation
//! - [`gate`] - [`GateSession`] state machine for protected regions
//! - [`evaluator`] - [`ConditionEvaluator`] boundary
//! - [`widget`] - [`WidgetResolver`] boundary and the embed cycle guard

pub mod config;
pub mod dispatch;
pub mod error;
pub mod evaluator;
pub mod gate;
pub mod layout;
pub mod lazy;
pub mod models;
pub mod registry;
pub mod section_types;
pub mod visibility;
pub mod widget;

pub use dispatch::{Dispatcher, LayoutHints, RenderProps, SectionRenderer};
pub use error::{ConfigError, EvaluatorError, RenderError};
pub use evaluator::{ConditionEvaluator, FixedEvaluator};
pub use gate::{CheckTicket, GateSession, GateSessionState, GateView, TimerToken, run_round};
pub use layout::{
    ActiveTabState, CompositionPlan, Orientation, PanelMode, PanelState, StackEntry,
    TabDescriptor, TabPlacement, TabsPlan, compose,
};
pub use lazy::{LazyMount, MountMode, should_defer};
pub use models::{
    Combinator, Condition, ConditionCheckResult, ConditionKind, DeviceClass, GatedRegion,
    Identity, IdentityStatus, LayoutKind, LockedLayout, Page, PageLayout, Section, SiteConfig,
    WidgetConfig,
};
pub use registry::SectionRegistry;
pub use visibility::filter;
pub use widget::{EmbedRefusal, EmbedTrail, WidgetCatalog, WidgetResolver};

//! Browser services backing the engine's boundaries.
//!
//! - [`evaluator`] - HTTP condition evaluator
//! - [`widgets`] - HTTP widget resolver with session caching
//! - [`wallet`] - EIP-1193 wallet access supplying the viewer identity
//! - [`error`] - Host error types

pub mod error;
pub mod evaluator;
pub mod wallet;
pub mod widgets;

pub use evaluator::HttpConditionEvaluator;
pub use widgets::HttpWidgetResolver;

//! Condition evaluator boundary.
//!
//! The engine never reads chain state. It hands the ordered condition list
//! and the current account to a [`ConditionEvaluator`] and feeds whatever
//! comes back into the gate session. Abandoning the returned future is how
//! a caller cancels an evaluation.

use std::cell::Cell;

use crate::error::EvaluatorError;
use crate::models::{Condition, ConditionCheckResult, Identity};

/// External eligibility evaluator.
///
/// Implementations must be safe to call repeatedly; each call reflects
/// on-chain state at call time.
#[allow(async_fn_in_trait)]
pub trait ConditionEvaluator {
    async fn evaluate(
        &self,
        conditions: &[Condition],
        account: Option<&Identity>,
    ) -> Result<ConditionCheckResult, EvaluatorError>;
}

/// Evaluator that always answers with the same outcome.
///
/// Used by the CLI to simulate gate outcomes and by tests.
#[derive(Debug)]
pub struct FixedEvaluator {
    outcome: Result<ConditionCheckResult, EvaluatorError>,
    calls: Cell<usize>,
}

impl FixedEvaluator {
    pub fn new(outcome: Result<ConditionCheckResult, EvaluatorError>) -> Self {
        Self {
            outcome,
            calls: Cell::new(0),
        }
    }

    pub fn satisfied() -> Self {
        Self::new(Ok(ConditionCheckResult::satisfied()))
    }

    pub fn unsatisfied() -> Self {
        Self::new(Ok(ConditionCheckResult::unsatisfied()))
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(Err(EvaluatorError::Transport(message.into())))
    }

    /// Number of evaluations performed so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl ConditionEvaluator for FixedEvaluator {
    async fn evaluate(
        &self,
        _conditions: &[Condition],
        _account: Option<&Identity>,
    ) -> Result<ConditionCheckResult, EvaluatorError> {
        self.calls.set(self.calls.get() + 1);
        self.outcome.clone()
    }
}

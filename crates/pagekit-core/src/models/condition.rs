//! Eligibility conditions and evaluator results.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Account identity a condition is evaluated against.
pub type Identity = Address;

/// Asset class a condition checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionKind {
    /// NFT collection ownership
    Collection,
    /// Fungible token balance
    Coin,
}

/// How a condition combines with the running result of the ones before it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Combinator {
    #[default]
    And,
    Or,
}

/// One ownership/balance predicate against an account.
///
/// The engine never evaluates conditions itself; it forwards them, in order,
/// to a [`ConditionEvaluator`](crate::ConditionEvaluator).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type")]
    pub kind: ConditionKind,
    #[serde(default)]
    pub condition: Combinator,
    pub address: Address,
    pub chain_id: u64,
    /// Minimum amount as a decimal string, in whole units.
    pub amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_id: Option<String>,
}

/// Snapshot produced by the external evaluator.
///
/// `partial_results` and `balances` are passed through to display
/// collaborators without interpretation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionCheckResult {
    pub result: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partial_results: Option<Vec<bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balances: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ConditionCheckResult {
    pub fn satisfied() -> Self {
        Self {
            result: true,
            ..Default::default()
        }
    }

    pub fn unsatisfied() -> Self {
        Self::default()
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error_message: Some(message.into()),
            ..Default::default()
        }
    }

    /// An error payload, regardless of `result`.
    #[inline]
    pub fn is_error(&self) -> bool {
        self.error_message.is_some()
    }

    /// Per-condition outcome, when the evaluator reported one.
    pub fn condition_met(&self, index: usize) -> Option<bool> {
        self.partial_results.as_ref()?.get(index).copied()
    }
}

/// Who is looking at the page, as far as gating is concerned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdentityStatus {
    pub account: Option<Identity>,
    /// Whether the account has completed a login handshake.
    pub authenticated: bool,
}

impl IdentityStatus {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn connected(account: Identity) -> Self {
        Self {
            account: Some(account),
            authenticated: false,
        }
    }

    pub fn authenticated(account: Identity) -> Self {
        Self {
            account: Some(account),
            authenticated: true,
        }
    }

    #[inline]
    pub fn has_account(&self) -> bool {
        self.account.is_some()
    }

    /// Errors are only ever surfaced to a present, authenticated account.
    #[inline]
    pub fn can_see_errors(&self) -> bool {
        self.account.is_some() && self.authenticated
    }
}

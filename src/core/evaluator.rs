//! HTTP condition evaluator.
//!
//! POSTs `{ conditions, account }` to the configured endpoint and decodes
//! a `ConditionCheckResult`. Results that arrive after their round was
//! superseded are discarded by the gate session, not here.

use gloo_net::http::Request;
use pagekit_core::{
    Condition, ConditionCheckResult, ConditionEvaluator, EvaluatorError, Identity,
};
use serde::Serialize;

use crate::config::EVALUATOR_ENDPOINT;

#[derive(Serialize)]
struct CheckRequest<'a> {
    conditions: &'a [Condition],
    #[serde(skip_serializing_if = "Option::is_none")]
    account: Option<String>,
}

/// Evaluator backed by an HTTP endpoint.
#[derive(Clone, Copy, Debug)]
pub struct HttpConditionEvaluator {
    endpoint: &'static str,
}

impl Default for HttpConditionEvaluator {
    fn default() -> Self {
        Self {
            endpoint: EVALUATOR_ENDPOINT,
        }
    }
}

impl ConditionEvaluator for HttpConditionEvaluator {
    async fn evaluate(
        &self,
        conditions: &[Condition],
        account: Option<&Identity>,
    ) -> Result<ConditionCheckResult, EvaluatorError> {
        let body = CheckRequest {
            conditions,
            account: account.map(|a| a.to_checksum(None)),
        };

        let response = Request::post(self.endpoint)
            .json(&body)
            .map_err(|e| EvaluatorError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| EvaluatorError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(EvaluatorError::Status(response.status()));
        }

        response
            .json::<ConditionCheckResult>()
            .await
            .map_err(|e| EvaluatorError::Decode(e.to_string()))
    }
}

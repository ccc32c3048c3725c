//! Access gate controller.
//!
//! A [`GateSession`] tracks one gated region from mount to unmount:
//!
//! ```text
//!            mount / retry
//!   Idle ─────────────────────▶ Checking ──result=true──▶ Satisfied
//!                                 │  │
//!                  result=false ◀─┘  └─ failure (authenticated account)
//!                       │                    │
//!                  Unsatisfied       ErrorPendingDisplay ──success──▶ Satisfied
//!                                            │ delay
//!                                            ▼
//!                                      ErrorDisplayed ──retry──▶ Checking
//! ```
//!
//! The protected payload is exposed only in `Satisfied`. The session owns
//! the error-delay timer handle while in `ErrorPendingDisplay` and drops it
//! on every way out of that state; hosts make dropping the handle cancel the
//! underlying timer. Each timer also carries a [`TimerToken`], so a callback
//! that races the drop is ignored.

use std::cell::RefCell;
use std::time::Duration;

use crate::config::ERROR_DISPLAY_DELAY;
use crate::error::EvaluatorError;
use crate::evaluator::ConditionEvaluator;
use crate::models::{Condition, ConditionCheckResult, Identity, IdentityStatus};

/// Lifecycle state of one gated region instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateSessionState {
    #[default]
    Idle,
    Checking,
    Satisfied,
    Unsatisfied,
    ErrorPendingDisplay,
    ErrorDisplayed,
}

/// What the host should render for the region right now.
#[derive(Clone, Debug, PartialEq)]
pub enum GateView {
    /// Reveal the protected payload.
    Protected,
    /// Locked fallback. `result` is present once a check completed.
    Locked {
        result: Option<ConditionCheckResult>,
    },
    /// A check is in flight (or failed and is still inside the delay).
    Checking,
    /// Visible error with a retry action.
    Error { message: String },
}

/// Identifies one scheduled error-delay timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// Identifies one evaluation round. Results must present the ticket of the
/// round they belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckTicket {
    round: u64,
}

#[derive(Debug)]
struct PendingTimer<H> {
    token: TimerToken,
    _handle: H,
}

/// State machine for one gated region.
///
/// `H` is the host's timer handle type; dropping it must cancel the timer.
#[derive(Debug)]
pub struct GateSession<H> {
    state: GateSessionState,
    round: u64,
    next_token: u64,
    timer: Option<PendingTimer<H>>,
    result: Option<ConditionCheckResult>,
    error: Option<String>,
    account: Option<Identity>,
    mounted: bool,
}

impl<H> Default for GateSession<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> GateSession<H> {
    pub fn new() -> Self {
        Self {
            state: GateSessionState::Idle,
            round: 0,
            next_token: 0,
            timer: None,
            result: None,
            error: None,
            account: None,
            mounted: false,
        }
    }

    #[inline]
    pub fn state(&self) -> GateSessionState {
        self.state
    }

    /// Last completed check result of the current round, if any.
    pub fn result(&self) -> Option<&ConditionCheckResult> {
        self.result.as_ref()
    }

    /// Whether an error-delay timer is currently owned.
    #[inline]
    pub fn has_pending_timer(&self) -> bool {
        self.timer.is_some()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Projection of the state for rendering.
    pub fn view(&self) -> GateView {
        match self.state {
            GateSessionState::Satisfied => GateView::Protected,
            GateSessionState::Idle | GateSessionState::Unsatisfied => GateView::Locked {
                result: self.result.clone(),
            },
            GateSessionState::Checking | GateSessionState::ErrorPendingDisplay => {
                GateView::Checking
            }
            GateSessionState::ErrorDisplayed => GateView::Error {
                message: self
                    .error
                    .clone()
                    .unwrap_or_else(|| "Unable to verify access".to_string()),
            },
        }
    }

    /// Region mounted. Starts a round when an account is present.
    pub fn mount(&mut self, identity: &IdentityStatus) -> Option<CheckTicket> {
        self.mounted = true;
        self.account = identity.account;
        identity.has_account().then(|| self.begin_round())
    }

    /// Region unmounted. Cancels the timer; later deliveries are ignored.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.cancel_timer();
        self.state = GateSessionState::Idle;
    }

    /// User asked to check again.
    ///
    /// Accepted from `ErrorDisplayed`, `Unsatisfied`, and `Idle` with an
    /// account present.
    pub fn retry(&mut self, identity: &IdentityStatus) -> Option<CheckTicket> {
        if !self.mounted || !identity.has_account() {
            return None;
        }
        match self.state {
            GateSessionState::ErrorDisplayed
            | GateSessionState::Unsatisfied
            | GateSessionState::Idle => {
                self.account = identity.account;
                Some(self.begin_round())
            }
            _ => None,
        }
    }

    /// The viewer's identity changed.
    ///
    /// Losing the account returns to `Idle`. A different account starts a
    /// fresh round. Losing authentication while an error is pending or shown
    /// drops the error, since errors are only surfaced to authenticated
    /// viewers.
    pub fn identity_changed(&mut self, identity: &IdentityStatus) -> Option<CheckTicket> {
        if !self.mounted {
            return None;
        }
        match identity.account {
            None => {
                self.account = None;
                self.reset_to_idle();
                None
            }
            Some(account) if self.account != Some(account) => {
                self.account = Some(account);
                Some(self.begin_round())
            }
            Some(_) => {
                if !identity.authenticated
                    && matches!(
                        self.state,
                        GateSessionState::ErrorPendingDisplay | GateSessionState::ErrorDisplayed
                    )
                {
                    self.reset_to_idle();
                }
                None
            }
        }
    }

    /// Apply an evaluation outcome for `ticket`'s round.
    ///
    /// Accepted while `Checking` or `ErrorPendingDisplay` for the current
    /// round only. `schedule` is called at most once, to start the error
    /// delay; it must return a handle that cancels the timer when dropped.
    /// Returns whether the outcome was applied.
    pub fn deliver<F>(
        &mut self,
        ticket: CheckTicket,
        outcome: Result<ConditionCheckResult, EvaluatorError>,
        identity: &IdentityStatus,
        schedule: F,
    ) -> bool
    where
        F: FnOnce(TimerToken, Duration) -> H,
    {
        if !self.mounted || ticket.round != self.round {
            log::debug!("dropping stale gate result for round {}", ticket.round);
            return false;
        }
        if !matches!(
            self.state,
            GateSessionState::Checking | GateSessionState::ErrorPendingDisplay
        ) {
            return false;
        }

        let outcome = outcome.and_then(|result| match result.error_message.clone() {
            Some(message) => Err(EvaluatorError::Reported(message)),
            None => Ok(result),
        });

        match outcome {
            Ok(result) => {
                self.cancel_timer();
                self.error = None;
                self.state = if result.result {
                    GateSessionState::Satisfied
                } else {
                    GateSessionState::Unsatisfied
                };
                log::info!("gate round {} resolved: {:?}", self.round, self.state);
                self.result = Some(result);
            }
            Err(e) if identity.can_see_errors() => {
                self.error = Some(e.to_string());
                if self.state != GateSessionState::ErrorPendingDisplay {
                    let token = TimerToken(self.next_token);
                    self.next_token += 1;
                    let handle = schedule(token, ERROR_DISPLAY_DELAY);
                    self.timer = Some(PendingTimer {
                        token,
                        _handle: handle,
                    });
                    self.state = GateSessionState::ErrorPendingDisplay;
                    log::info!("gate round {} failed, error display pending: {}", self.round, e);
                }
            }
            Err(e) => {
                log::info!("gate round {} failed without an authenticated account: {}", self.round, e);
                self.cancel_timer();
                self.error = None;
                self.result = None;
                self.state = GateSessionState::Unsatisfied;
            }
        }
        true
    }

    /// The error-delay timer fired.
    ///
    /// Only the timer owned for the current `ErrorPendingDisplay` stretch
    /// has any effect.
    pub fn timer_elapsed(&mut self, token: TimerToken) -> bool {
        let current = self.timer.as_ref().map(|t| t.token);
        if self.state != GateSessionState::ErrorPendingDisplay || current != Some(token) {
            return false;
        }
        self.timer = None;
        self.state = GateSessionState::ErrorDisplayed;
        true
    }

    fn begin_round(&mut self) -> CheckTicket {
        self.cancel_timer();
        self.round += 1;
        self.result = None;
        self.error = None;
        self.state = GateSessionState::Checking;
        CheckTicket { round: self.round }
    }

    fn reset_to_idle(&mut self) {
        self.cancel_timer();
        self.round += 1;
        self.result = None;
        self.error = None;
        self.state = GateSessionState::Idle;
    }

    fn cancel_timer(&mut self) {
        self.timer = None;
    }
}

/// Evaluate one round and deliver the outcome to the session.
///
/// The session is only borrowed after the evaluator completes, so other
/// events (retry, unmount) can be applied while the evaluation is in flight.
pub async fn run_round<E, H, F>(
    session: &RefCell<GateSession<H>>,
    ticket: CheckTicket,
    evaluator: &E,
    conditions: &[Condition],
    identity: &IdentityStatus,
    schedule: F,
) -> bool
where
    E: ConditionEvaluator,
    F: FnOnce(TimerToken, Duration) -> H,
{
    let outcome = evaluator.evaluate(conditions, identity.account.as_ref()).await;
    session.borrow_mut().deliver(ticket, outcome, identity, schedule)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use alloy_primitives::Address;
    use proptest::prelude::*;

    use super::*;
    use crate::evaluator::FixedEvaluator;

    /// Manual clock standing in for the host's timer facility.
    #[derive(Default)]
    struct FakeClock {
        now: Cell<Duration>,
        timers: RefCell<Vec<(TimerToken, Duration, Rc<Cell<bool>>)>>,
    }

    /// Handle whose drop cancels the fake timer.
    struct FakeTimer(Rc<Cell<bool>>);

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            self.0.set(false);
        }
    }

    impl FakeClock {
        fn scheduler(&self) -> impl FnOnce(TimerToken, Duration) -> FakeTimer + '_ {
            move |token, delay| {
                let alive = Rc::new(Cell::new(true));
                self.timers
                    .borrow_mut()
                    .push((token, self.now.get() + delay, alive.clone()));
                FakeTimer(alive)
            }
        }

        fn scheduled(&self) -> usize {
            self.timers.borrow().len()
        }

        /// Advance time, firing live timers that came due.
        fn advance(&self, by: Duration, session: &mut GateSession<FakeTimer>) {
            self.now.set(self.now.get() + by);
            let due: Vec<TimerToken> = self
                .timers
                .borrow()
                .iter()
                .filter(|(_, at, alive)| alive.get() && *at <= self.now.get())
                .map(|(token, _, _)| *token)
                .collect();
            for token in due {
                session.timer_elapsed(token);
            }
        }
    }

    fn account() -> Address {
        Address::repeat_byte(0xab)
    }

    #[test]
    fn test_mount_without_account_stays_idle() {
        let mut session: GateSession<FakeTimer> = GateSession::new();
        assert!(session.mount(&IdentityStatus::anonymous()).is_none());
        assert_eq!(session.state(), GateSessionState::Idle);
        assert_eq!(session.view(), GateView::Locked { result: None });
    }

    #[test]
    fn test_satisfied_reveals_payload() {
        let clock = FakeClock::default();
        let identity = IdentityStatus::authenticated(account());
        let mut session = GateSession::new();
        let ticket = session.mount(&identity).unwrap();
        assert_eq!(session.view(), GateView::Checking);

        assert!(session.deliver(
            ticket,
            Ok(ConditionCheckResult::satisfied()),
            &identity,
            clock.scheduler()
        ));
        assert_eq!(session.state(), GateSessionState::Satisfied);
        assert_eq!(session.view(), GateView::Protected);
    }

    #[test]
    fn test_scenario_d_unsatisfied_locks_immediately() {
        let clock = FakeClock::default();
        let identity = IdentityStatus::authenticated(account());
        let mut session = GateSession::new();
        let ticket = session.mount(&identity).unwrap();

        let result = ConditionCheckResult {
            partial_results: Some(vec![false]),
            ..ConditionCheckResult::unsatisfied()
        };
        session.deliver(ticket, Ok(result.clone()), &identity, clock.scheduler());

        assert_eq!(session.state(), GateSessionState::Unsatisfied);
        assert_eq!(
            session.view(),
            GateView::Locked {
                result: Some(result)
            }
        );
        assert_eq!(clock.scheduled(), 0);
        assert!(!session.has_pending_timer());
    }

    #[test]
    fn test_scenario_e_error_after_delay_then_retry() {
        let clock = FakeClock::default();
        let identity = IdentityStatus::authenticated(account());
        let mut session = GateSession::new();
        let ticket = session.mount(&identity).unwrap();

        session.deliver(
            ticket,
            Err(EvaluatorError::Transport("rpc down".into())),
            &identity,
            clock.scheduler(),
        );
        assert_eq!(session.state(), GateSessionState::ErrorPendingDisplay);
        assert_eq!(session.view(), GateView::Checking);
        assert_eq!(clock.scheduled(), 1);

        clock.advance(Duration::from_millis(1000), &mut session);
        assert_eq!(session.view(), GateView::Checking);

        clock.advance(Duration::from_millis(500), &mut session);
        assert_eq!(session.state(), GateSessionState::ErrorDisplayed);
        assert_eq!(
            session.view(),
            GateView::Error {
                message: "network error: rpc down".to_string()
            }
        );

        let retry = session.retry(&identity).unwrap();
        assert_ne!(retry, ticket);
        assert_eq!(session.state(), GateSessionState::Checking);
        assert_eq!(session.view(), GateView::Checking);
        assert!(!session.has_pending_timer());
    }

    #[test]
    fn test_error_payload_counts_as_failure() {
        let clock = FakeClock::default();
        let identity = IdentityStatus::authenticated(account());
        let mut session = GateSession::new();
        let ticket = session.mount(&identity).unwrap();

        session.deliver(
            ticket,
            Ok(ConditionCheckResult::failed("balance lookup failed")),
            &identity,
            clock.scheduler(),
        );
        assert_eq!(session.state(), GateSessionState::ErrorPendingDisplay);
        clock.advance(ERROR_DISPLAY_DELAY, &mut session);
        assert_eq!(
            session.view(),
            GateView::Error {
                message: "balance lookup failed".to_string()
            }
        );
    }

    #[test]
    fn test_success_before_delay_cancels_timer() {
        let clock = FakeClock::default();
        let identity = IdentityStatus::authenticated(account());
        let mut session = GateSession::new();
        let ticket = session.mount(&identity).unwrap();

        session.deliver(
            ticket,
            Err(EvaluatorError::Status(502)),
            &identity,
            clock.scheduler(),
        );
        clock.advance(Duration::from_millis(500), &mut session);
        session.deliver(
            ticket,
            Ok(ConditionCheckResult::satisfied()),
            &identity,
            clock.scheduler(),
        );
        assert_eq!(session.state(), GateSessionState::Satisfied);
        assert!(!session.has_pending_timer());
        assert!(clock.timers.borrow().iter().all(|(_, _, alive)| !alive.get()));

        clock.advance(Duration::from_secs(5), &mut session);
        assert_eq!(session.view(), GateView::Protected);
    }

    #[test]
    fn test_late_timer_callback_is_inert() {
        let clock = FakeClock::default();
        let identity = IdentityStatus::authenticated(account());
        let mut session = GateSession::new();
        let ticket = session.mount(&identity).unwrap();
        session.deliver(
            ticket,
            Err(EvaluatorError::Status(500)),
            &identity,
            clock.scheduler(),
        );
        let token = clock.timers.borrow()[0].0;

        session.deliver(
            ticket,
            Ok(ConditionCheckResult::satisfied()),
            &identity,
            clock.scheduler(),
        );
        // Host failed to cancel in time and the callback still runs.
        assert!(!session.timer_elapsed(token));
        assert_eq!(session.state(), GateSessionState::Satisfied);
    }

    #[test]
    fn test_repeated_failure_keeps_original_deadline() {
        let clock = FakeClock::default();
        let identity = IdentityStatus::authenticated(account());
        let mut session = GateSession::new();
        let ticket = session.mount(&identity).unwrap();

        session.deliver(ticket, Err(EvaluatorError::Status(500)), &identity, clock.scheduler());
        clock.advance(Duration::from_millis(1000), &mut session);
        session.deliver(ticket, Err(EvaluatorError::Status(503)), &identity, clock.scheduler());
        assert_eq!(clock.scheduled(), 1);

        clock.advance(Duration::from_millis(500), &mut session);
        assert_eq!(
            session.view(),
            GateView::Error {
                message: "evaluator returned HTTP 503".to_string()
            }
        );
    }

    #[test]
    fn test_failure_without_authentication_locks() {
        let clock = FakeClock::default();
        let identity = IdentityStatus::connected(account());
        let mut session = GateSession::new();
        let ticket = session.mount(&identity).unwrap();

        session.deliver(
            ticket,
            Err(EvaluatorError::Transport("offline".into())),
            &identity,
            clock.scheduler(),
        );
        assert_eq!(session.state(), GateSessionState::Unsatisfied);
        assert_eq!(clock.scheduled(), 0);
    }

    #[test]
    fn test_unmount_cancels_and_ignores_results() {
        let clock = FakeClock::default();
        let identity = IdentityStatus::authenticated(account());
        let mut session = GateSession::new();
        let ticket = session.mount(&identity).unwrap();
        session.deliver(ticket, Err(EvaluatorError::Status(500)), &identity, clock.scheduler());

        session.unmount();
        assert!(!session.has_pending_timer());
        assert!(!clock.timers.borrow()[0].2.get());
        assert!(!session.deliver(
            ticket,
            Ok(ConditionCheckResult::satisfied()),
            &identity,
            clock.scheduler()
        ));
        assert_ne!(session.view(), GateView::Protected);
    }

    #[test]
    fn test_stale_round_is_ignored() {
        let clock = FakeClock::default();
        let identity = IdentityStatus::authenticated(account());
        let mut session = GateSession::new();
        let first = session.mount(&identity).unwrap();
        session.deliver(first, Ok(ConditionCheckResult::unsatisfied()), &identity, clock.scheduler());
        let second = session.retry(&identity).unwrap();

        assert!(!session.deliver(
            first,
            Ok(ConditionCheckResult::satisfied()),
            &identity,
            clock.scheduler()
        ));
        assert_eq!(session.state(), GateSessionState::Checking);
        assert!(session.deliver(
            second,
            Ok(ConditionCheckResult::satisfied()),
            &identity,
            clock.scheduler()
        ));
    }

    #[test]
    fn test_retry_not_accepted_while_checking_or_satisfied() {
        let clock = FakeClock::default();
        let identity = IdentityStatus::authenticated(account());
        let mut session = GateSession::new();
        let ticket = session.mount(&identity).unwrap();
        assert!(session.retry(&identity).is_none());
        session.deliver(ticket, Ok(ConditionCheckResult::satisfied()), &identity, clock.scheduler());
        assert!(session.retry(&identity).is_none());
    }

    #[test]
    fn test_identity_changes() {
        let clock = FakeClock::default();
        let identity = IdentityStatus::authenticated(account());
        let mut session = GateSession::new();
        let ticket = session.mount(&identity).unwrap();
        session.deliver(ticket, Ok(ConditionCheckResult::satisfied()), &identity, clock.scheduler());

        // Switching accounts re-checks and hides the payload meanwhile.
        let other = IdentityStatus::authenticated(Address::repeat_byte(0xcd));
        assert!(session.identity_changed(&other).is_some());
        assert_eq!(session.view(), GateView::Checking);

        // Disconnecting returns to idle.
        assert!(session.identity_changed(&IdentityStatus::anonymous()).is_none());
        assert_eq!(session.state(), GateSessionState::Idle);
    }

    #[test]
    fn test_losing_authentication_drops_pending_error() {
        let clock = FakeClock::default();
        let identity = IdentityStatus::authenticated(account());
        let mut session = GateSession::new();
        let ticket = session.mount(&identity).unwrap();
        session.deliver(ticket, Err(EvaluatorError::Status(500)), &identity, clock.scheduler());

        session.identity_changed(&IdentityStatus::connected(account()));
        assert_eq!(session.state(), GateSessionState::Idle);
        clock.advance(Duration::from_secs(2), &mut session);
        assert_eq!(session.state(), GateSessionState::Idle);
    }

    #[tokio::test]
    async fn test_run_round_with_evaluator() {
        let clock = FakeClock::default();
        let identity = IdentityStatus::authenticated(account());
        let session = RefCell::new(GateSession::new());
        let ticket = session.borrow_mut().mount(&identity).unwrap();

        let evaluator = FixedEvaluator::satisfied();
        let applied = run_round(&session, ticket, &evaluator, &[], &identity, clock.scheduler()).await;
        assert!(applied);
        assert_eq!(evaluator.calls(), 1);
        assert_eq!(session.borrow().view(), GateView::Protected);
    }

    #[tokio::test]
    async fn test_run_round_after_unmount_is_dropped() {
        let clock = FakeClock::default();
        let identity = IdentityStatus::authenticated(account());
        let session = RefCell::new(GateSession::new());
        let ticket = session.borrow_mut().mount(&identity).unwrap();
        session.borrow_mut().unmount();

        let evaluator = FixedEvaluator::failing("late");
        let applied = run_round(&session, ticket, &evaluator, &[], &identity, clock.scheduler()).await;
        assert!(!applied);
        assert_eq!(clock.scheduled(), 0);
    }

    // ------------------------------------------------------------------------
    // Randomized interleavings
    // ------------------------------------------------------------------------

    #[derive(Clone, Debug)]
    enum Op {
        Mount,
        Succeed(bool),
        Fail,
        DeliverStale,
        Wait(u64),
        Retry,
        Unmount,
        Logout,
        SwitchAccount,
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Mount),
            any::<bool>().prop_map(Op::Succeed),
            Just(Op::Fail),
            Just(Op::DeliverStale),
            (0u64..2000).prop_map(Op::Wait),
            Just(Op::Retry),
            Just(Op::Unmount),
            Just(Op::Logout),
            Just(Op::SwitchAccount),
        ]
    }

    proptest! {
        #[test]
        fn prop_exclusive_disclosure(ops in prop::collection::vec(arb_op(), 1..60)) {
            let clock = FakeClock::default();
            let accounts = [Address::repeat_byte(1), Address::repeat_byte(2)];
            let mut which = 0usize;
            let mut identity = IdentityStatus::authenticated(accounts[which]);
            let mut session: GateSession<FakeTimer> = GateSession::new();
            let mut ticket: Option<CheckTicket> = None;
            let mut stale: Option<CheckTicket> = None;
            let mut last_applied_was_error = false;

            for op in ops {
                let mut new_ticket = None;
                match op {
                    Op::Mount => new_ticket = session.mount(&identity),
                    Op::Succeed(result) => {
                        if let Some(t) = ticket {
                            let outcome = ConditionCheckResult { result, ..Default::default() };
                            if session.deliver(t, Ok(outcome), &identity, clock.scheduler()) {
                                last_applied_was_error = false;
                            }
                        }
                    }
                    Op::Fail => {
                        if let Some(t) = ticket {
                            let err = EvaluatorError::Transport("x".into());
                            if session.deliver(t, Err(err), &identity, clock.scheduler()) {
                                last_applied_was_error = true;
                            }
                        }
                    }
                    Op::DeliverStale => {
                        if let Some(t) = stale {
                            prop_assert!(!session.deliver(
                                t,
                                Ok(ConditionCheckResult::satisfied()),
                                &identity,
                                clock.scheduler()
                            ));
                        }
                    }
                    Op::Wait(ms) => clock.advance(Duration::from_millis(ms), &mut session),
                    Op::Retry => new_ticket = session.retry(&identity),
                    Op::Unmount => session.unmount(),
                    Op::Logout => {
                        identity = IdentityStatus::anonymous();
                        session.identity_changed(&identity);
                    }
                    Op::SwitchAccount => {
                        which = 1 - which;
                        identity = IdentityStatus::authenticated(accounts[which]);
                        new_ticket = session.identity_changed(&identity);
                    }
                }
                if let Some(t) = new_ticket {
                    stale = ticket.or(stale);
                    ticket = Some(t);
                    last_applied_was_error = false;
                }

                let state = session.state();
                prop_assert_eq!(
                    session.view() == GateView::Protected,
                    state == GateSessionState::Satisfied
                );
                prop_assert_eq!(
                    session.has_pending_timer(),
                    state == GateSessionState::ErrorPendingDisplay
                );
                if state == GateSessionState::ErrorDisplayed {
                    prop_assert!(last_applied_was_error);
                }
            }
        }
    }
}

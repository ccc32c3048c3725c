//! Gated region component.
//!
//! Hosts one [`GateSession`] per mounted region. The session decides what
//! is shown; this module feeds it identity changes, evaluator results, and
//! timer callbacks, and mirrors its [`GateView`] into a signal.
//!
//! The error-delay timer is a `gloo_timers` [`Timeout`], owned by the
//! session. Dropping it clears the browser timeout, so leaving the
//! pending-error state (or unmounting) cancels the delayed error display.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_icons::Icon;
use pagekit_core::{
    CheckTicket, Combinator, Condition, ConditionCheckResult, ConditionKind, GateSession,
    GateView, GatedRegion, IdentityStatus, PageLayout, TimerToken, run_round,
};
use wasm_bindgen_futures::spawn_local;

use crate::app::{AppContext, sign_in};
use crate::components::icons as ic;
use crate::components::layout::Composition;
use crate::config::eth_address;
use crate::core::HttpConditionEvaluator;

stylance::import_crate_style!(css, "src/components/gate/gate.module.css");

type SharedSession = Rc<RefCell<GateSession<Timeout>>>;

const DEFAULT_LOCKED_MESSAGE: &str = "This content is only available to eligible holders.";

// ============================================================================
// Session plumbing
// ============================================================================

/// Copy the session's view into the signal, skipping no-op writes so the
/// protected payload isn't rebuilt.
fn publish(session: &RefCell<GateSession<Timeout>>, shown: RwSignal<GateView>) {
    let next = session.borrow().view();
    if shown.try_with_untracked(|current| *current != next) == Some(true) {
        shown.try_set(next);
    }
}

/// Arm the error-delay timer for `token`.
fn schedule_reveal(
    session: StoredValue<SharedSession, LocalStorage>,
    shown: RwSignal<GateView>,
    token: TimerToken,
    delay: Duration,
) -> Timeout {
    let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
    Timeout::new(millis, move || {
        let Some(session) = session.try_get_value() else {
            return;
        };
        let fired = session.borrow_mut().timer_elapsed(token);
        if fired {
            publish(&session, shown);
        }
    })
}

/// Run one evaluation round in the background.
fn start_round(
    session: StoredValue<SharedSession, LocalStorage>,
    shown: RwSignal<GateView>,
    conditions: Vec<Condition>,
    ticket: CheckTicket,
    identity: IdentityStatus,
) {
    let Some(shared) = session.try_get_value() else {
        return;
    };
    spawn_local(async move {
        let evaluator = HttpConditionEvaluator::default();
        let applied = run_round(
            &*shared,
            ticket,
            &evaluator,
            &conditions,
            &identity,
            |token, delay| schedule_reveal(session, shown, token, delay),
        )
        .await;
        if applied {
            publish(&shared, shown);
        }
    });
}

// ============================================================================
// Component
// ============================================================================

/// A region whose payload is revealed only to eligible viewers.
///
/// Mounting starts a check when an account is present. Identity changes
/// restart or reset the check. Failures for authenticated viewers show a
/// spinner for the error delay, then an error with a retry button.
#[component]
pub fn GatedRegionView(
    region: GatedRegion,
    #[prop(into)] page_key: String,
    #[prop(optional_no_strip)] scope: Option<String>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let session: StoredValue<SharedSession, LocalStorage> =
        StoredValue::new_local(Rc::new(RefCell::new(GateSession::new())));
    let shown = RwSignal::new(GateView::Locked { result: None });
    let region = StoredValue::new(region);
    let page_key = StoredValue::new(page_key);
    let scope = StoredValue::new(scope);

    let start = move |ticket: CheckTicket, identity: IdentityStatus| {
        let conditions = region.with_value(|r| r.conditions.clone());
        start_round(session, shown, conditions, ticket, identity);
    };

    Effect::new(move |previous: Option<IdentityStatus>| {
        let identity = ctx.identity.get();
        let Some(shared) = session.try_get_value() else {
            return identity;
        };
        let ticket = match &previous {
            None => shared.borrow_mut().mount(&identity),
            Some(previous) if *previous != identity => {
                shared.borrow_mut().identity_changed(&identity)
            }
            Some(_) => None,
        };
        publish(&shared, shown);
        if let Some(ticket) = ticket {
            start(ticket, identity);
        }
        identity
    });

    on_cleanup(move || {
        if let Some(shared) = session.try_get_value() {
            shared.borrow_mut().unmount();
        }
    });

    let retry = move |_: leptos::ev::MouseEvent| {
        let Some(shared) = session.try_get_value() else {
            return;
        };
        let identity = ctx.identity.get_untracked();
        let ticket = shared.borrow_mut().retry(&identity);
        publish(&shared, shown);
        if let Some(ticket) = ticket {
            start(ticket, identity);
        }
    };

    move || match shown.get() {
        GateView::Protected => region.with_value(|r| {
            view! {
                <Composition
                    sections=r.sections.clone()
                    layout=r.layout
                    page_key=page_key.get_value()
                    scope=scope.get_value()
                />
            }
            .into_any()
        }),
        GateView::Checking => view! {
            <div class=css::checking aria-busy="true">
                <span class=css::spinner />
                <span>"Checking access..."</span>
            </div>
        }
        .into_any(),
        GateView::Locked { result } => view! {
            <LockedView
                region=region.get_value()
                result=result
                page_key=page_key.get_value()
                scope=locked_scope(scope.get_value())
            />
        }
        .into_any(),
        GateView::Error { message } => view! {
            <div class=css::error role="alert">
                <p class=css::errorTitle>"Could not verify access"</p>
                <p class=css::errorMessage>{message}</p>
                <button class=css::button on:click=retry>
                    <Icon icon=ic::REFRESH />
                    "Retry"
                </button>
            </div>
        }
        .into_any(),
    }
}

// ============================================================================
// Locked view
// ============================================================================

/// Scope for the locked fallback, distinct from the payload's.
fn locked_scope(scope: Option<String>) -> String {
    format!("{}/locked", scope.unwrap_or_default())
}

fn short_address(checksummed: &str) -> String {
    if checksummed.len() == eth_address::FULL_LEN {
        format!(
            "{}...{}",
            &checksummed[..eth_address::PREFIX_LEN],
            &checksummed[eth_address::SUFFIX_START..]
        )
    } else {
        checksummed.to_string()
    }
}

/// Human description of one condition.
fn describe_condition(condition: &Condition) -> String {
    let asset = condition
        .symbol
        .clone()
        .unwrap_or_else(|| short_address(&condition.address.to_checksum(None)));
    match (condition.kind, condition.token_id.as_deref()) {
        (ConditionKind::Collection, Some(token_id)) => format!("Own {} #{}", asset, token_id),
        (ConditionKind::Collection, None) => format!("Own {} from {}", condition.amount, asset),
        (ConditionKind::Coin, _) => format!("Hold at least {} {}", condition.amount, asset),
    }
}

#[component]
fn LockedView(
    region: GatedRegion,
    result: Option<ConditionCheckResult>,
    page_key: String,
    scope: String,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let locked = region.locked_layout;
    let message = locked
        .message
        .unwrap_or_else(|| DEFAULT_LOCKED_MESSAGE.to_string());
    let image = locked.image.map(|src| {
        view! {
            <img
                class=css::lockedImage
                src=src
                width=locked.image_width.map(|w| w.to_string())
                height=locked.image_height.map(|h| h.to_string())
                alt=""
            />
        }
    });

    let conditions = region
        .conditions
        .iter()
        .enumerate()
        .map(|(index, condition)| {
            let joiner = (index > 0).then(|| match condition.condition {
                Combinator::And => "and",
                Combinator::Or => "or",
            });
            let met = result.as_ref().and_then(|r| r.condition_met(index));
            let mark = match met {
                Some(true) => Some(view! { <span class=css::met><Icon icon=ic::CHECK /></span> }),
                Some(false) => {
                    Some(view! { <span class=css::unmet><Icon icon=ic::CROSS /></span> })
                }
                None => None,
            };
            view! {
                <li class=css::condition>
                    {joiner.map(|j| view! { <span class=css::joiner>{j}</span> })}
                    {mark}
                    <span>{describe_condition(condition)}</span>
                </li>
            }
        })
        .collect_view();

    let fallback = (!locked.sections.is_empty()).then(|| {
        view! {
            <Composition
                sections=locked.sections
                layout=PageLayout::stack()
                page_key=page_key
                scope=Some(scope)
            />
        }
    });

    view! {
        <div class=css::locked>
            <div class=css::lockIcon><Icon icon=ic::LOCK /></div>
            {image}
            <p class=css::lockedMessage>{message}</p>
            <ul class=css::conditions>{conditions}</ul>
            <Show when=move || ctx.identity.with(|i| !i.has_account())>
                <button class=css::button on:click=move |_| sign_in(ctx)>
                    <Icon icon=ic::WALLET />
                    "Connect wallet"
                </button>
            </Show>
            {fallback}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pagekit_core::Identity;

    use super::*;

    fn condition(kind: ConditionKind) -> Condition {
        Condition {
            kind,
            condition: Combinator::And,
            address: Identity::from_str("0x00000000219ab540356cbb839cbe05303d7705fa").unwrap(),
            chain_id: 1,
            amount: "1".to_string(),
            symbol: None,
            decimals: None,
            protocol: None,
            token_id: None,
        }
    }

    #[test]
    fn test_locked_scope_differs_from_payload() {
        assert_eq!(locked_scope(Some("section-abc".to_string())), "section-abc/locked");
        assert_eq!(locked_scope(None), "/locked");
        assert_ne!(locked_scope(Some("section-abc".to_string())), "section-abc");
    }

    #[test]
    fn test_short_address() {
        assert_eq!(
            short_address("0x00000000219ab540356cBB839Cbe05303d7705Fa"),
            "0x0000...05Fa"
        );
        assert_eq!(short_address("vitalik.eth"), "vitalik.eth");
    }

    #[test]
    fn test_describe_condition() {
        let mut coin = condition(ConditionKind::Coin);
        coin.symbol = Some("ETH".to_string());
        coin.amount = "0.5".to_string();
        assert_eq!(describe_condition(&coin), "Hold at least 0.5 ETH");

        let collection = condition(ConditionKind::Collection);
        assert_eq!(describe_condition(&collection), "Own 1 from 0x0000...05Fa");

        let mut token = condition(ConditionKind::Collection);
        token.symbol = Some("PASS".to_string());
        token.token_id = Some("42".to_string());
        assert_eq!(describe_condition(&token), "Own PASS #42");
    }
}

//! `plan` and `lint` command implementations.
//!
//! Both commands work on an already-loaded [`SiteConfig`] and return their
//! report as a value; `main` decides how to print it.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::fs;
use std::path::Path;

use pagekit_core::models::GatedRegion;
use pagekit_core::section_types::{self, WIDGET_ID_KEY};
use pagekit_core::{
    ActiveTabState, CompositionPlan, ConfigError, DeviceClass, Dispatcher, EvaluatorError,
    FixedEvaluator, GateSession, GateView, Identity, IdentityStatus, LayoutHints, LayoutKind,
    Page, Section, SiteConfig, TimerToken, compose, run_round,
};
use serde::Serialize;
use thiserror::Error;

use crate::cli::{GateOutcome, PlanArgs};
use crate::summary::{self, SummaryFn};

/// CLI failures. Anything inside a page degrades into the report instead.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Read and parse a site configuration file.
pub fn load_site(path: &Path) -> Result<SiteConfig, ConfigError> {
    let json = fs::read_to_string(path)?;
    SiteConfig::from_json(&json)
}

// ============================================================================
// plan
// ============================================================================

/// Result of the simulated gate, if the page is protected.
#[derive(Debug, Serialize)]
pub struct GateReport {
    /// View shown while the evaluation is in flight or inside the error delay
    pub before_delay: String,
    /// View shown once the error delay (if any) elapsed
    pub after_delay: String,
}

/// Composition of one page for one device.
#[derive(Debug, Serialize)]
pub struct PlanReport {
    pub page: String,
    pub device: DeviceClass,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gate: Option<GateReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked_message: Option<String>,
    pub plan: CompositionPlan,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_tab: Option<usize>,
    /// Per-section summaries in plan order; `None` renders nothing
    pub summaries: Vec<Option<String>>,
}

fn describe(view: &GateView) -> String {
    match view {
        GateView::Protected => "protected content".to_string(),
        GateView::Locked { result: Some(r) } => match &r.partial_results {
            Some(partial) => {
                let met = partial.iter().filter(|ok| **ok).count();
                format!("locked ({}/{} conditions met)", met, partial.len())
            }
            None => "locked".to_string(),
        },
        GateView::Locked { result: None } => "locked".to_string(),
        GateView::Checking => "checking".to_string(),
        GateView::Error { message } => format!("error: {} [retry]", message),
    }
}

fn evaluator_for(outcome: GateOutcome) -> FixedEvaluator {
    match outcome {
        GateOutcome::Satisfied => FixedEvaluator::satisfied(),
        GateOutcome::Unsatisfied => FixedEvaluator::unsatisfied(),
        GateOutcome::Error => FixedEvaluator::new(Err(EvaluatorError::Transport(
            "simulated evaluator failure".to_string(),
        ))),
    }
}

/// Drive one gate session against a canned evaluator, elapsing the error
/// delay instantly. Returns the report and the final view.
async fn simulate_gate(region: &GatedRegion, outcome: GateOutcome) -> (GateReport, GateView) {
    let identity = IdentityStatus::authenticated(Identity::ZERO);
    let session: RefCell<GateSession<()>> = RefCell::new(GateSession::new());
    let evaluator = evaluator_for(outcome);
    let scheduled: Cell<Option<TimerToken>> = Cell::new(None);

    let ticket = session.borrow_mut().mount(&identity);
    if let Some(ticket) = ticket {
        run_round(
            &session,
            ticket,
            &evaluator,
            &region.conditions,
            &identity,
            |token, delay| {
                log::debug!("error display scheduled in {:?}", delay);
                scheduled.set(Some(token));
            },
        )
        .await;
    }

    let before_delay = describe(&session.borrow().view());
    if let Some(token) = scheduled.get() {
        session.borrow_mut().timer_elapsed(token);
    }
    let view = session.borrow().view();
    let report = GateReport {
        before_delay,
        after_delay: describe(&view),
    };
    session.borrow_mut().unmount();
    (report, view)
}

fn summarize_plan(plan: &CompositionPlan, page_key: &str) -> Vec<Option<String>> {
    let registry = summary::registry();
    let dispatcher: Dispatcher<'_, SummaryFn> = Dispatcher::new(&registry);
    match plan {
        CompositionPlan::Empty => Vec::new(),
        CompositionPlan::Stack { entries } => entries
            .iter()
            .map(|entry| {
                let hints = LayoutHints::at(entry.position).with_page_key(page_key);
                dispatcher.render(&entry.section, &hints)
            })
            .collect(),
        CompositionPlan::Tabs(tabs) => tabs
            .panels
            .iter()
            .enumerate()
            .map(|(index, section)| {
                let hints = LayoutHints::in_tab(index).with_page_key(page_key);
                dispatcher.render(section, &hints)
            })
            .collect(),
    }
}

/// Compose a page, simulating its gate when protected.
pub async fn plan_page(
    site: &SiteConfig,
    key: &str,
    device: DeviceClass,
    select: Option<usize>,
    gate: GateOutcome,
) -> Result<PlanReport, ConfigError> {
    let page = site.page(key)?;
    let resolved_key = page_key(key);

    let (gate_report, locked_message, sections, layout) = match page.gated_region() {
        None => (None, None, page.sections.as_slice(), page.layout),
        Some(region) => {
            let (report, view) = simulate_gate(&region, gate).await;
            match view {
                GateView::Protected => (Some(report), None, page.sections.as_slice(), page.layout),
                _ => {
                    let locked = page.locked_layout.as_ref();
                    let sections = locked.map(|l| l.sections.as_slice()).unwrap_or_default();
                    let message = locked.and_then(|l| l.message.clone());
                    (Some(report), message, sections, Default::default())
                }
            }
        }
    };

    let plan = compose(sections, &layout, device);
    let selected_tab = match &plan {
        CompositionPlan::Tabs(tabs) => {
            let mut active = ActiveTabState::new(tabs.len());
            if let Some(index) = select {
                if !active.select(index) && index != active.selected() {
                    log::warn!("tab {} out of range, keeping tab 0", index);
                }
            }
            Some(active.selected())
        }
        _ => None,
    };

    let summaries = summarize_plan(&plan, resolved_key);
    Ok(PlanReport {
        page: resolved_key.to_string(),
        device,
        gate: gate_report,
        locked_message,
        plan,
        selected_tab,
        summaries,
    })
}

fn page_key(key: &str) -> &str {
    if key.is_empty() {
        pagekit_core::models::HOME_PAGE_KEY
    } else {
        key
    }
}

/// Run `plan` from parsed arguments, producing printable output.
pub async fn run_plan(args: &PlanArgs) -> Result<String, CliError> {
    let site = load_site(&args.config)?;
    let report = plan_page(&site, &args.page, args.device, args.select, args.gate).await?;
    if args.json {
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(report.to_string())
    }
}

impl PlanReport {
    fn summary(&self, index: usize) -> &str {
        self.summaries
            .get(index)
            .and_then(|s| s.as_deref())
            .unwrap_or("(renders nothing)")
    }
}

impl fmt::Display for PlanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "page: {} ({})", self.page, self.device)?;
        if let Some(gate) = &self.gate {
            writeln!(f, "gate: {} -> {}", gate.before_delay, gate.after_delay)?;
        }
        if let Some(message) = &self.locked_message {
            writeln!(f, "locked message: {}", message)?;
        }

        match &self.plan {
            CompositionPlan::Empty => writeln!(f, "layout: empty")?,
            CompositionPlan::Stack { entries } => {
                writeln!(f, "layout: stack")?;
                for (i, entry) in entries.iter().enumerate() {
                    let mount = match entry.mount {
                        pagekit_core::MountMode::Eager => "eager",
                        pagekit_core::MountMode::Deferred => "deferred",
                    };
                    writeln!(f, "  {:>2} {:<8} {}", entry.position, mount, self.summary(i))?;
                }
            }
            CompositionPlan::Tabs(tabs) => {
                let strip = match tabs.placement.strip_fraction() {
                    Some(fraction) => format!(", strip {:.0}%", fraction * 100.0),
                    None => String::new(),
                };
                writeln!(
                    f,
                    "layout: tabs, {:?} strip ({:?}{}), {:?}",
                    tabs.placement,
                    tabs.placement.orientation(),
                    strip,
                    tabs.panel_mode
                )?;
                let active = {
                    let mut state = ActiveTabState::new(tabs.len());
                    state.select(self.selected_tab.unwrap_or(0));
                    state
                };
                for (tab, panel) in tabs.tabs.iter().zip(tabs.panel_states(&active)) {
                    let marker = if panel.visible { '*' } else { ' ' };
                    let mounted = if panel.mounted { "mounted" } else { "-" };
                    let label = if tab.label.is_empty() {
                        "(untitled)"
                    } else {
                        tab.label.as_str()
                    };
                    writeln!(
                        f,
                        "  {}{:>2} {:<16} {:<8} {}",
                        marker,
                        tab.index,
                        label,
                        mounted,
                        self.summary(tab.index)
                    )?;
                }
            }
        }
        Ok(())
    }
}

// ============================================================================
// lint
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

/// One finding, located by page key and section path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LintIssue {
    pub severity: Severity,
    pub page: String,
    /// e.g. `sections[2]` or `sections[1].sections[0]`
    pub path: String,
    pub message: String,
}

impl fmt::Display for LintIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{}: {}: {}: {}", level, self.page, self.path, self.message)
    }
}

struct Linter<'a> {
    known: &'a dyn Fn(&str) -> bool,
    issues: Vec<LintIssue>,
}

impl Linter<'_> {
    fn push(&mut self, severity: Severity, page: &str, path: &str, message: impl Into<String>) {
        self.issues.push(LintIssue {
            severity,
            page: page.to_string(),
            path: path.to_string(),
            message: message.into(),
        });
    }

    fn page(&mut self, key: &str, page: &Page) {
        if page.is_protected && page.conditions.is_empty() {
            self.push(
                Severity::Error,
                key,
                "conditions",
                "protected page has no conditions and can never unlock",
            );
        }
        let tabs = page.layout.kind == LayoutKind::Tabs;
        self.sections(key, "sections", &page.sections, tabs);
        if let Some(locked) = &page.locked_layout {
            self.sections(key, "lockedLayout.sections", &locked.sections, false);
        }
    }

    fn sections(&mut self, key: &str, prefix: &str, sections: &[Section], tabs: bool) {
        for (i, section) in sections.iter().enumerate() {
            let path = format!("{}[{}]", prefix, i);
            self.section(key, &path, section, tabs);
        }
    }

    fn section(&mut self, key: &str, path: &str, section: &Section, tabs: bool) {
        let tag = section.section_type.as_str();
        if !(self.known)(tag) {
            self.push(
                Severity::Warning,
                key,
                path,
                format!("unknown section type '{}' will not render", tag),
            );
        }
        if tabs && section.tab_label().is_empty() {
            self.push(Severity::Warning, key, path, "tab has an empty label");
        }
        if section.hide_on_mobile && section.hide_on_desktop {
            self.push(Severity::Warning, key, path, "section is hidden on every device");
        }

        match tag {
            section_types::WIDGET if section.setting_id(WIDGET_ID_KEY).is_none() => {
                self.push(
                    Severity::Error,
                    key,
                    path,
                    format!("widget section is missing '{}'", WIDGET_ID_KEY),
                );
            }
            section_types::GATED => match GatedRegion::from_settings(&section.settings) {
                Ok(region) => {
                    if region.conditions.is_empty() {
                        self.push(Severity::Error, key, path, "gated section has no conditions");
                    }
                    let nested_tabs = region.layout.kind == LayoutKind::Tabs;
                    self.sections(key, &format!("{}.sections", path), &region.sections, nested_tabs);
                    self.sections(
                        key,
                        &format!("{}.lockedLayout.sections", path),
                        &region.locked_layout.sections,
                        false,
                    );
                }
                Err(e) => self.push(Severity::Error, key, path, e.to_string()),
            },
            _ => {}
        }
    }
}

/// Check every page of a site, in page-key order.
pub fn lint_site(site: &SiteConfig) -> Vec<LintIssue> {
    let registry = summary::registry();
    let known = |tag: &str| registry.contains(tag);
    let mut linter = Linter {
        known: &known,
        issues: Vec::new(),
    };
    for (key, page) in &site.pages {
        linter.page(key, page);
    }
    linter.issues
}

/// Run `lint` on a file. Returns the issues found.
pub fn run_lint(path: &Path) -> Result<Vec<LintIssue>, CliError> {
    let site = load_site(path)?;
    Ok(lint_site(&site))
}

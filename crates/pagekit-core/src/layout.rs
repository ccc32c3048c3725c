//! Layout composer.
//!
//! Turns `(sections, layout, device)` into a [`CompositionPlan`]. The plan
//! is a pure function of its inputs; the only mutable state a tabbed page
//! carries is its [`ActiveTabState`], owned by the host's page instance.
//!
//! ## Tab placement
//!
//! | Device  | Descriptor        | Strip               | Panels            |
//! |---------|-------------------|---------------------|-------------------|
//! | desktop | `top` (default)   | horizontal, above   | active only       |
//! | desktop | `side`            | vertical, 25% width | active only (75%) |
//! | mobile  | `top` (default)   | horizontal, above   | active only       |
//! | mobile  | `bottom`          | fixed bottom bar    | all mounted, CSS-hidden |

use serde::Serialize;

use crate::config::SIDE_TAB_STRIP_FRACTION;
use crate::lazy::MountMode;
use crate::models::{
    DesktopTabPosition, DeviceClass, LayoutKind, MobileTabPosition, PageLayout, Section,
};
use crate::visibility;

// ============================================================================
// Plan Types
// ============================================================================

/// One entry of a stacked page.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StackEntry {
    /// Position in the filtered list
    pub position: usize,
    pub section: Section,
    pub mount: MountMode,
}

/// One tab of a tabbed page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TabDescriptor {
    pub index: usize,
    pub label: String,
}

/// Where the tab strip goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TabPlacement {
    Top,
    Side,
    Bottom,
}

/// Tab strip axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl TabPlacement {
    /// Resolve the strip placement for a device from the descriptor.
    pub fn resolve(layout: &PageLayout, device: DeviceClass) -> Self {
        match device {
            DeviceClass::Desktop => match layout.desktop.position {
                DesktopTabPosition::Top => Self::Top,
                DesktopTabPosition::Side => Self::Side,
            },
            DeviceClass::Mobile => match layout.mobile.position {
                MobileTabPosition::Top => Self::Top,
                MobileTabPosition::Bottom => Self::Bottom,
            },
        }
    }

    pub fn orientation(self) -> Orientation {
        match self {
            Self::Side => Orientation::Vertical,
            Self::Top | Self::Bottom => Orientation::Horizontal,
        }
    }

    /// Fraction of horizontal space reserved for the strip, if any.
    pub fn strip_fraction(self) -> Option<f32> {
        match self {
            Self::Side => Some(SIDE_TAB_STRIP_FRACTION),
            Self::Top | Self::Bottom => None,
        }
    }
}

/// Whether inactive panels stay mounted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelMode {
    /// Every panel is mounted; inactive ones are hidden by style. Keeps
    /// in-panel state alive across tab switches.
    KeepAllMounted,
    /// Only the selected panel is mounted.
    ActiveOnly,
}

/// Mount/visibility of one panel for a given selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelState {
    pub index: usize,
    pub mounted: bool,
    pub visible: bool,
}

/// Tab chrome plus one panel per filtered section.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TabsPlan {
    pub tabs: Vec<TabDescriptor>,
    pub panels: Vec<Section>,
    pub placement: TabPlacement,
    pub panel_mode: PanelMode,
}

impl TabsPlan {
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Panel states for the current selection.
    pub fn panel_states(&self, active: &ActiveTabState) -> Vec<PanelState> {
        let selected = active.selected();
        (0..self.panels.len())
            .map(|index| {
                let visible = index == selected;
                let mounted = match self.panel_mode {
                    PanelMode::KeepAllMounted => true,
                    PanelMode::ActiveOnly => visible,
                };
                PanelState {
                    index,
                    mounted,
                    visible,
                }
            })
            .collect()
    }
}

/// Result of composing a page for one device.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CompositionPlan {
    /// Nothing visible; no chrome either.
    Empty,
    Stack { entries: Vec<StackEntry> },
    Tabs(TabsPlan),
}

impl CompositionPlan {
    /// Number of sections the plan will render.
    pub fn section_count(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Stack { entries } => entries.len(),
            Self::Tabs(tabs) => tabs.panels.len(),
        }
    }
}

// ============================================================================
// Composition
// ============================================================================

/// Compose `sections` for `device` according to `layout`.
///
/// The visibility filter runs exactly once here; positions, tab indices and
/// tab count all come from its output.
pub fn compose(sections: &[Section], layout: &PageLayout, device: DeviceClass) -> CompositionPlan {
    let visible = visibility::filter(sections, device);
    if visible.is_empty() {
        return CompositionPlan::Empty;
    }

    match layout.kind {
        LayoutKind::Stack => CompositionPlan::Stack {
            entries: visible
                .into_iter()
                .enumerate()
                .map(|(position, section)| StackEntry {
                    position,
                    section: section.clone(),
                    mount: MountMode::for_position(position),
                })
                .collect(),
        },
        LayoutKind::Tabs => {
            let placement = TabPlacement::resolve(layout, device);
            let panel_mode = if placement == TabPlacement::Bottom {
                PanelMode::KeepAllMounted
            } else {
                PanelMode::ActiveOnly
            };
            let tabs = visible
                .iter()
                .enumerate()
                .map(|(index, section)| TabDescriptor {
                    index,
                    label: section.tab_label().to_string(),
                })
                .collect();
            CompositionPlan::Tabs(TabsPlan {
                tabs,
                panels: visible.into_iter().cloned().collect(),
                placement,
                panel_mode,
            })
        }
    }
}

// ============================================================================
// ActiveTabState
// ============================================================================

/// Currently selected tab of one tabbed page instance.
///
/// Starts at the first visible section and changes only through
/// [`select`](Self::select). Never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActiveTabState {
    selected: usize,
    len: usize,
}

impl ActiveTabState {
    pub fn new(len: usize) -> Self {
        Self { selected: 0, len }
    }

    #[inline]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Number of tabs the selection ranges over.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Select a tab. Out-of-range indices are ignored. Returns whether the
    /// selection changed.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len || index == self.selected {
            return false;
        }
        self.selected = index;
        true
    }

    /// Adopt a new tab count (e.g. after the device class changed), keeping
    /// the selection in range.
    pub fn clamp_to(&mut self, len: usize) {
        self.len = len;
        if self.selected >= len {
            self.selected = 0;
        }
    }
}

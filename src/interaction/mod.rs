use serde::{Deserialize, Serialize};

use crate::core::house::HouseNumber;
use crate::core::rashi::Rashi;
use crate::core::types::Viewport;

/// Outside presses landing within this window of the menu opening are
/// swallowed, so the press that opened the menu cannot also dismiss it.
pub const CONTEXT_MENU_DEBOUNCE_MS: u64 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightMode {
    Friendship,
    Aspects,
}

/// Active emphasis selection. Planet highlights drive relation/aspect
/// tinting from that planet outward; a house focus shows which planets
/// sight the house (the reverse query).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    Planet { name: String, mode: HighlightMode },
    HouseAspects { house: HouseNumber },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextMenuTarget {
    Planet { name: String },
    SignLabel { house: HouseNumber },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextMenuState {
    pub target: ContextMenuTarget,
    /// Anchor already clamped into the viewport.
    pub x: f64,
    pub y: f64,
    pub opened_at_ms: u64,
}

/// Menu footprint used for anchor clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MenuMetrics {
    pub width_px: f64,
    pub height_px: f64,
}

impl Default for MenuMetrics {
    fn default() -> Self {
        Self {
            width_px: 168.0,
            height_px: 220.0,
        }
    }
}

/// Actions offered by a sign-label context menu. One action fires per
/// menu invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseAction {
    MakeAscendant,
    ShowAspects,
    Analysis,
    Significations,
    Strength,
}

/// Detail modals backed by on-demand host fetches. The engine tracks
/// which modal is open; payloads stay host-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailKind {
    Analysis,
    Significations,
    Strength,
    Dignities,
    CharaKarakas,
    Shadbala,
    YogiBadhaka,
}

/// What a state transition invalidated downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateUpdate {
    Unchanged,
    Redraw,
    Relayout,
}

impl StateUpdate {
    /// Combines two transitions; the stronger invalidation wins.
    #[must_use]
    pub fn merge(self, other: StateUpdate) -> StateUpdate {
        match (self, other) {
            (StateUpdate::Relayout, _) | (_, StateUpdate::Relayout) => StateUpdate::Relayout,
            (StateUpdate::Redraw, _) | (_, StateUpdate::Redraw) => StateUpdate::Redraw,
            (StateUpdate::Unchanged, StateUpdate::Unchanged) => StateUpdate::Unchanged,
        }
    }
}

/// Transient view state over an installed chart: two orthogonal slots
/// (highlight, ascendant override) plus the open menu/modal. The chart
/// itself is never mutated from here; layout is recomputed as a pure
/// function of (chart, this state).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartViewState {
    highlight: Option<Highlight>,
    ascendant_override: Option<Rashi>,
    context_menu: Option<ContextMenuState>,
    modal: Option<DetailKind>,
    menu_metrics: MenuMetrics,
}

impl ChartViewState {
    #[must_use]
    pub fn highlight(&self) -> Option<&Highlight> {
        self.highlight.as_ref()
    }

    #[must_use]
    pub fn ascendant_override(&self) -> Option<Rashi> {
        self.ascendant_override
    }

    #[must_use]
    pub fn context_menu(&self) -> Option<&ContextMenuState> {
        self.context_menu.as_ref()
    }

    #[must_use]
    pub fn modal(&self) -> Option<DetailKind> {
        self.modal
    }

    #[must_use]
    pub fn menu_metrics(&self) -> MenuMetrics {
        self.menu_metrics
    }

    pub fn set_menu_metrics(&mut self, metrics: MenuMetrics) {
        self.menu_metrics = metrics;
    }

    /// Hosts subscribe to document-level presses only while this is true,
    /// and unsubscribe as soon as it turns false.
    #[must_use]
    pub fn wants_outside_press_events(&self) -> bool {
        self.context_menu.is_some()
    }

    pub fn set_highlight(&mut self, highlight: Highlight) -> StateUpdate {
        if self.highlight.as_ref() == Some(&highlight) {
            return StateUpdate::Unchanged;
        }
        self.highlight = Some(highlight);
        StateUpdate::Redraw
    }

    pub fn clear_highlight(&mut self) -> StateUpdate {
        if self.highlight.take().is_some() {
            StateUpdate::Redraw
        } else {
            StateUpdate::Unchanged
        }
    }

    pub fn set_ascendant_override(&mut self, sign: Rashi) -> StateUpdate {
        if self.ascendant_override == Some(sign) {
            return StateUpdate::Unchanged;
        }
        self.ascendant_override = Some(sign);
        StateUpdate::Relayout
    }

    pub fn reset_ascendant_override(&mut self) -> StateUpdate {
        if self.ascendant_override.take().is_some() {
            StateUpdate::Relayout
        } else {
            StateUpdate::Unchanged
        }
    }

    /// New chart data resets emphasis: the highlight clears and any open
    /// menu closes, since both referred to the replaced chart. The
    /// ascendant override survives; it is a view preference, not data.
    pub fn on_chart_data_arrived(&mut self) -> StateUpdate {
        let had_emphasis = self.highlight.take().is_some() | self.context_menu.take().is_some();
        if had_emphasis {
            StateUpdate::Redraw
        } else {
            StateUpdate::Unchanged
        }
    }

    pub fn open_context_menu(
        &mut self,
        target: ContextMenuTarget,
        x: f64,
        y: f64,
        now_ms: u64,
        viewport: Viewport,
    ) -> StateUpdate {
        let (x, y) = clamp_menu_anchor(x, y, self.menu_metrics, viewport);
        self.context_menu = Some(ContextMenuState {
            target,
            x,
            y,
            opened_at_ms: now_ms,
        });
        StateUpdate::Redraw
    }

    pub fn close_context_menu(&mut self) -> StateUpdate {
        if self.context_menu.take().is_some() {
            StateUpdate::Redraw
        } else {
            StateUpdate::Unchanged
        }
    }

    /// A press outside the menu closes it, unless it lands inside the
    /// debounce window of the opening press.
    pub fn outside_press(&mut self, at_ms: u64) -> StateUpdate {
        let opened_at = match &self.context_menu {
            Some(menu) => menu.opened_at_ms,
            None => return StateUpdate::Unchanged,
        };
        if at_ms.saturating_sub(opened_at) < CONTEXT_MENU_DEBOUNCE_MS {
            return StateUpdate::Unchanged;
        }
        self.close_context_menu()
    }

    pub fn open_modal(&mut self, kind: DetailKind) -> StateUpdate {
        if self.modal == Some(kind) {
            return StateUpdate::Unchanged;
        }
        self.modal = Some(kind);
        StateUpdate::Redraw
    }

    pub fn close_modal(&mut self) -> StateUpdate {
        if self.modal.take().is_some() {
            StateUpdate::Redraw
        } else {
            StateUpdate::Unchanged
        }
    }
}

/// Keeps the menu's footprint inside the viewport. Menus wider or taller
/// than the viewport pin to the origin edge.
fn clamp_menu_anchor(x: f64, y: f64, metrics: MenuMetrics, viewport: Viewport) -> (f64, f64) {
    let max_x = (f64::from(viewport.width) - metrics.width_px).max(0.0);
    let max_y = (f64::from(viewport.height) - metrics.height_px).max(0.0);
    let safe_x = if x.is_finite() { x } else { 0.0 };
    let safe_y = if y.is_finite() { y } else { 0.0 };
    (safe_x.clamp(0.0, max_x), safe_y.clamp(0.0, max_y))
}

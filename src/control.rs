//! The segmented control: a horizontal row of mutually exclusive tabs
//! sharing one animated highlight.
//!
//! The control owns its interaction state (active, previous, pressed),
//! the per-instance geometry store, and the highlight animator. The
//! rendering layer measures tab rects each draw pass and feeds them back
//! through [`SegmentedControl::refresh_geometry`]; transitions always
//! start from boxes measured after layout, never from stale geometry.

use ratatui::layout::Rect;
use std::collections::HashSet;
use std::fmt;
use std::time::Instant;
use thiserror::Error;

use crate::animator::{AnimState, HighlightAnimator};
use crate::geometry::{GeometryBox, GeometryStore};

/// Opaque tab identity, distinct from the display label. Labels are
/// presentation only; everything keyed (geometry, selection) keys on ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TabId(String);

impl TabId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TabId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Tab {
    pub id: TabId,
    pub label: String,
}

impl Tab {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: TabId::new(id),
            label: label.into(),
        }
    }

    /// Convenience for callers that only have labels: the id is derived
    /// from the label.
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            id: TabId::new(label.clone()),
            label,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControlError {
    #[error("segmented control requires at least one tab")]
    EmptyTabs,
    #[error("duplicate tab id: {0}")]
    DuplicateTab(String),
}

type ChangeCallback = Box<dyn FnMut(&str)>;

pub struct SegmentedControl {
    tabs: Vec<Tab>,
    active: TabId,
    previous: Option<TabId>,
    pressed: Option<TabId>,
    store: GeometryStore,
    animator: HighlightAnimator,
    /// False until the first geometry pass; the initial measurement
    /// never animates.
    measured_once: bool,
    /// Set by `click`, consumed by the next geometry pass, which starts
    /// the transition from freshly measured boxes.
    selection_dirty: bool,
    on_change: Option<ChangeCallback>,
}

impl std::fmt::Debug for SegmentedControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SegmentedControl")
            .field("tabs", &self.tabs)
            .field("active", &self.active)
            .field("previous", &self.previous)
            .field("pressed", &self.pressed)
            .field("store", &self.store)
            .field("animator", &self.animator)
            .field("measured_once", &self.measured_once)
            .field("selection_dirty", &self.selection_dirty)
            .field("on_change", &self.on_change.as_ref().map(|_| "<callback>"))
            .finish()
    }
}

impl SegmentedControl {
    /// Creates a control over `tabs`, active on `default` when it names a
    /// present tab, otherwise on the first tab.
    pub fn new(tabs: Vec<Tab>, default: Option<&TabId>) -> Result<Self, ControlError> {
        Self::validate(&tabs)?;
        let active = default
            .filter(|id| tabs.iter().any(|t| &t.id == *id))
            .cloned()
            .unwrap_or_else(|| tabs[0].id.clone());
        Ok(Self {
            tabs,
            active,
            previous: None,
            pressed: None,
            store: GeometryStore::new(),
            animator: HighlightAnimator::new(),
            measured_once: false,
            selection_dirty: false,
            on_change: None,
        })
    }

    /// Label-only construction; ids are derived from labels, so the
    /// uniqueness check doubles as a duplicate-label rejection.
    pub fn from_labels(labels: &[&str], default: Option<&str>) -> Result<Self, ControlError> {
        let tabs = labels.iter().map(|l| Tab::from_label(*l)).collect();
        let default_id = default.map(TabId::from);
        Self::new(tabs, default_id.as_ref())
    }

    /// Registers the change callback, invoked with the new label exactly
    /// once per successful switch.
    pub fn on_change(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    fn validate(tabs: &[Tab]) -> Result<(), ControlError> {
        if tabs.is_empty() {
            return Err(ControlError::EmptyTabs);
        }
        let mut seen = HashSet::new();
        for tab in tabs {
            if !seen.insert(&tab.id) {
                return Err(ControlError::DuplicateTab(tab.id.as_str().to_string()));
            }
        }
        Ok(())
    }

    /// Activates tab `id`. Clicking the active tab (or an unknown id) is
    /// a no-op: no callback, no transition. Returns whether a switch
    /// happened.
    pub fn click(&mut self, id: &TabId) -> bool {
        let Some(tab) = self.tabs.iter().find(|t| &t.id == id) else {
            return false;
        };
        if tab.id == self.active {
            return false;
        }
        let label = tab.label.clone();
        self.previous = Some(std::mem::replace(&mut self.active, id.clone()));
        self.selection_dirty = true;
        if let Some(callback) = self.on_change.as_mut() {
            callback(&label);
        }
        true
    }

    /// Pointer down on a tab: transient pressed affordance only.
    pub fn press(&mut self, id: &TabId) {
        if self.tabs.iter().any(|t| &t.id == id) {
            self.pressed = Some(id.clone());
        }
    }

    /// Pointer up clears pressed unconditionally.
    pub fn release(&mut self) {
        self.pressed = None;
    }

    /// Pointer leaving a tab clears pressed unconditionally, even when
    /// the pointer was pressed on a different tab.
    pub fn pointer_left(&mut self) {
        self.pressed = None;
    }

    /// Replaces the tab set. When the active id survives, selection is
    /// kept; otherwise the control falls back to the first tab with no
    /// transition, treating the new set like a fresh mount for the
    /// highlight.
    pub fn set_tabs(&mut self, tabs: Vec<Tab>) -> Result<(), ControlError> {
        Self::validate(&tabs)?;
        self.tabs = tabs;
        let ids: HashSet<TabId> = self.tabs.iter().map(|t| t.id.clone()).collect();
        self.store.retain(|id| ids.contains(id));

        if !ids.contains(&self.active) {
            self.active = self.tabs[0].id.clone();
            self.previous = None;
            self.selection_dirty = false;
            self.measured_once = false;
            self.animator.reset();
            self.store.set_prev_highlight(None);
        }
        if let Some(prev) = &self.previous {
            if !ids.contains(prev) {
                self.previous = None;
            }
        }
        self.pressed = None;
        Ok(())
    }

    /// Records the measured tab rects for this draw pass and, when a
    /// switch is pending, starts the highlight transition.
    ///
    /// `measured` comes from the rendering layer after layout, so the
    /// "measure after layout, animate after measure" ordering holds by
    /// construction. Tabs absent from `measured` (unmeasurable this
    /// cycle) are skipped.
    pub fn refresh_geometry(
        &mut self,
        container: Rect,
        measured: &[(TabId, Rect)],
        now: Instant,
    ) {
        for (id, rect) in measured {
            if let Some(geometry) = GeometryBox::measure(container, *rect) {
                self.store.record(id.clone(), geometry);
            }
        }

        let current = self.store.get(&self.active);
        self.store.set_highlight(current);

        if self.selection_dirty {
            if self.measured_once {
                let previous = self.previous.as_ref().and_then(|p| self.store.get(p));
                if let (Some(from), Some(to)) = (previous, current) {
                    if from != to {
                        self.store.set_prev_highlight(Some(from));
                        self.animator.begin(from, to, now);
                    }
                }
            }
            self.selection_dirty = false;
        }
        self.measured_once = true;
    }

    /// Advances the animator's settle timer.
    pub fn tick(&mut self, now: Instant) {
        self.animator.tick(now);
    }

    /// The highlight box to draw at `now`: the animated sample while
    /// transitioning, the active tab's measured box once settled. `None`
    /// before the active tab has been measured.
    pub fn highlight_box(&self, now: Instant) -> Option<GeometryBox> {
        match self.animator.state() {
            AnimState::Transitioning => Some(self.animator.sample(now)),
            AnimState::Idle => self.store.highlight(),
        }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active(&self) -> &Tab {
        // The active id always names a present tab; construction and
        // set_tabs maintain that invariant.
        self.tabs
            .iter()
            .find(|t| t.id == self.active)
            .unwrap_or(&self.tabs[0])
    }

    pub fn active_id(&self) -> &TabId {
        &self.active
    }

    pub fn previous_id(&self) -> Option<&TabId> {
        self.previous.as_ref()
    }

    pub fn pressed_id(&self) -> Option<&TabId> {
        self.pressed.as_ref()
    }

    pub fn is_active(&self, id: &TabId) -> bool {
        &self.active == id
    }

    pub fn is_pressed(&self, id: &TabId) -> bool {
        self.pressed.as_ref() == Some(id)
    }

    pub fn is_transitioning(&self) -> bool {
        self.animator.is_transitioning()
    }

    pub fn store(&self) -> &GeometryStore {
        &self.store
    }

    pub fn animator(&self) -> &HighlightAnimator {
        &self.animator
    }
}

//! Geometry tracking for the segmented control.
//!
//! The rendering layer lays tabs out and hands their rects to the control
//! each draw pass; this module turns those rects into [`GeometryBox`]es
//! relative to the container and keeps them in a per-instance
//! [`GeometryStore`] with two named slots, `highlight` (the active tab's
//! box) and `prev_highlight` (the box the highlight is animating away
//! from). The store has a single writer and is read synchronously by the
//! animator and renderer after each refresh.

use ratatui::layout::Rect;
use std::collections::HashMap;

use crate::control::TabId;

/// Width and left offset of a tab relative to its container's left edge,
/// in layout cells. Kept as `f64` so transitions can interpolate sub-cell
/// positions; the renderer rounds at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeometryBox {
    pub width: f64,
    pub offset: f64,
}

impl GeometryBox {
    pub fn new(width: f64, offset: f64) -> Self {
        Self { width, offset }
    }

    /// Measures `element` in the coordinate space of `container`.
    ///
    /// Returns `None` when the element is not measurable this cycle
    /// (zero width, or clipped outside the container). Callers skip such
    /// entries rather than treating them as errors.
    pub fn measure(container: Rect, element: Rect) -> Option<Self> {
        if container.width == 0 || element.width == 0 {
            return None;
        }
        if element.x < container.x || element.right() > container.right() {
            return None;
        }
        Some(Self {
            width: f64::from(element.width),
            offset: f64::from(element.x - container.x),
        })
    }

    /// Interpolates between two boxes at eased progress `t`.
    pub fn between(from: Self, to: Self, t: f64) -> Self {
        Self {
            width: from.width + (to.width - from.width) * t,
            offset: from.offset + (to.offset - from.offset) * t,
        }
    }
}

/// Per-instance coordinate store: one box per tab plus the two highlight
/// slots. This replaces the CSS-custom-property channel of the reference
/// behavior with explicit owned state.
#[derive(Debug, Default)]
pub struct GeometryStore {
    boxes: HashMap<TabId, GeometryBox>,
    highlight: Option<GeometryBox>,
    prev_highlight: Option<GeometryBox>,
}

impl GeometryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, id: TabId, geometry: GeometryBox) {
        self.boxes.insert(id, geometry);
    }

    pub fn get(&self, id: &TabId) -> Option<GeometryBox> {
        self.boxes.get(id).copied()
    }

    pub fn set_highlight(&mut self, geometry: Option<GeometryBox>) {
        self.highlight = geometry;
    }

    pub fn highlight(&self) -> Option<GeometryBox> {
        self.highlight
    }

    pub fn set_prev_highlight(&mut self, geometry: Option<GeometryBox>) {
        self.prev_highlight = geometry;
    }

    pub fn prev_highlight(&self) -> Option<GeometryBox> {
        self.prev_highlight
    }

    /// Drops boxes for tabs no longer in the tab set.
    pub fn retain(&mut self, keep: impl Fn(&TabId) -> bool) {
        self.boxes.retain(|id, _| keep(id));
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

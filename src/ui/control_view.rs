//! Rendering for the segmented control.
//!
//! `tab_areas` is the layout pass: it produces the rect of every tab
//! inside the container, and the same rects are what the control
//! measures and the app hit-tests, so layout, geometry, and input can
//! never disagree. `render_control` draws the text row and then patches
//! the highlight bar's background over it at the animator's sampled
//! position.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use std::time::Instant;

use crate::control::{SegmentedControl, Tab, TabId};

/// Horizontal padding inside each tab, in cells.
const TAB_PADDING: u16 = 1;
/// One-cell gap between adjacent tabs, holding the divider glyph.
const TAB_GAP: u16 = 1;

fn shows_chevron(tab: &Tab, active: bool) -> bool {
    // The catch-all first tab never gets the chevron affordance.
    active && tab.label != "All"
}

fn tab_width(tab: &Tab, active: bool) -> u16 {
    let label = tab.label.chars().count() as u16;
    let chevron = if shows_chevron(tab, active) { 2 } else { 0 };
    label + 2 * TAB_PADDING + chevron
}

/// Total width of the control for the current selection state.
pub fn control_width(control: &SegmentedControl) -> u16 {
    let tabs: u16 = control
        .tabs()
        .iter()
        .map(|t| tab_width(t, control.is_active(&t.id)))
        .sum();
    let gaps = (control.tabs().len().saturating_sub(1)) as u16 * TAB_GAP;
    tabs + gaps
}

/// Lays the tabs out left to right inside `area` and returns each tab's
/// rect. Tabs that don't fit are left out; the tracker treats them as
/// unmeasurable this cycle.
pub fn tab_areas(area: Rect, control: &SegmentedControl) -> Vec<(TabId, Rect)> {
    let mut areas = Vec::with_capacity(control.tabs().len());
    let mut x = area.x;
    for tab in control.tabs() {
        let width = tab_width(tab, control.is_active(&tab.id));
        if x + width > area.right() {
            break;
        }
        areas.push((tab.id.clone(), Rect::new(x, area.y, width, 1)));
        x += width + TAB_GAP;
    }
    areas
}

/// Draws the control: tab labels, dividers between inactive neighbors,
/// and the highlight bar at its current (possibly mid-transition)
/// position. Call after `refresh_geometry` for this frame.
pub fn render_control(
    frame: &mut Frame,
    area: Rect,
    control: &SegmentedControl,
    areas: &[(TabId, Rect)],
    now: Instant,
) {
    for (i, (id, rect)) in areas.iter().enumerate() {
        let Some(tab) = control.tabs().iter().find(|t| &t.id == id) else {
            continue;
        };
        let active = control.is_active(id);
        let pressed = control.is_pressed(id);

        let mut style = if active {
            Style::default().fg(Color::Black).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        if pressed {
            style = style.dim();
        }

        let text = if shows_chevron(tab, active) {
            format!(" {} ▾ ", tab.label)
        } else {
            format!(" {} ", tab.label)
        };
        frame.render_widget(Paragraph::new(text).style(style), *rect);

        // Divider in the gap, suppressed next to the active tab.
        if i > 0 {
            let prev_active = control.is_active(&areas[i - 1].0);
            if !active && !prev_active {
                let gap = Rect::new(rect.x.saturating_sub(TAB_GAP), rect.y, 1, 1);
                frame.render_widget(Paragraph::new("│").style(Style::default().dim()), gap);
            }
        }
    }

    if let Some(highlight) = control.highlight_box(now) {
        let x = area.x.saturating_add(highlight.offset.round() as u16);
        let width = (highlight.width.round() as u16).min(area.right().saturating_sub(x));
        if width > 0 {
            let bar = Rect::new(x, area.y, width, 1);
            frame
                .buffer_mut()
                .set_style(bar, Style::default().bg(Color::White));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABELS: [&str; 5] = ["All", "Draft", "Review", "Signing", "Signed"];

    fn control() -> SegmentedControl {
        SegmentedControl::from_labels(&LABELS, Some("All")).unwrap()
    }

    #[test]
    fn test_tab_areas_are_ordered_and_disjoint() {
        let control = control();
        let areas = tab_areas(Rect::new(0, 0, 80, 1), &control);
        assert_eq!(areas.len(), 5);

        for pair in areas.windows(2) {
            assert!(pair[0].1.right() < pair[1].1.x);
        }
    }

    #[test]
    fn test_active_non_all_tab_is_wider_by_chevron() {
        let mut control = control();
        let before = tab_areas(Rect::new(0, 0, 80, 1), &control);
        let draft_before = before[1].1.width;

        control.click(&TabId::from("Draft"));
        let after = tab_areas(Rect::new(0, 0, 80, 1), &control);
        assert_eq!(after[1].1.width, draft_before + 2);

        // "All" is exempt from the chevron even when active.
        assert_eq!(after[0].1.width, before[0].1.width);
    }

    #[test]
    fn test_tabs_past_the_container_are_dropped() {
        let control = control();
        let areas = tab_areas(Rect::new(0, 0, 20, 1), &control);
        assert!(areas.len() < 5);
        for (_, rect) in &areas {
            assert!(rect.right() <= 20);
        }
    }

    #[test]
    fn test_control_width_matches_layout() {
        let control = control();
        let areas = tab_areas(Rect::new(0, 0, 200, 1), &control);
        let last = areas.last().unwrap().1;
        assert_eq!(control_width(&control), last.right());
    }
}

//! The demo page: one segmented control, an echo of the active tab, and
//! the event plumbing between the terminal and the widget.
//!
//! The app holds the active label as its own state, updated through the
//! control's change callback, exactly as an embedding caller would.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use crate::config::DemoConfig;
use crate::control::{ControlError, SegmentedControl, TabId};
use crate::ui;

pub enum Action {
    Continue,
    Quit,
}

pub struct App {
    pub control: SegmentedControl,
    /// Shared with the control's change callback; the demo's only state.
    current: Rc<RefCell<String>>,
    /// Tab rects from the last draw pass, used for mouse hit testing.
    tab_areas: Vec<(TabId, Rect)>,
    container: Rect,
}

impl App {
    pub fn new(config: &DemoConfig) -> Result<Self, ControlError> {
        let labels: Vec<&str> = config.tabs.iter().map(String::as_str).collect();
        let current = Rc::new(RefCell::new(String::new()));
        let sink = Rc::clone(&current);

        let control = SegmentedControl::from_labels(&labels, config.default_tab.as_deref())?
            .on_change(move |label| *sink.borrow_mut() = label.to_string());
        *current.borrow_mut() = control.active().label.clone();

        Ok(Self {
            control,
            current,
            tab_areas: Vec::new(),
            container: Rect::default(),
        })
    }

    pub fn current_label(&self) -> String {
        self.current.borrow().clone()
    }

    pub fn tab_areas(&self) -> &[(TabId, Rect)] {
        &self.tab_areas
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            _ => Action::Continue,
        }
    }

    pub fn handle_mouse(&mut self, event: MouseEvent) -> Action {
        let position = Position::new(event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(id) = self.tab_at(position) {
                    self.control.press(&id);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let target = self.tab_at(position);
                let pressed = self.control.pressed_id().cloned();
                self.control.release();
                // A click is a press and release on the same tab.
                if let (Some(id), Some(pressed)) = (target, pressed) {
                    if id == pressed {
                        self.control.click(&id);
                    }
                }
            }
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(pressed) = self.control.pressed_id().cloned() {
                    if self.tab_at(position) != Some(pressed) {
                        self.control.pointer_left();
                    }
                }
            }
            _ => {}
        }
        Action::Continue
    }

    fn tab_at(&self, position: Position) -> Option<TabId> {
        self.tab_areas
            .iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|(id, _)| id.clone())
    }

    /// Draws the frame. Layout and measurement happen before the
    /// highlight is sampled, so the animator never reads stale geometry.
    pub fn render(&mut self, frame: &mut Frame, now: Instant) {
        let [header, _, control_row, _, echo_row, _, status] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let width = ui::control_view::control_width(&self.control).min(control_row.width);
        let x = control_row.x + (control_row.width.saturating_sub(width)) / 2;
        self.container = Rect::new(x, control_row.y, width, 1);

        self.tab_areas = ui::control_view::tab_areas(self.container, &self.control);
        self.control
            .refresh_geometry(self.container, &self.tab_areas, now);
        self.control.tick(now);

        ui::header_bar::render_header_bar(frame, header);
        ui::control_view::render_control(frame, self.container, &self.control, &self.tab_areas, now);
        ui::echo::render_echo(frame, echo_row, &self.current_label());
        ui::status_bar::render_status_bar(frame, status);
    }
}

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Read-only echo of the active tab, centered under the control.
pub fn render_echo(frame: &mut Frame, area: Rect, label: &str) {
    let line = Line::from(vec![
        Span::styled("Current tab: ", Style::default().dim()),
        Span::styled(label.to_string(), Style::default().bold()),
    ]);
    frame.render_widget(Paragraph::new(line).centered(), area);
}

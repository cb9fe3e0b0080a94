use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render_header_bar(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled("segtab", Style::default().fg(Color::Cyan).bold()),
        Span::styled("  ", Style::default()),
        Span::styled(
            concat!("v", env!("CARGO_PKG_VERSION")),
            Style::default().dim(),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

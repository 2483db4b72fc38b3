use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, AppMode};

/// Draw the bottom F-key bar (htop styling: key in black-on-cyan,
/// description in white-on-dark). The toggle entry shows the live
/// Disconnect/Reconnect label.
pub fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    // Full-width dark background first
    let bg_fill = " ".repeat(area.width as usize);
    f.render_widget(
        Paragraph::new(bg_fill).style(Style::default().bg(Color::Indexed(234))),
        area,
    );

    let toggle_label = app.toggle.label();

    let fkeys: Vec<(&str, &str)> = match app.mode {
        AppMode::Kill => vec![
            ("Enter", "Terminate"),
            ("Esc", "Cancel"),
        ],
        _ => vec![
            ("F1", "Help  "),
            ("Z", "Pause "),
            ("F8", toggle_label),
            ("F9", "Kill  "),
            ("F10", "Quit "),
        ],
    };

    let mut spans: Vec<Span> = Vec::new();
    for (key, desc) in fkeys {
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!("{} ", desc),
            Style::default()
                .fg(Color::Indexed(252))
                .bg(Color::Indexed(234)),
        ));
    }

    let line = Line::from(spans);
    f.render_widget(Paragraph::new(line), area);
}

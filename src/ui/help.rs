use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Draw the Help popup (F1)
pub fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 65, f.area());
    f.render_widget(Clear, area);

    let help_text = vec![
        Line::from(Span::styled(
            " netmon - internet usage monitor ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(" Navigation ", Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow))),
        Line::from("  ↑/↓         Move selection up/down"),
        Line::from("  PgUp/PgDn   Page up/down"),
        Line::from("  Home/End    Jump to first/last process"),
        Line::from(""),
        Line::from(Span::styled(" Actions ", Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow))),
        Line::from("  F1/h/?      Show this help"),
        Line::from("  F8/d        Disconnect/reconnect all networking (nmcli)"),
        Line::from("  F9/k        Terminate selected process (every instance"),
        Line::from("              sharing its name)"),
        Line::from("  Z/z         Pause/freeze updates"),
        Line::from("  F10/q       Quit netmon"),
        Line::from("  Ctrl+C      Quit"),
        Line::from(""),
        Line::from(Span::styled(" Display ", Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow))),
        Line::from("  Chart: last 30 seconds of system-wide traffic,"),
        Line::from("  sent in red, received in blue. Table: processes"),
        Line::from("  with established TCP connections, busiest first."),
        Line::from(""),
        Line::from(Span::styled(
            " Esc/Enter/q to close ",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(paragraph, area);
}

/// Create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

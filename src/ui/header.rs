use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::system::toggle::ToggleState;

/// One-line meter: current rates, totals since boot, row count, state, clock
pub fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let net_state = match app.toggle.state() {
        ToggleState::Connected => Span::styled("online", Style::default().fg(Color::Green)),
        ToggleState::Disconnected => {
            Span::styled("OFFLINE", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        }
    };

    let paused = if app.paused {
        Span::styled("  [paused]", Style::default().fg(Color::Yellow))
    } else {
        Span::raw("")
    };

    let clock = chrono::Local::now().format("%H:%M:%S").to_string();

    let line = Line::from(vec![
        Span::styled(" netmon ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::styled("↑", Style::default().fg(Color::Red)),
        Span::raw(format!("{:.2} ", app.sent_rate)),
        Span::styled("↓", Style::default().fg(Color::Blue)),
        Span::raw(format!("{:.2} MB/s", app.recv_rate)),
        Span::styled(
            format!("  total {} / {}", format_bytes(app.total_sent), format_bytes(app.total_received)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(format!("  {} connected", app.records.len())),
        Span::raw("  net: "),
        net_state,
        paused,
        Span::styled(format!("  {}", clock), Style::default().fg(Color::DarkGray)),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

/// Format bytes to human-readable string (KiB, MiB, GiB)
pub fn format_bytes(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * KIB;
    const GIB: u64 = 1024 * MIB;
    const TIB: u64 = 1024 * GIB;

    if bytes >= TIB {
        format!("{:.1}T", bytes as f64 / TIB as f64)
    } else if bytes >= GIB {
        format!("{:.1}G", bytes as f64 / GIB as f64)
    } else if bytes >= MIB {
        format!("{:.0}M", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.0}K", bytes as f64 / KIB as f64)
    } else {
        format!("{}B", bytes)
    }
}

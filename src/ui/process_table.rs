use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::system::process::ProcNetInfo;

/// Column headers and fixed widths; Application takes the remaining space
const HEADERS: &[(&str, u16)] = &[
    ("PID", 8),
    ("Application", 0), // 0 = takes remaining space
    ("Sent (MB/s)", 12),
    ("Received (MB/s)", 16),
];

/// Draw the table of processes with established connections
pub fn draw_process_table(f: &mut Frame, app: &App, area: Rect) {
    if area.height < 2 {
        return;
    }

    // --- Column header row (full-width colored background like htop) ---
    let header_area = Rect { x: area.x, y: area.y, width: area.width, height: 1 };
    let bg_line = " ".repeat(area.width as usize);
    f.render_widget(
        Paragraph::new(bg_line).style(Style::default().bg(Color::Green).fg(Color::Black)),
        header_area,
    );

    let app_col = app_col_width(area.width as usize);
    let header_line = Line::from(vec![
        Span::styled(
            format!("{:>7} ", "PID"),
            Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{:<width$}", "Application", width = app_col),
            Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{:>11} ", "Sent (MB/s)"),
            Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{:>15} ", "Received (MB/s)"),
            Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(header_line), header_area);

    // --- Rows ---
    let table_area = Rect {
        x: area.x,
        y: area.y + 1,
        width: area.width,
        height: area.height - 1,
    };

    if app.records.is_empty() {
        let empty = Paragraph::new(" no processes with established connections ")
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(empty, table_area);
        return;
    }

    let visible = table_area.height as usize;
    let start = app.scroll_offset;
    let end = (start + visible).min(app.records.len());

    for (i, row_idx) in (start..end).enumerate() {
        let proc_info = &app.records[row_idx];
        let selected = row_idx == app.selected_index;

        let row_area = Rect {
            x: table_area.x,
            y: table_area.y + i as u16,
            width: table_area.width,
            height: 1,
        };
        let row = build_row(proc_info, table_area.width as usize, selected);
        f.render_widget(Paragraph::new(row), row_area);
    }
}

/// Width left over for the Application column after the fixed columns
fn app_col_width(total: usize) -> usize {
    let fixed: usize = HEADERS
        .iter()
        .map(|(_, w)| if *w > 0 { *w as usize } else { 0 })
        .sum();
    total.saturating_sub(fixed).max(8)
}

/// Build a single row as a styled Line
fn build_row(proc_info: &ProcNetInfo, width: usize, selected: bool) -> Line<'static> {
    let (bg, fg) = if selected {
        (Color::Cyan, Color::Black)
    } else {
        (Color::Reset, Color::Reset)
    };
    let base = Style::default().bg(bg).fg(fg);

    let app_col = app_col_width(width);
    let name = truncate_str(&proc_info.name, app_col.saturating_sub(1));

    // Pad the name by display width so wide glyphs don't shear the columns
    let pad = app_col.saturating_sub(name.width());
    let name_padded = format!("{}{}", name, " ".repeat(pad));

    let rate_style = |rate: f64| {
        if selected {
            base
        } else if rate > 0.0 {
            base.fg(Color::Yellow)
        } else {
            base.fg(Color::DarkGray)
        }
    };

    Line::from(vec![
        Span::styled(format!("{:>7} ", proc_info.pid), base.fg(if selected { fg } else { Color::Magenta })),
        Span::styled(name_padded, base.add_modifier(Modifier::BOLD)),
        Span::styled(format!("{:>11.2} ", proc_info.sent_rate), rate_style(proc_info.sent_rate)),
        Span::styled(format!("{:>15.2} ", proc_info.recv_rate), rate_style(proc_info.recv_rate)),
    ])
}

/// Truncate to a display width, ellipsis-free like htop
fn truncate_str(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut w = 0;
    for c in s.chars() {
        let cw = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if w + cw > max {
            break;
        }
        w += cw;
        out.push(c);
    }
    out
}

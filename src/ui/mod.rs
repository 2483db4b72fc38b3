pub mod chart;
pub mod footer;
pub mod header;
pub mod help;
pub mod kill_menu;
pub mod process_table;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::{App, AppMode};

/// Render the complete UI
pub fn draw(f: &mut Frame, app: &App) {
    let size = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),      // header (rates + totals + clock)
            Constraint::Percentage(40), // bandwidth chart
            Constraint::Min(5),         // process table
            Constraint::Length(1),      // footer (key bar)
        ])
        .split(size);

    header::draw_header(f, app, chunks[0]);
    chart::draw_chart(f, app, chunks[1]);
    process_table::draw_process_table(f, app, chunks[2]);
    footer::draw_footer(f, app, chunks[3]);

    // Overlay popups
    match app.mode {
        AppMode::Help => help::draw_help(f),
        AppMode::Kill => kill_menu::draw_kill_menu(f, app),
        _ => {}
    }
}

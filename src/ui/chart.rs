use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType};
use ratatui::Frame;

use crate::app::App;
use crate::system::network::HISTORY_LEN;

/// Draw the two-series bandwidth chart: sent in red, received in blue,
/// rolling window of the last 30 samples
pub fn draw_chart(f: &mut Frame, app: &App, area: Rect) {
    if area.height < 3 {
        return;
    }

    let sent_points = app.sent_history.points();
    let recv_points = app.recv_history.points();

    let datasets = vec![
        Dataset::default()
            .name("Sent MB/s")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(&sent_points),
        Dataset::default()
            .name("Received MB/s")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Blue))
            .data(&recv_points),
    ];

    // Auto-scale the y-axis to the window peak, never collapsing to zero
    let peak = app.sent_history.max().max(app.recv_history.max());
    let y_max = if peak < 0.1 { 0.1 } else { peak * 1.1 };

    let y_labels = [
        "0".to_string(),
        format!("{:.2}", y_max / 2.0),
        format!("{:.2}", y_max),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Live Internet Usage (MB/s) ")
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .x_axis(
            Axis::default()
                .bounds([0.0, (HISTORY_LEN - 1) as f64])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, y_max])
                .labels(y_labels)
                .style(Style::default().fg(Color::DarkGray))
                .labels_alignment(ratatui::layout::Alignment::Right),
        );

    f.render_widget(chart, area);
}

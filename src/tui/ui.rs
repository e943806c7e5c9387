//! Layout and rendering for the dashboard views.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span, Text},
    widgets::{
        canvas::{Canvas, Map, MapResolution, Points},
        Axis, Bar, BarChart, BarGroup, Block, Borders, Cell, Chart, Clear, Dataset, GraphType,
        Paragraph, Row, Table as TableWidget, Wrap,
    },
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::command::PlotKind;

use super::app::{App, View};

const DATA_WIDTH_CAP: u16 = 20;

pub fn render_ui(frame: &mut Frame, app: &App) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Active view
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    match app.view {
        View::Chat => render_chat(frame, app, main_layout[0]),
        View::Data => render_data(frame, app, main_layout[0]),
        View::Chart => render_chart(frame, app, main_layout[0]),
        View::Map => render_map(frame, app, main_layout[0]),
    }

    render_input(frame, app, main_layout[1]);
    render_status_bar(frame, app, main_layout[2]);

    if app.show_help {
        render_help_overlay(frame);
    }
}

/// Interaction history, most recent first.
fn render_chat(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();

    if app.log.is_empty() {
        lines.push(Line::from(Span::styled(
            "Ask a question, or request a plot: \"buat line plot TotalWaste dan Recycled\"",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for record in app.log.latest_first() {
        lines.push(Line::from(Span::styled(
            format!("Q: {}", record.question),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )));
        for (i, answer_line) in record.answer.lines().enumerate() {
            let prefix = if i == 0 { "A: " } else { "   " };
            lines.push(Line::from(Span::styled(
                format!("{}{}", prefix, answer_line),
                Style::default().fg(Color::Cyan),
            )));
        }
        lines.push(Line::from(""));
    }

    let title = format!(
        "Interaction Log ({}) | Model: {}",
        app.log.len(),
        app.model_label
    );
    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll as u16, 0));

    frame.render_widget(paragraph, area);
}

/// Dataset preview.
fn render_data(frame: &mut Frame, app: &App, area: Rect) {
    let widths: Vec<Constraint> = app
        .table
        .headers()
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let mut width = header.width();
            for row in app.table.rows().iter().take(50) {
                width = width.max(row[i].width());
            }
            Constraint::Length((width as u16).min(DATA_WIDTH_CAP))
        })
        .collect();

    let header = Row::new(
        app.table
            .headers()
            .iter()
            .map(|h| Cell::from(h.as_str())),
    )
    .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let rows = app
        .table
        .rows()
        .iter()
        .skip(app.scroll)
        .map(|row| Row::new(row.iter().map(|cell| Cell::from(cell.as_str()))));

    let title = format!(
        "Dataset ({} rows x {} columns)",
        app.table.row_count(),
        app.table.headers().len()
    );
    let widget = TableWidget::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(widget, area);
}

fn render_chart(frame: &mut Frame, app: &App, area: Rect) {
    let Some(chart) = &app.chart else {
        let hint = Paragraph::new("No chart yet. Try: \"buat line plot TotalWaste dan Recycled\"")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title("Chart"));
        frame.render_widget(hint, area);
        return;
    };

    let block = Block::default().borders(Borders::ALL).title(chart.title());

    match chart.command.kind {
        PlotKind::Bar => {
            let bars: Vec<Bar> = chart
                .bars
                .iter()
                .map(|(label, value)| {
                    Bar::default()
                        .value(*value)
                        .label(Line::from(label.as_str()))
                })
                .collect();
            let widget = BarChart::default()
                .block(block)
                .bar_width(8)
                .bar_gap(1)
                .bar_style(Style::default().fg(Color::Green))
                .value_style(Style::default().fg(Color::Black).bg(Color::Green))
                .label_style(Style::default().fg(Color::Yellow))
                .data(BarGroup::default().bars(&bars));
            frame.render_widget(widget, area);
        }
        PlotKind::Line | PlotKind::Scatter => {
            let (graph_type, marker) = match chart.command.kind {
                PlotKind::Line => (GraphType::Line, Marker::Braille),
                _ => (GraphType::Scatter, Marker::Dot),
            };
            let datasets = vec![Dataset::default()
                .name(chart.command.y_column.clone())
                .marker(marker)
                .graph_type(graph_type)
                .style(Style::default().fg(Color::Green))
                .data(&chart.points)];
            let widget = Chart::new(datasets)
                .block(block)
                .x_axis(
                    Axis::default()
                        .title(chart.command.x_column.clone())
                        .style(Style::default().fg(Color::Gray))
                        .bounds(chart.x_bounds)
                        .labels(axis_labels(chart.x_bounds)),
                )
                .y_axis(
                    Axis::default()
                        .title(chart.command.y_column.clone())
                        .style(Style::default().fg(Color::Gray))
                        .bounds(chart.y_bounds)
                        .labels(axis_labels(chart.y_bounds)),
                );
            frame.render_widget(widget, area);
        }
    }
}

/// World-map canvas with the geo dataset's points, zoomed to their extent.
fn render_map(frame: &mut Frame, app: &App, area: Rect) {
    let coords: Vec<(f64, f64)> = app.geo.iter().map(|&(lat, lon)| (lon, lat)).collect();
    let x_bounds = padded_bounds(coords.iter().map(|c| c.0), 15.0, 180.0);
    let y_bounds = padded_bounds(coords.iter().map(|c| c.1), 15.0, 90.0);

    let title = format!("Collection Sites ({} points)", app.geo.len());
    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            ctx.draw(&Map {
                resolution: MapResolution::High,
                color: Color::DarkGray,
            });
            ctx.draw(&Points {
                coords: &coords,
                color: Color::Green,
            });
        });

    frame.render_widget(canvas, area);
}

fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let input_paragraph = Paragraph::new(app.input.as_str())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Ask a question or make a request"),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(input_paragraph, area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status_text = format!("[{}] {}", app.view.title(), app.status);
    let status_paragraph =
        Paragraph::new(status_text).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(status_paragraph, area);
}

fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();
    let popup_area = centered_rect(70, 60, area);

    frame.render_widget(Clear, popup_area);

    let help_lines = vec![
        Line::from("Greenmovement Dashboard Help"),
        Line::from(""),
        Line::from("Navigation:"),
        Line::from("  Tab        - Cycle chat / data / chart / map"),
        Line::from("  ↑/↓        - Scroll"),
        Line::from("  Ctrl+C     - Quit"),
        Line::from("  F1         - Toggle this help"),
        Line::from(""),
        Line::from("Input:"),
        Line::from("  Enter      - Submit question or plot request"),
        Line::from("  exit()     - Quit"),
        Line::from(""),
        Line::from("Plot requests:"),
        Line::from("  <type> plot <X> dan <Y>, type one of line/bar/scatter"),
        Line::from("  e.g. \"buat line plot TotalWaste dan Recycled\""),
    ];

    let help_paragraph = Paragraph::new(Text::from(help_lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help")
                .title_style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(help_paragraph, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn axis_labels(bounds: [f64; 2]) -> Vec<Span<'static>> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    [bounds[0], mid, bounds[1]]
        .iter()
        .map(|v| Span::raw(format_axis_value(*v)))
        .collect()
}

fn format_axis_value(v: f64) -> String {
    if v.abs() >= 1000.0 {
        format!("{:.0}", v)
    } else {
        format!("{:.1}", v)
    }
}

/// Bounds around the points with padding, clamped to the world range.
fn padded_bounds(values: impl Iterator<Item = f64>, pad: f64, clamp: f64) -> [f64; 2] {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if !lo.is_finite() || !hi.is_finite() {
        return [-clamp, clamp];
    }
    [(lo - pad).max(-clamp), (hi + pad).min(clamp)]
}

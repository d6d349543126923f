//! Boiler and pressure gauges

use super::super::state::DashboardState;
use super::super::utils::{pressure_color, temp_color};
use crate::store::TemperatureReading;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge};

/// Render the gauge row: brew boiler, steam boiler, pump pressure.
pub fn render_gauges(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let gauge_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33), // brew boiler
            Constraint::Percentage(33), // steam boiler
            Constraint::Percentage(34), // pressure (slightly larger for rounding)
        ])
        .split(area);

    render_boiler_gauge(f, gauge_chunks[0], "Brew Boiler", &state.snapshot.temps.brew);
    render_boiler_gauge(
        f,
        gauge_chunks[1],
        "Steam Boiler",
        &state.snapshot.temps.steam,
    );

    let pressure = state.snapshot.pressure;
    let color = pressure_color(pressure.0);
    let pressure_gauge = Gauge::default()
        .block(
            Block::default()
                .title("Pressure")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        )
        .gauge_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .percent(pressure.fill_percent())
        .label(pressure.format_label());
    f.render_widget(pressure_gauge, gauge_chunks[2]);
}

fn render_boiler_gauge(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    title: &str,
    reading: &TemperatureReading,
) {
    let color = temp_color(reading);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        )
        .gauge_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .percent((reading.fill_ratio() * 100.0) as u16)
        .label(reading.format_label());
    f.render_widget(gauge, area);
}

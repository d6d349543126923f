//! Dashboard main renderer

use super::components::{controls, footer, gauges, header, logs, modal, stats};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // header: title + status line
            Constraint::Length(3), // boiler and pressure gauges
            Constraint::Length(7), // quick stat cards
            Constraint::Fill(1),   // activity log
            Constraint::Length(3), // mode controls
            Constraint::Length(2), // footer
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    gauges::render_gauges(f, main_chunks[1], state);
    stats::render_stats(f, main_chunks[2], state);
    logs::render_logs_panel(f, main_chunks[3], state);
    controls::render_controls(f, main_chunks[4], state);
    footer::render_footer(f, main_chunks[5]);

    // Drawn last so it overlays everything beneath it
    modal::render_strategy_modal(f, state);
}

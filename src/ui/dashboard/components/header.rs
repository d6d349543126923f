//! Dashboard header component
//!
//! Renders the title and the machine status line

use super::super::state::DashboardState;
use super::super::utils::{machine_state_color, machine_state_label};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the header with title and machine status line.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("BREWOS MONITOR v{}", version))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // Connection badge first: everything else on screen is only as fresh as
    // the telemetry feed. Blinks while offline, pulsing with the UI tick.
    let (badge, badge_color) = if state.online {
        ("● ONLINE", Color::Green)
    } else if state.tick % 10 < 5 {
        ("○ OFFLINE", Color::Red)
    } else {
        ("  OFFLINE", Color::Red)
    };

    let machine = &state.snapshot.machine;
    let status_line = Line::from(vec![
        Span::styled(badge, Style::default().fg(badge_color)),
        Span::styled("  |  ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            machine_state_label(machine.state),
            Style::default()
                .fg(machine_state_color(machine.state))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  |  ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("Mode: {}", machine.mode.to_string().to_uppercase())),
        Span::styled("  |  ", Style::default().fg(Color::DarkGray)),
        Span::styled(state.host.clone(), Style::default().fg(Color::DarkGray)),
    ]);

    let status = Paragraph::new(status_line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(status, header_chunks[1]);
}

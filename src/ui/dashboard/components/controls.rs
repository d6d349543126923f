//! Mode controls bar
//!
//! Three toggles bound to keys; the machine's current mode is highlighted

use super::super::state::DashboardState;
use crate::store::MachineMode;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_controls(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let current = state.snapshot.machine.mode;

    let mut spans = Vec::new();
    for (i, (mode, label)) in [
        (MachineMode::Standby, "[S] Standby"),
        (MachineMode::On, "[O] On"),
        (MachineMode::Eco, "[E] Eco"),
    ]
    .into_iter()
    .enumerate()
    {
        if i > 0 {
            spans.push(Span::styled("   ", Style::default()));
        }
        let style = if mode == current {
            Style::default()
                .fg(Color::Black)
                .bg(mode_color(mode))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", label), style));
    }

    let controls = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title("MODE")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(controls, area);
}

fn mode_color(mode: MachineMode) -> Color {
    match mode {
        MachineMode::Standby => Color::Gray,
        MachineMode::On => Color::Green,
        MachineMode::Eco => Color::LightGreen,
    }
}

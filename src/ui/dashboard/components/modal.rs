//! Heating-strategy selection modal
//!
//! Shown before turning the machine on from standby or eco; the machine
//! only starts heating once a strategy has been confirmed

use super::super::state::{DashboardState, ModalState};
use crate::connection::HeatingStrategy;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph};

pub fn render_strategy_modal(f: &mut Frame, state: &DashboardState) {
    let ModalState::SelectingStrategy { selected } = state.modal() else {
        return;
    };

    let area = centered_rect(46, 11, f.area());
    f.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "Choose how the boilers heat up",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];
    for strategy in HeatingStrategy::ALL {
        let (marker, style) = if strategy == selected {
            (
                "▸ ",
                Style::default()
                    .fg(Color::LightYellow)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("  ", Style::default().fg(Color::Gray))
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::LightYellow)),
            Span::styled(
                format!("{}. {}", strategy.code() + 1, strategy.label()),
                style,
            ),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "↑/↓ select · Enter confirm · Esc cancel",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .title("HEATING STRATEGY")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow))
        .padding(Padding::horizontal(2));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Center a fixed-size rect inside the given area, shrinking if needed.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

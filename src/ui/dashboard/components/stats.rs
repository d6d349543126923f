//! Quick stat cards
//!
//! Power draw, water tank, scale, and session counters

use super::super::state::DashboardState;
use super::super::utils::{format_uptime, tank_color, tank_label};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_stats(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let card_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    render_power_card(f, card_chunks[0], state);
    render_water_card(f, card_chunks[1], state);
    render_scale_card(f, card_chunks[2], state);
    render_session_card(f, card_chunks[3], state);
}

fn card_block(title: &'static str) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1))
}

fn render_power_card(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let power = &state.snapshot.power;
    let lines = vec![
        Line::from(vec![
            Span::styled("Draw: ", Style::default().fg(Color::Gray)),
            Span::styled(
                power.format_watts(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Today: ", Style::default().fg(Color::Gray)),
            Span::styled(power.format_today_kwh(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![
            Span::styled("Mains: ", Style::default().fg(Color::Gray)),
            Span::styled(power.format_voltage(), Style::default().fg(Color::Cyan)),
        ]),
    ];

    let card = Paragraph::new(lines)
        .block(card_block("POWER"))
        .wrap(Wrap { trim: true });
    f.render_widget(card, area);
}

fn render_water_card(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let level = state.snapshot.water.tank_level;
    let lines = vec![Line::from(vec![
        Span::styled("Tank: ", Style::default().fg(Color::Gray)),
        Span::styled(
            tank_label(level),
            Style::default()
                .fg(tank_color(level))
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    let card = Paragraph::new(lines)
        .block(card_block("WATER"))
        .wrap(Wrap { trim: true });
    f.render_widget(card, area);
}

fn render_scale_card(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let scale = &state.snapshot.scale;
    let weight_color = if scale.connected {
        Color::White
    } else {
        Color::DarkGray
    };
    let lines = vec![Line::from(vec![
        Span::styled("Weight: ", Style::default().fg(Color::Gray)),
        Span::styled(scale.format_weight(), Style::default().fg(weight_color)),
    ])];

    let card = Paragraph::new(lines)
        .block(card_block("SCALE"))
        .wrap(Wrap { trim: true });
    f.render_widget(card, area);
}

fn render_session_card(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let lines = vec![
        Line::from(vec![
            Span::styled("Shots today: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}", state.snapshot.stats.shots_today),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Uptime: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format_uptime(state.snapshot.esp32.uptime),
                Style::default().fg(Color::LightGreen),
            ),
        ]),
    ];

    let card = Paragraph::new(lines)
        .block(card_block("SESSION"))
        .wrap(Wrap { trim: true });
    f.render_widget(card, area);
}

//! Dashboard utility functions
//!
//! Formatting helpers and style tokens used across dashboard components

use crate::events::Source;
use crate::store::{MachineState, TankLevel, TemperatureReading};
use ratatui::prelude::Color;

/// Get a ratatui color for an event source
pub fn source_color(source: &Source) -> Color {
    match source {
        Source::Telemetry => Color::Cyan,
        Source::Command => Color::Yellow,
    }
}

/// Human label for a machine display-state token
pub fn machine_state_label(state: MachineState) -> &'static str {
    match state {
        MachineState::Init => "Starting",
        MachineState::Idle => "Idle",
        MachineState::Heating => "Heating",
        MachineState::Ready => "Ready",
        MachineState::Brewing => "Brewing",
        MachineState::Fault => "Fault",
        MachineState::Safe => "Safe mode",
        MachineState::Eco => "Eco",
        MachineState::Unknown => "Unknown",
    }
}

/// Style token for a machine display-state token
pub fn machine_state_color(state: MachineState) -> Color {
    match state {
        MachineState::Heating => Color::Yellow,
        MachineState::Ready => Color::Green,
        MachineState::Brewing => Color::Cyan,
        MachineState::Fault | MachineState::Safe => Color::Red,
        MachineState::Eco => Color::LightGreen,
        MachineState::Idle => Color::Gray,
        MachineState::Init | MachineState::Unknown => Color::DarkGray,
    }
}

/// Upper-cased water tank label
pub fn tank_label(level: TankLevel) -> String {
    level.to_string().to_uppercase()
}

/// Tri-state water tank style: ok is fine, low is a warning, anything else
/// is treated as an error
pub fn tank_color(level: TankLevel) -> Color {
    match level {
        TankLevel::Ok => Color::Green,
        TankLevel::Low => Color::Yellow,
        TankLevel::Unknown => Color::Red,
    }
}

/// Boiler gauge color: green at temperature, yellow while below setpoint,
/// red when running hot
pub fn temp_color(reading: &TemperatureReading) -> Color {
    if reading.setpoint <= 0.0 {
        return Color::DarkGray;
    }
    let delta = reading.current - reading.setpoint;
    if delta.abs() <= 1.0 {
        Color::Green
    } else if delta < 0.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// Pressure gauge color by proximity to the brew ceiling
pub fn pressure_color(bar: f64) -> Color {
    if bar >= 12.0 {
        Color::Red
    } else if bar >= 10.5 {
        Color::Yellow
    } else {
        Color::Green
    }
}

/// Format controller uptime (seconds) as a human-readable string
pub fn format_uptime(secs: u64) -> String {
    if secs >= 86400 {
        format!(
            "{}d {}h {}m",
            secs / 86400,
            (secs % 86400) / 3600,
            (secs % 3600) / 60
        )
    } else if secs >= 3600 {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract MM-DD HH:MM from "YYYY-MM-DD HH:MM:SS"
    let mut parts = timestamp.split(' ');
    if let (Some(date_part), Some(time_part)) = (parts.next(), parts.next()) {
        if let (Some(month_day), Some(hour_min)) = (date_part.get(5..10), time_part.get(0..5)) {
            return format!("{} {}", month_day, hour_min);
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

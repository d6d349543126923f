//! Outbound command shapes.
//!
//! The controller accepts JSON commands of the form
//! `{"cmd": "set_mode", "mode": "on", "strategy": 2}`; `strategy` is only
//! present when turning the machine on with an explicit heating preset.

use crate::store::MachineMode;
use serde::{Serialize, Serializer};

/// Integer-coded preset controlling how the machine ramps both boilers to
/// operating temperature.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum HeatingStrategy {
    /// Heat only the brew boiler.
    #[default]
    BrewOnly = 0,
    /// Brew boiler first, then steam.
    Sequential = 1,
    /// Both boilers simultaneously.
    Parallel = 2,
    /// Power-aware staggering.
    SmartStagger = 3,
}

impl HeatingStrategy {
    pub const ALL: [HeatingStrategy; 4] = [
        HeatingStrategy::BrewOnly,
        HeatingStrategy::Sequential,
        HeatingStrategy::Parallel,
        HeatingStrategy::SmartStagger,
    ];

    /// Wire code, as the controller protocol defines it.
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// Human label for the selection modal.
    pub fn label(self) -> &'static str {
        match self {
            HeatingStrategy::BrewOnly => "Brew boiler only",
            HeatingStrategy::Sequential => "Sequential",
            HeatingStrategy::Parallel => "Parallel",
            HeatingStrategy::SmartStagger => "Smart stagger",
        }
    }

    pub fn next(self) -> Self {
        Self::from_code((self.code() + 1) % Self::ALL.len() as u8).unwrap_or_default()
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len() as u8;
        Self::from_code((self.code() + len - 1) % len).unwrap_or_default()
    }
}

impl Serialize for HeatingStrategy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// A one-way instruction from the monitor to the machine controller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Command {
    SetMode {
        mode: MachineMode,
        #[serde(skip_serializing_if = "Option::is_none")]
        strategy: Option<HeatingStrategy>,
    },
}

impl Command {
    /// Plain mode change, no heating preset attached.
    pub fn set_mode(mode: MachineMode) -> Self {
        Command::SetMode {
            mode,
            strategy: None,
        }
    }

    /// Turn the machine on with the chosen heating preset.
    pub fn set_mode_with_strategy(strategy: HeatingStrategy) -> Self {
        Command::SetMode {
            mode: MachineMode::On,
            strategy: Some(strategy),
        }
    }

    /// Short description for the activity log.
    pub fn describe(&self) -> String {
        match self {
            Command::SetMode {
                mode,
                strategy: None,
            } => format!("set_mode {}", mode),
            Command::SetMode {
                mode,
                strategy: Some(strategy),
            } => format!("set_mode {} ({})", mode, strategy.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_mode_omits_strategy_field() {
        let json = serde_json::to_value(Command::set_mode(MachineMode::Standby)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"cmd": "set_mode", "mode": "standby"})
        );
    }

    #[test]
    fn set_mode_with_strategy_encodes_wire_code() {
        let json =
            serde_json::to_value(Command::set_mode_with_strategy(HeatingStrategy::Parallel))
                .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"cmd": "set_mode", "mode": "on", "strategy": 2})
        );
    }

    #[test]
    fn strategy_codes_round_trip() {
        for strategy in HeatingStrategy::ALL {
            assert_eq!(HeatingStrategy::from_code(strategy.code()), Some(strategy));
        }
        assert_eq!(HeatingStrategy::from_code(4), None);
    }

    #[test]
    fn strategy_selection_wraps_both_ways() {
        assert_eq!(
            HeatingStrategy::SmartStagger.next(),
            HeatingStrategy::BrewOnly
        );
        assert_eq!(
            HeatingStrategy::BrewOnly.prev(),
            HeatingStrategy::SmartStagger
        );
    }
}

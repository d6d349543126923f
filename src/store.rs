//! Typed view of the controller's status broadcast.
//!
//! Every struct here is a read-only projection of machine state: the
//! telemetry poller replaces whole snapshots, the dashboard only reads them.

use crate::consts::cli_consts::gauges;
use serde::{Deserialize, Serialize};

/// Requested operating mode of the machine.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MachineMode {
    #[default]
    Standby,
    On,
    Eco,
}

/// Display-state token reported by the controller. The token set mirrors the
/// firmware state machine; unknown tokens map to `Unknown` so a newer
/// controller does not break an older monitor.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MachineState {
    Init,
    Idle,
    Heating,
    Ready,
    Brewing,
    Fault,
    Safe,
    Eco,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Water tank fill indication.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TankLevel {
    Ok,
    Low,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineStatus {
    pub mode: MachineMode,
    pub state: MachineState,
}

/// One boiler's temperature reading, in °C.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemperatureReading {
    pub current: f64,
    /// Gauge full-scale; controllers may omit it.
    pub max: f64,
    pub setpoint: f64,
}

impl TemperatureReading {
    /// Gauge fill as a ratio (0.0 to 1.0). Falls back to setpoint headroom
    /// when the controller reports no maximum.
    pub fn fill_ratio(&self) -> f64 {
        let full_scale = if self.max > 0.0 {
            self.max
        } else {
            self.setpoint * gauges::TEMP_SETPOINT_HEADROOM
        };
        if full_scale <= 0.0 {
            return 0.0;
        }
        (self.current / full_scale).clamp(0.0, 1.0)
    }

    /// Gauge label, current vs. setpoint.
    pub fn format_label(&self) -> String {
        format!("{:.1}°C / {:.1}°C", self.current, self.setpoint)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Temperatures {
    pub brew: TemperatureReading,
    pub steam: TemperatureReading,
}

/// Boiler pressure in bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PressureReading(pub f64);

impl PressureReading {
    /// Gauge fill percentage, clamped to [0, 100] against the full-scale
    /// pressure. The raw value is displayed separately and is never clamped.
    pub fn fill_percent(&self) -> u16 {
        ((self.0 / gauges::PRESSURE_FULL_SCALE_BAR) * 100.0).clamp(0.0, 100.0) as u16
    }

    pub fn format_label(&self) -> String {
        format!("{:.1} bar", self.0)
    }
}

/// Mains power readings from the controller's power meter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PowerReading {
    /// Instantaneous draw in watts.
    pub current: f64,
    /// Energy used since midnight, in kWh.
    pub today_kwh: f64,
    /// Mains voltage.
    pub voltage: f64,
}

impl PowerReading {
    /// Draw rounded to the nearest whole watt.
    pub fn format_watts(&self) -> String {
        format!("{} W", self.current.round() as i64)
    }

    pub fn format_today_kwh(&self) -> String {
        format!("{:.2} kWh", self.today_kwh)
    }

    pub fn format_voltage(&self) -> String {
        format!("{:.0} V", self.voltage)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WaterStatus {
    pub tank_level: TankLevel,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleStatus {
    pub connected: bool,
    /// Last weight reading in grams; stale once `connected` drops.
    pub weight: f64,
}

impl ScaleStatus {
    /// Weight to one decimal when a scale is paired, fixed placeholder otherwise.
    pub fn format_weight(&self) -> String {
        if self.connected {
            format!("{:.1}g", self.weight)
        } else {
            "Not connected".to_string()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionStats {
    pub shots_today: u32,
}

/// Controller-side device stats.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceStats {
    /// Controller uptime in seconds.
    pub uptime: u64,
}

/// Complete client-side state store, one slice per controller subsystem.
/// Missing slices deserialize to their defaults so the dashboard always sees
/// a complete snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSnapshot {
    pub machine: MachineStatus,
    pub temps: Temperatures,
    pub pressure: PressureReading,
    pub power: PowerReading,
    pub water: WaterStatus,
    pub scale: ScaleStatus,
    pub stats: SessionStats,
    pub esp32: DeviceStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressure_fill_is_proportional_below_full_scale() {
        assert_eq!(PressureReading(7.5).fill_percent(), 50);
        assert_eq!(PressureReading(0.0).fill_percent(), 0);
    }

    #[test]
    fn pressure_fill_clamps_out_of_range_values() {
        assert_eq!(PressureReading(20.0).fill_percent(), 100);
        assert_eq!(PressureReading(-1.0).fill_percent(), 0);
    }

    #[test]
    fn pressure_label_shows_raw_value_even_out_of_range() {
        assert_eq!(PressureReading(20.0).format_label(), "20.0 bar");
    }

    #[test]
    fn scale_weight_formats_to_one_decimal_when_connected() {
        let scale = ScaleStatus {
            connected: true,
            weight: 3.14,
        };
        assert_eq!(scale.format_weight(), "3.1g");
    }

    #[test]
    fn scale_shows_placeholder_when_disconnected() {
        let scale = ScaleStatus {
            connected: false,
            weight: 3.14,
        };
        assert_eq!(scale.format_weight(), "Not connected");
    }

    #[test]
    fn temperature_fill_guards_missing_scale() {
        let reading = TemperatureReading::default();
        assert_eq!(reading.fill_ratio(), 0.0);

        let reading = TemperatureReading {
            current: 93.0,
            max: 0.0,
            setpoint: 93.0,
        };
        assert!(reading.fill_ratio() > 0.8 && reading.fill_ratio() < 1.0);
    }

    #[test]
    fn snapshot_decodes_controller_broadcast() {
        let json = r#"{
            "type": "status",
            "machine": {"state": "heating", "mode": "on", "isHeating": true},
            "temps": {
                "brew": {"current": 88.2, "setpoint": 93.5},
                "steam": {"current": 130.0, "setpoint": 145.0}
            },
            "pressure": 9.1,
            "power": {"current": 1450.4, "todayKwh": 0.48, "voltage": 231.0},
            "water": {"tankLevel": "ok"},
            "scale": {"connected": true, "weight": 17.95},
            "stats": {"shotsToday": 4},
            "esp32": {"uptime": 7425}
        }"#;
        let snapshot: StoreSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.machine.mode, MachineMode::On);
        assert_eq!(snapshot.machine.state, MachineState::Heating);
        assert_eq!(snapshot.water.tank_level, TankLevel::Ok);
        assert_eq!(snapshot.stats.shots_today, 4);
        assert_eq!(snapshot.esp32.uptime, 7425);
        assert_eq!(snapshot.power.format_watts(), "1450 W");
    }

    #[test]
    fn snapshot_tolerates_missing_slices() {
        let snapshot: StoreSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot.machine.mode, MachineMode::Standby);
        assert_eq!(snapshot.machine.state, MachineState::Unknown);
        assert_eq!(snapshot.water.tank_level, TankLevel::Unknown);
        assert!(!snapshot.scale.connected);
    }

    #[test]
    fn unknown_tokens_map_to_unknown_variants() {
        let json = r#"{"machine": {"state": "descaling", "mode": "on"}, "water": {"tankLevel": "empty"}}"#;
        let snapshot: StoreSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.machine.state, MachineState::Unknown);
        assert_eq!(snapshot.water.tank_level, TankLevel::Unknown);
    }
}

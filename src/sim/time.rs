//! 仿真时间类型
//!
//! 逻辑时间与墙钟无关；一个仿真时间单位等于 `TICKS_PER_UNIT` 个 tick。

use serde::{Deserialize, Serialize};

/// 每个仿真时间单位包含的 tick 数
pub const TICKS_PER_UNIT: u64 = 1_000_000;

/// 仿真时间（tick）。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    pub fn from_units(units: u64) -> SimTime {
        SimTime(units.saturating_mul(TICKS_PER_UNIT))
    }

    /// 负数与 NaN 视为 0，超出范围时饱和。
    pub fn from_units_f64(units: f64) -> SimTime {
        let ticks = units * TICKS_PER_UNIT as f64;
        if ticks.is_nan() || ticks <= 0.0 {
            SimTime::ZERO
        } else if ticks >= u64::MAX as f64 {
            SimTime(u64::MAX)
        } else {
            SimTime(ticks.round() as u64)
        }
    }

    pub fn as_units_f64(self) -> f64 {
        self.0 as f64 / TICKS_PER_UNIT as f64
    }

    pub fn saturating_add(self, rhs: SimTime) -> SimTime {
        SimTime(self.0.saturating_add(rhs.0))
    }
}

impl std::fmt::Display for SimTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}", self.as_units_f64())
    }
}

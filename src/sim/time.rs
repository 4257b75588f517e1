//! 仿真时间类型
//!
//! 虚拟时间只由仿真逻辑推进，与墙钟时间无关。同一类型既表示时刻，也表示时长。

use std::fmt;

use serde::{Deserialize, Serialize};

/// 虚拟时间（整数单位，请求日志中为秒）。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    pub fn as_u64(self) -> u64 {
        self.0
    }

    /// 时刻加时长，溢出时饱和。
    pub fn saturating_add(self, rhs: SimTime) -> SimTime {
        SimTime(self.0.saturating_add(rhs.0))
    }

    /// 两个时刻之差，`rhs` 更晚时为零。
    pub fn saturating_sub(self, rhs: SimTime) -> SimTime {
        SimTime(self.0.saturating_sub(rhs.0))
    }
}

impl From<u64> for SimTime {
    fn from(v: u64) -> Self {
        SimTime(v)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

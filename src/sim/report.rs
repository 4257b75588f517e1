//! 仿真结果
//!
//! 汇总每个请求的等待时间，按服务器分组，可序列化为 JSON。

use serde::{Deserialize, Serialize};

use super::time::SimTime;
use crate::error::SimError;

/// 一次仿真运行的结果。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimReport {
    pub num_servers: usize,
    /// 所有等待时间的算术平均（不是各服务器平均值的平均）
    pub mean_wait: f64,
    /// 全部等待时间：依次为服务器 0、1、…… 的记录
    pub waits: Vec<SimTime>,
    pub servers: Vec<ServerReport>,
}

/// 单个服务器的结果。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerReport {
    pub server: usize,
    pub requests: usize,
    pub waits: Vec<SimTime>,
    /// 没有分到请求的服务器为 None
    pub mean_wait: Option<f64>,
}

/// 等待时间的算术平均；空输入返回 None。
pub fn mean_wait(waits: &[SimTime]) -> Option<f64> {
    if waits.is_empty() {
        return None;
    }
    let total: u128 = waits.iter().map(|w| u128::from(w.as_u64())).sum();
    Some(total as f64 / waits.len() as f64)
}

impl SimReport {
    /// 由每个服务器的等待时间构造结果；所有服务器都没有记录时返回 `EmptyInput`。
    pub fn from_server_waits(per_server: Vec<Vec<SimTime>>) -> Result<Self, SimError> {
        let num_servers = per_server.len();
        let waits: Vec<SimTime> = per_server.iter().flatten().copied().collect();
        let overall = mean_wait(&waits).ok_or(SimError::EmptyInput)?;

        let servers = per_server
            .into_iter()
            .enumerate()
            .map(|(server, waits)| ServerReport {
                server,
                requests: waits.len(),
                mean_wait: mean_wait(&waits),
                waits,
            })
            .collect();

        Ok(Self {
            num_servers,
            mean_wait: overall,
            waits,
            servers,
        })
    }
}

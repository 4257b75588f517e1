//! 客户端请求
//!
//! `RequestRecord` 是与请求日志解析器之间的强类型边界；`Request` 是仿真内部使用的只读实体。

use serde::{Deserialize, Serialize};

use super::time::SimTime;

/// 请求日志中的一行：到达时间、资源标识、处理时长。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestRecord {
    pub arrival_time: u64,
    pub resource_id: String,
    pub processing_time: u64,
}

impl RequestRecord {
    pub fn new(arrival_time: u64, resource_id: impl Into<String>, processing_time: u64) -> Self {
        Self {
            arrival_time,
            resource_id: resource_id.into(),
            processing_time,
        }
    }
}

/// 一次客户端请求，构造后不可变。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    arrival_time: SimTime,
    resource_id: String,
    processing_time: SimTime,
}

impl Request {
    pub fn new(
        arrival_time: SimTime,
        resource_id: impl Into<String>,
        processing_time: SimTime,
    ) -> Self {
        Self {
            arrival_time,
            resource_id: resource_id.into(),
            processing_time,
        }
    }

    pub fn arrival_time(&self) -> SimTime {
        self.arrival_time
    }

    /// 请求的资源标识，仿真不解释其内容。
    pub fn resource_id(&self) -> &str {
        &self.resource_id
    }

    pub fn processing_time(&self) -> SimTime {
        self.processing_time
    }

    /// 截至 `now` 的等待时间：`max(0, now - arrival_time)`。
    ///
    /// 调度器推进的时间来自之前的请求，可能早于本请求到达，此时等待时间为零。
    pub fn wait_time(&self, now: SimTime) -> SimTime {
        now.saturating_sub(self.arrival_time)
    }
}

impl From<RequestRecord> for Request {
    fn from(r: RequestRecord) -> Self {
        Request::new(
            SimTime(r.arrival_time),
            r.resource_id,
            SimTime(r.processing_time),
        )
    }
}

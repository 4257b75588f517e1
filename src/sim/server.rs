//! 服务器
//!
//! 单槽处理单元：同一时刻最多持有一个请求。

use tracing::{trace, warn};

use super::request::Request;
use super::time::SimTime;

#[derive(Debug, Default)]
pub struct Server {
    current: Option<Request>,
    time_remaining: SimTime,
}

impl Server {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前是否持有请求
    pub fn busy(&self) -> bool {
        self.current.is_some()
    }

    pub fn current_request(&self) -> Option<&Request> {
        self.current.as_ref()
    }

    pub fn time_remaining(&self) -> SimTime {
        self.time_remaining
    }

    /// 分配下一个请求，剩余时间重置为该请求的处理时长。
    ///
    /// 不检查服务器是否空闲：若已有请求在处理，它会被替换并作为返回值交还给调用方。
    pub fn start_next(&mut self, request: Request) -> Option<Request> {
        self.time_remaining = request.processing_time();
        let displaced = self.current.replace(request);
        if let Some(prev) = &displaced {
            warn!(
                resource = prev.resource_id(),
                arrival = %prev.arrival_time(),
                "服务器忙碌时被分配新请求，原请求被替换"
            );
        }
        displaced
    }

    /// 推进时间：返回 `now + time_remaining`，并立即视当前请求为已完成。
    ///
    /// 空闲时原样返回 `now`。
    pub fn tick(&mut self, now: SimTime) -> SimTime {
        let Some(done) = self.current.take() else {
            return now;
        };
        let next = now.saturating_add(self.time_remaining);
        self.time_remaining = SimTime::ZERO;
        trace!(resource = done.resource_id(), now = %now, next = %next, "请求处理完成");
        next
    }
}

//! 调度器
//!
//! 单服务器：一个队列按到达顺序交给一个服务器处理。
//! 多服务器：按到达位置轮转（round-robin）分配到 N 个队列，每个服务器从零时刻起独立处理自己的队列。

use tracing::{debug, info, trace};

use super::report::SimReport;
use super::request::{Request, RequestRecord};
use super::server::Server;
use super::time::SimTime;
use crate::error::SimError;
use crate::queue::FifoQueue;

/// 把一个请求交给服务器，返回 `(等待时间, 新的当前时间)`。
///
/// 等待时间为零时以请求的到达时间为基准推进，否则以 `now` 为基准。
pub fn serve_next(server: &mut Server, request: Request, now: SimTime) -> (SimTime, SimTime) {
    let wait = request.wait_time(now);
    let basis = if wait == SimTime::ZERO {
        request.arrival_time()
    } else {
        now
    };
    trace!(
        resource = request.resource_id(),
        arrival = %request.arrival_time(),
        now = %now,
        wait = %wait,
        "开始处理请求"
    );
    server.start_next(request);
    (wait, server.tick(basis))
}

/// 从零时刻起清空队列，按处理顺序返回每个请求的等待时间。
pub fn drain(server: &mut Server, queue: &mut FifoQueue<Request>) -> Vec<SimTime> {
    let mut waits = Vec::with_capacity(queue.size());
    let mut now = SimTime::ZERO;
    while let Some(request) = queue.dequeue() {
        let (wait, next) = serve_next(server, request, now);
        waits.push(wait);
        now = next;
    }
    waits
}

/// 轮转分配：第 `k` 个元素进入队列 `k % num_servers`，队列内保持原顺序。
pub fn distribute_round_robin<T>(
    items: impl IntoIterator<Item = T>,
    num_servers: usize,
) -> Result<Vec<FifoQueue<T>>, SimError> {
    if num_servers == 0 {
        return Err(SimError::InvalidServerCount { num_servers });
    }
    let mut queues: Vec<FifoQueue<T>> = (0..num_servers).map(|_| FifoQueue::new()).collect();
    for (k, item) in items.into_iter().enumerate() {
        queues[k % num_servers].enqueue(item);
    }
    Ok(queues)
}

fn into_requests(records: impl IntoIterator<Item = RequestRecord>) -> Vec<Request> {
    records.into_iter().map(Request::from).collect()
}

/// 单服务器 FIFO 调度器
#[derive(Debug)]
pub struct SingleServerScheduler {
    server: Server,
    queue: FifoQueue<Request>,
}

impl SingleServerScheduler {
    pub fn new(requests: impl IntoIterator<Item = Request>) -> Result<Self, SimError> {
        let queue: FifoQueue<Request> = requests.into_iter().collect();
        if queue.is_empty() {
            return Err(SimError::EmptyInput);
        }
        Ok(Self {
            server: Server::new(),
            queue,
        })
    }

    pub fn pending(&self) -> usize {
        self.queue.size()
    }

    /// 处理全部请求，返回等待时间
    pub fn run(mut self) -> Vec<SimTime> {
        drain(&mut self.server, &mut self.queue)
    }
}

/// 多服务器轮转调度器
#[derive(Debug)]
pub struct MultiServerScheduler {
    servers: Vec<Server>,
    queues: Vec<FifoQueue<Request>>,
}

impl MultiServerScheduler {
    pub fn new(
        requests: impl IntoIterator<Item = Request>,
        num_servers: usize,
    ) -> Result<Self, SimError> {
        if num_servers == 0 {
            return Err(SimError::InvalidServerCount { num_servers });
        }
        let intake: FifoQueue<Request> = requests.into_iter().collect();
        if intake.is_empty() {
            return Err(SimError::EmptyInput);
        }
        let queues = distribute_round_robin(intake, num_servers)?;
        Ok(Self {
            servers: (0..num_servers).map(|_| Server::new()).collect(),
            queues,
        })
    }

    pub fn num_servers(&self) -> usize {
        self.servers.len()
    }

    /// 分配给服务器 `server` 的队列
    pub fn queue(&self, server: usize) -> Option<&FifoQueue<Request>> {
        self.queues.get(server)
    }

    /// 依次处理每个服务器的队列，返回按服务器分组的等待时间
    pub fn run(mut self) -> Vec<Vec<SimTime>> {
        self.servers
            .iter_mut()
            .zip(self.queues.iter_mut())
            .enumerate()
            .map(|(j, (server, queue))| {
                let assigned = queue.size();
                let waits = drain(server, queue);
                debug!(server = j, requests = assigned, "服务器队列处理完毕");
                waits
            })
            .collect()
    }
}

/// 单服务器仿真，返回完整结果。
#[tracing::instrument(skip(records))]
pub fn run_one_server(
    records: impl IntoIterator<Item = RequestRecord>,
) -> Result<SimReport, SimError> {
    let scheduler = SingleServerScheduler::new(into_requests(records))?;
    info!(requests = scheduler.pending(), "▶️  开始单服务器仿真");
    let report = SimReport::from_server_waits(vec![scheduler.run()])?;
    info!(mean_wait = report.mean_wait, "✅ 仿真完成");
    Ok(report)
}

/// 多服务器仿真，返回完整结果。
#[tracing::instrument(skip(records))]
pub fn run_many_servers(
    records: impl IntoIterator<Item = RequestRecord>,
    num_servers: usize,
) -> Result<SimReport, SimError> {
    let scheduler = MultiServerScheduler::new(into_requests(records), num_servers)?;
    info!(num_servers, "▶️  开始多服务器仿真");
    let report = SimReport::from_server_waits(scheduler.run())?;
    info!(
        mean_wait = report.mean_wait,
        requests = report.waits.len(),
        "✅ 仿真完成"
    );
    Ok(report)
}

/// 单服务器平均等待时间
pub fn simulate_one_server(
    records: impl IntoIterator<Item = RequestRecord>,
) -> Result<f64, SimError> {
    run_one_server(records).map(|r| r.mean_wait)
}

/// 多服务器平均等待时间（对所有服务器的全部等待时间求平均）
pub fn simulate_many_servers(
    records: impl IntoIterator<Item = RequestRecord>,
    num_servers: usize,
) -> Result<f64, SimError> {
    run_many_servers(records, num_servers).map(|r| r.mean_wait)
}

//! 仿真核心模块
//!
//! 此模块包含请求、服务器、调度器以及虚拟时间等离散事件仿真的核心组件。

// 子模块声明
mod report;
mod request;
mod scheduler;
mod server;
mod time;

// 重新导出公共接口
pub use report::{ServerReport, SimReport, mean_wait};
pub use request::{Request, RequestRecord};
pub use scheduler::{
    MultiServerScheduler, SingleServerScheduler, distribute_round_robin, drain, run_many_servers,
    run_one_server, serve_next, simulate_many_servers, simulate_one_server,
};
pub use server::Server;
pub use time::SimTime;

//! 队列
//!
//! 目前只提供先进先出（FIFO）队列，调度器用它保存待处理的请求。

mod fifo;

pub use fifo::FifoQueue;

//! 请求日志
//!
//! 从本地文件或 HTTP 地址读取 CSV 格式的请求日志，解析为 `RequestRecord` 序列。
//! 每行：到达时间（整数）、资源标识、处理时长（整数），无表头。

mod csv_log;
mod source;

pub use csv_log::{parse_records, parse_str};
pub use source::{TraceSource, load};

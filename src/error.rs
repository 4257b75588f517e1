//! 错误类型
//!
//! `SimError` 来自仿真核心，`TraceError` 来自请求日志的获取与解析。

use thiserror::Error;

/// 仿真核心错误
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("no request records to simulate")]
    EmptyInput,

    #[error("invalid server count {num_servers}: at least one server is required")]
    InvalidServerCount { num_servers: usize },
}

/// 请求日志错误
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("request log source {locator} is unavailable: {reason}")]
    SourceUnavailable { locator: String, reason: String },

    #[error("request log source {url} returned HTTP status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("malformed request record on line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

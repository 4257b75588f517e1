//! 请求日志来源

use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use tracing::info;

use super::csv_log::parse_records;
use crate::error::TraceError;
use crate::sim::RequestRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceSource {
    /// HTTP(S) 地址，阻塞式获取
    Url(String),
    File(PathBuf),
}

impl fmt::Display for TraceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceSource::Url(url) => write!(f, "{url}"),
            TraceSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// 读取并解析请求日志。
#[tracing::instrument(skip(source), fields(source = %source))]
pub fn load(source: &TraceSource) -> Result<Vec<RequestRecord>, TraceError> {
    let records = match source {
        TraceSource::Url(url) => fetch_url(url)?,
        TraceSource::File(path) => {
            let file = File::open(path).map_err(|e| TraceError::SourceUnavailable {
                locator: source.to_string(),
                reason: e.to_string(),
            })?;
            parse_records(BufReader::new(file))?
        }
    };
    info!(records = records.len(), "📥 请求日志已加载");
    Ok(records)
}

fn fetch_url(url: &str) -> Result<Vec<RequestRecord>, TraceError> {
    let unavailable = |e: reqwest::Error| TraceError::SourceUnavailable {
        locator: url.to_string(),
        reason: e.to_string(),
    };
    let resp = reqwest::blocking::get(url).map_err(unavailable)?;
    let status = resp.status();
    if !status.is_success() {
        return Err(TraceError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    let body = resp.bytes().map_err(unavailable)?;
    parse_records(&body[..])
}

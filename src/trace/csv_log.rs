//! CSV 请求日志解析

use std::io::Read;

use tracing::debug;

use crate::error::TraceError;
use crate::sim::RequestRecord;

const FIELDS: usize = 3;

/// 从任意 reader 解析请求日志；多余的列被忽略。
///
/// 只去掉两个整数字段两侧的空白，资源标识原样保留。
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<RequestRecord>, TraceError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::None)
        .from_reader(reader);

    let mut records = Vec::new();
    for (idx, row) in rdr.records().enumerate() {
        let row = row?;
        let line = row.position().map_or(idx as u64 + 1, |p| p.line());
        records.push(parse_row(&row, line)?);
    }
    debug!(records = records.len(), "请求日志解析完成");
    Ok(records)
}

pub fn parse_str(raw: &str) -> Result<Vec<RequestRecord>, TraceError> {
    parse_records(raw.as_bytes())
}

fn parse_row(row: &csv::StringRecord, line: u64) -> Result<RequestRecord, TraceError> {
    if row.len() < FIELDS {
        return Err(TraceError::MalformedRecord {
            line,
            reason: format!("expected {FIELDS} fields, found {}", row.len()),
        });
    }
    let arrival_time = parse_time(&row[0], "arrival time", line)?;
    let processing_time = parse_time(&row[2], "processing time", line)?;
    Ok(RequestRecord::new(arrival_time, &row[1], processing_time))
}

fn parse_time(field: &str, what: &str, line: u64) -> Result<u64, TraceError> {
    field
        .trim()
        .parse::<u64>()
        .map_err(|e| TraceError::MalformedRecord {
            line,
            reason: format!("{what} {field:?}: {e}"),
        })
}

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use crate::error::TraceError;
use crate::sim::RequestRecord;
use crate::trace::{TraceSource, load, parse_str};

#[test]
fn parses_rows_in_order() {
    let raw = "7,/images/test.gif,1\n9,/help.html,2\n9,/index.html,3\n";
    let records = parse_str(raw).expect("parse");
    assert_eq!(
        records,
        vec![
            RequestRecord::new(7, "/images/test.gif", 1),
            RequestRecord::new(9, "/help.html", 2),
            RequestRecord::new(9, "/index.html", 3),
        ]
    );
}

#[test]
fn trims_integer_fields_and_ignores_extra_columns() {
    let records = parse_str(" 1 ,a.html, 4 ,extra\n").expect("parse");
    assert_eq!(records, vec![RequestRecord::new(1, "a.html", 4)]);
}

#[test]
fn resource_id_is_kept_verbatim() {
    let records = parse_str("1, a b ,2\n").expect("parse");
    assert_eq!(records, vec![RequestRecord::new(1, " a b ", 2)]);
}

#[test]
fn empty_log_parses_to_no_records() {
    assert!(parse_str("").expect("parse").is_empty());
}

#[test]
fn short_row_is_malformed_with_line_number() {
    let err = parse_str("1,a,2\n3,b\n").expect_err("short row");
    match err {
        TraceError::MalformedRecord { line, reason } => {
            assert_eq!(line, 2);
            assert!(reason.contains("expected 3 fields"), "{reason}");
        }
        other => panic!("expected MalformedRecord, got {other:?}"),
    }
}

#[test]
fn non_integer_or_negative_time_is_malformed() {
    assert!(matches!(
        parse_str("x,a,2\n"),
        Err(TraceError::MalformedRecord { line: 1, .. })
    ));
    assert!(matches!(
        parse_str("1,a,2\n2,b,-3\n"),
        Err(TraceError::MalformedRecord { line: 2, .. })
    ));
}

#[test]
fn missing_file_is_source_unavailable() {
    let path = std::env::temp_dir().join(format!(
        "reqsim-missing-{}-does-not-exist.csv",
        std::process::id()
    ));
    let err = load(&TraceSource::File(path)).expect_err("missing file");
    assert!(matches!(err, TraceError::SourceUnavailable { .. }), "{err:?}");
}

#[test]
fn loads_records_from_local_file() {
    let path = std::env::temp_dir().join(format!("reqsim-load-{}.csv", std::process::id()));
    std::fs::write(&path, "0,a,5\n1,b,3\n").expect("write temp file");
    let records = load(&TraceSource::File(path.clone())).expect("load");
    assert_eq!(records.len(), 2);
    assert_eq!(records[1], RequestRecord::new(1, "b", 3));
    let _ = std::fs::remove_file(&path);
}

/// 在本地端口上应答一次 HTTP 请求，返回可访问的 URL
fn serve_once(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut req = Vec::new();
        let mut buf = [0u8; 1024];
        while !req.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).expect("read request");
            if n == 0 {
                break;
            }
            req.extend_from_slice(&buf[..n]);
        }
        let resp = format!(
            "HTTP/1.1 {status}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(resp.as_bytes()).expect("write response");
    });
    format!("http://{addr}/requests.csv")
}

#[test]
fn loads_records_from_url() {
    let url = serve_once("200 OK", "0,a,5\n1,b,3\n");
    let records = load(&TraceSource::Url(url)).expect("load");
    assert_eq!(
        records,
        vec![RequestRecord::new(0, "a", 5), RequestRecord::new(1, "b", 3)]
    );
}

#[test]
fn error_status_from_url_is_reported() {
    let url = serve_once("404 Not Found", "missing");
    let err = load(&TraceSource::Url(url)).expect_err("404");
    assert!(
        matches!(err, TraceError::HttpStatus { status: 404, .. }),
        "{err:?}"
    );
}

#[test]
fn unreachable_url_is_source_unavailable() {
    // 绑定后立即释放端口，连接会被拒绝
    let addr = TcpListener::bind("127.0.0.1:0")
        .expect("bind")
        .local_addr()
        .expect("local addr");
    let err = load(&TraceSource::Url(format!("http://{addr}/requests.csv")))
        .expect_err("connection refused");
    assert!(matches!(err, TraceError::SourceUnavailable { .. }), "{err:?}");
}

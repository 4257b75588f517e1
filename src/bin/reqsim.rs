use clap::{Args as ClapArgs, Parser};
use reqsim::sim::{SimReport, run_many_servers, run_one_server};
use reqsim::trace::{self, TraceSource};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "reqsim",
    about = "Replay a request log against one or more servers and report the average wait time"
)]
struct Args {
    #[command(flatten)]
    source: SourceArgs,

    /// Number of servers; runs single-server mode when omitted
    #[arg(short, long)]
    num: Option<usize>,

    /// Print every individual wait time
    #[arg(long)]
    waits: bool,

    /// Write the full report as JSON
    #[arg(long)]
    report_json: Option<PathBuf>,
}

/// 请求日志来源，二者必须且只能给出一个
#[derive(Debug, ClapArgs)]
#[group(required = true, multiple = false)]
struct SourceArgs {
    /// URL of a CSV request log
    #[arg(short, long)]
    url: Option<String>,

    /// Path to a local CSV request log
    #[arg(short, long)]
    file: Option<PathBuf>,
}

impl SourceArgs {
    fn to_source(&self) -> Option<TraceSource> {
        self.url
            .clone()
            .map(TraceSource::Url)
            .or_else(|| self.file.clone().map(TraceSource::File))
    }
}

fn run(args: &Args) -> Result<SimReport, Box<dyn std::error::Error>> {
    let source = args
        .source
        .to_source()
        .ok_or("either --url or --file is required")?;
    let records = trace::load(&source)?;
    let report = match args.num {
        Some(n) => run_many_servers(records, n)?,
        None => run_one_server(records)?,
    };

    if let Some(path) = &args.report_json {
        let raw = serde_json::to_string_pretty(&report)?;
        fs::write(path, raw)?;
    }
    Ok(report)
}

fn main() -> ExitCode {
    // 日志写到 stderr，stdout 只保留结果
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(report) => {
            if args.waits {
                for w in &report.waits {
                    println!("{w}");
                }
            }
            println!("Average Wait time is: {:6.2} secs.", report.mean_wait);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use netrecon::gate::{self, GateDecision};
use netrecon::types::ProbeResult;
use netrecon::{ports, report, scanner};

use anyhow::{ensure, Result};
use clap::Parser;

/// netrecon — safe-by-default async TCP port scanner with banner grabbing.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "netrecon",
    version,
    about = "Safe-by-default async TCP port scanner with banner grabbing.",
    long_about = None
)]
struct Cli {
    /// Target host. Loopback targets (localhost, 127.0.0.1, ::1) are
    /// allowed by default; anything else requires --force.
    target: String,

    /// Ports to scan, e.g. 22,80,443,8000-8100.
    #[arg(long, default_value = "1-1024")]
    ports: String,

    /// Socket connect timeout in seconds.
    #[arg(long, default_value_t = 0.5)]
    timeout: f64,

    /// Max concurrent connect attempts.
    #[arg(long, default_value_t = 200)]
    workers: usize,

    /// Write the scan summary as pretty JSON to this path (optional).
    #[arg(long)]
    json: Option<PathBuf>,

    /// Allow scanning non-local targets (use only with permission).
    #[arg(long, default_value_t = false)]
    force: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let GateDecision::Denied(reason) = gate::check_target(&cli.target, cli.force) {
        println!("{reason}");
        return Ok(());
    }

    ensure!(
        cli.timeout.is_finite() && cli.timeout >= 0.0,
        "--timeout must be a non-negative number of seconds"
    );
    let connect_timeout = Duration::from_secs_f64(cli.timeout);

    let ports = ports::parse_port_spec(&cli.ports)?;
    println!(
        "Starting scan {} ports {}..{} threads={} timeout={}",
        cli.target,
        ports[0],
        ports[ports.len() - 1],
        cli.workers,
        cli.timeout
    );

    let on_open: scanner::OpenSink = Arc::new(|r: &ProbeResult| {
        if r.banner.is_empty() {
            println!("Open: {}", r.port);
        } else {
            println!("Open: {} | {}", r.port, r.banner);
        }
    });

    let start = Instant::now();
    let results = scanner::scan_ports(
        &cli.target,
        &ports,
        cli.workers,
        connect_timeout,
        Some(on_open),
    )
    .await?;
    let elapsed = start.elapsed().as_secs_f64();
    println!("Scan complete in {elapsed:.2}s");

    let summary = report::build_summary(&cli.target, ports.len(), results, elapsed);
    if let Some(path) = cli.json.as_deref() {
        report::write_summary_json(path, &summary)?;
        println!("Saved JSON to {}", path.display());
    }

    Ok(())
}

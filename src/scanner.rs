use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::probe;
use crate::types::ProbeResult;

/// Callback invoked from worker tasks the moment a port reports open,
/// before the scan as a whole finishes.
pub type OpenSink = Arc<dyn Fn(&ProbeResult) + Send + Sync>;

/// Scan `ports` on `target` using asynchronous TCP connects with a
/// concurrency limit.
///
/// - Limits concurrent connect attempts using a `Semaphore`; one task per
///   port, admitted as permits free up.
/// - Completion order is unspecified; the returned vector holds exactly one
///   `ProbeResult` per input port, in arrival order.
/// - Per-port failures never surface here: each probe degrades to a result
///   value, so the scan always runs to completion over all ports.
pub async fn scan_ports(
    target: &str,
    ports: &[u16],
    concurrency: usize,
    connect_timeout: Duration,
    on_open: Option<OpenSink>,
) -> Result<Vec<ProbeResult>> {
    scan_ports_internal(target, ports, concurrency, connect_timeout, on_open, None).await
}

/// Variant that accepts a `CancellationToken` to allow external cancellation.
/// A cancelled run returns results only for ports already submitted.
pub async fn scan_ports_with_cancel(
    target: &str,
    ports: &[u16],
    concurrency: usize,
    connect_timeout: Duration,
    on_open: Option<OpenSink>,
    cancel: CancellationToken,
) -> Result<Vec<ProbeResult>> {
    scan_ports_internal(
        target,
        ports,
        concurrency,
        connect_timeout,
        on_open,
        Some(cancel),
    )
    .await
}

async fn scan_ports_internal(
    target: &str,
    ports: &[u16],
    concurrency: usize,
    connect_timeout: Duration,
    on_open: Option<OpenSink>,
    cancel_opt: Option<CancellationToken>,
) -> Result<Vec<ProbeResult>> {
    let sem = Arc::new(Semaphore::new(concurrency.clamp(1, 5_000)));
    let mut set = JoinSet::new();
    let cancel = cancel_opt.unwrap_or_default();
    let target: Arc<str> = Arc::from(target);

    // Ctrl-C cancels the scan cooperatively.
    let cancel_ctrlc = cancel.clone();
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        cancel_ctrlc.cancel();
    });

    for &port in ports {
        if cancel.is_cancelled() {
            break;
        }
        let permit = sem
            .clone()
            .acquire_owned()
            .await
            .expect("semaphore in scope");
        let target = target.clone();
        let on_open = on_open.clone();

        set.spawn(async move {
            let _permit = permit; // keep permit until task completes

            let result = probe::probe_port(&target, port, connect_timeout).await;
            if result.open {
                if let Some(sink) = &on_open {
                    sink(&result);
                }
            }
            result
        });
    }

    let mut results = Vec::with_capacity(ports.len());
    while let Some(joined) = set.join_next().await {
        results.push(joined?);
    }
    Ok(results)
}

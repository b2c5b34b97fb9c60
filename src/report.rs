use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use time::{format_description::well_known, OffsetDateTime};

use crate::types::{ProbeResult, ScanSummary};

/// Assemble the immutable summary for a finished scan: open-only results,
/// sorted ascending by port, stamped with the current UTC time.
pub fn build_summary(
    target: &str,
    ports_scanned: usize,
    results: Vec<ProbeResult>,
    elapsed_secs: f64,
) -> ScanSummary {
    let mut open_ports: Vec<ProbeResult> = results.into_iter().filter(|r| r.open).collect();
    open_ports.sort_by_key(|r| r.port);

    ScanSummary {
        target: target.to_string(),
        ports_scanned,
        open_ports,
        elapsed: elapsed_secs,
        timestamp: now_utc_rfc3339(),
    }
}

/// Write the summary as pretty-printed JSON (2-space indent). Unlike probe
/// failures, a write failure here is fatal and propagates to the caller.
pub fn write_summary_json(path: &Path, summary: &ScanSummary) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create JSON output file: {}", path.display()))?;
    serde_json::to_writer_pretty(file, summary)
        .with_context(|| format!("failed to write JSON to {}", path.display()))?;
    Ok(())
}

fn now_utc_rfc3339() -> String {
    let now = OffsetDateTime::now_utc();
    now.format(&well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("1970-01-01T00:00:00Z"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(port: u16, open: bool) -> ProbeResult {
        ProbeResult {
            port,
            open,
            banner: String::new(),
        }
    }

    #[test]
    fn summary_filters_closed_and_sorts_by_port() {
        let results = vec![result(443, true), result(80, false), result(22, true)];
        let summary = build_summary("localhost", 3, results, 0.42);
        assert_eq!(summary.ports_scanned, 3);
        let open: Vec<u16> = summary.open_ports.iter().map(|r| r.port).collect();
        assert_eq!(open, vec![22, 443]);
    }

    #[test]
    fn timestamp_is_utc_rfc3339() {
        let summary = build_summary("localhost", 0, Vec::new(), 0.0);
        assert!(summary.timestamp.ends_with('Z'));
        assert!(summary.timestamp.contains('T'));
    }

    #[test]
    fn summary_json_shape() {
        let summary = build_summary("localhost", 1, vec![result(22, true)], 1.5);
        let v = serde_json::to_value(&summary).unwrap();
        assert_eq!(v["target"], "localhost");
        assert_eq!(v["ports_scanned"], 1);
        assert_eq!(v["open_ports"][0]["port"], 22);
        assert_eq!(v["open_ports"][0]["open"], true);
        assert_eq!(v["open_ports"][0]["banner"], "");
    }
}

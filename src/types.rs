use serde::{Deserialize, Serialize};

/// Outcome of probing one TCP port. `banner` is empty when the port is
/// closed or the open port sent nothing before the read deadline.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub port: u16,
    pub open: bool,
    pub banner: String,
}

/// Aggregate summary of one completed scan. `open_ports` holds only the
/// open results, sorted ascending by port.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ScanSummary {
    pub target: String,
    pub ports_scanned: usize,
    pub open_ports: Vec<ProbeResult>,
    pub elapsed: f64,
    pub timestamp: String,
}

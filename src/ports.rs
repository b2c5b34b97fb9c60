use anyhow::{bail, Context, Result};
use std::collections::BTreeSet;

/// Parse a comma-separated port specification into an ascending,
/// deduplicated list of TCP ports (1..=65535).
///
/// Supported token forms:
/// - single port number: `80`
/// - inclusive range: `8000-8100`
/// - whitespace around tokens is ignored
///
/// Ranges with `start > end` are rejected rather than silently empty.
pub fn parse_port_spec(spec: &str) -> Result<Vec<u16>> {
    let mut out = BTreeSet::new();

    for token in spec.split(',') {
        let token = token.trim();
        if token.is_empty() {
            bail!("invalid port spec: empty token in {spec:?}");
        }

        // Range `start-end`
        if let Some((a, b)) = token.split_once('-') {
            let start = parse_port(a.trim())
                .with_context(|| format!("invalid start in range: {token}"))?;
            let end = parse_port(b.trim())
                .with_context(|| format!("invalid end in range: {token}"))?;
            if start > end {
                bail!("invalid range {start}-{end} (start > end)");
            }
            out.extend(start..=end);
            continue;
        }

        // Single number
        let p = parse_port(token).with_context(|| format!("invalid port value: {token}"))?;
        out.insert(p);
    }

    Ok(out.into_iter().collect())
}

fn parse_port(s: &str) -> Result<u16> {
    let val: u32 = s.parse().map_err(|e| anyhow::anyhow!("{e}: {s:?}"))?;
    if val == 0 || val > 65535 {
        bail!("port out of range: {val}");
    }
    Ok(val as u16)
}

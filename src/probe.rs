use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time;

use crate::types::ProbeResult;

/// Fixed deadline for the banner phase, independent of the connect timeout.
const BANNER_TIMEOUT: Duration = Duration::from_millis(800);
const BANNER_MAX_BYTES: usize = 1024;

/// Probe a single TCP port on `target`, bounded by `connect_timeout`.
///
/// - Connect failure, timeout, or name-resolution failure yields
///   `{open: false, banner: ""}`.
/// - On connect, sends `\r\n` to coax line-oriented services into talking,
///   then attempts a short banner read under `BANNER_TIMEOUT`. Any failure
///   in the banner phase leaves `open: true` with an empty banner.
///
/// This function never returns an error: one unreachable port must not
/// abort the batch. The socket is task-local and closed on every exit path.
pub async fn probe_port(target: &str, port: u16, connect_timeout: Duration) -> ProbeResult {
    match time::timeout(connect_timeout, TcpStream::connect((target, port))).await {
        Ok(Ok(mut stream)) => {
            let banner = read_banner(&mut stream).await.unwrap_or_default();
            ProbeResult {
                port,
                open: true,
                banner,
            }
        }
        // Refused, unreachable, resolution failure, or timed out.
        _ => ProbeResult {
            port,
            open: false,
            banner: String::new(),
        },
    }
}

/// Try to read up to `BANNER_MAX_BYTES` from the stream and convert to a
/// trimmed, lossy UTF-8 string. Returns `None` when nothing arrived in time.
async fn read_banner(stream: &mut TcpStream) -> Option<String> {
    // A failed nudge is fine; some services banner unprompted.
    let _ = time::timeout(BANNER_TIMEOUT, stream.write_all(b"\r\n")).await;

    let mut buf = vec![0u8; BANNER_MAX_BYTES];
    match time::timeout(BANNER_TIMEOUT, stream.read(&mut buf)).await {
        Ok(Ok(n)) if n > 0 => {
            buf.truncate(n);
            let s = String::from_utf8_lossy(&buf).trim().to_string();
            if s.is_empty() {
                None
            } else {
                Some(s)
            }
        }
        _ => None,
    }
}

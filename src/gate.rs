/// Target aliases that may be scanned without `--force`.
const LOOPBACK_ALIASES: &[&str] = &["localhost", "127.0.0.1", "::1"];

/// Verdict of the local-only safety gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Allowed,
    Denied(String),
}

/// Whether the target string names the local loopback. This is a policy
/// check on the literal string, not a DNS or routing lookup.
pub fn is_local_target(target: &str) -> bool {
    LOOPBACK_ALIASES.contains(&target)
}

/// Gate a scan target: loopback aliases pass, anything else needs `force`.
pub fn check_target(target: &str, force: bool) -> GateDecision {
    if force || is_local_target(target) {
        GateDecision::Allowed
    } else {
        GateDecision::Denied(format!(
            "Refusing to scan non-local target {target:?} without --force. \
             Use only on systems you own or with permission."
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loopback_aliases_allowed() {
        for t in ["localhost", "127.0.0.1", "::1"] {
            assert_eq!(check_target(t, false), GateDecision::Allowed);
        }
    }

    #[test]
    fn remote_denied_without_force() {
        match check_target("93.184.216.34", false) {
            GateDecision::Denied(reason) => assert!(reason.contains("--force")),
            GateDecision::Allowed => panic!("remote target must be denied"),
        }
    }

    #[test]
    fn force_overrides_gate() {
        assert_eq!(check_target("93.184.216.34", true), GateDecision::Allowed);
    }
}

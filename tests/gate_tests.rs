use netrecon::gate::{check_target, is_local_target, GateDecision};

#[test]
fn loopback_aliases_pass_without_force() {
    for target in ["localhost", "127.0.0.1", "::1"] {
        assert!(is_local_target(target));
        assert_eq!(check_target(target, false), GateDecision::Allowed);
    }
}

#[test]
fn remote_target_denied_without_force() {
    assert!(!is_local_target("93.184.216.34"));
    let decision = check_target("93.184.216.34", false);
    match decision {
        GateDecision::Denied(reason) => {
            assert!(reason.contains("--force"));
            assert!(reason.contains("93.184.216.34"));
        }
        GateDecision::Allowed => panic!("remote target must be denied"),
    }
}

#[test]
fn force_allows_remote_target() {
    assert_eq!(check_target("93.184.216.34", true), GateDecision::Allowed);
}

#[test]
fn gate_matches_literal_strings_only() {
    // No DNS or normalization: near-misses are not loopback.
    assert!(!is_local_target("localhost.localdomain"));
    assert!(!is_local_target("127.0.0.2"));
    assert!(!is_local_target("LOCALHOST"));
}

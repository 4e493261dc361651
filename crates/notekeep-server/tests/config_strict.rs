#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use notekeep_server::config::{self, GroupBy};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "127.0.0.1:5000"
metrics:
  enabeld: true # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "INVALID_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:5000");
    assert!(cfg.metrics.enabled);
    assert_eq!(cfg.metrics.group_by, GroupBy::Endpoint);
}

#[test]
fn group_by_path() {
    let cfg = config::load_from_str(
        r#"
version: 1
metrics:
  group_by: path
"#,
    )
    .expect("must parse");
    assert_eq!(cfg.metrics.group_by, GroupBy::Path);
}

#[test]
fn reject_unknown_group_by() {
    let bad = r#"
version: 1
metrics:
  group_by: handler
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "INVALID_CONFIG");
}

#[test]
fn reject_unsupported_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn reject_bad_listen_address() {
    let bad = r#"
version: 1
server:
  listen: "localhost"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "INVALID_CONFIG");
}

#[test]
fn explicit_missing_file_fails() {
    let err = config::load(Some("/nonexistent/notekeep.yaml")).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "INVALID_CONFIG");
}

#[test]
fn default_file_in_dir_is_picked_up() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(config::DEFAULT_PATH),
        "version: 1\nserver:\n  listen: \"127.0.0.1:7000\"\n",
    )
    .unwrap();

    let cfg = config::load_in(dir.path(), None).expect("must load");
    assert_eq!(cfg.server.listen, "127.0.0.1:7000");
}

#[test]
fn broken_default_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(config::DEFAULT_PATH), "version: 3\n").unwrap();

    let err = config::load_in(dir.path(), None).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn empty_dir_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config::load_in(dir.path(), None).expect("defaults");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:5000");
    assert!(cfg.metrics.enabled);
}

#[test]
fn explicit_path_wins_over_default_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(config::DEFAULT_PATH), "version: 1\n").unwrap();
    let explicit = dir.path().join("other.yaml");
    std::fs::write(&explicit, "version: 1\nmetrics:\n  enabled: false\n").unwrap();

    let cfg = config::load_in(dir.path(), explicit.to_str()).expect("must load");
    assert!(!cfg.metrics.enabled);
}

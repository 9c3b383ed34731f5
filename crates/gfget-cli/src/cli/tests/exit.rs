//! Tests for mapping run errors onto process exit codes.

use super::exit_code;
use gfget_core::Error;

#[test]
fn http_status_exits_2() {
    let err = anyhow::Error::new(Error::Status {
        url: "https://fonts.google.com/download/list?family=Roboto".into(),
        code: 500,
    });
    assert_eq!(exit_code(&err), 2);
}

#[test]
fn unsafe_path_exits_1() {
    let err = anyhow::Error::new(Error::UnsafePath("../x.ttf".into()));
    assert_eq!(exit_code(&err), 1);
}

#[test]
fn config_errors_exit_1() {
    let err = anyhow::anyhow!("parse /home/u/.config/gfget/config.toml");
    assert_eq!(exit_code(&err), 1);
}

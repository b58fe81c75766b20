#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;

pub const MENU: &str = "Menu\n\
1 - Full-time Employee\n\
2 - Part-time Employee\n\
3 - Contractual Employee\n\
4 - Display Payroll Report\n\
5 - Exit\n\
Enter your choice: ";

pub fn cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("payroll");
    cmd.env_remove("PAYROLL_LOG");
    cmd
}

/// Feeds `script` as standard input and returns everything printed to stdout.
pub fn run_session(args: &[&str], script: &str) -> String {
    let out = cmd()
        .args(args)
        .write_stdin(script)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(out).expect("utf8 stdout")
}

/// Runs a `--json` session and parses the first JSON envelope in its output.
pub fn run_json_report(script: &str) -> Value {
    let out = run_session(&["--json"], script);
    let start = out.find('{').expect("json report in output");
    let end = out.rfind('}').expect("json report end");
    serde_json::from_str(&out[start..=end]).expect("valid json output")
}

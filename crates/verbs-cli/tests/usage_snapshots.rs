mod common;
use common::mytool;

fn run_usage(args: &[&str]) -> String {
    let output = mytool().args(args).output().unwrap();
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_usage_without_command() {
    let usage = run_usage(&[]);
    insta::assert_snapshot!("usage", usage);
}

#[test]
fn test_usage_after_unknown_command() {
    let usage = run_usage(&["frobnicate"]);
    insta::assert_snapshot!("usage", usage);
}

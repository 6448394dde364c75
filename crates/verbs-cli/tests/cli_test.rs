mod common;
use common::mytool;

use predicates::prelude::*;

#[test]
fn test_hello_with_name() {
    mytool()
        .args(["hello", "--name=Ada"])
        .assert()
        .success()
        .stdout("Hello, Ada!\n")
        .stderr("");
}

#[test]
fn test_hello_without_flags_uses_handler_default() {
    mytool()
        .arg("hello")
        .assert()
        .success()
        .stdout("Hello, world!\n");
}

#[test]
fn test_no_command_prints_usage_and_fails() {
    mytool()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Available commands:"))
        .stdout(predicate::str::contains("  hello\tPrint hello world"))
        .stdout(predicate::str::contains("  repeat\tPrint a text several times"))
        .stderr("Error: no command given\n");
}

#[test]
fn test_unknown_command_prints_usage_and_fails() {
    mytool()
        .arg("nope")
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Usage: mytool <command> [options]"))
        .stderr("Error: Unknown command 'nope'\n");
}

#[test]
fn test_unknown_flag_fails_without_running_handler() {
    mytool()
        .args(["hello", "--zzz=1"])
        .assert()
        .code(1)
        .stdout("")
        .stderr("Error: unknown flag '--zzz' for command 'hello'\n");
}

#[test]
fn test_type_coercion_error_exits_with_one() {
    mytool()
        .args(["repeat", "--times=abc"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(
            "invalid value 'abc' for flag '--times' of command 'repeat': expected int",
        ));
}

#[test]
fn test_handler_error_names_the_command() {
    mytool()
        .args(["repeat", "--times=-1"])
        .assert()
        .code(1)
        .stderr("Error executing command 'repeat': --times must not be negative (got -1)\n");
}

#[test]
fn test_repeat_typed_flags() {
    mytool()
        .args(["repeat", "--text", "hey", "--times=2", "--upper"])
        .assert()
        .success()
        .stdout("HEY\nHEY\n");
}

#[test]
fn test_json_error_format() {
    mytool()
        .arg("nope")
        .env("VERBS_ERROR_FORMAT", "json")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(r#""error":"unknown_command""#))
        .stderr(predicate::str::contains(r#""command":"nope""#));
}

#[test]
fn test_color_can_be_forced_and_disabled() {
    mytool()
        .arg("nope")
        .env("VERBS_COLOR", "always")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\u{1b}["));

    mytool()
        .arg("nope")
        .env("VERBS_COLOR", "always")
        .env("NO_COLOR", "1")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_debug_logging_traces_dispatch() {
    mytool()
        .arg("hello")
        .env("VERBS_LOG", "debug")
        .assert()
        .success()
        .stdout("Hello, world!\n")
        .stderr(predicate::str::contains("resolving command 'hello'"))
        .stderr(predicate::str::contains("command 'hello' completed"));
}

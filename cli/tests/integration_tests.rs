use std::process::{Command, Output};

fn run(bin: &str, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|err| panic!("failed to run {bin}: {err}"))
}

fn typed(args: &[&str]) -> Output {
    run(env!("CARGO_BIN_EXE_typed-cli"), args)
}

fn nested(args: &[&str]) -> Output {
    run(env!("CARGO_BIN_EXE_nested-cli"), args)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// ---------------------------------------------------------------------------
// typed-cli
// ---------------------------------------------------------------------------

#[test]
fn typed_defaults_and_overrides_reach_destination() {
    let out = typed(&["--option3", "42", "pos1"]);
    assert!(out.status.success());

    let text = stdout(&out);
    assert!(text.contains("non-option params: "), "params label missing: {text}");
    assert!(text.contains("\"pos1\""), "params missing: {text}");
    assert!(text.contains("\"option5\": \"bletch\""), "defaults missing: {text}");
    assert!(text.contains("option1: default string"));
    assert!(text.contains("option3: 42"));
    assert!(text.contains("option4: false"));
}

#[test]
fn typed_bool_flag_passes_following_token_to_params() {
    let out = typed(&["--option4", "file.txt"]);
    assert!(out.status.success());

    let text = stdout(&out);
    assert!(text.contains("option4: true"));
    assert!(text.contains("\"file.txt\""));
}

#[test]
fn typed_help_prints_usage() {
    let out = typed(&["--help"]);
    assert!(out.status.success());

    let text = stdout(&out);
    assert!(
        text.starts_with(
            "usage: typed-cli [--help <bool>] [--option1 <string>] [--option2 <string>] \
             [--option3 <int>] [--option4 <bool>] [--option5 <string>] [param ...]\n"
        ),
        "unexpected usage: {text}"
    );
    assert!(text.contains("A test CLI program."));
    assert!(text.contains("--option3 <int>     An int option (default: 23)"));
}

#[test]
fn typed_unknown_option_exits_with_diagnostic() {
    let out = typed(&["--nope", "1"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "*** Unknown option: --nope\n");
}

#[test]
fn typed_bad_int_exits_with_diagnostic() {
    let out = typed(&["--option3", "many"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "*** Bad int: many\n");
}

#[test]
fn typed_missing_value_exits_with_diagnostic() {
    let out = typed(&["--option1"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "*** Missing value for option1\n");
}

// ---------------------------------------------------------------------------
// nested-cli
// ---------------------------------------------------------------------------

#[test]
fn nested_builds_object_from_dotted_flags() {
    let out = nested(&[
        "--entity.age",
        "23",
        "--entity.name",
        "Joe",
        "--foo",
        "bar",
        "--blah",
        "true",
        "extra",
    ]);
    assert!(out.status.success());

    let text = stdout(&out);
    assert!(text.contains("\"extra\""));
    assert!(text.contains("age: 23"));
    assert!(text.contains("name: Joe"));
    assert!(text.contains("blah: true"));
    assert!(text.contains("foo: bar"));
    assert!(text.contains("\"name\": \"Joe\""));
}

#[test]
fn nested_defaults_when_absent() {
    let out = nested(&["only", "params"]);
    assert!(out.status.success());

    let text = stdout(&out);
    assert!(text.contains("age: 100"));
    assert!(text.contains("name: anonymous"));
    assert!(text.contains("entity: null"));
}

#[test]
fn nested_wrong_type_exits_with_diagnostic() {
    let out = nested(&["--entity.age", "old"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).ends_with("*** Not an int: old\n"));
}

#[test]
fn nested_conflicting_paths_exit_with_diagnostic() {
    let out = nested(&["--entity", "1", "--entity.age", "2"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "*** structure incongruence for entity.age\n");
}

#[test]
fn nested_trailing_flag_exits_with_diagnostic() {
    let out = nested(&["--verbose"]);
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "*** Missing value for verbose\n");
}

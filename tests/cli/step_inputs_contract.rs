use crate::harness::TestContext;

#[test]
fn reads_step_inputs_from_environment() {
    let ctx = TestContext::new();

    ctx.cli()
        .env("INPUT_JS-NAME", "env-list.js")
        .env("INPUT_VALUES", "a, b")
        .env("INPUT_VALUE-TYPE", "string")
        .env("INPUT_DECL-KIND", "var")
        .assert()
        .success();

    assert_eq!(ctx.read_file("env-list.js"), "var env_list = [\"a\", \"b\"];\n");
}

#[test]
fn blank_optional_inputs_use_defaults() {
    let ctx = TestContext::new();

    ctx.cli()
        .env("INPUT_JS-NAME", "list.js")
        .env("INPUT_VALUES", "[true]")
        .env("INPUT_DECL-KIND", "")
        .env("INPUT_EXPORT-STYLE", "")
        .env("INPUT_FIELD", "")
        .assert()
        .success();

    assert_eq!(ctx.read_file("list.js"), "let list = [true];\n");
}

#[test]
fn parse_mode_is_ignored_for_list_values() {
    let ctx = TestContext::new();

    ctx.cli()
        .env("INPUT_JS-NAME", "list.js")
        .env("INPUT_VALUES", "a,b")
        .env("INPUT_VALUE-TYPE", "string")
        .env("INPUT_PARSE-MODE", "yaml")
        .assert()
        .success();

    assert_eq!(ctx.read_file("list.js"), "let list = [\"a\", \"b\"];\n");
}

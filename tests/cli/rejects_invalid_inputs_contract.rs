use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn rejects_reserved_array_name() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--js-name", "a.js", "--array-name", "class", "--values", "[1]"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Invalid array-name: reserved keyword"));

    assert!(!ctx.file_exists("a.js"));
}

#[test]
fn rejects_malformed_json() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--js-name", "a.js", "--values", "[1, 2,]"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse values as JSON"));

    assert!(!ctx.file_exists("a.js"));
}

#[test]
fn rejects_code_in_permissive_mode() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--js-name", "a.js", "--values", "process.exit()", "--parse-mode", "js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("identifier 'process' is not allowed"));

    assert!(!ctx.file_exists("a.js"));
}

#[test]
fn rejects_object_values() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--js-name", "a.js", "--values", r#"{"a": 1}"#])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported value type: object"));
}

#[test]
fn rejects_unknown_decl_kind() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--js-name", "a.js", "--values", "[1]", "--decl-kind", "int"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid decl-kind: int"));
}

#[test]
fn requires_values() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--js-name", "a.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("values input is required"));
}

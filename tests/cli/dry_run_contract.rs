use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn dry_run_prints_without_writing() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--js-name", "list.js", "--values", "[1]", "--dry-run", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("let list = [1];"));

    assert!(!ctx.file_exists("list.js"));
    assert_eq!(ctx.step_output(), "file=list.js\n");
}

#[test]
fn dry_run_ignores_overwrite_conflict() {
    let ctx = TestContext::new();
    ctx.write_file("list.js", "keep me\n");

    ctx.cli()
        .args([
            "--js-name",
            "list.js",
            "--values",
            "[1]",
            "--overwrite",
            "false",
            "--dry-run",
            "true",
        ])
        .assert()
        .success();

    assert_eq!(ctx.read_file("list.js"), "keep me\n");
}

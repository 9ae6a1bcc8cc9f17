use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn rejects_existing_file_when_overwrite_is_false() {
    let ctx = TestContext::new();
    ctx.write_file("list.js", "keep me\n");

    ctx.cli()
        .args(["--js-name", "list.js", "--values", "[1]", "--overwrite", "false"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("File \"list.js\" already exists and overwrite=false"));

    assert_eq!(ctx.read_file("list.js"), "keep me\n");
    assert_eq!(ctx.step_output(), "");
}

#[test]
fn overwrite_defaults_to_true() {
    let ctx = TestContext::new();
    ctx.write_file("list.js", "keep me\n");

    ctx.cli().args(["--js-name", "list.js", "--values", "[1]"]).assert().success();

    assert_eq!(ctx.read_file("list.js"), "let list = [1];\n");
}

use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn generate_writes_const_with_named_export() {
    let ctx = TestContext::new();

    ctx.cli()
        .args([
            "--js-name",
            "colors.js",
            "--values",
            r#"["a","b","c"]"#,
            "--decl-kind",
            "const",
            "--export-style",
            "named",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated output:"))
        .stdout(predicate::str::contains("const colors = [\"a\", \"b\", \"c\"];"));

    assert_eq!(
        ctx.read_file("colors.js"),
        "const colors = [\"a\", \"b\", \"c\"];\nexport { colors };\n"
    );
    assert_eq!(ctx.step_output(), "file=colors.js\n");
}

#[test]
fn generate_creates_missing_directories() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--js-name", "src/gen/my-list.js", "--values", "1, 2", "--value-type", "number"])
        .assert()
        .success();

    assert_eq!(ctx.read_file("src/gen/my-list.js"), "let my_list = [1, 2];\n");
}

#[test]
fn generate_evaluates_permissive_literals() {
    let ctx = TestContext::new();

    ctx.cli()
        .args([
            "--js-name",
            "mixed.js",
            "--values",
            "[1, 'a', undefined, -2,]",
            "--parse-mode",
            "js",
            "--export-style",
            "commonjs",
        ])
        .assert()
        .success();

    assert_eq!(
        ctx.read_file("mixed.js"),
        "let mixed = [1, \"a\", undefined, -2];\nmodule.exports = mixed;\n"
    );
}

#[test]
fn generate_pretty_prints_nested_arrays() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--js-name", "grid.js", "--values", "[[1,2],[]]", "--pretty", "true"])
        .assert()
        .success();

    assert_eq!(ctx.read_file("grid.js"), "let grid = [\n  [\n    1,\n    2\n  ],\n  []\n];\n");
}

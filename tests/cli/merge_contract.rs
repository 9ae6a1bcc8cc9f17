use crate::harness::TestContext;

#[test]
fn merge_patches_field_in_fallback_declaration() {
    let ctx = TestContext::new();
    ctx.write_file("opts.js", "// settings\nconst cfg = { x: 1, y: 'keep' };\n");

    ctx.cli()
        .args(["--js-name", "opts.js", "--field", "x", "--values", "[1, 2]"])
        .assert()
        .success();

    assert_eq!(ctx.read_file("opts.js"), "// settings\nconst cfg = { x: [1, 2], y: 'keep' };\n");
}

#[test]
fn repeated_merge_keeps_a_single_export() {
    let ctx = TestContext::new();
    ctx.write_file("opts.js", "let opts = { a: 1 };\n");

    for values in [r#"["x"]"#, r#"["y"]"#] {
        ctx.cli()
            .args([
                "--js-name",
                "opts.js",
                "--field",
                "list",
                "--export-style",
                "default",
                "--values",
                values,
            ])
            .assert()
            .success();
    }

    assert_eq!(
        ctx.read_file("opts.js"),
        "let opts = { a: 1, list: [\"y\"] };\nexport default opts;\n"
    );
    assert_eq!(ctx.step_output(), "file=opts.js\nfile=opts.js\n");
}

use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn generated_output_is_shown_when_the_write_fails() {
    let ctx = TestContext::new();
    // A regular file where the parent directory should be.
    ctx.write_file("blocker", "not a directory\n");

    ctx.cli()
        .args(["--js-name", "blocker/list.js", "--values", "[1]"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Generated output:"))
        .stdout(predicate::str::contains("let list = [1];"))
        .stderr(predicate::str::contains("Error: "));

    assert_eq!(ctx.step_output(), "");
}

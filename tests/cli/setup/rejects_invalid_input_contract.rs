use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn unknown_feature_fails_without_writing() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["setup", "--service", "bogus", "--no-start"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Feature 'bogus' not found"))
        .stderr(predicate::str::contains("traefik"));

    ctx.assert_no_artifacts();
    assert!(ctx.work_dir_entries().is_empty());
}

#[test]
fn unknown_feature_leaves_existing_files_untouched() {
    let ctx = TestContext::new();
    ctx.cli().args(["setup", "--no-start"]).assert().success();
    let before = ctx.read_env();

    ctx.cli().args(["setup", "-s", "bogus", "--no-start"]).assert().failure();

    assert_eq!(ctx.read_env(), before);
}

#[test]
fn missing_required_values_are_reported_together() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["setup", "--service", "traefik", "--no-start"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("traefik.domain, traefik.email"));

    ctx.assert_no_artifacts();
}

#[test]
fn malformed_answer_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["setup", "--set", "domain=example.com", "--no-start"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("FEATURE.FIELD=VALUE"));
}

#[test]
fn mistyped_answer_field_is_rejected_without_writing() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["setup", "-s", "postgres", "--set", "postgres.pasword=mine", "--no-start"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Field 'postgres.pasword' not found"))
        .stderr(predicate::str::contains("password"));

    ctx.assert_no_artifacts();
}

#[test]
fn answer_for_undeclared_feature_in_config_is_rejected() {
    let ctx = TestContext::new();
    ctx.write_config("[answers.trafik]\ndomain = \"example.com\"\n");

    ctx.cli()
        .args(["setup", "--no-start"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Feature 'trafik' not found"));

    ctx.assert_no_artifacts();
}

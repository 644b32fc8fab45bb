use crate::harness::TestContext;

#[test]
fn rerun_reuses_generated_secrets() {
    let ctx = TestContext::new();

    ctx.cli().args(["setup", "-s", "qdrant", "--no-start"]).assert().success();
    let first_env = ctx.read_env();
    let first_manifest = std::fs::read_to_string(ctx.manifest_path()).unwrap();

    ctx.cli().args(["setup", "-s", "qdrant", "--no-start"]).assert().success();

    assert_eq!(ctx.read_env(), first_env);
    assert_eq!(std::fs::read_to_string(ctx.manifest_path()).unwrap(), first_manifest);
}

#[test]
fn fresh_secrets_regenerates_secrets_only() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["setup", "-s", "qdrant", "--set", "n8n.timezone=Europe/Berlin", "--no-start"])
        .assert()
        .success();
    let first_key = ctx.env_value("QDRANT_API_KEY").unwrap();

    ctx.cli().args(["setup", "-s", "qdrant", "--fresh-secrets", "--no-start"]).assert().success();

    assert_ne!(ctx.env_value("QDRANT_API_KEY").unwrap(), first_key);
    assert_eq!(ctx.env_value("GENERIC_TIMEZONE").as_deref(), Some("Europe/Berlin"));
}

use crate::harness::TestContext;
use predicates::prelude::*;

const CONFIG: &str = r#"
features = ["traefik", "monitoring"]

[answers.traefik]
domain = "example.org"
email = "admin@example.org"
"#;

#[test]
fn stack_toml_supplies_features_and_answers() {
    let ctx = TestContext::new();
    ctx.write_config(CONFIG);

    ctx.cli()
        .args(["setup", "--no-start"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected features: traefik, monitoring"))
        .stdout(predicate::str::contains("https://portainer.example.org"));

    let manifest = ctx.read_manifest();
    assert!(manifest["services"]["portainer"].get("ports").is_none());
}

#[test]
fn flags_override_config_file() {
    let ctx = TestContext::new();
    ctx.write_config(CONFIG);

    ctx.cli()
        .args(["setup", "-s", "traefik", "--set", "traefik.domain=flag.example", "--no-start"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected features: traefik\n"));

    assert_eq!(ctx.env_value("DOMAIN_NAME").as_deref(), Some("flag.example"));
}

#[test]
fn explicit_config_path_is_used() {
    let ctx = TestContext::new();
    let path = ctx.work_dir().join("custom.toml");
    std::fs::write(&path, "features = [\"qdrant\"]\n").unwrap();

    ctx.cli()
        .args(["setup", "--no-start", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected features: qdrant"));
}

#[test]
fn unknown_config_keys_are_rejected() {
    let ctx = TestContext::new();
    ctx.write_config("services = [\"traefik\"]\n");

    ctx.cli().args(["setup", "--no-start"]).assert().failure();

    ctx.assert_no_artifacts();
}

use crate::harness::TestContext;
use predicates::prelude::*;
use serde_yaml::Value;

#[test]
fn setup_without_features_exposes_n8n_port() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["setup", "--no-start"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected features: none"))
        .stdout(predicate::str::contains("http://localhost:5678"));

    let manifest = ctx.read_manifest();
    assert_eq!(manifest["services"]["n8n"]["ports"][0], Value::from("5678:5678"));
    assert_eq!(manifest["services"].as_mapping().unwrap().len(), 1);
    assert_eq!(ctx.work_dir_entries(), vec![".env", "docker-compose.yml"]);
}

#[test]
fn setup_with_traefik_routes_through_proxy() {
    let ctx = TestContext::new();

    ctx.cli()
        .args([
            "setup",
            "--service",
            "traefik",
            "--service",
            "qdrant",
            "--set",
            "traefik.domain=example.com",
            "--set",
            "traefik.email=ops@example.com",
            "--no-start",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected features: traefik, qdrant"))
        .stdout(predicate::str::contains("https://n8n.example.com"))
        .stdout(predicate::str::contains("https://qdrant.example.com"));

    let manifest = ctx.read_manifest();
    assert!(manifest["services"]["n8n"].get("ports").is_none());
    assert!(manifest["services"]["traefik"].is_mapping());
    assert!(manifest.get("x-when").is_none());

    assert_eq!(ctx.env_value("DOMAIN_NAME").as_deref(), Some("example.com"));
    assert_eq!(ctx.env_value("WEBHOOK_URL").as_deref(), Some("https://n8n.example.com/"));
}

#[test]
fn setup_adds_dependencies() {
    let ctx = TestContext::new();

    ctx.cli()
        .args([
            "setup",
            "-s",
            "nginx",
            "--set",
            "traefik.domain=example.com",
            "--set",
            "traefik.email=ops@example.com",
            "--no-start",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected features: traefik, nginx"));

    let env = ctx.read_env();
    let traefik = env.find("# traefik").unwrap();
    let nginx = env.find("# nginx").unwrap();
    assert!(traefik < nginx);
}

#[test]
fn setup_writes_to_output_dir() {
    let ctx = TestContext::new();
    let out = ctx.work_dir().join("stack");

    ctx.cli()
        .args(["setup", "--no-start", "--output-dir"])
        .arg(&out)
        .assert()
        .success();

    assert!(out.join(".env").exists());
    assert!(out.join("docker-compose.yml").exists());
    ctx.assert_no_artifacts();
}

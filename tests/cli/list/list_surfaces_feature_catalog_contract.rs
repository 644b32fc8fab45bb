use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn list_shows_available_features() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available features:"))
        .stdout(predicate::str::contains("traefik"))
        .stdout(predicate::str::contains("nginx - Web server for static files"))
        .stdout(predicate::str::contains("(requires: traefik)"));
}

#[test]
fn list_detail_shows_fields() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["list", "--detail", "postgres"])
        .assert()
        .success()
        .stdout(predicate::str::contains("postgres:"))
        .stdout(predicate::str::contains("POSTGRES_PASSWORD"))
        .stdout(predicate::str::contains("generated secret"));
}

#[test]
fn list_detail_rejects_unknown_feature() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["list", "--detail", "nonexistent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Feature 'nonexistent' not found"));
}

#[test]
fn list_json_is_machine_readable() {
    let ctx = TestContext::new();

    let output = ctx.cli().args(["list", "--json"]).assert().success().get_output().stdout.clone();

    let features: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let names: Vec<&str> =
        features.as_array().unwrap().iter().map(|f| f["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["traefik", "qdrant", "nginx", "postgres", "monitoring"]);
    assert_eq!(features[2]["depends_on"][0], "traefik");
}

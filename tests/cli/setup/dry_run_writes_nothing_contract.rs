use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn dry_run_prints_documents_only() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["setup", "--service", "postgres", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# --- .env ---"))
        .stdout(predicate::str::contains("POSTGRES_PASSWORD="))
        .stdout(predicate::str::contains("# --- docker-compose.yml ---"))
        .stdout(predicate::str::contains("postgres:16-alpine"));

    ctx.assert_no_artifacts();
}

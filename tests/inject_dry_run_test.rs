use predicates::str::contains;
use tempfile::tempdir;

#[test]
fn dry_run_reports_values_but_writes_nothing() {
    let tmp = tempdir().expect("tempdir");
    let out = tmp.path().join("include/build_counter.h");

    assert_cmd::cargo::cargo_bin_cmd!("counter-inject")
        .current_dir(tmp.path())
        .env("COUNTER_CLOCK_EPOCH", "1775001600")
        .args(["inject", "--dry-run", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("counter will be initialized to: 2 days"))
        .stdout(contains("dry-run: definitions computed but not written"));

    assert!(!out.exists());
    assert!(!tmp.path().join("include").exists());
}

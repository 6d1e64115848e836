use std::fs;
use tempfile::tempdir;

#[test]
fn inject_appends_flag_tokens_in_order() {
    let tmp = tempdir().expect("tempdir");
    let out = tmp.path().join("build_counter.flags");

    assert_cmd::cargo::cargo_bin_cmd!("counter-inject")
        .current_dir(tmp.path())
        .env("COUNTER_CLOCK_EPOCH", "1775001600")
        .args(["inject", "--format", "flags", "--out"])
        .arg(&out)
        .assert()
        .success();

    let flags = fs::read_to_string(&out).expect("read flags");
    assert_eq!(
        flags,
        "-DINIT_COUNTER=2 -DINIT_MAX_COUNTER=60 -DBUILD_ID=1775001600\n"
    );
}

#[test]
fn inject_leaves_prior_flags_file_contents_untouched() {
    let tmp = tempdir().expect("tempdir");
    let out = tmp.path().join("build_counter.flags");
    fs::write(&out, "-DVENDOR_BOARD=3\n").expect("seed flags");

    assert_cmd::cargo::cargo_bin_cmd!("counter-inject")
        .current_dir(tmp.path())
        .env("COUNTER_CLOCK_EPOCH", "1775001600")
        .args(["inject", "--format", "flags", "--out"])
        .arg(&out)
        .assert()
        .success();

    let flags = fs::read_to_string(&out).expect("read flags");
    let mut lines = flags.lines();
    assert_eq!(lines.next(), Some("-DVENDOR_BOARD=3"));
    assert_eq!(
        lines.next(),
        Some("-DINIT_COUNTER=2 -DINIT_MAX_COUNTER=60 -DBUILD_ID=1775001600")
    );
    assert_eq!(lines.next(), None);
}

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn gastos_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("gastos"))
}

fn run_ok(home: &tempfile::TempDir, args: &[&str]) {
    let mut cmd = gastos_cmd();
    cmd.env("GASTOS_HOME", home.path());
    cmd.args(args);
    cmd.assert().success();
}

fn seed_scenario(home: &tempfile::TempDir) {
    run_ok(
        home,
        &["add", "100", "--date", "2024-01-01", "--category", "Food"],
    );
    run_ok(
        home,
        &["add", "50", "--date", "2024-01-01", "--category", "Food"],
    );
    run_ok(
        home,
        &[
            "add",
            "30",
            "--date",
            "2024-01-02",
            "--category",
            "Transport",
        ],
    );
}

#[test]
fn chart_writes_an_svg_and_prints_the_statistics_block() {
    let home = tempfile::tempdir().expect("tempdir");
    seed_scenario(&home);

    let out_path = home.path().join("analysis.svg");
    let out_arg = out_path.to_str().expect("utf8 path");

    let mut cmd = gastos_cmd();
    cmd.env("GASTOS_HOME", home.path());
    cmd.args(["chart", "--out", out_arg]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Wrote chart to"))
        .stdout(predicate::str::contains("total spent\t$180.00"))
        // Mean over the two distinct dates, not over the three records.
        .stdout(predicate::str::contains("average per day\t$90.00"))
        .stdout(predicate::str::contains("top category\tFood ($150.00)"))
        .stdout(predicate::str::contains("records\t3"));

    let svg = std::fs::read_to_string(&out_path).expect("chart artifact");
    assert!(svg.contains("<svg"));
    // Both panels label the same categories.
    assert!(svg.contains("Food"));
    assert!(svg.contains("Transport"));
}

#[test]
fn chart_with_a_single_category_renders_a_full_disc() {
    let home = tempfile::tempdir().expect("tempdir");
    run_ok(
        &home,
        &["add", "40", "--date", "2024-02-01", "--category", "Rent"],
    );

    let out_path = home.path().join("analysis.svg");
    let out_arg = out_path.to_str().expect("utf8 path");

    let mut cmd = gastos_cmd();
    cmd.env("GASTOS_HOME", home.path());
    cmd.args(["chart", "--out", out_arg]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("top category\tRent ($40.00)"))
        .stdout(predicate::str::contains("records\t1"));

    let svg = std::fs::read_to_string(&out_path).expect("chart artifact");
    assert!(svg.contains("<circle"));
    assert!(svg.contains("Rent 100.0%"));
}

#[test]
fn chart_over_empty_ledger_reports_nothing_to_report() {
    let home = tempfile::tempdir().expect("tempdir");

    let data_dir = home.path().join("data");
    std::fs::create_dir_all(&data_dir).expect("data dir");
    std::fs::write(
        data_dir.join("expenses.csv"),
        b"\xef\xbb\xbfdate,category,amount,note\n",
    )
    .expect("empty ledger");

    let out_path = home.path().join("analysis.svg");
    let out_arg = out_path.to_str().expect("utf8 path");

    let mut cmd = gastos_cmd();
    cmd.env("GASTOS_HOME", home.path());
    cmd.args(["chart", "--out", out_arg]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("nothing to report"));

    assert!(!out_path.exists(), "no artifact for an empty ledger");
}

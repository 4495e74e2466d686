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

fn run_ok_out(home: &tempfile::TempDir, args: &[&str]) -> String {
    let mut cmd = gastos_cmd();
    cmd.env("GASTOS_HOME", home.path());
    cmd.args(args);
    let out = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(out).expect("utf8 stdout")
}

fn seed_scenario(home: &tempfile::TempDir) {
    run_ok(
        home,
        &["add", "100", "--date", "2024-01-01", "--category", "Food"],
    );
    run_ok(
        home,
        &[
            "add",
            "50",
            "--date",
            "2024-01-01",
            "--category",
            "Food",
            "-m",
            "lunch",
        ],
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
fn summary_groups_by_category_and_totals_everything() {
    let home = tempfile::tempdir().expect("tempdir");
    seed_scenario(&home);

    let out = run_ok_out(&home, &["summary"]);
    assert!(out.contains("Food\t$150.00"));
    assert!(out.contains("Transport\t$30.00"));
    assert!(out.contains("Total spent: $180.00"));
}

#[test]
fn summary_lists_categories_in_ascending_label_order() {
    let home = tempfile::tempdir().expect("tempdir");

    run_ok(
        &home,
        &["add", "10", "--date", "2024-01-01", "--category", "Transport"],
    );
    run_ok(
        &home,
        &["add", "20", "--date", "2024-01-01", "--category", "Education"],
    );
    run_ok(
        &home,
        &["add", "30", "--date", "2024-01-01", "--category", "Food"],
    );

    let out = run_ok_out(&home, &["summary"]);
    let education = out.find("Education").expect("Education line");
    let food = out.find("Food").expect("Food line");
    let transport = out.find("Transport").expect("Transport line");
    assert!(education < food);
    assert!(food < transport);
}

#[test]
fn summary_over_empty_ledger_reports_nothing_to_report() {
    let home = tempfile::tempdir().expect("tempdir");

    let data_dir = home.path().join("data");
    std::fs::create_dir_all(&data_dir).expect("data dir");
    std::fs::write(
        data_dir.join("expenses.csv"),
        b"\xef\xbb\xbfdate,category,amount,note\n",
    )
    .expect("empty ledger");

    let mut cmd = gastos_cmd();
    cmd.env("GASTOS_HOME", home.path());
    cmd.arg("summary");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("nothing to report"));
}

#[test]
fn categories_prints_the_suggested_list() {
    let home = tempfile::tempdir().expect("tempdir");

    let out = run_ok_out(&home, &["categories"]);
    assert!(out.contains("1. Food"));
    assert!(out.contains("9. Other"));
}

mod common;

use std::path::Path;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

use common::fresh_data_dir;

const BIN_NAME: &str = "daftar_cli";

fn cli(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("DAFTAR_DATA_DIR", data_dir);
    cmd.env("DAFTAR_CLI_SCRIPT", "1");
    cmd
}

#[test]
fn help_prints_command_overview() {
    let dir = fresh_data_dir();
    cli(&dir)
        .arg("help")
        .assert()
        .success()
        .stdout(contains("report").and(contains("close")));
}

#[test]
fn report_without_a_period_prints_guidance() {
    let dir = fresh_data_dir();
    cli(&dir)
        .arg("report")
        .assert()
        .success()
        .stdout(contains("No open 15-day period"));
}

#[test]
fn unknown_command_fails_with_a_message() {
    let dir = fresh_data_dir();
    cli(&dir)
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(contains("unknown command"));
}

#[test]
fn full_flow_across_separate_invocations() {
    let dir = fresh_data_dir();

    cli(&dir)
        .args(["start", "1000000"])
        .assert()
        .success()
        .stdout(contains("New 15-day period"));

    cli(&dir)
        .args(["sale", "1200000", "800000"])
        .assert()
        .success()
        .stdout(contains("total: 2,000,000"));

    cli(&dir)
        .args(["purchase", "3500000", "wholesale"])
        .assert()
        .success()
        .stdout(contains("Purchase saved."));

    cli(&dir)
        .args(["expense", "200000", "rent"])
        .assert()
        .success()
        .stdout(contains("Expense saved."));

    cli(&dir)
        .arg("report")
        .assert()
        .success()
        .stdout(contains("Sales: 2,000,000").and(contains("closing: not entered yet")));

    cli(&dir)
        .args(["close", "2000000"])
        .assert()
        .success()
        .stdout(
            contains("Net profit/loss: -700,000").and(contains("New 15-day period opened:")),
        );

    // the rolled-forward period starts clean
    cli(&dir)
        .arg("report")
        .assert()
        .success()
        .stdout(contains("Sales: 0").and(contains("opening: 2,000,000")));
}

#[test]
fn second_start_reports_the_open_period() {
    let dir = fresh_data_dir();

    cli(&dir).args(["start", "500"]).assert().success();
    cli(&dir)
        .args(["start", "900"])
        .assert()
        .success()
        .stdout(contains("already open"));
}

#[test]
fn reminder_setting_round_trips_through_the_cli() {
    let dir = fresh_data_dir();

    cli(&dir)
        .arg("reminder")
        .assert()
        .success()
        .stdout(contains("on at 21:00"));

    cli(&dir)
        .args(["reminder", "set", "8", "30", "off"])
        .assert()
        .success()
        .stdout(contains("off at 08:30"));

    cli(&dir)
        .arg("remind")
        .assert()
        .success()
        .stdout(contains("Reminders are disabled."));
}

#[test]
fn remind_prompts_to_start_when_no_period_exists() {
    let dir = fresh_data_dir();
    cli(&dir)
        .arg("remind")
        .assert()
        .success()
        .stdout(contains("no 15-day period is open"));
}

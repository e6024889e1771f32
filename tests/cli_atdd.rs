#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CSV_HEADER: &str = "Company,Risk Score,Talk Score,Walk Score,CSR Spend (Cr),Renewable Energy,Total Energy,GHG Scope 1,Policies,CSR Evidence,Renewable Evidence";

fn write_reports(dir: &Path) {
    fs::write(
        dir.join("green_talk.txt"),
        "Sustainability Report\nClimate Change Policy Yes\nBiodiversity Policy Yes\nWater Policy Yes\n\u{0C}Human Rights Policy Yes\nWhistle Blower Policy Yes\nCSR Expenditure 50\n",
    )
    .expect("green talk report should write");
    fs::write(
        dir.join("steady_walk.txt"),
        "Total Energy Consumption 2,000 GJ\nRenewable Energy Use 1,600 GJ\nCommunity Spending 600\nGHG Scope 1 9,100\n",
    )
    .expect("steady walk report should write");
    fs::write(dir.join("corrupt.pdf"), "%PDF-garbage").expect("corrupt pdf should write");
}

/// Runs the binary with `home` as HOME so no user-level config leaks in.
fn greenaudit(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("greenaudit").expect("binary should compile");
    cmd.env("HOME", home);
    cmd
}

#[test]
fn audit_csv_lists_scored_documents_and_skips_corrupt_ones() {
    let dir = TempDir::new().expect("temp dir should be created");
    let home = TempDir::new().expect("home dir should be created");
    write_reports(dir.path());

    greenaudit(home.path())
        .arg("audit")
        .arg(dir.path())
        .arg("--format")
        .arg("csv")
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with(CSV_HEADER))
        .stdout(predicate::str::contains(
            "Green Talk,95.0,100.0,5.0,50.0,0.0,1.0,0.0,5,CSR Expenditure 50,Not Found",
        ))
        .stdout(predicate::str::contains(
            "Steady Walk,0.0,0.0,100.0,600.0,1600.0,2000.0,9100.0,0,Community Spending 600,\"Renewable Energy Use 1,600\"",
        ))
        .stdout(predicate::str::contains("Corrupt").not());
}

#[test]
fn audit_missing_directory_warns_with_empty_report() {
    let dir = TempDir::new().expect("temp dir should be created");
    let home = TempDir::new().expect("home dir should be created");

    greenaudit(home.path())
        .arg("audit")
        .arg(dir.path().join("esg_reports"))
        .arg("--format")
        .arg("json")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[]"))
        .stderr(predicate::str::contains("no documents scored"));
}

#[test]
fn audit_fail_above_returns_high_risk_code() {
    let dir = TempDir::new().expect("temp dir should be created");
    let home = TempDir::new().expect("home dir should be created");
    write_reports(dir.path());

    greenaudit(home.path())
        .arg("audit")
        .arg(dir.path())
        .arg("--fail-above")
        .arg("75")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("risk threshold exceeded: 95.0"));
}

#[test]
fn audit_reads_fail_above_from_directory_config() {
    let dir = TempDir::new().expect("temp dir should be created");
    let home = TempDir::new().expect("home dir should be created");
    write_reports(dir.path());
    fs::write(
        dir.path().join("greenaudit.toml"),
        "[report]\nfail_above = 99.0\n",
    )
    .expect("config should write");

    greenaudit(home.path()).arg("audit").arg(dir.path()).assert().code(0);
}

#[test]
fn audit_rejects_invalid_directory_config() {
    let dir = TempDir::new().expect("temp dir should be created");
    let home = TempDir::new().expect("home dir should be created");
    write_reports(dir.path());
    fs::write(dir.path().join("greenaudit.toml"), "[scan]\nmax_pages = 0\n")
        .expect("config should write");

    greenaudit(home.path())
        .arg("audit")
        .arg(dir.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("scan.max_pages"));
}

#[test]
fn audit_page_limit_flag_narrows_the_scan() {
    let dir = TempDir::new().expect("temp dir should be created");
    let home = TempDir::new().expect("home dir should be created");
    write_reports(dir.path());

    // The last two policies sit on page two of green_talk.txt.
    greenaudit(home.path())
        .arg("audit")
        .arg(dir.path())
        .arg("--format")
        .arg("csv")
        .arg("--max-pages")
        .arg("1")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Green Talk,60.0,60.0,0.0,0.0,"));
}

#[test]
fn audit_writes_report_file() {
    let dir = TempDir::new().expect("temp dir should be created");
    let home = TempDir::new().expect("home dir should be created");
    write_reports(dir.path());
    let out = dir.path().join("audit.csv");

    greenaudit(home.path())
        .arg("audit")
        .arg(dir.path())
        .arg("--format")
        .arg("csv")
        .arg("--output")
        .arg(&out)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("report file:"));

    let written = fs::read_to_string(&out).expect("report file should exist");
    assert!(written.starts_with(CSV_HEADER));
    assert_eq!(written.lines().count(), 3);
}

#[test]
fn audit_json_is_identical_across_runs() {
    let dir = TempDir::new().expect("temp dir should be created");
    let home = TempDir::new().expect("home dir should be created");
    write_reports(dir.path());

    let run = || {
        greenaudit(home.path())
            .arg("audit")
            .arg(dir.path())
            .arg("--format")
            .arg("json")
            .output()
            .expect("audit should run")
            .stdout
    };
    let first = run();
    let second = run();
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn audit_scatter_outputs_points() {
    let dir = TempDir::new().expect("temp dir should be created");
    let home = TempDir::new().expect("home dir should be created");
    write_reports(dir.path());

    greenaudit(home.path())
        .arg("audit")
        .arg(dir.path())
        .arg("--format")
        .arg("scatter")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"company\": \"Green Talk\""))
        .stdout(predicate::str::contains("\"size\": 600.0"));
}

#[test]
fn show_prints_company_evidence() {
    let dir = TempDir::new().expect("temp dir should be created");
    let home = TempDir::new().expect("home dir should be created");
    write_reports(dir.path());

    greenaudit(home.path())
        .arg("show")
        .arg(dir.path())
        .arg("Steady Walk")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("### Steady Walk"))
        .stdout(predicate::str::contains("Renewable Energy Use 1,600"));
}

#[test]
fn show_unknown_company_is_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    let home = TempDir::new().expect("home dir should be created");
    write_reports(dir.path());

    greenaudit(home.path())
        .arg("show")
        .arg(dir.path())
        .arg("Nobody Ltd.")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("company not found: Nobody Ltd."));
}

#[test]
fn strict_mode_flag_is_accepted() {
    let dir = TempDir::new().expect("temp dir should be created");
    let home = TempDir::new().expect("home dir should be created");
    fs::write(dir.path().join("split.txt"), "Water Policy\nYes\n").expect("doc should write");

    greenaudit(home.path())
        .arg("audit")
        .arg(dir.path())
        .arg("--format")
        .arg("csv")
        .arg("--mode")
        .arg("strict")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Split,0.0,0.0,0.0,0.0,0.0,1.0,0.0,0,"));
}

#[test]
fn audit_reads_global_config_from_home() {
    let dir = TempDir::new().expect("temp dir should be created");
    let home = TempDir::new().expect("home dir should be created");
    write_reports(dir.path());
    let global = home.path().join(".config/greenaudit");
    fs::create_dir_all(&global).expect("global config dir should be created");
    fs::write(global.join("config.toml"), "[scan]\nmax_pages = 1\n")
        .expect("global config should write");

    greenaudit(home.path())
        .arg("audit")
        .arg(dir.path())
        .arg("--format")
        .arg("csv")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Green Talk,60.0,60.0,0.0,0.0,"));

    let clean_home = TempDir::new().expect("home dir should be created");
    greenaudit(clean_home.path())
        .arg("audit")
        .arg(dir.path())
        .arg("--format")
        .arg("csv")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Green Talk,95.0,100.0,5.0,50.0,"));
}

use assert_cmd::Command;
use predicates::prelude::*;

fn tscrape() -> Command {
    let mut cmd = Command::cargo_bin("tscrape").unwrap();
    // Keep test runs from touching the real user config
    cmd.env("XDG_CONFIG_HOME", std::env::temp_dir());
    cmd
}

#[test]
fn test_help_lists_commands() {
    tscrape()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scrape"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_scrape_help_documents_flags() {
    tscrape()
        .args(["scrape", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--languages"))
        .stdout(predicate::str::contains("--cookies"))
        .stdout(predicate::str::contains("--omit-url"));
}

#[test]
fn test_scrape_rejects_non_http_url() {
    tscrape()
        .args(["scrape", "ftp://example.com/video"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP"));
}

#[test]
fn test_config_command_prints_path() {
    tscrape()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.yaml"));
}

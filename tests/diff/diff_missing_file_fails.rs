use crate::common::command::{run_diffr_command, scenario_dir, workspace_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn diff_missing_original_fails(scenario_dir: TempDir) {
    run_diffr_command(scenario_dir.path(), &["diff", "missing.txt", "new.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[rstest]
fn diff_missing_new_fails(scenario_dir: TempDir) {
    run_diffr_command(scenario_dir.path(), &["diff", "original.txt", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[rstest]
fn diff_requires_two_files(workspace_dir: TempDir) {
    run_diffr_command(workspace_dir.path(), &["diff", "only-one.txt"])
        .assert()
        .failure();
}

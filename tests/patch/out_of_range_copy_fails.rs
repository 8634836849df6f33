use crate::common::command::{run_diffr_command, scenario_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn out_of_range_copy_fails(scenario_dir: TempDir) {
    write_file(FileSpec::new(
        scenario_dir.path().join("changes.patch"),
        "> hello\n0,3\n".to_string(),
    ));

    run_diffr_command(
        scenario_dir.path(),
        &["patch", "original.txt", "changes.patch", "-o", "rebuilt.txt"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("out of range"));

    assert!(!scenario_dir.path().join("rebuilt.txt").exists());
}

#[rstest]
fn missing_patch_file_fails(scenario_dir: TempDir) {
    run_diffr_command(
        scenario_dir.path(),
        &["patch", "original.txt", "missing.patch"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("does not exist"));
}

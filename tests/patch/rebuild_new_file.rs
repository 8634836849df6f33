use crate::common::command::{NEW_CONTENT, PATCH_CONTENT, run_diffr_command, scenario_dir};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn rebuild_new_file_to_stdout(scenario_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        scenario_dir.path().join("changes.patch"),
        PATCH_CONTENT.to_string(),
    ));

    let output = run_diffr_command(
        scenario_dir.path(),
        &["patch", "original.txt", "changes.patch"],
    )
    .assert()
    .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    pretty_assertions::assert_eq!(stdout, NEW_CONTENT);

    Ok(())
}

#[rstest]
fn rebuild_new_file_to_output_file(scenario_dir: TempDir) {
    write_file(FileSpec::new(
        scenario_dir.path().join("changes.patch"),
        PATCH_CONTENT.to_string(),
    ));

    run_diffr_command(
        scenario_dir.path(),
        &["patch", "original.txt", "changes.patch", "-o", "rebuilt.txt"],
    )
    .assert()
    .success()
    .stdout(predicate::str::is_empty());

    pretty_assertions::assert_eq!(
        read_file(&scenario_dir.path().join("rebuilt.txt")),
        NEW_CONTENT
    );
}

#[rstest]
fn empty_patch_rebuilds_an_empty_file(scenario_dir: TempDir) {
    write_file(FileSpec::new(
        scenario_dir.path().join("empty.patch"),
        String::new(),
    ));

    run_diffr_command(
        scenario_dir.path(),
        &["patch", "original.txt", "empty.patch"],
    )
    .assert()
    .success()
    .stdout(predicate::str::is_empty());
}

use crate::common::command::{run_diffr_command, scenario_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case("brokenInstruction\n")]
#[case("> fine\n1;2\n")]
#[case(">missing space\n")]
#[case("-1,2\n")]
#[case("01,2\n")]
#[case("2,1\n")]
fn malformed_patch_fails(scenario_dir: TempDir, #[case] patch: &str) {
    write_file(FileSpec::new(
        scenario_dir.path().join("broken.patch"),
        patch.to_string(),
    ));

    run_diffr_command(
        scenario_dir.path(),
        &["patch", "original.txt", "broken.patch", "-o", "rebuilt.txt"],
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("Illegal patch file"));

    assert!(!scenario_dir.path().join("rebuilt.txt").exists());
}

use crate::common::command::{PATCH_CONTENT, run_diffr_command, scenario_dir};
use crate::common::file::read_file;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case("-o")]
#[case("--output")]
fn write_patch_to_output_file(
    scenario_dir: TempDir,
    #[case] flag: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    run_diffr_command(
        scenario_dir.path(),
        &["diff", "original.txt", "new.txt", flag, "changes.patch"],
    )
    .assert()
    .success()
    .stdout(predicate::str::is_empty());

    let patch = read_file(&scenario_dir.path().join("changes.patch"));
    pretty_assertions::assert_eq!(patch, PATCH_CONTENT);

    Ok(())
}

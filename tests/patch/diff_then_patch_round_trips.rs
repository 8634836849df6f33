use crate::common::command::{run_diffr_command, workspace_dir};
use crate::common::file::{FileSpec, generate_lines, mutate_lines, read_file, to_content, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
#[case(1)]
#[case(25)]
#[case(200)]
fn diff_then_patch_round_trips(workspace_dir: TempDir, #[case] lines_count: usize) {
    let original = generate_lines(lines_count);
    let new = mutate_lines(&original);
    let new_content = to_content(&new);

    write_file(FileSpec::new(
        workspace_dir.path().join("original.txt"),
        to_content(&original),
    ));
    write_file(FileSpec::new(
        workspace_dir.path().join("new.txt"),
        new_content.clone(),
    ));

    run_diffr_command(
        workspace_dir.path(),
        &["diff", "original.txt", "new.txt", "-o", "changes.patch"],
    )
    .assert()
    .success();

    run_diffr_command(
        workspace_dir.path(),
        &["patch", "original.txt", "changes.patch", "-o", "rebuilt.txt"],
    )
    .assert()
    .success();

    pretty_assertions::assert_eq!(
        read_file(&workspace_dir.path().join("rebuilt.txt")),
        new_content
    );
}

#[rstest]
fn crlf_lines_survive_the_round_trip(workspace_dir: TempDir) {
    let new_content = "b\r\nc\r\n\r\na\r\n";
    write_file(FileSpec::new(
        workspace_dir.path().join("original.txt"),
        "a\r\nb\r\nc\r\n".to_string(),
    ));
    write_file(FileSpec::new(
        workspace_dir.path().join("new.txt"),
        new_content.to_string(),
    ));

    run_diffr_command(
        workspace_dir.path(),
        &["diff", "original.txt", "new.txt", "-o", "changes.patch"],
    )
    .assert()
    .success();

    let output = run_diffr_command(
        workspace_dir.path(),
        &["patch", "original.txt", "changes.patch"],
    )
    .assert()
    .success();

    pretty_assertions::assert_eq!(
        String::from_utf8_lossy(&output.get_output().stdout),
        new_content
    );
}

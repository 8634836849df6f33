use crate::common::command::{run_diffr_command, workspace_dir};
use crate::common::file::{FileSpec, generate_lines, to_content, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn diff_identical_files_copies_everything(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let lines = generate_lines(40);
    let content = to_content(&lines);
    write_file(FileSpec::new(workspace_dir.path().join("a.txt"), content.clone()));
    write_file(FileSpec::new(workspace_dir.path().join("b.txt"), content));

    let output = run_diffr_command(workspace_dir.path(), &["diff", "a.txt", "b.txt"])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    pretty_assertions::assert_eq!(stdout, format!("0,{}\n", lines.len() - 1));

    Ok(())
}

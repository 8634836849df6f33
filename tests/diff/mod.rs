mod diff_identical_files_copies_everything;
mod diff_missing_file_fails;
mod write_patch_to_output_file;

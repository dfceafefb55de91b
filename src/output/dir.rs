//! Output directory and file naming

use crate::error::{Error, Result};
use std::fs::DirBuilder;
use std::path::{Path, PathBuf};

/// Extension of dump files
pub const FILE_EXTENSION: &str = "json";

/// Create the output directory.
///
/// The directory must not exist yet; a previous dump is never overwritten
/// or merged into. On unix it is created with mode `0700` since the dump
/// holds the database contents.
pub fn create_output_dir(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    if path.exists() {
        return Err(Error::output(format!(
            "Output directory {} already exists",
            path.display()
        )));
    }

    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    builder.create(path).map_err(|e| Error::Output {
        message: format!("Failed to create {}: {e}", path.display()),
    })?;

    if !path.is_dir() {
        return Err(Error::output(format!("{} is not a directory", path.display())));
    }
    Ok(path.to_path_buf())
}

/// File name of a layout dump: `{database}-{layout}.json`.
///
/// Path separators and NUL in either name are replaced by `_` so the file
/// always lands directly inside the output directory.
pub fn layout_file_name(database: &str, layout: &str) -> String {
    format!(
        "{}-{}.{FILE_EXTENSION}",
        sanitize(database),
        sanitize(layout)
    )
}

/// Full path of a layout dump inside `dir`
pub fn layout_file_path(dir: impl AsRef<Path>, database: &str, layout: &str) -> PathBuf {
    dir.as_ref().join(layout_file_name(database, layout))
}

fn sanitize(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            c => c,
        })
        .collect();
    // "." and ".." would still resolve outside the file name
    match cleaned.as_str() {
        "." | ".." => cleaned.replace('.', "_"),
        _ => cleaned,
    }
}

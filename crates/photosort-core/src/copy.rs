use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;

const TEMP_SUFFIX: &str = ".photosort-tmp";

/// What happened to one file handed to [`copy_into`].
#[derive(Debug)]
pub enum CopyOutcome {
    /// Written to the contained destination path.
    Copied(PathBuf),
    /// A file of the same name already existed at the destination.
    Skipped(PathBuf),
    Failed(Error),
}

/// Copy `source` to `<target_dir>/<file_name>` unless something is already there.
///
/// Missing directories are created. The data goes to a hidden temporary file
/// next to the destination first and is renamed into place when complete, so a
/// failed copy never leaves a truncated file under the real name.
pub fn copy_into(source: &Path, target_dir: &Path, file_name: &OsStr) -> CopyOutcome {
    if let Err(source) = fs::create_dir_all(target_dir) {
        return CopyOutcome::Failed(Error::DirCreate {
            path: target_dir.to_path_buf(),
            source,
        });
    }

    let dest = target_dir.join(file_name);
    if dest.exists() {
        log::debug!("skip {}: {} already exists", source.display(), dest.display());
        return CopyOutcome::Skipped(dest);
    }

    let temp = target_dir.join(temp_name(file_name));
    if let Err(e) = fs::copy(source, &temp).and_then(|_| fs::rename(&temp, &dest)) {
        let _ = fs::remove_file(&temp);
        return CopyOutcome::Failed(Error::Copy {
            name: file_name.to_string_lossy().into_owned(),
            source: e,
        });
    }

    // Carry the source modification time over to the copy
    if let Ok(meta) = fs::metadata(source) {
        let mtime = filetime::FileTime::from_last_modification_time(&meta);
        filetime::set_file_mtime(&dest, mtime).ok();
    }

    CopyOutcome::Copied(dest)
}

fn temp_name(file_name: &OsStr) -> OsString {
    let mut name = OsString::from(".");
    name.push(file_name);
    name.push(TEMP_SUFFIX);
    name
}

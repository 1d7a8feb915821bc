use std::ffi::OsStr;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::Error;

/// Receives the events of a [`walk`].
pub trait WalkHandler {
    /// Called once per regular file, with its parent directory and file name.
    /// The walk does not advance until this returns.
    fn on_file(&mut self, dir: &Path, name: &OsStr);

    /// An entry could not be read. The walk continues with the next sibling.
    fn on_error(&mut self, error: Error);

    /// Called exactly once after every entry was visited.
    fn on_done(&mut self);
}

/// Depth-first walk of everything under `root`.
///
/// Symbolic links are reported neither as files nor followed, so linked
/// trees and link cycles are never entered. Entries within a directory are
/// visited in file-name order.
pub fn walk<H: WalkHandler + ?Sized>(root: &Path, handler: &mut H) {
    let entries = WalkDir::new(root).follow_links(false).sort_by_file_name();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) => {
                handler.on_error(Error::Traversal { source });
                continue;
            }
        };
        log::trace!("visit {}", entry.path().display());

        if !entry.file_type().is_file() {
            continue;
        }
        let dir = entry.path().parent().unwrap_or(root);
        handler.on_file(dir, entry.file_name());
    }

    handler.on_done();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[derive(Default)]
    struct Collect {
        files: Vec<PathBuf>,
        errors: usize,
        done: usize,
    }

    impl WalkHandler for Collect {
        fn on_file(&mut self, dir: &Path, name: &OsStr) {
            assert_eq!(self.done, 0, "file reported after done");
            self.files.push(dir.join(name));
        }

        fn on_error(&mut self, _error: Error) {
            self.errors += 1;
        }

        fn on_done(&mut self) {
            self.done += 1;
        }
    }

    #[test]
    fn test_walk_visits_all_files() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("a/deep")).unwrap();
        fs::create_dir_all(root.join("b")).unwrap();
        fs::write(root.join("top.jpg"), b"x").unwrap();
        fs::write(root.join("a/one.JPG"), b"x").unwrap();
        fs::write(root.join("a/deep/two.txt"), b"x").unwrap();
        fs::write(root.join("b/three.jpeg"), b"x").unwrap();

        let mut c = Collect::default();
        walk(root, &mut c);

        assert_eq!(
            c.files,
            vec![
                root.join("a/deep/two.txt"),
                root.join("a/one.JPG"),
                root.join("b/three.jpeg"),
                root.join("top.jpg"),
            ]
        );
        assert_eq!(c.errors, 0);
        assert_eq!(c.done, 1);
    }

    #[test]
    fn test_missing_root_reports_error_then_done() {
        let dir = tempdir().unwrap();
        let mut c = Collect::default();
        walk(&dir.path().join("nope"), &mut c);

        assert!(c.files.is_empty());
        assert_eq!(c.errors, 1);
        assert_eq!(c.done, 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_not_followed() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("src");
        let outside = dir.path().join("outside");
        fs::create_dir_all(&root).unwrap();
        fs::create_dir_all(&outside).unwrap();
        fs::write(outside.join("hidden.jpg"), b"x").unwrap();
        fs::write(root.join("real.jpg"), b"x").unwrap();
        std::os::unix::fs::symlink(&outside, root.join("linked-dir")).unwrap();
        std::os::unix::fs::symlink(outside.join("hidden.jpg"), root.join("linked.jpg")).unwrap();
        // Cycle back to the root.
        std::os::unix::fs::symlink(&root, root.join("loop")).unwrap();

        let mut c = Collect::default();
        walk(&root, &mut c);

        assert_eq!(c.files, vec![root.join("real.jpg")]);
        assert_eq!(c.errors, 0);
        assert_eq!(c.done, 1);
    }
}

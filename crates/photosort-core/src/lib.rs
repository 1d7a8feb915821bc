pub mod copy;
pub mod date;
pub mod error;
pub mod metadata;
pub mod record;
pub mod walk;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

pub use copy::CopyOutcome;
pub use error::Error;
pub use record::ImageRecord;

/// Where to read photos from and where to sort them to.
#[derive(Debug, Clone)]
pub struct Config {
    pub source: PathBuf,
    pub target: PathBuf,
}

/// Something worth telling the user about while a run is in progress.
#[derive(Debug)]
pub enum Report {
    /// `name` was copied to `dest`.
    Copied { name: String, dest: PathBuf },
    /// `name` was already present at `dest`.
    Skipped { name: String, dest: PathBuf },
    /// A per-file or per-entry failure. The run carries on.
    Failed(Error),
    /// The walk is finished; sent exactly once.
    Done,
}

/// Type alias for the report callback
pub type ReportCallback<'a> = dyn Fn(&Report) + 'a;

/// Counters for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Regular files found under the source directory
    pub files_seen: u64,
    pub copied: u64,
    pub skipped: u64,
    /// Non-JPEG names and unreadable metadata
    pub extraction_failed: u64,
    /// Directory creation or copy failures
    pub copy_failed: u64,
    pub traversal_errors: u64,
}

/// Sort every JPEG under `config.source` into `config.target`.
///
/// Files are handled one at a time in walk order. No failure stops the run:
/// each one is reported through `report` and the walk moves on.
pub fn run(config: &Config, report: &ReportCallback<'_>) -> RunSummary {
    let mut pipeline = Pipeline {
        target: &config.target,
        report,
        summary: RunSummary::default(),
    };
    walk::walk(&config.source, &mut pipeline);
    pipeline.summary
}

struct Pipeline<'a> {
    target: &'a Path,
    report: &'a ReportCallback<'a>,
    summary: RunSummary,
}

impl Pipeline<'_> {
    fn fail(&mut self, error: Error) {
        (self.report)(&Report::Failed(error));
    }
}

impl walk::WalkHandler for Pipeline<'_> {
    fn on_file(&mut self, dir: &Path, name: &OsStr) {
        self.summary.files_seen += 1;
        let source = dir.join(name);
        let display_name = name.to_string_lossy();

        let record = match metadata::extract(&source, &display_name) {
            Ok(record) => record,
            Err(e) => {
                self.summary.extraction_failed += 1;
                self.fail(e);
                return;
            }
        };

        let resolved = date::resolve(&record);
        let target_dir = date::build_path(resolved, self.target);
        log::debug!("{} dated {} -> {}", record.name, resolved, target_dir.display());

        match copy::copy_into(&source, &target_dir, name) {
            CopyOutcome::Copied(dest) => {
                self.summary.copied += 1;
                (self.report)(&Report::Copied {
                    name: record.name,
                    dest,
                });
            }
            CopyOutcome::Skipped(dest) => {
                self.summary.skipped += 1;
                (self.report)(&Report::Skipped {
                    name: record.name,
                    dest,
                });
            }
            CopyOutcome::Failed(e) => {
                self.summary.copy_failed += 1;
                self.fail(e);
            }
        }
    }

    fn on_error(&mut self, error: Error) {
        self.summary.traversal_errors += 1;
        self.fail(error);
    }

    fn on_done(&mut self) {
        (self.report)(&Report::Done);
    }
}

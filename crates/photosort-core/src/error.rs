use std::io;
use std::path::PathBuf;

/// Everything that can go wrong while sorting a single file or walking the
/// source tree. None of these abort a run; each is reported and the walk
/// moves on to the next entry.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File name does not carry one of the accepted JPEG extensions.
    #[error("No JPG file! => {name}")]
    NotAJpeg { name: String },

    /// The file looked like a JPEG but its EXIF block could not be read.
    #[error("{name}: {source}")]
    MetadataParse {
        name: String,
        #[source]
        source: exif::Error,
    },

    #[error("{}: {source}", .path.display())]
    DirCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{name}: {source}")]
    Copy {
        name: String,
        #[source]
        source: io::Error,
    },

    /// Unreadable directory, vanished entry, permission denied and the like.
    #[error("{source}")]
    Traversal {
        #[source]
        source: walkdir::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

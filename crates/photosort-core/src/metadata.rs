use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use exif::{In, Reader, Tag, Value};

use crate::error::{Error, Result};
use crate::record::ImageRecord;

/// Extensions treated as JPEG. Matching is case sensitive and upper-case
/// `.JPEG` is not in the list.
const JPEG_SUFFIXES: &[&str] = &[".jpg", ".JPG", ".jpeg"];

pub fn is_jpeg(file_name: &str) -> bool {
    JPEG_SUFFIXES.iter().any(|suffix| file_name.ends_with(suffix))
}

/// Read the capture and modification timestamps of a JPEG.
///
/// `created` comes from the Exif `DateTimeDigitized` tag ("CreateDate"),
/// `modified` from the IFD0 `DateTime` tag ("ModifyDate"). Both are returned
/// verbatim; validating them is the date resolver's job.
pub fn extract(full_path: &Path, file_name: &str) -> Result<ImageRecord> {
    if !is_jpeg(file_name) {
        return Err(Error::NotAJpeg {
            name: file_name.to_string(),
        });
    }

    log::debug!("reading EXIF from {}", full_path.display());
    let exif = read_exif(full_path).map_err(|source| Error::MetadataParse {
        name: file_name.to_string(),
        source,
    })?;

    Ok(ImageRecord::new(
        file_name,
        ascii_field(&exif, Tag::DateTimeDigitized),
        ascii_field(&exif, Tag::DateTime),
    ))
}

fn read_exif(path: &Path) -> std::result::Result<exif::Exif, exif::Error> {
    let file = File::open(path)?;
    Reader::new().read_from_container(&mut BufReader::new(file))
}

/// First ASCII component of a tag in the primary image, if present and non-empty.
fn ascii_field(exif: &exif::Exif, tag: Tag) -> Option<String> {
    let field = exif.get_field(tag, In::PRIMARY)?;
    match &field.value {
        Value::Ascii(parts) => parts
            .first()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
            .filter(|s| !s.is_empty()),
        _ => None,
    }
}

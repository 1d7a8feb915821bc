/// Dates found in one JPEG, kept exactly as stored in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    /// Base file name, e.g. `IMG_0001.JPG`
    pub name: String,
    /// Raw capture timestamp (`YYYY:MM:DD HH:mm:ss` when well formed)
    pub created: Option<String>,
    /// Raw modification timestamp
    pub modified: Option<String>,
}

impl ImageRecord {
    pub fn new(name: impl Into<String>, created: Option<String>, modified: Option<String>) -> Self {
        Self {
            name: name.into(),
            created,
            modified,
        }
    }
}

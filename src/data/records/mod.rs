use std::{error::Error, fs::File, path::Path};

/// A module for reading and writing
/// [FASTA](https://en.wikipedia.org/wiki/FASTA_format) files.
pub mod fasta;

#[derive(Debug)]
struct RecordError {
    description: String,
    source:      Box<dyn Error + Send + Sync>,
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}

impl Error for RecordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.source.as_ref())
    }
}

/// Opening and creating record files with the path and record type added to
/// any error message.
trait RecordFile {
    const RECORD_NAME: &str;

    /// Opens a file for reading. Empty files are allowed.
    #[inline]
    fn open_file<P: AsRef<Path>>(filename: P) -> std::io::Result<File> {
        let path = filename.as_ref();
        File::open(path).map_err(|err| Self::new_wrapped("file open error", path, err))
    }

    /// Creates a file for writing, truncating it if it already exists.
    #[inline]
    fn create_file<P: AsRef<Path>>(filename: P) -> std::io::Result<File> {
        let path = filename.as_ref();
        File::create(path).map_err(|err| Self::new_wrapped("file create error", path, err))
    }

    fn new_wrapped(description: &str, path: &Path, err: std::io::Error) -> std::io::Error {
        std::io::Error::new(
            err.kind(),
            RecordError {
                description: format!(
                    "{desc} for {name}: '{path}'",
                    desc = description,
                    name = Self::RECORD_NAME,
                    path = path.display()
                ),
                source:      Box::new(err),
            },
        )
    }
}

use crate::{
    data::{
        extension::{
            id_types::FastaIDs,
            vec_types::{ExtendSymbols, StripLineBreak},
        },
        records::RecordFile,
    },
    unwrap_or_return_some_err,
};
use std::{
    fs::File,
    io::{BufRead, BufReader, Error as IOError, ErrorKind},
    path::Path,
};

mod writer;

pub use writer::FastaWriter;

#[cfg(test)]
mod test;

/// Provides a container struct for data from a generic
/// [FASTA](https://en.wikipedia.org/wiki/FASTA_format) file.
///
/// `name` holds the entire header line without the leading `>`. The
/// identifier and annotation can be obtained with [`id`] and [`annotation`].
///
/// [`id`]: FastaSeq::id
/// [`annotation`]: FastaSeq::annotation
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct FastaSeq {
    pub name:     String,
    pub sequence: Vec<u8>,
}

impl FastaSeq {
    /// Creates a record from an identifier, an optional description, and a
    /// sequence. An empty description produces a header with the identifier
    /// alone.
    #[must_use]
    pub fn new(id: &str, description: &str, sequence: Vec<u8>) -> Self {
        let name = if description.is_empty() {
            id.to_string()
        } else {
            format!("{id} {description}")
        };
        FastaSeq { name, sequence }
    }

    /// The record identifier, which is the first whitespace-delimited word of
    /// the header.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        self.name.get_id()
    }

    /// The free text following the identifier in the header, if present.
    #[inline]
    #[must_use]
    pub fn annotation(&self) -> Option<&str> {
        self.name.get_annotation()
    }

    /// The full description, which is the entire header line.
    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.name
    }
}

/// The maximum number of records to take from a [`FastaReader`].
///
/// Any negative count converts to [`RecordLimit::UNLIMITED`].
///
/// ```
/// # use cds_translate::data::fasta::RecordLimit;
/// assert_eq!(RecordLimit::from(-1), RecordLimit::UNLIMITED);
/// assert_eq!(RecordLimit::from(3).get(), Some(3));
/// assert_eq!(RecordLimit::from(3).apply(0..5).count(), 3);
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub struct RecordLimit(Option<usize>);

impl RecordLimit {
    pub const UNLIMITED: RecordLimit = RecordLimit(None);

    #[inline]
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        RecordLimit(Some(limit))
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> Option<usize> {
        self.0
    }

    /// Lazily truncates `iter` to at most the limit. Nothing past the limit
    /// is pulled from `iter`.
    #[inline]
    pub fn apply<I: Iterator>(self, iter: I) -> std::iter::Take<I> {
        iter.take(self.0.unwrap_or(usize::MAX))
    }
}

impl From<i64> for RecordLimit {
    fn from(limit: i64) -> Self {
        match usize::try_from(limit) {
            Ok(limit) => RecordLimit::new(limit),
            Err(_) if limit < 0 => RecordLimit::UNLIMITED,
            Err(_) => RecordLimit::new(usize::MAX),
        }
    }
}

/// Structure for buffered reading of `FASTA` files.
///
/// Records are parsed on demand, one at a time. Empty input, or input
/// consisting only of whitespace, yields no records. Only a line starting
/// with `>` begins a record; a `>` anywhere else is part of the header or
/// sequence. Once an error has been returned the iterator is exhausted.
#[derive(Debug)]
pub struct FastaReader<R: std::io::Read> {
    reader:      BufReader<R>,
    buffer:      Vec<u8>,
    next_header: Option<Vec<u8>>,
    finished:    bool,
}

impl<R: std::io::Read> FastaReader<R> {
    /// Creates an iterator over FASTA data, wrapping the input in a buffered
    /// reader. This does not allocate or read any data initially.
    pub fn new(inner: R) -> Self {
        FastaReader::from_bufreader(BufReader::new(inner))
    }

    /// Creates an iterator over FASTA data from a `BufReader`.
    pub fn from_bufreader(reader: BufReader<R>) -> Self {
        FastaReader {
            reader,
            buffer: Vec::new(),
            next_header: None,
            finished: false,
        }
    }

    #[inline]
    fn stop(&mut self) {
        self.finished = true;
        self.next_header = None;
    }

    /// Reads the next line into the buffer, returning `false` at end of input.
    #[inline]
    fn read_line(&mut self) -> std::io::Result<bool> {
        self.buffer.clear();
        Ok(self.reader.read_until(b'\n', &mut self.buffer)? > 0)
    }

    /// Parses a header line, which must start with `>`. Everything after the
    /// `>` is the name, including further `>` symbols. An empty name is
    /// allowed.
    ///
    /// Bytes that are not valid UTF-8 are replaced with `U+FFFD`, so such a
    /// header is not written back byte for byte.
    fn parse_header(line: &[u8]) -> String {
        let line = line.strip_line_break();
        let header = line.strip_prefix(b">").unwrap_or(line);
        String::from_utf8_lossy(header).trim_end().to_string()
    }

    /// Skips leading blank lines to find the first header. Returns `None` for
    /// empty input.
    fn read_first_header(&mut self) -> std::io::Result<Option<String>> {
        while self.read_line()? {
            if self.buffer.starts_with(b">") {
                return Ok(Some(Self::parse_header(&self.buffer)));
            } else if !self.buffer.iter().all(u8::is_ascii_whitespace) {
                return Err(IOError::new(
                    ErrorKind::InvalidData,
                    "The FASTA file must start with a '>' symbol!",
                ));
            }
        }
        Ok(None)
    }

    fn read_record(&mut self) -> std::io::Result<Option<FastaSeq>> {
        let name = match self.next_header.take() {
            Some(header) => Self::parse_header(&header),
            None => match self.read_first_header()? {
                Some(name) => name,
                None => return Ok(None),
            },
        };

        let mut sequence = Vec::new();
        while self.read_line()? {
            if self.buffer.starts_with(b">") {
                self.next_header = Some(std::mem::take(&mut self.buffer));
                return Ok(Some(FastaSeq { name, sequence }));
            }
            sequence.extend_symbols(&self.buffer);
        }

        self.finished = true;
        Ok(Some(FastaSeq { name, sequence }))
    }
}

impl FastaReader<File> {
    /// Reads a fasta file into an iterator backed by a buffered reader.
    ///
    /// ## Errors
    ///
    /// Will return `Err` if the file or permissions do not exist. The file
    /// path is included in the error message.
    pub fn from_filename<P>(filename: P) -> std::io::Result<FastaReader<File>>
    where
        P: AsRef<Path>, {
        let file = Self::open_file(filename)?;
        Ok(FastaReader::new(file))
    }
}

impl<R: std::io::Read> RecordFile for FastaReader<R> {
    const RECORD_NAME: &str = "FASTA";
}

/// An iterator for buffered reading of
/// [FASTA](https://en.wikipedia.org/wiki/FASTA_format) files.
impl<R: std::io::Read> Iterator for FastaReader<R> {
    type Item = std::io::Result<FastaSeq>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished && self.next_header.is_none() {
            return None;
        }

        match unwrap_or_return_some_err!(self.read_record().inspect_err(|_| self.stop())) {
            Some(record) => Some(Ok(record)),
            None => {
                self.stop();
                None
            }
        }
    }
}

impl std::fmt::Display for FastaSeq {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, ">{}\n{}\n", self.name, String::from_utf8_lossy(&self.sequence))
    }
}

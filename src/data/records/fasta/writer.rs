use super::FastaSeq;
use crate::data::records::RecordFile;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Structure for buffered, streaming writing of `FASTA` records.
///
/// Sequences are wrapped at [`FastaWriter::DEFAULT_LINE_WIDTH`] symbols per
/// line unless configured otherwise with [`with_line_width`]. The writer
/// counts the records it has written.
///
/// ```
/// # use cds_translate::data::fasta::{FastaSeq, FastaWriter};
/// let mut writer = FastaWriter::new(Vec::new()).with_line_width(4);
/// writer.write_record(&FastaSeq::new("s1", "", b"ATGAAATAA".to_vec())).unwrap();
/// assert_eq!(writer.count(), 1);
/// ```
///
/// [`with_line_width`]: FastaWriter::with_line_width
#[derive(Debug)]
pub struct FastaWriter<W: Write> {
    writer:     BufWriter<W>,
    line_width: usize,
    count:      usize,
}

impl<W: Write> FastaWriter<W> {
    pub const DEFAULT_LINE_WIDTH: usize = 60;

    /// Creates a writer wrapping the output in a buffered writer.
    pub fn new(inner: W) -> Self {
        FastaWriter {
            writer:     BufWriter::new(inner),
            line_width: Self::DEFAULT_LINE_WIDTH,
            count:      0,
        }
    }

    /// Sets the number of sequence symbols per line. A width of `0` writes
    /// each sequence on a single line.
    #[must_use]
    pub fn with_line_width(mut self, line_width: usize) -> Self {
        self.line_width = line_width;
        self
    }

    /// Writes one record.
    ///
    /// ## Errors
    ///
    /// Any IO error from the underlying writer is propagated.
    pub fn write_record(&mut self, record: &FastaSeq) -> std::io::Result<()> {
        self.writer.write_all(b">")?;
        self.writer.write_all(record.name.as_bytes())?;
        self.writer.write_all(b"\n")?;

        if self.line_width == 0 {
            if !record.sequence.is_empty() {
                self.writer.write_all(&record.sequence)?;
                self.writer.write_all(b"\n")?;
            }
        } else {
            for line in record.sequence.chunks(self.line_width) {
                self.writer.write_all(line)?;
                self.writer.write_all(b"\n")?;
            }
        }

        self.count += 1;
        Ok(())
    }

    /// Writes every record from `records`, returning the number written by
    /// this call.
    ///
    /// ## Errors
    ///
    /// Any IO error from the underlying writer is propagated.
    pub fn write_all<'a, I>(&mut self, records: I) -> std::io::Result<usize>
    where
        I: IntoIterator<Item = &'a FastaSeq>, {
        let before = self.count;
        for record in records {
            self.write_record(record)?;
        }
        Ok(self.count - before)
    }

    /// The number of records written so far.
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Flushes all buffered output and returns the total number of records
    /// written.
    ///
    /// ## Errors
    ///
    /// Returns `Err` if flushing fails.
    pub fn finish(mut self) -> std::io::Result<usize> {
        self.writer.flush()?;
        Ok(self.count)
    }

    /// Flushes and unwraps the underlying writer.
    ///
    /// ## Errors
    ///
    /// Returns `Err` if flushing fails.
    pub fn into_inner(self) -> std::io::Result<W> {
        self.writer.into_inner().map_err(std::io::IntoInnerError::into_error)
    }
}

impl FastaWriter<File> {
    /// Creates (or truncates) a FASTA file for writing.
    ///
    /// ## Errors
    ///
    /// Will return `Err` if the file cannot be created. The file path is
    /// included in the error message.
    pub fn to_filename<P>(filename: P) -> std::io::Result<FastaWriter<File>>
    where
        P: AsRef<Path>, {
        let file = Self::create_file(filename)?;
        Ok(FastaWriter::new(file))
    }
}

impl<W: Write> RecordFile for FastaWriter<W> {
    const RECORD_NAME: &str = "FASTA";
}

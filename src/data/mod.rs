//! ## Data import, export, and genetic code tables.
//!
//! Records are read with [`FastaReader`], which lazily yields one
//! [`FastaSeq`] at a time, and written back out with [`FastaWriter`]. Neither
//! holds more than a single record in memory, so arbitrarily large inputs can
//! be streamed.
//!
//! ## IO Errors
//!
//! For working with files and records, this crate uses [`std::io::Error`],
//! allowing system IO errors to be propagated and malformed records to be
//! represented with [`ErrorKind::InvalidData`]. When a file cannot be opened
//! or created, the path is added to the error message and the original error
//! remains accessible with [`Error::source`].
//!
//! Errors specific to translation are not IO errors at all: a coding sequence
//! that is rejected by the genetic code produces a [`TranslationRejected`],
//! which is recoverable and never aborts a run.
//!
//! [`FastaReader`]: records::fasta::FastaReader
//! [`FastaSeq`]: records::fasta::FastaSeq
//! [`FastaWriter`]: records::fasta::FastaWriter
//! [`TranslationRejected`]: err::TranslationRejected
//! [`ErrorKind::InvalidData`]: std::io::ErrorKind::InvalidData
//! [`Error::source`]: std::error::Error::source

/// Genetic code tables and IUPAC helpers.
pub mod constants;
/// A module with error types and convenience traits for handling [`Result`].
pub mod err;
/// A module for records types used for I/O.
pub mod records;

/// A private module for helper extension traits.
pub(crate) mod extension;

pub use records::fasta;

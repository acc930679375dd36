//! ## Translation and classification of coding sequences
//!
//! [`translate_record`] translates one [`FastaSeq`] under a [`CodonTable`]
//! and returns a [`TranslationOutcome`]: either a new protein record, or the
//! original nucleotide record together with the reason it was rejected.
//! Rejection is an ordinary value, never an error, so a single bad coding
//! sequence cannot abort a run.
//!
//! [`Translator`] lifts this over a stream of records. It pulls one record
//! from its input for every outcome it yields, counts processed, translated,
//! and failed records, and notifies a [`TranslationReporter`] of progress,
//! rejections, and the final [`RunSummary`].
//!
//! ```
//! # use cds_translate::prelude::*;
//! let records = vec![
//!     FastaSeq::new("cds1", "", b"ATGAAATAA".to_vec()),
//!     FastaSeq::new("cds2", "", b"ATGAAATA".to_vec()),
//! ];
//!
//! let mut translator = records.into_iter().map(Ok::<_, std::io::Error>).translate_all(BacterialCode);
//! let outcomes = translator.by_ref().collect::<std::io::Result<Vec<_>>>().unwrap();
//!
//! assert!(outcomes[0].is_translated());
//! assert_eq!(outcomes[0].record().name, "protein_cds1 translation of known Bacterial CDS");
//! assert!(!outcomes[1].is_translated());
//! assert_eq!(translator.summary().failed, 1);
//! ```
//!
//! [`TranslationReporter`]: report::TranslationReporter

use crate::{
    data::{err::TranslationRejected, fasta::FastaSeq},
    unwrap_or_return_some_err,
};
use report::{NoReporter, TranslationReporter};

pub mod report;


/// Prefixed to the identifier of a nucleotide record to name its protein.
pub const PROTEIN_ID_PREFIX: &str = "protein_";
/// The description given to every translated protein record.
pub const PROTEIN_DESCRIPTION: &str = "translation of known Bacterial CDS";
/// Number of processed records between progress notifications.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 10_000;

/// A genetic code able to translate complete coding sequences.
pub trait CodonTable {
    /// The name of the table, such as `Bacterial`.
    fn name(&self) -> &str;

    /// Translates a complete coding sequence into amino acids, excluding the
    /// terminal stop codon.
    ///
    /// ## Errors
    ///
    /// Returns the reason the sequence is not a valid coding sequence under
    /// this table.
    fn translate_cds(&self, sequence: &[u8]) -> Result<Vec<u8>, TranslationRejected>;
}

impl<T: CodonTable + ?Sized> CodonTable for &T {
    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline]
    fn translate_cds(&self, sequence: &[u8]) -> Result<Vec<u8>, TranslationRejected> {
        (**self).translate_cds(sequence)
    }
}

/// The result of attempting to translate one record.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TranslationOutcome {
    /// A newly built protein record.
    Translated(FastaSeq),
    /// The original nucleotide record, unchanged, and why it was rejected.
    Failed {
        record: FastaSeq,
        reason: TranslationRejected,
    },
}

impl TranslationOutcome {
    #[inline]
    #[must_use]
    pub fn is_translated(&self) -> bool {
        matches!(self, TranslationOutcome::Translated(_))
    }

    /// The protein record if translated, otherwise the original record.
    #[inline]
    #[must_use]
    pub fn record(&self) -> &FastaSeq {
        match self {
            TranslationOutcome::Translated(record) | TranslationOutcome::Failed { record, .. } => record,
        }
    }

    #[inline]
    #[must_use]
    pub fn into_record(self) -> FastaSeq {
        match self {
            TranslationOutcome::Translated(record) | TranslationOutcome::Failed { record, .. } => record,
        }
    }
}

/// Translates one record under `table`.
///
/// A translated record is named `protein_<id>` with the description
/// [`PROTEIN_DESCRIPTION`]. A rejected record is returned verbatim.
#[must_use]
pub fn translate_record<C: CodonTable + ?Sized>(record: FastaSeq, table: &C) -> TranslationOutcome {
    match table.translate_cds(&record.sequence) {
        Ok(protein) => TranslationOutcome::Translated(FastaSeq::new(
            &format!("{PROTEIN_ID_PREFIX}{id}", id = record.id()),
            PROTEIN_DESCRIPTION,
            protein,
        )),
        Err(reason) => TranslationOutcome::Failed { record, reason },
    }
}

/// Counts for a translation run.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub struct RunSummary {
    pub processed:  usize,
    pub translated: usize,
    pub failed:     usize,
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut buff = itoa::Buffer::new();
        f.write_str(buff.format(self.processed))?;
        f.write_str(" records processed, ")?;
        f.write_str(buff.format(self.translated))?;
        f.write_str(" translated, ")?;
        f.write_str(buff.format(self.failed))?;
        f.write_str(" un-translated")
    }
}

/// A lazy iterator adapter translating a stream of records one at a time.
///
/// Each call to [`next`] pulls exactly one item from the input. Input errors
/// are passed through unchanged and end the iteration without a final
/// report; when the input is exhausted the reporter receives the
/// [`RunSummary`] once.
///
/// This is usually created with [`TranslateRecords::translate_all`].
///
/// [`next`]: Iterator::next
#[derive(Debug)]
pub struct Translator<I, C, R = NoReporter> {
    records:           I,
    table:             C,
    reporter:          R,
    progress_interval: usize,
    summary:           RunSummary,
    finished:          bool,
}

impl<I, C> Translator<I, C> {
    /// Creates a translator without any reporting, using
    /// [`DEFAULT_PROGRESS_INTERVAL`].
    pub fn new(records: I, table: C) -> Self {
        Translator {
            records,
            table,
            reporter: NoReporter,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            summary: RunSummary::default(),
            finished: false,
        }
    }
}

impl<I, C, R> Translator<I, C, R> {
    /// Replaces the reporter. Pass `&mut reporter` to keep ownership.
    pub fn with_reporter<R2: TranslationReporter>(self, reporter: R2) -> Translator<I, C, R2> {
        Translator {
            records: self.records,
            table: self.table,
            reporter,
            progress_interval: self.progress_interval,
            summary: self.summary,
            finished: self.finished,
        }
    }

    /// Sets the number of processed records between progress notifications.
    /// An interval of `0` disables them.
    #[must_use]
    pub fn with_progress_interval(mut self, progress_interval: usize) -> Self {
        self.progress_interval = progress_interval;
        self
    }

    /// The counts so far.
    #[inline]
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    #[inline]
    pub fn reporter(&self) -> &R {
        &self.reporter
    }
}

impl<I, E, C, R> Iterator for Translator<I, C, R>
where
    I: Iterator<Item = Result<FastaSeq, E>>,
    C: CodonTable,
    R: TranslationReporter,
{
    type Item = Result<TranslationOutcome, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let Some(record) = self.records.next() else {
            self.finished = true;
            self.reporter.finished(&self.summary);
            return None;
        };
        let record = unwrap_or_return_some_err!(record.inspect_err(|_| self.finished = true));

        let outcome = translate_record(record, &self.table);
        self.summary.processed += 1;

        match &outcome {
            TranslationOutcome::Translated(_) => self.summary.translated += 1,
            TranslationOutcome::Failed { record, reason } => {
                self.summary.failed += 1;
                self.reporter.rejected(self.summary.failed, record, reason);
            }
        }

        if self.progress_interval > 0 && self.summary.processed.is_multiple_of(self.progress_interval) {
            self.reporter.progress(self.summary.processed);
        }

        Some(Ok(outcome))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            self.records.size_hint()
        }
    }
}

impl<I, E, C, R> std::iter::FusedIterator for Translator<I, C, R>
where
    I: Iterator<Item = Result<FastaSeq, E>>,
    C: CodonTable,
    R: TranslationReporter,
{
}

/// Extension trait for translating any iterator of fallibly read records.
pub trait TranslateRecords<E>: Iterator<Item = Result<FastaSeq, E>> + Sized {
    /// Lazily translates every record under `table`. See [`Translator`].
    #[inline]
    fn translate_all<C: CodonTable>(self, table: C) -> Translator<Self, C> {
        Translator::new(self, table)
    }
}

impl<I, E> TranslateRecords<E> for I where I: Iterator<Item = Result<FastaSeq, E>> {}

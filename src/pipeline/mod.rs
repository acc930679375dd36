use crate::{
    data::fasta::{FastaReader, FastaWriter, RecordLimit},
    translate::{
        CodonTable, DEFAULT_PROGRESS_INTERVAL, RunSummary, TranslateRecords, TranslationOutcome, report::TranslationReporter,
        translate_record,
    },
};
use std::path::{Path, PathBuf};

pub use crate::data::err::PipelineError;


/// A coding sequence every usable genetic code must translate. Checked before
/// a run so that a broken table fails fast instead of rejecting every record.
pub const CONTROL_CDS: &[u8] = b"ATGGCTAAAGAATTTTGGTAA";

/// Settings for one translation run.
///
/// ```
/// # use cds_translate::prelude::*;
/// let config = TranslateConfig::new("cds.fa", "protein.fa", "untranslated.fa")
///     .with_limit(RecordLimit::from(-1))
///     .with_progress_interval(50_000);
/// assert_eq!(config.limit, RecordLimit::UNLIMITED);
/// assert!(config.preflight);
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TranslateConfig {
    pub input:               PathBuf,
    pub protein_output:      PathBuf,
    pub untranslated_output: PathBuf,
    pub limit:               RecordLimit,
    pub progress_interval:   usize,
    pub line_width:          usize,
    pub preflight:           bool,
}

impl TranslateConfig {
    /// Creates a configuration with no record limit, progress every
    /// [`DEFAULT_PROGRESS_INTERVAL`] records, sequence lines of
    /// [`FastaWriter::DEFAULT_LINE_WIDTH`], and the pre-flight check enabled.
    pub fn new<P, Q, S>(input: P, protein_output: Q, untranslated_output: S) -> Self
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
        S: AsRef<Path>, {
        TranslateConfig {
            input:               input.as_ref().to_path_buf(),
            protein_output:      protein_output.as_ref().to_path_buf(),
            untranslated_output: untranslated_output.as_ref().to_path_buf(),
            limit:               RecordLimit::UNLIMITED,
            progress_interval:   DEFAULT_PROGRESS_INTERVAL,
            line_width:          FastaWriter::<std::fs::File>::DEFAULT_LINE_WIDTH,
            preflight:           true,
        }
    }

    #[must_use]
    pub fn with_limit(mut self, limit: RecordLimit) -> Self {
        self.limit = limit;
        self
    }

    #[must_use]
    pub fn with_progress_interval(mut self, progress_interval: usize) -> Self {
        self.progress_interval = progress_interval;
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: usize) -> Self {
        self.line_width = line_width;
        self
    }

    #[must_use]
    pub fn with_preflight(mut self, preflight: bool) -> Self {
        self.preflight = preflight;
        self
    }
}

/// Confirms that `table` translates [`CONTROL_CDS`].
///
/// ## Errors
///
/// Returns [`PipelineError::TableCheck`] with the rejection reason otherwise.
pub fn check_table<C: CodonTable + ?Sized>(table: &C) -> Result<(), PipelineError> {
    table
        .translate_cds(CONTROL_CDS)
        .map(|_| ())
        .map_err(|reason| PipelineError::TableCheck {
            table: table.name().to_string(),
            reason,
        })
}

/// Checks the table, then translates the first input record and passes the
/// result to the reporter. The record is read from a separate handle and is
/// not written anywhere; the main pass translates it again with the same
/// table.
fn preflight<C, R>(config: &TranslateConfig, table: &C, reporter: &mut R) -> Result<(), PipelineError>
where
    C: CodonTable + ?Sized,
    R: TranslationReporter, {
    check_table(table)?;

    let mut reader = FastaReader::from_filename(&config.input)?;
    if let Some(first) = reader.next() {
        let first = first?;
        let outcome = translate_record(first.clone(), table);
        reporter.preflight(&first, &outcome);
    }
    Ok(())
}

/// Translates the records of `config.input`, writing proteins to
/// `config.protein_output` and rejected records, unchanged, to
/// `config.untranslated_output`.
///
/// Records are streamed one at a time. At most `config.limit` records are
/// read. Both output files are created (or truncated) before the first
/// record is read, so an empty input produces two empty files.
///
/// ## Errors
///
/// Malformed input ([`PipelineError::Parse`]), any IO failure
/// ([`PipelineError::Io`]), and a table failing [`check_table`] abort the
/// run. Rejected records are never errors.
pub fn translate_file<C, R>(config: &TranslateConfig, table: &C, mut reporter: R) -> Result<RunSummary, PipelineError>
where
    C: CodonTable + ?Sized,
    R: TranslationReporter, {
    if config.preflight {
        preflight(config, table, &mut reporter)?;
    }

    let reader = FastaReader::from_filename(&config.input)?;
    let mut proteins = FastaWriter::to_filename(&config.protein_output)?.with_line_width(config.line_width);
    let mut untranslated = FastaWriter::to_filename(&config.untranslated_output)?.with_line_width(config.line_width);

    log::debug!(
        "translating '{input}' with the {table} code",
        input = config.input.display(),
        table = table.name()
    );

    let mut translator = config
        .limit
        .apply(reader)
        .translate_all(table)
        .with_progress_interval(config.progress_interval)
        .with_reporter(&mut reporter);

    for outcome in translator.by_ref() {
        match outcome? {
            TranslationOutcome::Translated(protein) => proteins.write_record(&protein)?,
            TranslationOutcome::Failed { record, .. } => untranslated.write_record(&record)?,
        }
    }

    let summary = translator.summary();
    proteins.finish()?;
    untranslated.finish()?;

    Ok(summary)
}

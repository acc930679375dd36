use super::{RunSummary, TranslationOutcome};
use crate::data::{err::TranslationRejected, fasta::FastaSeq};

/// Observes a translation run. Every method has an empty default, so
/// implementors only override what they need.
pub trait TranslationReporter {
    /// Called with the first input record and its outcome before the main
    /// pass starts.
    fn preflight(&mut self, _input: &FastaSeq, _outcome: &TranslationOutcome) {}

    /// Called every time the number of processed records reaches a multiple of
    /// the progress interval.
    fn progress(&mut self, _processed: usize) {}

    /// Called for each rejected record. `failures` is the running count of
    /// rejections, including this one.
    fn rejected(&mut self, _failures: usize, _record: &FastaSeq, _reason: &TranslationRejected) {}

    /// Called once when the input has been exhausted.
    fn finished(&mut self, _summary: &RunSummary) {}
}

impl<R: TranslationReporter + ?Sized> TranslationReporter for &mut R {
    #[inline]
    fn preflight(&mut self, input: &FastaSeq, outcome: &TranslationOutcome) {
        (**self).preflight(input, outcome);
    }

    #[inline]
    fn progress(&mut self, processed: usize) {
        (**self).progress(processed);
    }

    #[inline]
    fn rejected(&mut self, failures: usize, record: &FastaSeq, reason: &TranslationRejected) {
        (**self).rejected(failures, record, reason);
    }

    #[inline]
    fn finished(&mut self, summary: &RunSummary) {
        (**self).finished(summary);
    }
}

/// Ignores every event.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub struct NoReporter;

impl TranslationReporter for NoReporter {}

/// Reports events through the [`log`] facade.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub struct LogReporter;

impl TranslationReporter for LogReporter {
    fn preflight(&mut self, input: &FastaSeq, outcome: &TranslationOutcome) {
        log::info!("pre-flight record: {name}", name = input.name);
        match outcome {
            TranslationOutcome::Translated(protein) => log::info!(
                "pre-flight translation: {name} ({len} residues)",
                name = protein.name,
                len = protein.sequence.len()
            ),
            TranslationOutcome::Failed { reason, .. } => {
                log::warn!("pre-flight record could not be translated: {reason}");
            }
        }
    }

    fn progress(&mut self, processed: usize) {
        log::info!("{processed} records processed");
    }

    fn rejected(&mut self, failures: usize, record: &FastaSeq, reason: &TranslationRejected) {
        log::warn!(
            "{failures}: failed to translate nucleotide record '{name}': {reason}",
            name = record.name
        );
    }

    fn finished(&mut self, summary: &RunSummary) {
        log::info!("{failed} un-translated sequences", failed = summary.failed);
        log::debug!("{summary}");
    }
}

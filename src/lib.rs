#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

/// Data import, export, and genetic code tables.
pub mod data;
/// Streaming translation of coding sequences and classification of the
/// outcomes.
pub mod translate;
/// Drives a whole translation run from an input FASTA file to the protein and
/// untranslated output files.
pub mod pipeline;

/// Generate random nucleotide and coding sequences.
#[cfg(feature = "rand")]
pub mod generate;

/// Common structures and traits re-exported
pub mod prelude {
    pub use crate::data::{
        constants::genetic_code::BacterialCode,
        err::{GetCode, OrFail, TranslationRejected},
        records::fasta::{FastaReader, FastaSeq, FastaWriter, RecordLimit},
    };
    pub use crate::pipeline::{PipelineError, TranslateConfig, translate_file};
    pub use crate::translate::{
        CodonTable, RunSummary, TranslateRecords, TranslationOutcome, Translator, translate_record,
        report::{LogReporter, NoReporter, TranslationReporter},
    };
}

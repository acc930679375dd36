use cds_translate::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// Translates bacterial coding sequences to protein. Records that cannot be
/// translated are written unchanged to a separate file.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// FASTA file of nucleotide coding sequences
    #[arg(short = 'i', long)]
    dna_cds_input_fp: PathBuf,

    /// FASTA file to write translated protein records to
    #[arg(short = 'o', long)]
    protein_output_fp: PathBuf,

    /// FASTA file to write untranslated nucleotide records to
    #[arg(short = 'u', long)]
    untranslated_dna_output_fp: PathBuf,

    /// Maximum number of records to read; negative reads every record
    #[arg(short = 'l', long, default_value_t = -1, allow_negative_numbers = true)]
    sequence_limit: i64,

    /// Number of records between progress messages; 0 disables them
    #[arg(long, default_value_t = cds_translate::translate::DEFAULT_PROGRESS_INTERVAL)]
    progress_interval: usize,

    /// Sequence symbols per output line; 0 writes each sequence on one line
    #[arg(long, default_value_t = 60)]
    line_width: usize,

    /// Skip the genetic code check and first-record translation before the run
    #[arg(long)]
    no_preflight: bool,
}

impl From<Args> for TranslateConfig {
    fn from(args: Args) -> Self {
        TranslateConfig::new(
            args.dna_cds_input_fp,
            args.protein_output_fp,
            args.untranslated_dna_output_fp,
        )
        .with_limit(RecordLimit::from(args.sequence_limit))
        .with_progress_interval(args.progress_interval)
        .with_line_width(args.line_width)
        .with_preflight(!args.no_preflight)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = TranslateConfig::from(Args::parse());
    let summary = translate_file(&config, &BacterialCode, LogReporter).unwrap_or_fail();

    println!(
        "wrote {count} sequences to \"{path}\"",
        count = summary.translated,
        path = config.protein_output.display()
    );
    println!(
        "wrote {count} un-translated sequences to \"{path}\"",
        count = summary.failed,
        path = config.untranslated_output.display()
    );
}

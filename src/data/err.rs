use std::fmt::Display;

/// Unwraps an `Ok` value, or returns `Some(Err(e))` from the enclosing
/// function. Intended for [`Iterator::next`] over fallible items.
#[macro_export]
macro_rules! unwrap_or_return_some_err {
    ($expression:expr) => {
        match $expression {
            Ok(v) => v,
            Err(e) => return Some(Err(e)),
        }
    };
}

/// Trait for specifying getting exit codes from errors.
pub trait GetCode {
    fn get_code(&self) -> i32 {
        1
    }
}

impl GetCode for std::io::Error {
    #[must_use]
    #[inline]
    fn get_code(&self) -> i32 {
        self.raw_os_error().unwrap_or(1)
    }
}

/// Trait for providing more graceful [`expect()`](std::result::Result::expect)
/// behavior but with a status code provided by [`GetCode`].
pub trait OrFail<T> {
    fn unwrap_or_fail(self) -> T;
    fn unwrap_or_die(self, msg: &str) -> T;
}

impl<T, E> OrFail<T> for Result<T, E>
where
    E: GetCode + Display,
{
    fn unwrap_or_fail(self) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(e.get_code());
            }
        }
    }

    fn unwrap_or_die(self, msg: &str) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {msg}\n\n{e}");
                std::process::exit(e.get_code());
            }
        }
    }
}

/// The reason a coding sequence could not be translated under a genetic code.
///
/// Codons are stored as they appeared in the (uppercased) sequence. Positions
/// are 0-based nucleotide offsets of the codon's first base.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TranslationRejected {
    /// The first codon is not a start codon for the table. For sequences
    /// shorter than three bases this holds the partial codon.
    NotStartCodon { codon: String },
    /// The sequence length is not a multiple of three.
    LengthNotMultipleOfThree { length: usize },
    /// The final codon is not a stop codon.
    NotStopCodon { codon: String },
    /// A stop codon occurs in frame before the final codon.
    InternalStopCodon { codon: String, position: usize },
    /// A codon contains a symbol outside of the IUPAC nucleotide alphabet.
    InvalidCodon { codon: String, position: usize },
}

impl Display for TranslationRejected {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TranslationRejected::NotStartCodon { codon } => write!(f, "First codon '{codon}' is not a start codon"),
            TranslationRejected::LengthNotMultipleOfThree { length } => {
                write!(f, "Sequence length {length} is not a multiple of three")
            }
            TranslationRejected::NotStopCodon { codon } => write!(f, "Final codon '{codon}' is not a stop codon"),
            TranslationRejected::InternalStopCodon { codon, position } => {
                write!(f, "Extra in frame stop codon '{codon}' found at position {position}")
            }
            TranslationRejected::InvalidCodon { codon, position } => {
                write!(f, "Codon '{codon}' at position {position} is invalid")
            }
        }
    }
}

impl std::error::Error for TranslationRejected {}

/// A fatal error that aborts a translation run.
#[derive(Debug)]
pub enum PipelineError {
    /// The input is not valid FASTA.
    Parse(std::io::Error),
    /// A file could not be opened, read, created, or written.
    Io(std::io::Error),
    /// The genetic code rejected a known coding sequence before the run.
    TableCheck { table: String, reason: TranslationRejected },
}

/// Malformed records are reported by the readers as
/// [`ErrorKind::InvalidData`](std::io::ErrorKind::InvalidData); everything
/// else is an IO failure.
impl From<std::io::Error> for PipelineError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::InvalidData {
            PipelineError::Parse(err)
        } else {
            PipelineError::Io(err)
        }
    }
}

impl Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            PipelineError::Parse(e) => write!(f, "Malformed FASTA input: {e}"),
            PipelineError::Io(e) => write!(f, "{e}"),
            PipelineError::TableCheck { table, reason } => {
                write!(f, "The {table} genetic code rejected a known coding sequence: {reason}")
            }
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Parse(e) | PipelineError::Io(e) => Some(e),
            PipelineError::TableCheck { reason, .. } => Some(reason),
        }
    }
}

impl GetCode for PipelineError {
    fn get_code(&self) -> i32 {
        match self {
            PipelineError::Io(e) => e.get_code(),
            PipelineError::Parse(_) | PipelineError::TableCheck { .. } => 1,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejection_messages() {
        let cases = [
            (
                TranslationRejected::NotStartCodon { codon: "CCC".to_string() },
                "First codon 'CCC' is not a start codon",
            ),
            (
                TranslationRejected::LengthNotMultipleOfThree { length: 10 },
                "Sequence length 10 is not a multiple of three",
            ),
            (
                TranslationRejected::InternalStopCodon {
                    codon:    "TGA".to_string(),
                    position: 6,
                },
                "Extra in frame stop codon 'TGA' found at position 6",
            ),
        ];

        for (rejection, expected) in cases {
            assert_eq!(rejection.to_string(), expected);
        }
    }

    #[test]
    fn pipeline_error_classification() {
        let parse = PipelineError::from(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "The FASTA file must start with a '>' symbol!",
        ));
        assert!(matches!(parse, PipelineError::Parse(_)));
        assert_eq!(parse.to_string(), "Malformed FASTA input: The FASTA file must start with a '>' symbol!");

        let io = PipelineError::from(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(matches!(io, PipelineError::Io(_)));
        assert_eq!(io.get_code(), 1);
    }

    #[test]
    fn io_error_code() {
        let err = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad record");
        assert_eq!(err.get_code(), 1);
    }
}

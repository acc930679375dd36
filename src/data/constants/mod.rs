/// Genetic codes used to translate coding sequences, with IUPAC ambiguity
/// resolution.
pub mod genetic_code;

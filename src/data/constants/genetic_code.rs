use crate::{data::err::TranslationRejected, translate::CodonTable};

/// Amino acids for NCBI translation table 11, indexed by codon with the bases
/// ordered `TCAG`. Stop codons are `*`.
const TABLE_11_AMINO_ACIDS: &[u8; 64] = b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

/// Start codons for NCBI translation table 11, marked with `M`.
const TABLE_11_STARTS: &[u8; 64] = b"---M------**--*----M------------MMMM---------------M------------";

/// Maps an uppercase IUPAC nucleotide to a bitmask over `TCAG`.
/// Returns `0` for symbols outside of the alphabet.
#[inline]
#[must_use]
const fn iupac_mask(base: u8) -> u8 {
    const T: u8 = 0b0001;
    const C: u8 = 0b0010;
    const A: u8 = 0b0100;
    const G: u8 = 0b1000;

    match base {
        b'T' | b'U' => T,
        b'C' => C,
        b'A' => A,
        b'G' => G,
        b'R' => A | G,
        b'Y' => C | T,
        b'S' => G | C,
        b'W' => A | T,
        b'K' => G | T,
        b'M' => A | C,
        b'B' => C | G | T,
        b'D' => A | G | T,
        b'H' => A | C | T,
        b'V' => A | C | G,
        b'N' => A | C | G | T,
        _ => 0,
    }
}

/// The translation of a single, possibly ambiguous, codon.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum ResolvedCodon {
    /// Every expansion of the codon codes for this amino acid, or the
    /// expansions are covered by one of the ambiguous amino acids `B`, `Z`,
    /// `J`, or the catch-all `X`.
    AminoAcid(u8),
    /// Every expansion of the codon is a stop codon.
    Stop,
    /// Some but not all expansions are stop codons.
    MaybeStop,
    /// The codon contains a symbol outside of the IUPAC nucleotide alphabet.
    Invalid,
}

/// NCBI translation table 11: the Bacterial, Archaeal and Plant Plastid code.
///
/// The amino acid assignments match the standard code; the differences lie in
/// the alternative start codons (`TTG`, `CTG`, `ATT`, `ATC`, `ATA`, `GTG`
/// besides `ATG`), all of which are translated as methionine at the start of
/// a coding sequence.
///
/// Codons may be lower case, contain `U` for `T`, or use IUPAC ambiguity
/// codes.
///
/// ```
/// # use cds_translate::prelude::*;
/// let protein = BacterialCode.translate_cds(b"GTGAAAtggTAA").unwrap();
/// assert_eq!(protein, b"MKW");
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub struct BacterialCode;

impl BacterialCode {
    pub const NAME: &str = "Bacterial";

    /// Translates a single codon, resolving IUPAC ambiguity.
    #[must_use]
    pub fn resolve_codon(codon: [u8; 3]) -> ResolvedCodon {
        let mut amino_acids = 0u32;
        let mut stops = 0usize;
        let mut total = 0usize;

        for_each_expansion(codon, |index| {
            total += 1;
            match TABLE_11_AMINO_ACIDS[index] {
                b'*' => stops += 1,
                aa => amino_acids |= 1 << (aa - b'A'),
            }
        });

        if total == 0 {
            ResolvedCodon::Invalid
        } else if stops == total {
            ResolvedCodon::Stop
        } else if stops > 0 {
            ResolvedCodon::MaybeStop
        } else if amino_acids.count_ones() == 1 {
            #[allow(clippy::cast_possible_truncation)]
            ResolvedCodon::AminoAcid(b'A' + amino_acids.trailing_zeros() as u8)
        } else {
            ResolvedCodon::AminoAcid(ambiguous_amino_acid(amino_acids))
        }
    }

    /// Whether every expansion of `codon` is a start codon.
    #[must_use]
    pub fn is_start_codon(codon: [u8; 3]) -> bool {
        let mut total = 0usize;
        let mut starts = 0usize;
        for_each_expansion(codon, |index| {
            total += 1;
            starts += usize::from(TABLE_11_STARTS[index] == b'M');
        });
        total > 0 && starts == total
    }

    /// Whether every expansion of `codon` is a stop codon.
    #[inline]
    #[must_use]
    pub fn is_stop_codon(codon: [u8; 3]) -> bool {
        Self::resolve_codon(codon) == ResolvedCodon::Stop
    }
}

impl CodonTable for BacterialCode {
    fn name(&self) -> &str {
        Self::NAME
    }

    /// Translates a complete coding sequence.
    ///
    /// The checks happen in this order: the first codon must be a start codon,
    /// the length must be a multiple of three, the final codon must be a stop
    /// codon, and no inner codon may be a stop codon or contain a non-IUPAC
    /// symbol. The first amino acid is always `M`, and the stop codon is not
    /// included in the output.
    fn translate_cds(&self, sequence: &[u8]) -> Result<Vec<u8>, TranslationRejected> {
        let sequence = sequence.to_ascii_uppercase();
        let codon_string = |codon: &[u8]| String::from_utf8_lossy(codon).into_owned();

        let (codons, remainder) = sequence.as_chunks::<3>();

        let Some((last, inner)) = codons.split_last() else {
            return Err(TranslationRejected::NotStartCodon {
                codon: codon_string(&sequence),
            });
        };

        if !Self::is_start_codon(codons[0]) {
            return Err(TranslationRejected::NotStartCodon {
                codon: codon_string(&codons[0]),
            });
        }

        if !remainder.is_empty() {
            return Err(TranslationRejected::LengthNotMultipleOfThree { length: sequence.len() });
        }

        if inner.is_empty() || !Self::is_stop_codon(*last) {
            return Err(TranslationRejected::NotStopCodon { codon: codon_string(last) });
        }

        let mut protein = Vec::with_capacity(codons.len() - 1);
        protein.push(b'M');

        for (i, codon) in inner.iter().enumerate().skip(1) {
            match Self::resolve_codon(*codon) {
                ResolvedCodon::AminoAcid(aa) => protein.push(aa),
                ResolvedCodon::MaybeStop => protein.push(b'X'),
                ResolvedCodon::Stop => {
                    return Err(TranslationRejected::InternalStopCodon {
                        codon:    codon_string(codon),
                        position: i * 3,
                    });
                }
                ResolvedCodon::Invalid => {
                    return Err(TranslationRejected::InvalidCodon {
                        codon:    codon_string(codon),
                        position: i * 3,
                    });
                }
            }
        }

        Ok(protein)
    }
}

/// Calls `f` with the table index of every unambiguous codon that `codon`
/// can expand to. Codons with a non-IUPAC symbol have no expansions.
fn for_each_expansion(codon: [u8; 3], mut f: impl FnMut(usize)) {
    let [first, second, third] = codon.map(iupac_mask);
    let bases = |mask: u8| (0..4usize).filter(move |i| mask & (1 << i) != 0);

    for i in bases(first) {
        for j in bases(second) {
            for k in bases(third) {
                f(16 * i + 4 * j + k);
            }
        }
    }
}

/// Chooses the IUPAC amino acid covering a set of more than one amino acid,
/// given as a bitmask over `A..=Z`.
fn ambiguous_amino_acid(amino_acids: u32) -> u8 {
    let set = |aas: &[u8]| aas.iter().fold(0u32, |acc, aa| acc | 1 << (aa - b'A'));

    if amino_acids == set(b"DN") {
        b'B'
    } else if amino_acids == set(b"EQ") {
        b'Z'
    } else if amino_acids == set(b"IL") {
        b'J'
    } else {
        b'X'
    }
}

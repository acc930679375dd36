use rand_xoshiro::{
    Xoshiro256PlusPlus,
    rand_core::{RngCore, SeedableRng},
};

const START_CODONS: [&[u8; 3]; 7] = [b"ATG", b"GTG", b"TTG", b"CTG", b"ATT", b"ATC", b"ATA"];
const STOP_CODONS: [&[u8; 3]; 3] = [b"TAA", b"TAG", b"TGA"];

/// Generates a random sequence over `alpha` of the given length.
#[must_use]
pub fn rand_sequence(alpha: &[u8], length: usize, seed: u64) -> Vec<u8> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

    (1..=length).map(|_| alpha[rng.next_u32() as usize % alpha.len()]).collect()
}

/// Generates a random coding sequence that is valid under the Bacterial
/// genetic code: a start codon, `inner_codons` random sense codons, and a stop
/// codon.
#[must_use]
pub fn rand_cds(inner_codons: usize, seed: u64) -> Vec<u8> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut pick = |n: usize| rng.next_u32() as usize % n;

    let mut cds = Vec::with_capacity(3 * inner_codons + 6);
    cds.extend_from_slice(START_CODONS[pick(START_CODONS.len())]);

    let mut added = 0;
    while added < inner_codons {
        let codon = [b"ACGT"[pick(4)], b"ACGT"[pick(4)], b"ACGT"[pick(4)]];
        if !STOP_CODONS.contains(&&codon) {
            cds.extend_from_slice(&codon);
            added += 1;
        }
    }

    cds.extend_from_slice(STOP_CODONS[pick(STOP_CODONS.len())]);
    cds
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rand_test() {
        const LEN: usize = 10_000;

        let random_sequence = rand_sequence(b"ATGC", LEN, 42);
        assert_eq!(LEN, random_sequence.len());

        let (a, c, g, t) = random_sequence.iter().fold((0, 0, 0, 0), |(a, c, g, t), &b| match b {
            b'A' => (a + 1, c, g, t),
            b'C' => (a, c + 1, g, t),
            b'G' => (a, c, g + 1, t),
            b'T' => (a, c, g, t + 1),
            _ => (a, c, g, t),
        });

        assert!(a > 0);
        assert!(c > 0);
        assert!(g > 0);
        assert!(t > 0);
    }

    #[test]
    fn rand_cds_shape() {
        for seed in 0..50 {
            let cds = rand_cds(20, seed);
            assert_eq!(cds.len(), 66);
            assert!(START_CODONS.iter().any(|s| cds.starts_with(*s)));
            assert!(STOP_CODONS.iter().any(|s| cds.ends_with(*s)));

            let inner_stops = cds[3..63].chunks(3).filter(|c| STOP_CODONS.iter().any(|s| s.as_slice() == *c)).count();
            assert_eq!(inner_stops, 0);
        }

        assert_eq!(rand_cds(5, 7), rand_cds(5, 7));
    }
}

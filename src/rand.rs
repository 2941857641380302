//! `rand` trait implementations

use rand::Rng;
use rand::distr::{Distribution, StandardUniform};

use crate::{Amino, Nuc};

impl Distribution<Nuc> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Nuc {
        match rng.random_range(0..4u8) {
            0 => Nuc::A,
            1 => Nuc::C,
            2 => Nuc::G,
            _ => Nuc::T,
        }
    }
}

impl Distribution<Amino> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Amino {
        Amino::ALL[rng.random_range(0..Amino::ALL.len())]
    }
}

/// Generate a random `A/C/G/T` string of `len` bases.
///
/// # Examples
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let dna = orfscan::random_dna(&mut StdRng::seed_from_u64(7), 100);
/// assert_eq!(dna.len(), 100);
/// assert!(orfscan::analyze(&dna).is_valid());
/// ```
pub fn random_dna<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(rng.random::<Nuc>().to_ascii()))
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn every_nuc_is_drawn() {
        let mut rng = StdRng::seed_from_u64(0);
        let dna = random_dna(&mut rng, 1000);
        for nuc in Nuc::ALL {
            assert!(dna.contains(nuc.to_str()));
        }
    }

    #[test]
    fn aminos_come_from_the_table() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let aa: Amino = rng.random();
            assert!(Amino::ALL.contains(&aa));
        }
    }
}

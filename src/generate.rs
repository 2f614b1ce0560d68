//! Random message generators.
//!
//! Coin tosses and dice rolls give messages with a known theoretical
//! entropy (1 bit and log2(6) bits per letter) to check results against.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of random message to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Generator {
    /// `H` or `T` per letter.
    Coins,
    /// `1` to `6` per letter.
    Dice,
}

impl Generator {
    /// Letters this generator can emit.
    pub fn alphabet(self) -> &'static [char] {
        match self {
            Generator::Coins => &['H', 'T'],
            Generator::Dice => &['1', '2', '3', '4', '5', '6'],
        }
    }

    /// Generates `count` uniformly random letters.
    pub fn generate<R: Rng + ?Sized>(self, count: usize, rng: &mut R) -> String {
        let alphabet = self.alphabet();
        (0..count)
            .map(|_| alphabet[rng.random_range(0..alphabet.len())])
            .collect()
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Generator::Coins => f.write_str("coins"),
            Generator::Dice => f.write_str("dice"),
        }
    }
}

/// `count` random coin tosses.
pub fn coin_tosses<R: Rng + ?Sized>(count: usize, rng: &mut R) -> String {
    Generator::Coins.generate(count, rng)
}

/// `count` random dice rolls.
pub fn dice_rolls<R: Rng + ?Sized>(count: usize, rng: &mut R) -> String {
    Generator::Dice.generate(count, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::ShannonCalculator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_coin_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        let msg = coin_tosses(500, &mut rng);
        assert_eq!(msg.len(), 500);
        assert!(msg.chars().all(|c| c == 'H' || c == 'T'));
    }

    #[test]
    fn test_dice_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        let msg = dice_rolls(500, &mut rng);
        assert_eq!(msg.len(), 500);
        assert!(msg.chars().all(|c| ('1'..='6').contains(&c)));
    }

    #[test]
    fn test_zero_count() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(Generator::Dice.generate(0, &mut rng).is_empty());
    }

    #[test]
    fn test_entropy_near_theoretical() {
        let mut rng = StdRng::seed_from_u64(42);
        let calc: ShannonCalculator = dice_rolls(60_000, &mut rng).chars().collect();
        assert!((calc.result() - 6f64.log2()).abs() < 0.01);

        let calc: ShannonCalculator = coin_tosses(60_000, &mut rng).chars().collect();
        assert!((calc.result() - 1.0).abs() < 0.01);
    }
}

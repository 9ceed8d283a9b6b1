use rand::Rng;
use serde::{Deserialize, Serialize};

const DIGITS: &str = "1234567890";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Characters added to the alphabet when punctuation is enabled
pub const PUNCTUATION: &str = "?!.,;:^#@&";

/// Default length of generated strings
pub const DEFAULT_LENGTH: usize = 16;

/// Controls the shape of [`random`] output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomOptions {
    pub length: usize,
    /// Include `A-Z`
    pub capitals: bool,
    /// Include [`PUNCTUATION`]
    pub punctuation: bool,
}

impl Default for RandomOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            capitals: true,
            punctuation: false,
        }
    }
}

impl RandomOptions {
    pub fn with_length(length: usize) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    /// Lowercase letters and digits only
    pub fn lowercase(length: usize) -> Self {
        Self {
            length,
            capitals: false,
            punctuation: false,
        }
    }

    /// The characters a string generated with these options is drawn from
    pub fn alphabet(&self) -> Vec<char> {
        let mut chars: Vec<char> = DIGITS.chars().chain(LOWERCASE.chars()).collect();
        if self.capitals {
            chars.extend(UPPERCASE.chars());
        }
        if self.punctuation {
            chars.extend(PUNCTUATION.chars());
        }
        chars
    }
}

/// Generate a random string using the thread-local generator.
pub fn random(options: RandomOptions) -> String {
    random_with(&mut rand::thread_rng(), options)
}

/// Generate a random string drawing from the given generator.
///
/// Every position is picked independently and uniformly from
/// [`RandomOptions::alphabet`]. Nothing here guarantees uniqueness.
pub fn random_with<R: Rng + ?Sized>(rng: &mut R, options: RandomOptions) -> String {
    let alphabet = options.alphabet();
    (0..options.length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_correct_length() {
        for len in [0, 1, 16, 32, 257] {
            assert_eq!(random(RandomOptions::with_length(len)).chars().count(), len);
        }
    }

    #[test]
    fn test_default_options() {
        let s = random(RandomOptions::default());
        assert_eq!(s.len(), DEFAULT_LENGTH);
        assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_no_capitals() {
        let s = random(RandomOptions::lowercase(2000));
        assert!(s.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_punctuation_only_when_enabled() {
        let without = random(RandomOptions::with_length(2000));
        assert!(!without.chars().any(|c| PUNCTUATION.contains(c)));

        let options = RandomOptions {
            length: 2000,
            capitals: true,
            punctuation: true,
        };
        let with = random(options);
        let alphabet = options.alphabet();
        assert!(with.chars().all(|c| alphabet.contains(&c)));
        assert!(with.chars().any(|c| PUNCTUATION.contains(c)));
    }

    #[test]
    fn test_alphabet_size() {
        assert_eq!(RandomOptions::lowercase(1).alphabet().len(), 36);
        assert_eq!(RandomOptions::default().alphabet().len(), 62);
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let a = random_with(&mut StdRng::seed_from_u64(7), RandomOptions::default());
        let b = random_with(&mut StdRng::seed_from_u64(7), RandomOptions::default());
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_character_reachable() {
        let options = RandomOptions::lowercase(20_000);
        let s = random_with(&mut StdRng::seed_from_u64(1), options);
        for c in options.alphabet() {
            assert!(s.contains(c), "missing {c}");
        }
    }
}

//! Password generation.

use rand::Rng;
use zeroize::{Zeroize, Zeroizing};

use super::{Config, charset};
use crate::error::GenerateError;

/// A generated password. Wiped from memory on drop.
pub type Password = Zeroizing<String>;

/// Generate a password using the thread-local CSPRNG.
///
/// The preset override is written back into `config` before the
/// character set is built, so the caller sees the length and classes
/// that were actually used.
pub fn generate(config: &mut Config) -> Result<Password, GenerateError> {
    generate_with_rng(config, &mut rand::thread_rng())
}

/// Generate a password drawing indices from `rng`.
pub fn generate_with_rng<R: Rng + ?Sized>(
    config: &mut Config,
    rng: &mut R,
) -> Result<Password, GenerateError> {
    config.apply_preset();

    let mut chars = charset::build(config);
    if chars.is_empty() {
        return Err(GenerateError::EmptyCharset);
    }

    // Never reallocates, so no unzeroed copies
    let mut pass = Zeroizing::new(String::with_capacity(config.length));
    for _ in 0..config.length {
        pass.push(random_byte(&chars, rng) as char);
    }
    chars.zeroize();

    log::debug!(
        "generated {}-char password from {}-char set ({} preset)",
        config.length,
        charset::size(config),
        config.preset
    );

    Ok(pass)
}

#[inline]
fn random_byte<R: Rng + ?Sized>(chars: &[u8], rng: &mut R) -> u8 {
    chars[rng.gen_range(0..chars.len())]
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::pass::charset::{CharClass, DIGITS, SYMBOLS};
    use crate::pass::{MAX_LENGTH, MIN_LENGTH, Preset};

    fn config(preset: Preset) -> Config {
        Config {
            preset,
            ..Config::default()
        }
    }

    fn in_enabled_classes(config: &Config, c: char) -> bool {
        CharClass::ALL
            .iter()
            .any(|class| config.includes(*class) && class.contains(c))
    }

    #[test]
    fn average_is_eight_letters_only() {
        let mut cfg = config(Preset::Average);
        cfg.include_numbers = true;
        cfg.include_symbols = true;
        for _ in 0..50 {
            let pass = generate(&mut cfg).unwrap();
            assert_eq!(pass.len(), 8);
            assert!(!pass.chars().any(|c| DIGITS.contains(c)));
            assert!(!pass.chars().any(|c| SYMBOLS.contains(c)));
        }
    }

    #[test]
    fn good_is_twelve_without_symbols() {
        let mut cfg = config(Preset::Good);
        cfg.include_symbols = true;
        for _ in 0..50 {
            let pass = generate(&mut cfg).unwrap();
            assert_eq!(pass.len(), 12);
            assert!(!pass.chars().any(|c| SYMBOLS.contains(c)));
        }
    }

    #[test]
    fn strong_is_nineteen() {
        let mut cfg = config(Preset::Strong);
        let pass = generate(&mut cfg).unwrap();
        assert_eq!(pass.len(), 19);
        assert!(cfg.include_numbers);
        assert!(cfg.include_symbols);
    }

    #[test]
    fn strong_draws_digits_and_symbols_eventually() {
        let mut cfg = config(Preset::Strong);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut saw_digit = false;
        let mut saw_symbol = false;
        for _ in 0..200 {
            let pass = generate_with_rng(&mut cfg, &mut rng).unwrap();
            saw_digit |= pass.chars().any(|c| DIGITS.contains(c));
            saw_symbol |= pass.chars().any(|c| SYMBOLS.contains(c));
        }
        assert!(saw_digit);
        assert!(saw_symbol);
    }

    #[test]
    fn every_char_comes_from_enabled_classes() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for preset in Preset::ALL {
            for (upper, lower) in [(true, true), (true, false), (false, true)] {
                let mut cfg = Config {
                    include_uppercase: upper,
                    include_lowercase: lower,
                    ..config(preset)
                };
                let pass = generate_with_rng(&mut cfg, &mut rng).unwrap();
                assert!(pass.chars().all(|c| in_enabled_classes(&cfg, c)));
            }
        }
    }

    #[test]
    fn preset_overrides_slider_at_either_bound() {
        let mut cfg = config(Preset::Good);
        cfg.set_length(MIN_LENGTH);
        assert_eq!(generate(&mut cfg).unwrap().len(), 12);

        cfg.set_length(MAX_LENGTH);
        cfg.preset = Preset::Average;
        assert_eq!(generate(&mut cfg).unwrap().len(), 8);
        assert_eq!(cfg.length, 8);
    }

    #[test]
    fn empty_charset_is_an_error() {
        let mut cfg = Config {
            include_uppercase: false,
            include_lowercase: false,
            ..config(Preset::Average)
        };
        assert_eq!(generate(&mut cfg), Err(GenerateError::EmptyCharset));
    }

    #[test]
    fn letters_off_still_generates_with_numbers() {
        let mut cfg = Config {
            include_uppercase: false,
            include_lowercase: false,
            ..config(Preset::Good)
        };
        let pass = generate(&mut cfg).unwrap();
        assert!(pass.chars().all(|c| DIGITS.contains(c)));
    }

    #[test]
    fn repeated_calls_differ() {
        let mut cfg = config(Preset::Strong);
        let a = generate(&mut cfg).unwrap();
        let b = generate(&mut cfg).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut a = config(Preset::Strong);
        let mut b = a.clone();
        let first = generate_with_rng(&mut a, &mut ChaCha8Rng::seed_from_u64(1)).unwrap();
        let second = generate_with_rng(&mut b, &mut ChaCha8Rng::seed_from_u64(1)).unwrap();
        assert_eq!(first, second);
    }
}

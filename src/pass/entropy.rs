//! Entropy estimate for a configuration.

use super::{Config, charset};

/// Calculate password entropy in bits.
pub fn calculate_entropy(password_length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    password_length as f64 * (charset_size as f64).log2()
}

/// Get entropy strength description.
pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

/// Entropy of the password the next generation will produce.
pub fn effective_entropy(config: &Config) -> f64 {
    let effective = config.preview();
    calculate_entropy(effective.length, charset::size(&effective))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::Preset;

    #[test]
    fn empty_charset_has_no_entropy() {
        assert_eq!(calculate_entropy(20, 0), 0.0);
    }

    #[test]
    fn entropy_is_length_times_log2() {
        assert_eq!(calculate_entropy(8, 2), 8.0);
        assert_eq!(calculate_entropy(4, 16), 16.0);
    }

    #[test]
    fn strength_bands() {
        assert_eq!(entropy_strength(0.0), "Weak");
        assert_eq!(entropy_strength(35.9), "Weak");
        assert_eq!(entropy_strength(45.6), "Fair");
        assert_eq!(entropy_strength(71.5), "Strong");
        assert_eq!(entropy_strength(128.0), "Very Strong");
    }

    #[test]
    fn effective_entropy_uses_preset() {
        let config = Config {
            preset: Preset::Average,
            length: 30,
            ..Config::default()
        };
        // 8 chars from 52 letters
        let expected = 8.0 * 52f64.log2();
        assert!((effective_entropy(&config) - expected).abs() < 1e-9);
    }
}

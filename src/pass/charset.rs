//! Character classes and effective character set building.

use super::Config;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+[]{}|;:,.<>?";

/// One of the four fixed alphabets a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharClass {
    /// Fixed class order used when concatenating the effective set.
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Numbers,
        CharClass::Symbols,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Numbers => DIGITS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Uppercase => "Include Uppercase Letters",
            CharClass::Lowercase => "Include Lowercase Letters",
            CharClass::Numbers => "Include Numbers",
            CharClass::Symbols => "Include Symbols",
        }
    }

    #[cfg(test)]
    pub fn contains(self, c: char) -> bool {
        self.chars().contains(c)
    }
}

/// Build the effective character set: enabled classes in fixed order.
pub fn build(config: &Config) -> Vec<u8> {
    CharClass::ALL
        .iter()
        .filter(|class| config.includes(**class))
        .flat_map(|class| class.chars().bytes())
        .collect()
}

/// Size of the effective character set (for entropy calculation).
pub fn size(config: &Config) -> usize {
    CharClass::ALL
        .iter()
        .filter(|class| config.includes(**class))
        .map(|class| class.chars().len())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(upper: bool, lower: bool, numbers: bool, symbols: bool) -> Config {
        Config {
            include_uppercase: upper,
            include_lowercase: lower,
            include_numbers: numbers,
            include_symbols: symbols,
            ..Config::default()
        }
    }

    #[test]
    fn concatenates_in_fixed_class_order() {
        let set = build(&config(true, true, true, true));
        let expected = format!("{UPPERCASE}{LOWERCASE}{DIGITS}{SYMBOLS}");
        assert_eq!(set, expected.as_bytes());
    }

    #[test]
    fn skips_disabled_classes() {
        let set = build(&config(false, true, false, true));
        let expected = format!("{LOWERCASE}{SYMBOLS}");
        assert_eq!(set, expected.as_bytes());
    }

    #[test]
    fn empty_when_everything_disabled() {
        let cfg = config(false, false, false, false);
        assert!(build(&cfg).is_empty());
        assert_eq!(size(&cfg), 0);
    }

    #[test]
    fn size_matches_build() {
        let cfg = config(true, false, true, true);
        assert_eq!(size(&cfg), build(&cfg).len());
        assert_eq!(size(&cfg), 26 + 10 + 24);
    }

    #[test]
    fn symbol_set_is_ascii_and_unique() {
        assert!(SYMBOLS.is_ascii());
        let mut seen: Vec<char> = SYMBOLS.chars().collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), SYMBOLS.len());
    }
}

//! Password generation configuration.

use std::fmt;
use std::str::FromStr;

use super::charset::CharClass;

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 30;

/// Named configuration shortcut forcing length and the number/symbol classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Average,
    Good,
    Strong,
}

impl Preset {
    #[cfg(test)]
    pub const ALL: [Preset; 3] = [Preset::Average, Preset::Good, Preset::Strong];

    pub fn length(self) -> usize {
        match self {
            Preset::Average => 8,
            Preset::Good => 12,
            Preset::Strong => 19,
        }
    }

    pub fn numbers(self) -> bool {
        !matches!(self, Preset::Average)
    }

    pub fn symbols(self) -> bool {
        matches!(self, Preset::Strong)
    }

    pub fn next(self) -> Self {
        match self {
            Preset::Average => Preset::Good,
            Preset::Good => Preset::Strong,
            Preset::Strong => Preset::Strong,
        }
    }

    /// Next preset, wrapping from Strong back to Average.
    pub fn cycle(self) -> Self {
        match self {
            Preset::Strong => Preset::Average,
            other => other.next(),
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Preset::Average => Preset::Average,
            Preset::Good => Preset::Average,
            Preset::Strong => Preset::Good,
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Preset::Average => "Average",
            Preset::Good => "Good",
            Preset::Strong => "Strong",
        };
        f.pad(name)
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "average" | "a" => Ok(Preset::Average),
            "good" | "g" => Ok(Preset::Good),
            "strong" | "s" => Ok(Preset::Strong),
            _ => Err(s.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub preset: Preset,
}

impl Config {
    /// Set the length, clamped to the slider range.
    pub fn set_length(&mut self, length: usize) {
        self.length = length.clamp(MIN_LENGTH, MAX_LENGTH);
    }

    pub fn includes(&self, class: CharClass) -> bool {
        match class {
            CharClass::Uppercase => self.include_uppercase,
            CharClass::Lowercase => self.include_lowercase,
            CharClass::Numbers => self.include_numbers,
            CharClass::Symbols => self.include_symbols,
        }
    }

    pub fn toggle(&mut self, class: CharClass) {
        let flag = match class {
            CharClass::Uppercase => &mut self.include_uppercase,
            CharClass::Lowercase => &mut self.include_lowercase,
            CharClass::Numbers => &mut self.include_numbers,
            CharClass::Symbols => &mut self.include_symbols,
        };
        *flag = !*flag;
    }

    /// Force the preset's length and number/symbol classes.
    /// Uppercase and lowercase are left as the user set them.
    pub fn apply_preset(&mut self) {
        self.length = self.preset.length();
        self.include_numbers = self.preset.numbers();
        self.include_symbols = self.preset.symbols();
    }

    /// The configuration the next generation will actually use.
    pub fn preview(&self) -> Config {
        let mut effective = self.clone();
        effective.apply_preset();
        effective
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            length: 19,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: false,
            include_symbols: true,
            preset: Preset::Strong,
        }
    }
}

use crate::pass::{Config, Preset};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub interactive: bool,
    pub no_upper: bool,
    pub no_lower: bool,
    pub preset: Option<Preset>,
    pub number: Option<usize>,
}

impl CliFlags {
    /// Session configuration seeded from the flags.
    pub fn config(&self) -> Config {
        let mut config = Config {
            include_uppercase: !self.no_upper,
            include_lowercase: !self.no_lower,
            ..Config::default()
        };
        if let Some(preset) = self.preset {
            config.preset = preset;
            config.apply_preset();
        }
        config
    }
}

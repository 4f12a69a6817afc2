use super::CliFlags;
use crate::error::ParseError;

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-i" | "--interactive" => flags.interactive = true,
            "--no-upper" => flags.no_upper = true,
            "--no-lower" => flags.no_lower = true,
            "-p" | "--preset" => {
                let value = value_of(args, &mut i)?;
                flags.preset = Some(
                    value
                        .parse()
                        .map_err(|_| ParseError::InvalidPreset(value.to_string()))?,
                );
            }
            "-n" | "--number" => {
                let value = value_of(args, &mut i)?;
                let number = value
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| ParseError::InvalidNumber(value.to_string()))?;
                flags.number = Some(number);
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

/// Consume the value following the flag at `i`.
fn value_of<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::Preset;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("passforge")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_args_is_default() {
        assert_eq!(parse(&args(&[])), Ok(CliFlags::default()));
    }

    #[test]
    fn parses_preset_and_number() {
        let flags = parse(&args(&["-p", "good", "--number", "3", "-b"])).unwrap();
        assert_eq!(flags.preset, Some(Preset::Good));
        assert_eq!(flags.number, Some(3));
        assert!(flags.clipboard);
    }

    #[test]
    fn parses_switches() {
        let flags = parse(&args(&["--no-upper", "-q", "-i"])).unwrap();
        assert!(flags.no_upper);
        assert!(!flags.no_lower);
        assert!(flags.quiet);
        assert!(flags.interactive);
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            parse(&args(&["-p", "weak"])),
            Err(ParseError::InvalidPreset("weak".into()))
        );
        assert_eq!(
            parse(&args(&["-n", "lots"])),
            Err(ParseError::InvalidNumber("lots".into()))
        );
        assert_eq!(
            parse(&args(&["-n", "0"])),
            Err(ParseError::InvalidNumber("0".into()))
        );
        assert_eq!(
            parse(&args(&["--preset"])),
            Err(ParseError::MissingValue("--preset".into()))
        );
        assert_eq!(
            parse(&args(&["--hex"])),
            Err(ParseError::UnknownArg("--hex".into()))
        );
    }

    #[test]
    fn flags_seed_config() {
        let flags = parse(&args(&["-p", "average", "--no-lower"])).unwrap();
        let config = flags.config();
        assert_eq!(config.preset, Preset::Average);
        assert_eq!(config.length, 8);
        assert!(config.include_uppercase);
        assert!(!config.include_lowercase);
        assert!(!config.include_numbers);
    }
}

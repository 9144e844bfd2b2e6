use std::ffi::OsString;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StartupError {
    #[error("--theme requires a path argument")]
    MissingThemePath,
    #[error("unrecognized argument: {0}")]
    UnknownArgument(String),
}

/// Command-line options. GTK never sees these; it only gets argv[0].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct StartupConfig {
    pub(crate) theme_path: Option<PathBuf>,
}

impl StartupConfig {
    pub(crate) fn from_args() -> Result<Self, StartupError> {
        Self::parse(std::env::args_os().skip(1))
    }

    pub(crate) fn parse<I>(args: I) -> Result<Self, StartupError>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let text = arg.to_string_lossy();
            if text == "--theme" {
                let path = args.next().ok_or(StartupError::MissingThemePath)?;
                config.theme_path = Some(PathBuf::from(path));
            } else if let Some(path) = text.strip_prefix("--theme=") {
                if path.is_empty() {
                    return Err(StartupError::MissingThemePath);
                }
                config.theme_path = Some(PathBuf::from(path));
            } else {
                return Err(StartupError::UnknownArgument(text.into_owned()));
            }
        }
        Ok(config)
    }
}

pub(crate) fn gtk_launch_args() -> Vec<String> {
    vec![std::env::args()
        .next()
        .unwrap_or_else(|| "swatchbook".to_string())]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<StartupConfig, StartupError> {
        StartupConfig::parse(args.iter().map(OsString::from))
    }

    #[test]
    fn no_arguments_means_no_explicit_theme() {
        assert_eq!(parse(&[]), Ok(StartupConfig::default()));
    }

    #[test]
    fn theme_flag_accepts_separate_and_inline_values() {
        let separate = parse(&["--theme", "/tmp/brand.json"]).expect("separate value");
        assert_eq!(separate.theme_path, Some(PathBuf::from("/tmp/brand.json")));

        let inline = parse(&["--theme=dark.json"]).expect("inline value");
        assert_eq!(inline.theme_path, Some(PathBuf::from("dark.json")));
    }

    #[test]
    fn theme_flag_without_value_is_rejected() {
        assert_eq!(parse(&["--theme"]), Err(StartupError::MissingThemePath));
        assert_eq!(parse(&["--theme="]), Err(StartupError::MissingThemePath));
    }

    #[test]
    fn unknown_arguments_are_rejected() {
        assert_eq!(
            parse(&["--verbose"]),
            Err(StartupError::UnknownArgument("--verbose".to_string()))
        );
    }
}

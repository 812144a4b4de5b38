use std::path::PathBuf;

use prism_core::Preset;

pub struct CliOptions {
    pub preset: Preset,
    pub width: u32,
    pub height: u32,
    pub config: Option<PathBuf>,
    pub output: PathBuf,
    pub parallel: Option<bool>,
    pub help: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            preset: Preset::Room,
            width: 800,
            height: 800,
            config: None,
            output: PathBuf::from("output.png"),
            parallel: None,
            help: false,
        }
    }
}

impl CliOptions {
    pub fn message() -> &'static str {
        r#"
        --scene <1|2|room|pyramid>
        --width <pixels> --height <pixels>
        --config <render.json>
        --output <file.png>
        --parallel | --single-thread
        --help
        "#
    }
}

fn value_for(key: &str, args: &mut impl Iterator<Item = String>) -> Result<String, String> {
    args.next().ok_or_else(|| format!("Missing value for {}", key))
}

fn parse_dimension(key: &str, value: &str) -> Result<u32, String> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("{} expects a positive integer, got {}", key, value)),
    }
}

/// Parse arguments, excluding the program name.
pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();
    let mut args = args.into_iter();

    while let Some(key) = args.next() {
        match key.as_str() {
            "--scene" => {
                let value = value_for(&key, &mut args)?;
                options.preset = value.parse().map_err(|e| format!("{}", e))?;
            }
            "--width" => options.width = parse_dimension(&key, &value_for(&key, &mut args)?)?,
            "--height" => options.height = parse_dimension(&key, &value_for(&key, &mut args)?)?,
            "--config" => options.config = Some(PathBuf::from(value_for(&key, &mut args)?)),
            "--output" => options.output = PathBuf::from(value_for(&key, &mut args)?),
            "--parallel" => options.parallel = Some(true),
            "--single-thread" => options.parallel = Some(false),
            "--help" | "-h" => options.help = true,
            _ => return Err(format!("Unrecognized key {}", key)),
        }
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let options = parse_args(Vec::new()).unwrap();
        assert_eq!(options.preset, Preset::Room);
        assert_eq!((options.width, options.height), (800, 800));
        assert_eq!(options.output, PathBuf::from("output.png"));
        assert!(options.config.is_none());
        assert!(options.parallel.is_none());
    }

    #[test]
    fn test_all_options() {
        let options = parse_args(args(&[
            "--scene", "2", "--width", "320", "--height", "240", "--config", "r.json",
            "--output", "out.png", "--parallel",
        ]))
        .unwrap();

        assert_eq!(options.preset, Preset::Pyramid);
        assert_eq!((options.width, options.height), (320, 240));
        assert_eq!(options.config, Some(PathBuf::from("r.json")));
        assert_eq!(options.output, PathBuf::from("out.png"));
        assert_eq!(options.parallel, Some(true));
    }

    #[test]
    fn test_errors() {
        assert!(parse_args(args(&["--scene", "7"])).is_err());
        assert!(parse_args(args(&["--width"])).is_err());
        assert!(parse_args(args(&["--width", "0"])).is_err());
        assert!(parse_args(args(&["--bogus"])).is_err());
    }
}

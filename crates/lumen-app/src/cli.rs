use std::path::PathBuf;

use clap::Parser;

/// Lumen: a minimal desktop browser shell for a local page.
#[derive(Parser, Debug)]
#[command(name = "lumen", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (a tracing directive, e.g. `lumen=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Directory holding the page assets.
    #[arg(long)]
    pub assets: Option<PathBuf>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments() {
        let args = Args::try_parse_from(["lumen"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
        assert!(args.assets.is_none());
    }

    #[test]
    fn all_arguments() {
        let args = Args::try_parse_from([
            "lumen",
            "--config",
            "/tmp/lumen.toml",
            "--log-level",
            "lumen=debug",
            "--assets",
            "site",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/lumen.toml")));
        assert_eq!(args.log_level.as_deref(), Some("lumen=debug"));
        assert_eq!(args.assets, Some(PathBuf::from("site")));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["lumen", "--fullscreen"]).is_err());
    }
}

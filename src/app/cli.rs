use clap::Parser;
use std::path::PathBuf;

/// spotify-kiosk - now playing display and remote for a linked Spotify account 🎵
#[derive(Parser, Debug)]
#[command(name = "spotify-kiosk", version, about)]
pub struct Args {
    /// Whether the backend session is linked ("true" to enable).
    /// Falls back to SPOTIFY_AUTHORIZED, then config.toml
    #[arg(long)]
    pub authorized: Option<String>,

    /// Backend base URL (overrides config.toml)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Poll interval in milliseconds (overrides config.toml)
    #[arg(long)]
    pub poll_interval_ms: Option<u64>,

    /// Use a config file other than ~/.config/spotify-kiosk/config.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Generate default config.toml to stdout
    #[arg(long)]
    pub generate_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_parse() {
        let args = Args::try_parse_from([
            "spotify-kiosk",
            "--authorized",
            "true",
            "--base-url",
            "http://kiosk:8888",
            "--poll-interval-ms",
            "500",
        ])
        .unwrap();
        assert_eq!(args.authorized.as_deref(), Some("true"));
        assert_eq!(args.base_url.as_deref(), Some("http://kiosk:8888"));
        assert_eq!(args.poll_interval_ms, Some(500));
        assert!(!args.generate_config);
    }
}

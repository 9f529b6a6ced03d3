use clap::Parser;
use std::path::PathBuf;

/// File read when no `--input` is given.
pub const DEFAULT_INPUT: &str = "star_over_time.csv";

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Total star change per weekday from a star-history CSV
#[derive(Parser, Debug, Clone)]
#[command(
    name = "star-weekday",
    about = "Total star change per weekday from a star-history CSV",
    version
)]
pub struct Settings {
    /// Two-row CSV: dates on the first row, cumulative stars on the second
    #[arg(short, long, env = "STAR_WEEKDAY_INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output format
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Also report the largest single-step change
    #[arg(long)]
    pub largest: bool,

    /// Index of the row holding the dates
    #[arg(long, default_value = "0")]
    pub date_row: usize,

    /// Index of the row holding the cumulative star counts
    #[arg(long, default_value = "1")]
    pub star_row: usize,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Parse the process arguments and apply the `--debug` override.
    pub fn load() -> Self {
        Self::resolve(Settings::parse())
    }

    /// Same as [`Settings::load`] but accepts an explicit argument list.
    pub fn load_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::resolve(Settings::parse_from(args))
    }

    pub fn is_json(&self) -> bool {
        self.format == "json"
    }

    fn resolve(mut settings: Settings) -> Settings {
        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }
        settings
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

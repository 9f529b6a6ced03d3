mod bootstrap;

use anyhow::{Context, Result};
use stars_core::formatting::{render_json, render_largest_change, render_text};
use stars_core::settings::Settings;
use stars_data::analysis::{analyze_stars, AnalysisResult, RowLayout};

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::debug!("star-weekday v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::debug!(
        "Input: {}, format: {}, largest: {}",
        settings.input.display(),
        settings.format,
        settings.largest
    );

    let layout = RowLayout {
        date_row: settings.date_row,
        star_row: settings.star_row,
    };
    let result = analyze_stars(&settings.input, layout)
        .with_context(|| format!("Failed to analyse {}", settings.input.display()))?;

    tracing::info!(
        "Generated at {}: {} lines, {} observations",
        result.metadata.generated_at,
        result.metadata.lines_read,
        result.metadata.observations
    );

    // Render fully before printing so a failure leaves stdout empty.
    let output = render_output(&settings, &result)?;
    print!("{}", output);

    Ok(())
}

fn render_output(settings: &Settings, result: &AnalysisResult) -> Result<String> {
    let largest = result.largest_change.as_ref();

    if settings.is_json() {
        let requested = settings.largest.then_some(largest);
        let mut json = render_json(&result.totals, requested)?;
        json.push('\n');
        return Ok(json);
    }

    let mut text = render_text(&result.totals);
    if settings.largest {
        text.push_str(&render_largest_change(largest));
        text.push('\n');
    }
    Ok(text)
}

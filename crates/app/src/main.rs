use anyhow::Context;

use skintilla_app::{AppConfig, run_session};
use skintilla_catalog::Catalog;
use skintilla_events::LoggingSink;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    skintilla_observability::init(config.log_format);

    for warning in &config.warnings {
        tracing::warn!("{warning}");
    }

    let catalog = Catalog::skintilla();
    let report = run_session(&catalog, &config, &mut LoggingSink)?;
    report.log();

    let json = serde_json::to_string_pretty(&report).context("encoding session report")?;
    println!("{json}");
    Ok(())
}

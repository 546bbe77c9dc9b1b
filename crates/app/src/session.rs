//! A scripted routine-builder session driven by configuration.

use anyhow::{Context, Result, anyhow};
use serde::Serialize;

use skintilla_catalog::{Catalog, ProductId};
use skintilla_core::DomainError;
use skintilla_events::EventSink;
use skintilla_routine::{RoutineBuilder, RoutineEvent, RoutineView, TimeOfDay};
use skintilla_storefront::{
    CompareSelection, Comparison, Palette, Quiz, ShippingOption, Theme, estimate_shipping,
    find_comparable, qualifies_for_free_shipping,
};

use crate::config::AppConfig;

/// What a session ended up with.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub theme: Theme,
    /// Colours resolved for `theme`.
    pub palette: Palette,
    pub morning: RoutineView,
    pub evening: RoutineView,
    /// Preload ids that are not in the catalog.
    pub skipped: Vec<ProductId>,
    pub recommendation: Option<&'static str>,
    pub shipping: Vec<ShippingOption>,
    /// Whether the morning total ships free.
    pub free_shipping: bool,
    /// Side-by-side view of the configured products, when at least two fit.
    pub comparison: Option<Comparison>,
}

/// Run one session against `catalog`.
///
/// Preloaded ids go into the morning routine; ids outside the catalog are
/// skipped with a warning. Quiz answers, when configured, load the
/// recommended bundle into the evening routine.
pub fn run_session<S>(catalog: &Catalog, config: &AppConfig, sink: &mut S) -> Result<SessionReport>
where
    S: EventSink<RoutineEvent>,
{
    let mut builder = RoutineBuilder::new(catalog);
    let mut skipped = Vec::new();

    for id in &config.preload {
        match builder.add_product(TimeOfDay::Morning, id) {
            Ok(event) => sink.publish_opt(event),
            Err(DomainError::NotFound(_)) => {
                tracing::warn!(product_id = %id, "skipping preload: not in catalog");
                skipped.push(id.clone());
            }
            Err(err) => return Err(err).with_context(|| format!("preloading {id}")),
        }
    }

    let recommendation = match &config.quiz_answers {
        Some(answers) => {
            let mut quiz = Quiz::new();
            for answer in answers {
                quiz.select(answer)
                    .and_then(|_| quiz.next())
                    .with_context(|| format!("answering quiz with {answer:?}"))?;
            }
            let rec = quiz
                .result()?
                .ok_or_else(|| anyhow!("quiz did not finish after {} answers", answers.len()))?;
            for event in rec.apply_to(&mut builder, TimeOfDay::Evening)? {
                sink.publish(event);
            }
            tracing::info!(bundle = rec.name, "quiz recommendation loaded into evening routine");
            Some(rec.name)
        }
        None => None,
    };

    let morning = builder.view_for(TimeOfDay::Morning);
    let evening = builder.view_for(TimeOfDay::Evening);
    let shipping = config.zip.as_ref().map(estimate_shipping).unwrap_or_default();
    let free_shipping = qualifies_for_free_shipping(morning.pricing.total);
    let comparison = compare(&config.compare);

    Ok(SessionReport {
        theme: config.theme,
        palette: Palette::for_theme(config.theme),
        morning,
        evening,
        skipped,
        recommendation,
        shipping,
        free_shipping,
        comparison,
    })
}

/// Toggle each named product into a comparison. Unknown names and products
/// past the cap are skipped with a warning.
fn compare(names: &[String]) -> Option<Comparison> {
    let mut selection = CompareSelection::new();
    for name in names {
        let Some(product) = find_comparable(name) else {
            tracing::warn!(product = %name, "skipping comparison: unknown product");
            continue;
        };
        if selection.is_selected(&product.name) {
            continue;
        }
        if let Err(err) = selection.toggle(product) {
            tracing::warn!(product = %name, error = %err, "skipping comparison");
        }
    }
    selection.comparison()
}

impl SessionReport {
    /// Emit one structured log line per routine, per shipping option and for
    /// the comparison.
    pub fn log(&self) {
        tracing::info!(theme = %self.theme, background = self.palette.cream, "theme");
        for view in [&self.morning, &self.evening] {
            let products: Vec<&str> = view.selection.iter().map(|p| p.name.as_str()).collect();
            tracing::info!(
                time = %view.active_time,
                products = ?products,
                subtotal = %view.pricing.subtotal,
                discount_percent = view.pricing.tier.percent(),
                total = %view.pricing.total,
                savings = %view.pricing.savings,
                "{} routine",
                view.active_time.title()
            );
        }
        for option in &self.shipping {
            tracing::info!(
                method = %option.method,
                cost = %option.cost_label(),
                days = %option.days_label(),
                "shipping option"
            );
        }
        if let Some(comparison) = &self.comparison {
            tracing::info!(
                products = ?comparison.products,
                best_value = %comparison.best_value,
                highest_rated = %comparison.highest_rated,
                "comparison"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skintilla_core::Money;
    use skintilla_events::RecordingSink;
    use skintilla_storefront::ZipCode;

    #[test]
    fn empty_config_yields_empty_routines() {
        let catalog = Catalog::skintilla();
        let mut sink = RecordingSink::new();
        let report = run_session(&catalog, &AppConfig::default(), &mut sink).unwrap();

        assert!(report.morning.selection.is_empty());
        assert!(report.evening.selection.is_empty());
        assert!(report.shipping.is_empty());
        assert!(!report.free_shipping);
        assert!(report.comparison.is_none());
        assert_eq!(report.palette, Palette::for_theme(Theme::Light));
        assert!(sink.is_empty());
    }

    #[test]
    fn unknown_preload_ids_are_skipped() {
        let catalog = Catalog::skintilla();
        let config = AppConfig {
            preload: vec![ProductId::new("toner"), ProductId::new("retinol"), ProductId::new("toner")],
            ..AppConfig::default()
        };
        let mut sink = RecordingSink::new();
        let report = run_session(&catalog, &config, &mut sink).unwrap();

        assert_eq!(report.skipped, vec![ProductId::new("retinol")]);
        assert_eq!(report.morning.selection.len(), 1);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn quiz_answers_fill_evening_routine() {
        let catalog = Catalog::skintilla();
        let config = AppConfig {
            quiz_answers: Some(vec!["oily".into(), "aging".into(), "extensive".into()]),
            zip: Some(ZipCode::parse("60601").unwrap()),
            ..AppConfig::default()
        };
        let mut sink = RecordingSink::new();
        let report = run_session(&catalog, &config, &mut sink).unwrap();

        assert_eq!(report.recommendation, Some("The Complete Set"));
        assert_eq!(report.evening.pricing.total, Money::from_cents(18870));
        assert_eq!(report.shipping.len(), 2);
        assert_eq!(sink.len(), 4);
        report.log();
    }

    #[test]
    fn comparison_skips_unknown_and_overflowing_names() {
        let catalog = Catalog::skintilla();
        let config = AppConfig {
            theme: Theme::Dark,
            compare: vec![
                "radiance serum".into(),
                "Night Oil".into(),
                "Velvet Moisturizer".into(),
                "Radiance Serum".into(),
                "Botanical Toner".into(),
                "Eye Revival Cream".into(),
            ],
            ..AppConfig::default()
        };
        let report = run_session(&catalog, &config, &mut RecordingSink::new()).unwrap();

        let comparison = report.comparison.as_ref().unwrap();
        assert_eq!(
            comparison.products,
            vec!["Radiance Serum", "Velvet Moisturizer", "Botanical Toner"]
        );
        assert_eq!(comparison.best_value, "Botanical Toner");
        assert_eq!(report.palette.theme, Theme::Dark);
        report.log();
    }

    #[test]
    fn single_compared_product_yields_no_comparison() {
        let catalog = Catalog::skintilla();
        let config = AppConfig {
            compare: vec!["Botanical Toner".into()],
            ..AppConfig::default()
        };
        let report = run_session(&catalog, &config, &mut RecordingSink::new()).unwrap();
        assert!(report.comparison.is_none());
    }

    #[test]
    fn invalid_quiz_answer_is_an_error() {
        let catalog = Catalog::skintilla();
        let config = AppConfig {
            quiz_answers: Some(vec!["oily".into(), "sunburn".into(), "minimal".into()]),
            ..AppConfig::default()
        };
        let mut sink = RecordingSink::new();
        let err = run_session(&catalog, &config, &mut sink).unwrap_err();
        assert!(format!("{err:#}").contains("sunburn"));
    }
}

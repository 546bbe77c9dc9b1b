use std::collections::HashMap;

use skintilla_app::{AppConfig, run_session};
use skintilla_catalog::Catalog;
use skintilla_events::{Event, RecordingSink};

fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
    let env: HashMap<&str, &str> = pairs.iter().copied().collect();
    AppConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()))
}

#[test]
fn env_driven_session_prices_both_routines() {
    let config = config_from(&[
        ("SKINTILLA_ROUTINE", "serum,toner"),
        ("SKINTILLA_QUIZ", "dry,hydration,minimal"),
        ("SKINTILLA_ZIP", "02139"),
        ("SKINTILLA_THEME", "dark"),
    ]);
    let catalog = Catalog::skintilla();
    let mut sink = RecordingSink::new();

    let report = run_session(&catalog, &config, &mut sink).unwrap();

    let morning: Vec<&str> = report.morning.selection.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(morning, vec!["toner", "serum"]);
    assert_eq!(report.morning.pricing.total.to_string(), "$99.00");
    assert!(report.free_shipping);

    assert_eq!(report.recommendation, Some("The Essentials"));
    assert_eq!(report.evening.pricing.subtotal.to_string(), "$96.00");
    assert_eq!(report.evening.pricing.total.to_string(), "$86.40");

    assert_eq!(report.shipping[1].cost_label(), "$9.95");

    let notices: Vec<String> = sink.events().iter().map(Event::notice).collect();
    assert_eq!(
        notices,
        vec![
            "Radiance Serum added to your morning routine",
            "Botanical Toner added to your morning routine",
            "Velvet Moisturizer added to your evening routine",
            "Botanical Toner added to your evening routine",
        ]
    );
}

#[test]
fn report_serializes_to_json() {
    let config = config_from(&[("SKINTILLA_ROUTINE", "eye-cream")]);
    let catalog = Catalog::skintilla();
    let report = run_session(&catalog, &config, &mut RecordingSink::new()).unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["theme"], "light");
    assert_eq!(json["palette"]["theme"], "light");
    assert_eq!(json["palette"]["cream"], "oklch(0.96 0.015 80)");
    assert!(json["comparison"].is_null());
    assert_eq!(json["morning"]["active_time"], "morning");
    assert_eq!(json["morning"]["pricing"]["subtotal"], 5800);
    assert_eq!(json["morning"]["pricing"]["tier"], "none");
    assert_eq!(json["morning"]["selection"][0]["id"], "eye-cream");
}

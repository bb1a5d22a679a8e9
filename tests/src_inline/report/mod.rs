use super::*;
use crate::report::json::render_summary_json;
use crate::report::text::render_summary_text;

fn summary() -> CategorySummary {
    CategorySummary {
        tool: "qa-ratings-viz".to_string(),
        version: "0.1.0".to_string(),
        category: "out_of_scope".to_string(),
        style: "fixed".to_string(),
        n_rows: 3,
        image: "out/out_of_scope_plot_with_pvalues_fixed.png".to_string(),
        panels: vec![
            PanelSummary {
                aspect: Aspect::Completeness,
                title: "Completeness",
                systems: vec![
                    SystemSummary {
                        system: System::ExtractiveQa,
                        label: "Extractive QA",
                        position: 1,
                        n: 3,
                        mean: 13.0 / 3.0,
                        median: 4.0,
                    },
                    SystemSummary {
                        system: System::GenerativeQa,
                        label: "Generative QA",
                        position: 2,
                        n: 3,
                        mean: 7.0 / 3.0,
                        median: 2.0,
                    },
                ],
                comparisons: vec![ComparisonSummary {
                    left: System::ExtractiveQa,
                    right: System::GenerativeQa,
                    t: 4.242640687119286,
                    df: 4.0,
                    p_value: 0.0132356,
                    p_text: format_p_value(0.0132356),
                    significant: true,
                    bracket_top: 5.55,
                }],
            },
            PanelSummary {
                aspect: Aspect::Factuality,
                title: "Factuality",
                systems: Vec::new(),
                comparisons: Vec::new(),
            },
        ],
    }
}

#[test]
fn test_p_value_formatting() {
    assert_eq!(format_p_value(0.0132356), "1.32e-02");
    assert_eq!(format_p_value(1.0), "1.00e+00");
    assert_eq!(format_p_value(0.0), "0.00e+00");
    assert_eq!(format_p_value(1.5e-120), "1.50e-120");
    assert_eq!(format_p_value(0.5), "5.00e-01");
    assert_eq!(format_p_value(f64::NAN), "nan");
}

#[test]
fn test_json_summary_shape() {
    let json = render_summary_json(&summary()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["category"], "out_of_scope");
    assert_eq!(value["panels"][0]["aspect"], "completeness");
    assert_eq!(value["panels"][0]["systems"][1]["system"], "generative_qa");
    assert_eq!(value["panels"][0]["comparisons"][0]["p_text"], "1.32e-02");
    assert_eq!(value["panels"][0]["comparisons"][0]["significant"], true);
    assert!(value["panels"][1]["comparisons"].as_array().unwrap().is_empty());
}

#[test]
fn test_json_writes_nan_as_null() {
    let mut s = summary();
    s.panels[0].comparisons[0].t = f64::NAN;
    s.panels[0].comparisons[0].p_value = f64::NAN;
    let json = render_summary_json(&s).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["panels"][0]["comparisons"][0]["p_value"].is_null());
}

#[test]
fn test_text_summary_lists_systems_and_p_values() {
    let text = render_summary_text(&summary());
    assert!(text.starts_with("Ratings comparison: out_of_scope (3 rows, style fixed)"));
    assert!(text.contains("Extractive QA vs Generative QA"));
    assert!(text.contains("p = 1.32e-02 *"));
    assert!(text.contains("Factuality\n  no ratings"));
}

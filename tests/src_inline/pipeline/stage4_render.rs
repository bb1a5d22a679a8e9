use super::*;
use crate::input::RatingsTable;
use crate::model::LabelPolicy;
use crate::pipeline::stage2_select::run_stage2;
use crate::pipeline::stage3_compare::run_stage3;

fn table(columns: &[&str], rows: &[&[&str]]) -> RatingsTable {
    RatingsTable {
        columns: columns.iter().map(|c| c.to_string()).collect(),
        rows: rows
            .iter()
            .map(|r| r.iter().map(|v| v.to_string()).collect())
            .collect(),
    }
}

fn scene_for(t: &RatingsTable, category: &str, policy: LabelPolicy) -> FigureScene {
    let stage2 = run_stage2(t, category, policy).unwrap();
    let stage3 = run_stage3(&stage2).unwrap();
    build_scene(&stage2, &stage3)
}

#[test]
fn test_out_of_scope_example_scene() {
    let t = table(
        &["intent_category", "completeness_1", "completeness_2"],
        &[
            &["out_of_scope", "4", "2"],
            &["out_of_scope", "5", "3"],
            &["out_of_scope", "4", "2"],
            &["faq", "1", "1"],
        ],
    );
    let scene = scene_for(&t, "out_of_scope", LabelPolicy::ThirdOnlyForFaq);
    assert_eq!(scene.category, "out_of_scope");
    assert_eq!(scene.panels.len(), 3);

    let completeness = &scene.panels[0];
    assert_eq!(completeness.title, "Completeness");
    assert_eq!(completeness.x_range, (0.5, 2.5));
    assert_eq!(completeness.boxes.len(), 2);
    assert_eq!(completeness.boxes[0].label, "Extractive QA");
    assert_eq!(completeness.boxes[0].color, Rgb::SKYBLUE);
    assert_eq!(completeness.boxes[1].color, Rgb::ORANGE);
    assert_eq!(completeness.boxes[1].stats.median, 2.0);

    assert_eq!(completeness.brackets.len(), 1);
    let bracket = &completeness.brackets[0];
    assert_eq!(bracket.text, "p = 1.32e-02");
    assert_eq!(bracket.color, Rgb::BLUE);
    assert_eq!(bracket.path[0], (1.0, 5.4));
    assert_eq!(bracket.path[3], (2.0, 5.4));
    assert_eq!(bracket.path[1].1, bracket.path[2].1);
    assert_eq!(bracket.text_at.0, 1.5);

    assert!(scene.panels[1].boxes.is_empty());
    assert!(scene.panels[1].brackets.is_empty());
    assert_eq!(scene.panels[2].title, "Overall Usefulness");
}

#[test]
fn test_faq_scene_has_three_brackets_at_distinct_heights() {
    let t = table(
        &[
            "intent_category",
            "factuality_1",
            "factuality_2",
            "factuality_3",
        ],
        &[
            &["faq", "4", "2", "5"],
            &["faq", "5", "3", "4"],
            &["faq", "4", "2", "5"],
            &["faq", "3", "3", "5"],
        ],
    );
    let scene = scene_for(&t, "faq", LabelPolicy::ThirdOnlyForFaq);
    let panel = &scene.panels[1];
    assert_eq!(panel.boxes.len(), 3);
    assert_eq!(panel.boxes[2].label, "Response Selector");
    assert_eq!(panel.brackets.len(), 3);

    let mut tops: Vec<f32> = panel.brackets.iter().map(|b| b.text_at.1).collect();
    tops.sort_by(f32::total_cmp);
    tops.dedup();
    assert_eq!(tops.len(), 3);
    assert_eq!(
        panel.brackets.iter().map(|b| b.color).collect::<Vec<_>>(),
        vec![Rgb::BLUE, Rgb::GREEN, Rgb::RED]
    );
}

#[test]
fn test_unlabeled_box_renders_blank_label() {
    let t = table(
        &["intent_category", "usefulness_1", "usefulness_3"],
        &[&["out_of_scope", "4", "2"], &["out_of_scope", "5", "3"]],
    );
    let scene = scene_for(&t, "out_of_scope", LabelPolicy::ThirdOnlyForFaq);
    let panel = &scene.panels[2];
    assert_eq!(panel.boxes.len(), 2);
    assert_eq!(panel.boxes[1].label, "");
    assert_eq!(panel.boxes[1].color, Rgb::GREEN);
    assert_eq!(panel.brackets.len(), 1);
}

fn assert_segments_close(actual: &[[(f32, f32); 2]], expected: &[[(f32, f32); 2]]) {
    assert_eq!(actual.len(), expected.len(), "{actual:?}");
    for (a, e) in actual.iter().zip(expected) {
        for (p, q) in a.iter().zip(e) {
            assert!(
                (p.0 - q.0).abs() < 1e-5 && (p.1 - q.1).abs() < 1e-5,
                "{a:?} != {e:?}"
            );
        }
    }
}

#[test]
fn test_dashes_alternate_along_straight_line() {
    let segments = dashed_segments(&[(0.0, 0.0), (10.0, 0.0)], (1.0, 1.0), 2.0, 1.0);
    assert_segments_close(
        &segments,
        &[
            [(0.0, 0.0), (2.0, 0.0)],
            [(3.0, 0.0), (5.0, 0.0)],
            [(6.0, 0.0), (8.0, 0.0)],
            [(9.0, 0.0), (10.0, 0.0)],
        ],
    );
}

#[test]
fn test_dash_pattern_carries_over_corners() {
    let segments = dashed_segments(&[(0.0, 0.0), (0.0, 1.0), (3.0, 1.0)], (1.0, 1.0), 2.0, 1.0);
    assert_segments_close(
        &segments,
        &[
            [(0.0, 0.0), (0.0, 1.0)],
            [(0.0, 1.0), (1.0, 1.0)],
            [(2.0, 1.0), (3.0, 1.0)],
        ],
    );
}

#[test]
fn test_dash_lengths_use_pixel_scale() {
    // One data unit on y spans ten pixels, so each 5px dash covers half a unit.
    let segments = dashed_segments(&[(0.0, 0.0), (0.0, 2.0)], (1.0, 10.0), 5.0, 5.0);
    assert_segments_close(
        &segments,
        &[[(0.0, 0.0), (0.0, 0.5)], [(0.0, 1.0), (0.0, 1.5)]],
    );
}

#[test]
fn test_non_positive_dash_draws_solid() {
    let path = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)];
    let segments = dashed_segments(&path, (1.0, 1.0), 0.0, 1.0);
    assert_eq!(
        segments,
        vec![[(0.0, 0.0), (1.0, 0.0)], [(1.0, 0.0), (1.0, 1.0)]]
    );
}

#[test]
fn test_brackets_follow_panel_aspect_not_order() {
    let t = table(
        &["intent_category", "usefulness_1", "usefulness_2"],
        &[
            &["faq", "4", "2"],
            &["faq", "5", "3"],
            &["faq", "4", "2"],
        ],
    );
    let stage2 = run_stage2(&t, "faq", LabelPolicy::PerIndex).unwrap();
    let mut stage3 = run_stage3(&stage2).unwrap();
    stage3.panels.reverse();

    let scene = build_scene(&stage2, &stage3);
    assert!(scene.panels[0].brackets.is_empty());
    assert_eq!(scene.panels[2].title, "Overall Usefulness");
    assert_eq!(scene.panels[2].brackets.len(), 1);
    assert_eq!(scene.panels[2].brackets[0].text, "p = 1.32e-02");
}

#[test]
fn test_axis_ticks_sit_on_ratings_and_boxes() {
    let t = table(
        &["intent_category", "completeness_1", "completeness_3"],
        &[&["out_of_scope", "4", "2"], &["out_of_scope", "5", "3"]],
    );
    let scene = scene_for(&t, "out_of_scope", LabelPolicy::ThirdOnlyForFaq);

    let ticks = axis_ticks(&scene.panels[0]);
    assert_eq!(
        ticks.y,
        vec![
            (1.0, "1".to_string()),
            (2.0, "2".to_string()),
            (3.0, "3".to_string()),
            (4.0, "4".to_string()),
            (5.0, "5".to_string()),
        ]
    );
    assert_eq!(
        ticks.x,
        vec![(1.0, "Extractive QA".to_string()), (2.0, String::new())]
    );

    let empty = axis_ticks(&scene.panels[1]);
    assert!(empty.x.is_empty());
    assert_eq!(empty.y.len(), 5);
}

mod common;

use common::{grid, negate, points};
use ndarray::{array, Array2, Array3};
use skillforge::{build_contingency, BinaryField, ContingencyCounts, SkillError};

#[test]
fn test_counts_cover_every_cell() {
    let observed = grid(&["##..", "#...", "..#.", "...."]);
    let forecasted = grid(&["#.#.", "##..", "....", "...#"]);

    let t = build_contingency(&observed, &forecasted).unwrap();
    assert_eq!(t.hits(), 2);
    assert_eq!(t.false_alarms(), 3);
    assert_eq!(t.misses(), 2);
    assert_eq!(t.correct_rejections(), 9);
    assert_eq!(t.n(), 16);
    assert_eq!(t.n_forecasted(), 5);
    assert_eq!(t.n_observed(), 4);
}

#[test]
fn test_chance_terms() {
    // a=8 b=2 c=1 d=9
    let t = ContingencyCounts::from_counts(8, 2, 1, 9);
    assert_eq!(t.a_random(), 4.5);
    assert_eq!(t.d_random(), 5.5);
}

#[test]
fn test_all_false_fields() {
    let empty = Array2::from_elem((4, 4), false);
    let t = build_contingency(&empty, &empty).unwrap();

    assert_eq!((t.a(), t.b(), t.c(), t.d()), (0, 0, 0, 16));
    assert!(t.hit_rate().is_nan());
    assert_eq!(t.proportion_correct(), 1.0);
}

#[test]
fn test_all_true_fields() {
    let full = Array2::from_elem((3, 5), true);
    let t = build_contingency(&full, &full).unwrap();
    assert_eq!((t.a(), t.b(), t.c(), t.d()), (15, 0, 0, 0));
}

#[test]
fn test_identical_fields_are_perfect() {
    let observed = grid(&["#..#", ".##.", "....", "#..."]);
    let t = build_contingency(&observed, &observed).unwrap();

    assert_eq!(t.critical_success_index(), 1.0);
    assert_eq!(t.heidke_skill_score(), 1.0);
    assert_eq!(t.peirce_skill_score(), 1.0);
    assert_eq!(t.proportion_correct(), 1.0);
    assert_eq!(t.false_alarm_ratio(), 0.0);
    assert_eq!(t.frequency_bias(), 1.0);
}

#[test]
fn test_negated_forecast_is_worst_case() {
    let observed = grid(&["##..", "#...", "..#.", "...#"]);
    let t = build_contingency(&observed, &negate(&observed)).unwrap();

    assert_eq!(t.hits(), 0);
    assert_eq!(t.correct_rejections(), 0);
    assert_eq!(t.critical_success_index(), 0.0);
    assert_eq!(t.peirce_skill_score(), -1.0);
}

#[test]
fn test_any_dimensionality() {
    let mut observed = Array3::from_elem((2, 3, 4), false);
    let mut forecasted = Array3::from_elem((2, 3, 4), false);
    observed[[1, 2, 3]] = true;
    forecasted[[1, 2, 3]] = true;
    forecasted[[0, 0, 0]] = true;

    let t = build_contingency(observed, forecasted).unwrap();
    assert_eq!((t.a(), t.b(), t.c(), t.d()), (1, 1, 0, 22));
}

#[test]
fn test_mixed_input_types() {
    let observed = array![[0u8, 1], [1, 0]];
    let forecasted = vec![vec![0.0, 0.3], vec![0.0, 0.0]];

    let t = build_contingency(observed, forecasted).unwrap();
    assert_eq!((t.a(), t.b(), t.c(), t.d()), (1, 0, 1, 2));
}

#[test]
fn test_shape_mismatch() {
    let observed = points(3, 4, &[]);
    let forecasted = points(4, 3, &[]);

    match build_contingency(&observed, &forecasted) {
        Err(SkillError::ShapeMismatch {
            observed,
            forecasted,
        }) => {
            assert_eq!(observed, vec![3, 4]);
            assert_eq!(forecasted, vec![4, 3]);
        }
        other => panic!("expected ShapeMismatch, got {:?}", other),
    }
}

#[test]
fn test_same_size_different_shape_is_mismatch() {
    let observed = BinaryField::from_shape_vec(&[6], vec![true; 6]).unwrap();
    let forecasted = BinaryField::from_shape_vec(&[2, 3], vec![true; 6]).unwrap();
    assert!(matches!(
        ContingencyCounts::from_fields(&observed, &forecasted),
        Err(SkillError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_wrapped_counts_behave_like_built_table() {
    let observed = grid(&["##..", "#...", "..#.", "...."]);
    let forecasted = grid(&["#.#.", "##..", "....", "...#"]);
    let built = build_contingency(&observed, &forecasted).unwrap();

    let wrapped = ContingencyCounts::from_counts(built.a(), built.b(), built.c(), built.d());
    assert_eq!(wrapped, built);
    assert_eq!(wrapped.summary(), built.summary());
    assert_eq!(wrapped.n(), observed.len() as u64);
}

#[test]
fn test_serializes_counts() {
    let t = ContingencyCounts::from_counts(8, 2, 1, 9);
    let json = serde_json::to_value(t).unwrap();
    assert_eq!(json, serde_json::json!({"a": 8, "b": 2, "c": 1, "d": 9}));
}

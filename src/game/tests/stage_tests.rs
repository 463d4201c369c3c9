//! Unit tests for stage selection and clamping.

use crate::game::domain::{MAX_STAGE, STAGE_COUNT, Stage};
use rstest::rstest;

#[rstest]
#[case(0, 0)]
#[case(1, 1)]
#[case(4, 4)]
#[case(8, 8)]
#[case(9, 8)]
#[case(100, 8)]
#[case(usize::MAX, 8)]
fn for_completions_clamps_to_available_art(#[case] completions: usize, #[case] expected: u8) {
    assert_eq!(Stage::for_completions(completions).index(), expected);
}

#[rstest]
fn idle_stage_is_the_default() {
    assert_eq!(Stage::default(), Stage::IDLE);
    assert!(Stage::IDLE.is_idle());
    assert!(!Stage::for_completions(1).is_idle());
}

#[rstest]
fn stage_count_matches_the_maximum_index() {
    assert_eq!(STAGE_COUNT, usize::from(MAX_STAGE) + 1);
}

#[rstest]
fn stage_displays_its_index() {
    assert_eq!(Stage::for_completions(3).to_string(), "3");
}

use pay_now_core::{transition, UiAction, UiState};

#[test]
fn happy_path_transitions() {
    let (s1, t1) = transition(&UiState::Closed, UiAction::Open).expect("closed -> open");
    assert_eq!(s1, UiState::Open);
    assert_eq!(t1.from, UiState::Closed);
    let (s2, _) = transition(&s1, UiAction::Succeed).expect("open -> success");
    assert_eq!(s2, UiState::Success);
    let (s3, t3) = transition(&s2, UiAction::Dismiss).expect("success -> closed");
    assert_eq!(s3, UiState::Closed);
    assert_eq!(t3.reason, "success dismissed");
}

#[test]
fn failure_carries_message() {
    let (s, _) = transition(&UiState::Open, UiAction::Fail("Bad Request".to_owned()))
        .expect("open -> failed");
    assert_eq!(s, UiState::Failed("Bad Request".to_owned()));
    let (s, _) = transition(&s, UiAction::Dismiss).expect("failed -> closed");
    assert_eq!(s, UiState::Closed);
}

#[test]
fn close_is_accepted_from_every_state() {
    for state in [
        UiState::Closed,
        UiState::Open,
        UiState::Success,
        UiState::Failed("Unauthorized".to_owned()),
    ] {
        let (next, _) = transition(&state, UiAction::Close).expect("close");
        assert_eq!(next, UiState::Closed);
    }
}

#[test]
fn open_while_open_stays_open() {
    let (s, _) = transition(&UiState::Open, UiAction::Open).expect("open -> open");
    assert_eq!(s, UiState::Open);
}

#[test]
fn outcome_without_open_form_is_rejected() {
    let err = transition(&UiState::Closed, UiAction::Succeed).expect_err("must fail");
    assert!(err.to_string().contains("illegal ui transition"));
    let err = transition(&UiState::Success, UiAction::Fail("x".to_owned())).expect_err("must fail");
    assert!(err.to_string().contains("Success --fail-->"));
}

#[test]
fn dismiss_needs_a_dialog() {
    transition(&UiState::Open, UiAction::Dismiss).expect_err("open has no dialog");
    transition(&UiState::Closed, UiAction::Dismiss).expect_err("closed has no dialog");
}

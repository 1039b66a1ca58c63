use oynaiq::catalog::Sport;
use oynaiq::mvi::Reducer;
use oynaiq::wizard::{
    CompletedDraft, ValidationError, WizardIntent, WizardReducer, WizardState, WizardStep,
};

fn input(text: &str) -> WizardIntent {
    WizardIntent::Input(text.to_string())
}

fn run(state: WizardState, inputs: &[&str]) -> WizardState {
    inputs
        .iter()
        .fold(state, |state, text| WizardReducer::reduce(state, input(text)))
}

#[test]
fn start_asks_for_sport() {
    let state = WizardReducer::reduce(WizardState::Idle, WizardIntent::Start);
    assert!(state.is_collecting());
    assert_eq!(state.step(), Some(WizardStep::SelectSport));
    assert_eq!(state.draft().and_then(|d| d.sport), None);
}

#[test]
fn start_with_sport_skips_sport_step() {
    let state = WizardReducer::reduce(
        WizardState::Idle,
        WizardIntent::StartWithSport(Sport::Basketball),
    );
    assert_eq!(state.step(), Some(WizardStep::EnterTitle));
    assert_eq!(state.draft().and_then(|d| d.sport), Some(Sport::Basketball));
}

#[test]
fn steps_never_go_backwards() {
    let mut state = WizardReducer::reduce(WizardState::Idle, WizardIntent::Start);
    let mut last = state.step().expect("collecting");

    for text in ["⚽ Футбол", "", "Футбол 5×5", "Астана Арена", "  ", "сегодня, 19:00", "abc"] {
        state = WizardReducer::reduce(state, input(text));
        let step = state.step().expect("still collecting");
        assert!(step >= last, "{step:?} came after {last:?}");
        last = step;
    }
    assert_eq!(last, WizardStep::EnterDeposit);
}

#[test]
fn full_run_completes_with_every_field() {
    let state = WizardReducer::reduce(WizardState::Idle, WizardIntent::Start);
    let state = run(
        state,
        &["🏀 Баскетбол", "Стритбол 3×3", "Парк Гагарина", "завтра в 18:30", "1 500"],
    );

    assert_eq!(
        state,
        WizardState::Completed(CompletedDraft {
            sport: Sport::Basketball,
            title: "Стритбол 3×3".to_string(),
            location: "Парк Гагарина".to_string(),
            schedule: "завтра в 18:30".to_string(),
            deposit: 1500,
        })
    );
}

#[test]
fn unknown_sport_label_is_rejected() {
    let state = WizardReducer::reduce(WizardState::Idle, WizardIntent::Start);
    let state = WizardReducer::reduce(state, input("Хоккей"));
    assert_eq!(state.step(), Some(WizardStep::SelectSport));
    assert_eq!(state.rejection(), Some(&ValidationError::UnknownSport));
}

#[test]
fn bad_deposit_reprompts_and_keeps_draft() {
    let state = WizardReducer::reduce(
        WizardState::Idle,
        WizardIntent::StartWithSport(Sport::Football),
    );
    let before = run(state, &["Футбол 5×5", "Алау", "завтра, 18:30"]);
    let draft_before = before.draft().cloned();

    let after = WizardReducer::reduce(before, input("-200"));
    assert_eq!(after.step(), Some(WizardStep::EnterDeposit));
    assert_eq!(after.rejection(), Some(&ValidationError::InvalidDeposit));
    assert_eq!(after.draft().cloned(), draft_before);

    let after = WizardReducer::reduce(after, input("двести"));
    assert_eq!(after.rejection(), Some(&ValidationError::InvalidDeposit));

    let done = WizardReducer::reduce(after, input("0"));
    assert!(matches!(done, WizardState::Completed(ref d) if d.deposit == 0));
}

#[test]
fn blank_answers_are_rejected_per_step() {
    let state = WizardReducer::reduce(
        WizardState::Idle,
        WizardIntent::StartWithSport(Sport::Volleyball),
    );
    let state = WizardReducer::reduce(state, input(" "));
    assert_eq!(state.rejection(), Some(&ValidationError::EmptyTitle));

    let state = run(state, &["Пляжка", ""]);
    assert_eq!(state.rejection(), Some(&ValidationError::EmptyLocation));

    let state = run(state, &["Пляж", "\t"]);
    assert_eq!(state.rejection(), Some(&ValidationError::EmptySchedule));
}

#[test]
fn interrupt_discards_draft() {
    let state = WizardReducer::reduce(
        WizardState::Idle,
        WizardIntent::StartWithSport(Sport::Football),
    );
    let state = run(state, &["Футбол 5×5", "Алау"]);
    let state = WizardReducer::reduce(state, WizardIntent::Interrupt);
    assert_eq!(state, WizardState::Idle);
}

#[test]
fn restart_discards_previous_draft() {
    let state = WizardReducer::reduce(
        WizardState::Idle,
        WizardIntent::StartWithSport(Sport::Football),
    );
    let state = run(state, &["Футбол 5×5"]);
    let state = WizardReducer::reduce(state, WizardIntent::Start);
    assert_eq!(state.step(), Some(WizardStep::SelectSport));
    assert_eq!(state.draft().and_then(|d| d.title.clone()), None);
}

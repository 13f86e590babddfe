use courier_core::{update, AppState, Msg};

#[test]
fn field_edits_reach_the_view() {
    let state = AppState::new();
    let (state, effects) = update(state, Msg::TitleChanged("Harbor dredging plan".to_string()));
    assert!(effects.is_empty());
    let (state, effects) = update(state, Msg::AuthorChanged("J. Park".to_string()));
    assert!(effects.is_empty());

    let view = state.view();
    assert_eq!(view.title, "Harbor dredging plan");
    assert_eq!(view.author, "J. Park");
    assert_eq!(view.file_path, None);
    assert!(view.submit_enabled);
    assert_eq!(view.status, "");
}

#[test]
fn choosing_a_file_replaces_the_previous_choice() {
    let state = AppState::new();
    let (state, _) = update(state, Msg::FileChosen("draft-v1.pdf".to_string()));
    assert_eq!(state.view().file_path.as_deref(), Some("draft-v1.pdf"));

    let (state, _) = update(state, Msg::FileChosen("draft-v2.pdf".to_string()));
    assert_eq!(state.view().file_path.as_deref(), Some("draft-v2.pdf"));
}

#[test]
fn edits_mark_state_dirty_once() {
    let state = AppState::new();
    let (mut state, _) = update(state, Msg::TitleChanged("x".to_string()));
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn re_editing_a_field_overwrites_it() {
    let state = AppState::new();
    let (state, _) = update(state, Msg::TitleChanged("first".to_string()));
    let (state, _) = update(state, Msg::TitleChanged("second".to_string()));
    assert_eq!(state.view().title, "second");
}

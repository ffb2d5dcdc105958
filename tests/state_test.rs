use foliochat::agent::llm::Message;
use foliochat::agent::state::ConversationState;

#[test]
fn snapshot_preserves_append_order() {
    let mut state = ConversationState::new();
    assert!(state.is_empty());

    for i in 0..5 {
        if i % 2 == 0 {
            state.append(Message::user(format!("question {}", i)));
        } else {
            state.append(Message::assistant(format!("answer {}", i)));
        }
    }

    let snapshot = state.snapshot();
    assert_eq!(state.len(), 5);
    assert_eq!(snapshot.len(), 5);
    for (i, message) in snapshot.iter().enumerate() {
        let expected_role = if i % 2 == 0 { "user" } else { "assistant" };
        assert_eq!(message.role, expected_role);
        assert!(message.content.as_deref().unwrap().ends_with(&i.to_string()));
    }
}

#[test]
fn snapshot_is_independent_of_internal_state() {
    let mut state = ConversationState::new();
    state.append(Message::user("hello"));

    let mut snapshot = state.snapshot();
    snapshot.clear();
    snapshot.push(Message::assistant("injected"));

    let fresh = state.snapshot();
    assert_eq!(fresh.len(), 1);
    assert_eq!(fresh[0].role, "user");
    assert_eq!(fresh[0].content.as_deref(), Some("hello"));
}

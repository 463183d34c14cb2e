//! Tests for #[derive(Action)] macro

use todos_core::action::Action;
use todos_macros::Action;

#[derive(Action, Clone, Debug, PartialEq)]
#[allow(dead_code)]
enum TodoAction {
    Create {
        text: String,
    },

    #[action(name = "TOGGLE")]
    ToggleDone {
        id: u64,
    },

    Remove(u64),

    ClearCompleted,
}

#[derive(Action, Clone, Debug)]
#[allow(dead_code)]
enum Wrapped<T> {
    Inner(T),
    #[action(name = "nothing")]
    Empty,
}

#[test]
fn test_default_kind_is_screaming_snake_case() {
    let action = TodoAction::Create {
        text: "Test".to_string(),
    };
    assert_eq!(action.kind(), "CREATE");
    assert_eq!(TodoAction::ClearCompleted.kind(), "CLEAR_COMPLETED");
}

#[test]
fn test_kind_override() {
    assert_eq!(TodoAction::ToggleDone { id: 1 }.kind(), "TOGGLE");
}

#[test]
fn test_tuple_variant() {
    assert_eq!(TodoAction::Remove(2).kind(), "REMOVE");
}

#[test]
fn test_generic_enum() {
    assert_eq!(Wrapped::Inner(5_u8).kind(), "INNER");
    assert_eq!(Wrapped::<u8>::Empty.kind(), "nothing");
}

#[test]
fn test_kinds_unique() {
    let actions = vec![
        TodoAction::Create {
            text: "a".to_string(),
        },
        TodoAction::ToggleDone { id: 1 },
        TodoAction::Remove(1),
        TodoAction::ClearCompleted,
    ];

    let mut kinds: Vec<_> = actions.iter().map(todos_core::action::Action::kind).collect();
    kinds.sort_unstable();
    kinds.dedup();
    assert_eq!(kinds.len(), 4);
}

#[test]
fn test_kinds_lists_every_variant_in_order() {
    assert_eq!(
        <TodoAction as Action>::KINDS,
        &["CREATE", "TOGGLE", "REMOVE", "CLEAR_COMPLETED"]
    );
    assert_eq!(<Wrapped<u8> as Action>::KINDS, &["INNER", "nothing"]);
}

use checktree::{CheckState, NodeState};

#[test]
fn test_from_leaves() {
    assert_eq!(NodeState::from_leaves(0, 3), NodeState::uniform(false));
    assert_eq!(NodeState::from_leaves(3, 3), NodeState::uniform(true));
    assert_eq!(
        NodeState::from_leaves(1, 3),
        NodeState {
            checked: false,
            indeterminate: true,
        }
    );
}

#[test]
fn test_check_state_conversion() {
    assert_eq!(
        CheckState::from(NodeState::uniform(true)),
        CheckState::Checked
    );
    assert_eq!(
        CheckState::from(NodeState::from_leaves(2, 5)),
        CheckState::Indeterminate
    );
    assert_eq!(NodeState::default().check_state(), CheckState::Unchecked);
}

#[test]
fn test_glyphs() {
    assert_eq!(CheckState::Checked.glyph(), "■");
    assert_eq!(CheckState::Indeterminate.glyph(), "▣");
    assert_eq!(CheckState::Unchecked.glyph(), "□");
}

#[test]
fn test_serialized_form() {
    let json = serde_json::to_string(&CheckState::Indeterminate).unwrap();
    assert_eq!(json, "\"indeterminate\"");

    let state: NodeState = serde_json::from_str(r#"{"checked":true,"indeterminate":false}"#).unwrap();
    assert_eq!(state, NodeState::uniform(true));
}

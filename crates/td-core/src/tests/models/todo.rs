use crate::{RecurrenceType, Role, Todo};

use serde_json::json;

#[test]
fn test_todo_deserializes_minimal_shape() {
    // Older backend versions omit recurrence and due-date fields entirely
    let todo: Todo = serde_json::from_value(json!({
        "id": 7,
        "title": "Write report"
    }))
    .unwrap();

    assert_eq!(todo.id, 7);
    assert_eq!(todo.title, "Write report");
    assert!(!todo.is_completed);
    assert!(!todo.is_overdue);
    assert_eq!(todo.recurrence_type, RecurrenceType::None);
    assert!(todo.due_date.is_none());
    assert!(todo.assigned_to_username.is_none());
}

#[test]
fn test_todo_deserializes_full_shape() {
    let todo: Todo = serde_json::from_value(json!({
        "id": 3,
        "title": "Standup notes",
        "description": "Daily notes",
        "is_completed": true,
        "is_overdue": false,
        "due_date": "2025-02-07T10:30:00Z",
        "recurrence_type": "DAILY",
        "assigned_to_username": "bob",
        "created_by": {"id": 1, "username": "alice", "role": "OWNER"},
        "created_at": "2025-02-01T08:00:00Z"
    }))
    .unwrap();

    assert!(todo.is_completed);
    assert_eq!(todo.recurrence_type, RecurrenceType::Daily);
    assert_eq!(todo.assigned_to_username.as_deref(), Some("bob"));

    let created_by = todo.created_by.unwrap();
    assert_eq!(created_by.username, "alice");
    assert_eq!(created_by.role, Some(Role::Owner));
}

#[test]
fn test_todo_created_by_role_may_be_null() {
    // Creator left the tenant; the serializer sends role: null
    let todo: Todo = serde_json::from_value(serde_json::json!({
        "id": 9,
        "title": "Orphaned",
        "created_by": {"id": 4, "username": "gone", "role": null}
    }))
    .unwrap();

    assert_eq!(todo.created_by.unwrap().role, None);
}

use super::*;
use serde_json::json;

// =============================================================
// TodoId
// =============================================================

#[test]
fn todo_id_accepts_numbers_and_strings() {
    let n: TodoId = serde_json::from_value(json!(1)).unwrap();
    let s: TodoId = serde_json::from_value(json!("a1b2")).unwrap();
    assert_eq!(n, TodoId::Number(1));
    assert_eq!(s, TodoId::Text("a1b2".to_owned()));
}

#[test]
fn todo_id_serializes_in_its_original_shape() {
    assert_eq!(serde_json::to_value(TodoId::from(42)).unwrap(), json!(42));
    assert_eq!(serde_json::to_value(TodoId::from("x")).unwrap(), json!("x"));
}

#[test]
fn todo_id_display_is_bare_value() {
    assert_eq!(TodoId::from(7).to_string(), "7");
    assert_eq!(TodoId::from("abc").to_string(), "abc");
}

// =============================================================
// TodoItem
// =============================================================

#[test]
fn todo_item_deserializes_list_response() {
    let items: Vec<TodoItem> = serde_json::from_value(json!([
        { "id": 1, "title": "A", "description": "B" },
        { "id": 2, "title": "C", "description": "D", "isComplete": false }
    ]))
    .unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, TodoId::Number(1));
    assert_eq!(items[1].title, "C");
    assert_eq!(items[1].description, "D");
}

#[test]
fn todo_item_missing_description_defaults_to_empty() {
    let item: TodoItem = serde_json::from_value(json!({ "id": "x", "title": "only title" })).unwrap();
    assert_eq!(item.description, "");
}

// =============================================================
// TodoPayload
// =============================================================

#[test]
fn todo_payload_serializes_title_and_description() {
    let payload = TodoPayload {
        title: "A".to_owned(),
        description: "B".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({ "title": "A", "description": "B" })
    );
}

#[test]
fn todo_item_null_description_does_not_reject_list() {
    let items: Vec<TodoItem> = serde_json::from_value(json!([
        { "id": 1, "title": "A", "description": "B" },
        { "id": 2, "title": "C", "description": null }
    ]))
    .unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].title, "C");
    assert_eq!(items[1].description, "");
}

#[test]
fn todo_item_null_title_becomes_empty() {
    let item: TodoItem = serde_json::from_value(json!({ "id": 3, "title": null, "description": "d" })).unwrap();
    assert_eq!(item.title, "");
    assert_eq!(item.description, "d");
}

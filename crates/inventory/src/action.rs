use serde::{Deserialize, Serialize};

use pantry_core::{ItemId, ValueObject};

use crate::unit::CanonicalUnit;
use crate::warning::Warning;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Add,
    Remove,
    Set,
}

impl ActionKind {
    /// Parse a command verb (case-insensitive).
    pub fn from_verb(verb: &str) -> Option<Self> {
        match verb.to_ascii_lowercase().as_str() {
            "add" => Some(ActionKind::Add),
            "remove" => Some(ActionKind::Remove),
            "set" => Some(ActionKind::Set),
            _ => None,
        }
    }
}

/// A validated mutation intent, ready for [`crate::apply_actions`].
///
/// `item_id` is `None` exactly when `is_new_item` is set and the item still has
/// to be created. Built once by the interpreter, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub kind: ActionKind,
    pub amount: f64,
    pub input_unit: Option<CanonicalUnit>,
    pub item_id: Option<ItemId>,
    pub item_name: String,
    pub item_category: String,
    pub item_unit_type: CanonicalUnit,
    pub is_new_item: bool,
    pub raw_item_name: String,
    #[serde(skip_deserializing)]
    pub warnings: Vec<Warning>,
}

impl ValueObject for Action {}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_value_object<T: ValueObject>() {}

    #[test]
    fn verbs_parse_case_insensitively() {
        assert_eq!(ActionKind::from_verb("ADD"), Some(ActionKind::Add));
        assert_eq!(ActionKind::from_verb("Remove"), Some(ActionKind::Remove));
        assert_eq!(ActionKind::from_verb("set"), Some(ActionKind::Set));
        assert_eq!(ActionKind::from_verb("delete"), None);
    }

    #[test]
    fn kind_serializes_as_lowercase_verb() {
        for (kind, verb) in [
            (ActionKind::Add, "add"),
            (ActionKind::Remove, "remove"),
            (ActionKind::Set, "set"),
        ] {
            assert_eq!(serde_json::to_value(kind).unwrap(), serde_json::json!(verb));
            assert_eq!(ActionKind::from_verb(verb), Some(kind));
        }
    }

    #[test]
    fn actions_and_units_are_value_objects() {
        assert_value_object::<Action>();
        assert_value_object::<CanonicalUnit>();
        assert_value_object::<Warning>();
    }

    #[test]
    fn deserialized_action_starts_without_warnings() {
        let action: Action = serde_json::from_str(
            r#"{
                "kind": "remove",
                "amount": 2.0,
                "inputUnit": null,
                "itemId": null,
                "itemName": "Onion",
                "itemCategory": "Vegetables",
                "itemUnitType": "kg",
                "isNewItem": false,
                "rawItemName": "onions"
            }"#,
        )
        .unwrap();
        assert_eq!(action.kind, ActionKind::Remove);
        assert_eq!(action.item_unit_type, CanonicalUnit::Kg);
        assert!(action.warnings.is_empty());
    }
}

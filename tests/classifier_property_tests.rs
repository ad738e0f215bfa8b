//! Property-based tests for classifier robustness: arbitrary status strings
//! must never break classification, and identifier matching must not depend
//! on wire representation.

use proptest::prelude::*;

use inspection_desk::{classify, Contract, EntityId, Inspection, Role, WorkflowStatus};

fn contract_with_id(id: EntityId) -> Contract {
    serde_json::from_value(serde_json::json!({
        "id": "placeholder",
        "type": "purchase",
        "motorcycleId": "M1"
    }))
    .map(|mut contract: Contract| {
        contract.id = id;
        contract
    })
    .unwrap()
}

fn inspection_with_status(status: Option<String>) -> Inspection {
    serde_json::from_value(serde_json::json!({
        "id": 1,
        "contractId": "C1",
        "workflowStatus": status,
    }))
    .unwrap()
}

proptest! {
    #[test]
    fn classification_never_panics_on_arbitrary_status(status in any::<Option<String>>()) {
        let contract = contract_with_id(EntityId::from("C1"));
        let inspection = inspection_with_status(status);
        let _ = classify(&contract, Some(&inspection));
    }

    #[test]
    fn unknown_statuses_default_to_initial_state(status in "[a-z_]{1,24}") {
        prop_assume!(!matches!(
            status.as_str(),
            "rama_pending" | "rama_completed" | "gidioni_pending" | "gidioni_completed" | "completed"
        ));

        let contract = contract_with_id(EntityId::from("C1"));
        let inspection = inspection_with_status(Some(status));
        let classified = classify(&contract, Some(&inspection));

        prop_assert_eq!(classified.workflow_status, WorkflowStatus::RamaPending);
        prop_assert!(classified.can_verify(Role::Registration));
    }

    #[test]
    fn numeric_and_string_ids_are_interchangeable(id in 0i64..1_000_000) {
        let as_number = EntityId::from(id);
        let as_text = EntityId::from(id.to_string().as_str());

        prop_assert!(as_number.matches(&as_text));
        prop_assert!(as_text.matches(&as_number));
        prop_assert_eq!(as_number.normalized(), as_text.normalized());
    }

    #[test]
    fn distinct_numeric_ids_never_match(a in 0i64..1_000_000, b in 0i64..1_000_000) {
        prop_assume!(a != b);
        prop_assert!(!EntityId::from(a).matches(&EntityId::from(b)));
    }
}

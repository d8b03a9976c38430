//! Acknowledgements returned by write operations.
//!
//! These serialize to the camelCase shape HTTP callers rely on
//! (`matchedCount`, `modifiedCount`, `deletedCount`, ...).

use serde::{Deserialize, Serialize};

/// Result of an insert-one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOutcome<Id> {
    pub acknowledged: bool,
    pub inserted_id: Id,
}

impl<Id> InsertOutcome<Id> {
    pub fn new(inserted_id: Id) -> Self {
        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}

/// Result of an update-one, with or without upsert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOutcome<Id> {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,
    pub upserted_id: Option<Id>,
}

impl<Id> UpdateOutcome<Id> {
    /// Nothing matched and nothing was inserted.
    pub fn unmatched() -> Self {
        Self {
            acknowledged: true,
            matched_count: 0,
            modified_count: 0,
            upserted_count: 0,
            upserted_id: None,
        }
    }

    pub fn matched(modified: bool) -> Self {
        Self {
            matched_count: 1,
            modified_count: u64::from(modified),
            ..Self::unmatched()
        }
    }

    pub fn upserted(id: Id) -> Self {
        Self {
            upserted_count: 1,
            upserted_id: Some(id),
            ..Self::unmatched()
        }
    }
}

/// Result of a delete-one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteOutcome {
    pub fn new(deleted: bool) -> Self {
        Self {
            acknowledged: true,
            deleted_count: u64::from(deleted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_outcome_wire_shape() {
        let outcome = UpdateOutcome::<String>::matched(false);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "acknowledged": true,
                "matchedCount": 1,
                "modifiedCount": 0,
                "upsertedCount": 0,
                "upsertedId": null
            })
        );
    }

    #[test]
    fn test_delete_outcome_counts() {
        assert_eq!(DeleteOutcome::new(true).deleted_count, 1);
        assert_eq!(DeleteOutcome::new(false).deleted_count, 0);
        let json = serde_json::to_value(DeleteOutcome::new(false)).unwrap();
        assert_eq!(json["deletedCount"], 0);
    }
}

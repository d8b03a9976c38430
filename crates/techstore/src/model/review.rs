use collection_actor::ObjectId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Customer review, stored verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ReviewCreate {
    pub fields: Map<String, Value>,
}

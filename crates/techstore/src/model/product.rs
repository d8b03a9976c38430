use collection_actor::ObjectId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Catalog entry. The catalog has no schema; fields are stored as submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Text fields accepted by the add-product form, in addition to the `image` file.
pub const PRODUCT_FORM_FIELDS: [&str; 9] = [
    "name",
    "brand",
    "processor",
    "ram",
    "hdd",
    "sdd",
    "gen",
    "price",
    "description",
];

/// Payload for adding a product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCreate {
    pub fields: Map<String, Value>,
}

impl ProductCreate {
    /// Builds a product from its form fields and the base64-encoded image.
    pub fn with_image(mut fields: Map<String, Value>, image_base64: String) -> Self {
        fields.insert("image".to_string(), Value::String(image_base64));
        Self { fields }
    }
}

use crate::model::{Product, ProductCreate};
use crate::product_actor::ProductError;
use collection_actor::{ActorEntity, ObjectId};
use std::convert::Infallible;

/// Products are written once and never edited or filtered.
impl ActorEntity for Product {
    type Id = ObjectId;
    type Create = ProductCreate;
    type Update = Infallible;
    type Filter = Infallible;
    type Error = ProductError;

    fn from_create_params(id: ObjectId, params: ProductCreate) -> Result<Self, Self::Error> {
        let mut fields = params.fields;
        fields.remove("_id");
        Ok(Self { id, fields })
    }

    fn matches(&self, filter: &Infallible) -> bool {
        match *filter {}
    }

    fn on_update(&mut self, update: Infallible) -> Result<(), Self::Error> {
        match update {}
    }
}

use crate::model::{Review, ReviewCreate};
use crate::review_actor::ReviewError;
use collection_actor::{ActorEntity, ObjectId};
use std::convert::Infallible;

impl ActorEntity for Review {
    type Id = ObjectId;
    type Create = ReviewCreate;
    type Update = Infallible;
    type Filter = Infallible;
    type Error = ReviewError;

    fn from_create_params(id: ObjectId, params: ReviewCreate) -> Result<Self, Self::Error> {
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

//! # Domain Models
//!
//! Documents stored in the four collections. Each has a store-assigned
//! [`ObjectId`](collection_actor::ObjectId) serialized as `_id`; fields the store does not
//! interpret are kept in a flattened JSON map and round-trip unchanged.

pub mod order;
pub mod product;
pub mod review;
pub mod user;

pub use order::{Order, OrderCreate, OrderFilter, OrderStatus, OrderUpdate, PaymentRecord};
pub use product::{Product, ProductCreate, PRODUCT_FORM_FIELDS};
pub use review::{Review, ReviewCreate};
pub use user::{Role, User, UserFilter, UserProfile, UserUpdate};

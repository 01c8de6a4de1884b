//! Products domain module.
//!
//! This crate contains the product model, the submission rules a candidate must
//! pass, and the store that owns every product record and hands out ids. No
//! HTTP and no persistence live here.

pub mod product;
pub mod store;
pub mod validator;

pub use product::{Product, ProductDraft};
pub use store::{InMemoryProductStore, ProductStore};
pub use validator::{BasicProductValidator, ProductValidator, ValidationError};

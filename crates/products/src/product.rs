use serde::{Deserialize, Serialize};

use catalog_core::ProductId;

/// A stored product.
///
/// `id` is assigned by the store on creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

/// A product submission without identity (create and full-replace update).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, description: Option<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description,
            price,
        }
    }

    /// Attach a store-assigned identity.
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }
}

impl Product {
    /// Overwrite name, description and price in place. The id is untouched.
    pub fn replace_with(&mut self, draft: ProductDraft) {
        self.name = draft.name;
        self.description = draft.description;
        self.price = draft.price;
    }
}

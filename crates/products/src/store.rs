//! Product storage abstraction and its in-memory implementation.

use std::sync::{Arc, PoisonError, RwLock};

use catalog_core::ProductId;

use crate::product::{Product, ProductDraft};

/// Capability: the authoritative owner of product records and id assignment.
///
/// Callers receive clones; every mutation goes through this trait.
pub trait ProductStore: Send + Sync {
    /// All products, in insertion order.
    fn get_all(&self) -> Vec<Product>;
    fn get_by_id(&self, id: ProductId) -> Option<Product>;
    /// Assign the next id and append. Assumes the candidate was validated.
    fn add(&self, candidate: ProductDraft) -> Product;
    /// Overwrite name, description and price. `false` if `id` is unknown.
    fn update(&self, id: ProductId, updated: ProductDraft) -> bool;
    /// Remove the product. `false` if `id` is unknown.
    fn delete(&self, id: ProductId) -> bool;
}

impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    fn get_all(&self) -> Vec<Product> {
        (**self).get_all()
    }

    fn get_by_id(&self, id: ProductId) -> Option<Product> {
        (**self).get_by_id(id)
    }

    fn add(&self, candidate: ProductDraft) -> Product {
        (**self).add(candidate)
    }

    fn update(&self, id: ProductId, updated: ProductDraft) -> bool {
        (**self).update(id, updated)
    }

    fn delete(&self, id: ProductId) -> bool {
        (**self).delete(id)
    }
}

#[derive(Debug)]
struct Catalog {
    products: Vec<Product>,
    next_id: ProductId,
}

impl Catalog {
    fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }
}

/// Process-lifetime store backed by a `Vec`.
///
/// A single lock guards both the records and the id counter, so concurrent
/// requests are serialized. Ids are never reused, even after deletion.
#[derive(Debug)]
pub struct InMemoryProductStore {
    inner: RwLock<Catalog>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Catalog {
                products: Vec::new(),
                next_id: ProductId::FIRST,
            }),
        }
    }

    // Every operation leaves the catalog consistent before it can panic, so a
    // poisoned lock still guards valid state.
    fn read(&self) -> std::sync::RwLockReadGuard<'_, Catalog> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Catalog> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductStore for InMemoryProductStore {
    fn get_all(&self) -> Vec<Product> {
        self.read().products.clone()
    }

    fn get_by_id(&self, id: ProductId) -> Option<Product> {
        self.read().products.iter().find(|p| p.id == id).cloned()
    }

    fn add(&self, candidate: ProductDraft) -> Product {
        let mut catalog = self.write();
        let id = catalog.next_id;
        catalog.next_id = id.next();

        let product = candidate.into_product(id);
        catalog.products.push(product.clone());

        tracing::debug!(product_id = %id, "product added");
        product
    }

    fn update(&self, id: ProductId, updated: ProductDraft) -> bool {
        let mut catalog = self.write();
        match catalog.products.iter_mut().find(|p| p.id == id) {
            Some(existing) => {
                existing.replace_with(updated);
                tracing::debug!(product_id = %id, "product updated");
                true
            }
            None => false,
        }
    }

    fn delete(&self, id: ProductId) -> bool {
        let mut catalog = self.write();
        match catalog.position(id) {
            Some(index) => {
                catalog.products.remove(index);
                tracing::debug!(product_id = %id, "product deleted");
                true
            }
            None => false,
        }
    }
}

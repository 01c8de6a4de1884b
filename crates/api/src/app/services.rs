//! Application services: validation then store, with domain results.
//!
//! Handlers only translate HTTP to and from these calls; every decision about
//! which status a request ends with is made from the `DomainResult` here.

use std::sync::Arc;

use catalog_core::{DomainError, DomainResult, ProductId};
use catalog_products::{
    BasicProductValidator, InMemoryProductStore, Product, ProductDraft, ProductStore,
    ProductValidator,
};

/// Explicit handle to the store and validator, created once at startup and
/// shared with every request.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn ProductStore>,
    validator: Arc<dyn ProductValidator>,
}

impl AppServices {
    pub fn new(store: Arc<dyn ProductStore>, validator: Arc<dyn ProductValidator>) -> Self {
        Self { store, validator }
    }

    /// Empty in-memory store with the default validation rules.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryProductStore::new()),
            Arc::new(BasicProductValidator::new()),
        )
    }

    pub fn list_products(&self) -> Vec<Product> {
        self.store.get_all()
    }

    pub fn get_product(&self, id: ProductId) -> DomainResult<Product> {
        self.store.get_by_id(id).ok_or_else(DomainError::not_found)
    }

    pub fn validate(&self, draft: &ProductDraft) -> DomainResult<()> {
        self.validator.validate(draft).map_err(|e| {
            tracing::info!(reason = %e, "product rejected");
            e.into()
        })
    }

    /// Validate, then store. A rejected candidate does not consume an id.
    pub fn create_product(&self, draft: ProductDraft) -> DomainResult<Product> {
        self.validate(&draft)?;

        let product = self.store.add(draft);
        tracing::info!(product_id = %product.id, "product created");
        Ok(product)
    }

    /// Full overwrite of name, description and price. Validation runs before
    /// the existence check.
    pub fn update_product(&self, id: ProductId, draft: ProductDraft) -> DomainResult<()> {
        self.validate(&draft)?;

        if !self.store.update(id, draft) {
            return Err(DomainError::not_found());
        }

        tracing::info!(product_id = %id, "product updated");
        Ok(())
    }

    pub fn delete_product(&self, id: ProductId) -> DomainResult<()> {
        if !self.store.delete(id) {
            return Err(DomainError::not_found());
        }

        tracing::info!(product_id = %id, "product deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_products::ValidationError;

    fn draft(name: &str, price: f64) -> ProductDraft {
        ProductDraft::new(name, None, price)
    }

    #[test]
    fn rejected_create_does_not_consume_an_id() {
        let services = AppServices::in_memory();

        let err = services.create_product(draft("", 5.0)).unwrap_err();
        assert_eq!(err, DomainError::Validation("Name is required.".to_string()));
        assert!(services.list_products().is_empty());

        let created = services.create_product(draft("A", 5.0)).unwrap();
        assert_eq!(created.id, ProductId::FIRST);
    }

    #[test]
    fn update_validates_before_checking_existence() {
        let services = AppServices::in_memory();

        let err = services
            .update_product(ProductId::new(42), draft("A", 0.0))
            .unwrap_err();
        assert_eq!(err, DomainError::Validation("Price must be positive.".to_string()));

        let err = services
            .update_product(ProductId::new(42), draft("A", 1.0))
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn get_and_delete_report_not_found() {
        let services = AppServices::in_memory();
        assert_eq!(services.get_product(ProductId::FIRST), Err(DomainError::NotFound));
        assert_eq!(services.delete_product(ProductId::FIRST), Err(DomainError::NotFound));

        let created = services.create_product(draft("A", 1.0)).unwrap();
        assert_eq!(services.get_product(created.id), Ok(created.clone()));
        assert_eq!(services.delete_product(created.id), Ok(()));
        assert_eq!(services.get_product(created.id), Err(DomainError::NotFound));
    }

    struct RejectEverything;

    impl ProductValidator for RejectEverything {
        fn validate(&self, _candidate: &ProductDraft) -> Result<(), ValidationError> {
            Err(ValidationError::PriceNotPositive)
        }
    }

    #[test]
    fn validator_is_substitutable() {
        let store = Arc::new(InMemoryProductStore::new());
        let services = AppServices::new(store.clone(), Arc::new(RejectEverything));

        assert!(services.create_product(draft("A", 1.0)).is_err());
        assert!(store.get_all().is_empty());
    }
}

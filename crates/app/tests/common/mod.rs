//! Shared fixtures for view-model tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Local, NaiveDate};

use catalog_client::{Operation, ProductRepository, RepositoryError};
use catalog_core::dates::utc_midnight;
use catalog_core::Product;

/// A repository call, as recorded by [`FakeRepository`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    VerifyId(String),
    Create(Product),
    Update(Product),
    Delete(String),
}

#[derive(Debug, Default)]
struct State {
    products: Vec<Product>,
    failures: Vec<(Operation, String)>,
    calls: Vec<Call>,
}

/// In-memory repository that records every call and can be told to fail
/// specific operations. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct FakeRepository {
    state: Arc<Mutex<State>>,
}

impl FakeRepository {
    pub fn with_products(products: Vec<Product>) -> Self {
        let repo = Self::default();
        repo.state.lock().unwrap().products = products;
        repo
    }

    /// Make every call to `operation` fail with a 500 carrying `message`.
    pub fn fail(&self, operation: Operation, message: &str) {
        self.state
            .lock()
            .unwrap()
            .failures
            .push((operation, message.to_string()));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn products(&self) -> Vec<Product> {
        self.state.lock().unwrap().products.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    fn record(&self, call: Call, operation: Operation) -> Result<(), RepositoryError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        match state.failures.iter().find(|(op, _)| *op == operation) {
            Some((_, message)) => Err(RepositoryError::Api {
                operation,
                status: 500,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ProductRepository for FakeRepository {
    async fn list_products(&self) -> Result<Vec<Product>, RepositoryError> {
        self.record(Call::List, Operation::List)?;
        Ok(self.products())
    }

    async fn product_id_exists(&self, id: &str) -> Result<bool, RepositoryError> {
        self.record(Call::VerifyId(id.to_string()), Operation::VerifyId)?;
        Ok(self.products().iter().any(|p| p.id == id))
    }

    async fn create_product(&self, product: &Product) -> Result<Product, RepositoryError> {
        self.record(Call::Create(product.clone()), Operation::Create)?;
        self.state.lock().unwrap().products.push(product.clone());
        Ok(product.clone())
    }

    async fn update_product(&self, product: &Product) -> Result<Product, RepositoryError> {
        self.record(Call::Update(product.clone()), Operation::Update)?;
        let mut state = self.state.lock().unwrap();
        if let Some(existing) = state.products.iter_mut().find(|p| p.id == product.id) {
            *existing = product.clone();
        }
        Ok(product.clone())
    }

    async fn delete_product(&self, id: &str) -> Result<(), RepositoryError> {
        self.record(Call::Delete(id.to_string()), Operation::Delete)?;
        self.state.lock().unwrap().products.retain(|p| p.id != id);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

pub fn product(id: &str, name: &str) -> Product {
    let release = NaiveDate::from_ymd_opt(2026, 1, 20).unwrap();
    let revision = NaiveDate::from_ymd_opt(2027, 1, 20).unwrap();
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("Descripcion de {name}"),
        logo_url: format!("https://cdn.example/{id}.png"),
        release_date: utc_midnight(release),
        revision_date: utc_midnight(revision),
    }
}

/// `count` products with ids `p1..=pN`.
pub fn numbered_products(count: usize) -> Vec<Product> {
    (1..=count)
        .map(|i| product(&format!("p{i}"), &format!("Producto {i}")))
        .collect()
}

/// A release date safely in the future, as `YYYY-MM-DD`.
pub fn future_date() -> String {
    (Local::now().date_naive() + Duration::days(30))
        .format("%Y-%m-%d")
        .to_string()
}

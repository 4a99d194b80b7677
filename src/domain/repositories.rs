//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::DomainError;

/// Customer data for API responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    /// Assigned by the store on creation, never changes afterwards
    pub id: i32,
    pub name: String,
    pub age: u32,
}

/// Input for creating or replacing a customer.
///
/// Any `id` sent by a client is not part of this shape and is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CustomerInput {
    pub name: String,
    pub age: u32,
}

/// Repository trait for Customer entity
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Find all customers, ordered by id
    async fn find_all(&self) -> Result<Vec<Customer>, DomainError>;

    /// Find a customer by ID, failing with `NotFound` when no row matches
    async fn find_by_id(&self, id: i32) -> Result<Customer, DomainError>;

    /// Create a new customer; the store assigns the id
    async fn create(&self, input: CustomerInput) -> Result<Customer, DomainError>;

    /// Overwrite name and age of an existing customer
    async fn update(&self, id: i32, input: CustomerInput) -> Result<Customer, DomainError>;

    /// Delete a customer by ID
    async fn delete(&self, id: i32) -> Result<(), DomainError>;

    /// Number of stored customers; the seed hook only acts when this is zero
    async fn count(&self) -> Result<u64, DomainError>;
}

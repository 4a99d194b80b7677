//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::CustomerRepository;
use crate::infrastructure::SeaOrmCustomerRepository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Customer repository
    pub customer_repo: Arc<dyn CustomerRepository>,
}

impl AppState {
    /// Create a new AppState backed by the given connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self::with_repository(Arc::new(SeaOrmCustomerRepository::new(db)))
    }

    /// Create an AppState around any repository implementation
    pub fn with_repository(customer_repo: Arc<dyn CustomerRepository>) -> Self {
        Self { customer_repo }
    }
}

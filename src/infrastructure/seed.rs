use sea_orm::{DatabaseConnection, EntityTrait, Set, TransactionTrait};

use crate::domain::{CustomerRepository, DomainError};
use crate::infrastructure::SeaOrmCustomerRepository;
use crate::models::customer::{self, Entity as Customer};

/// Customers inserted into an empty table on first startup
pub const SEED_CUSTOMERS: [(&str, u32); 3] = [("Arm", 21), ("Bob", 22), ("Alice", 23)];

/// Insert the seed customers when, and only when, the table is empty.
///
/// Returns the number of rows inserted.
pub async fn seed_if_empty(db: &DatabaseConnection) -> Result<u64, DomainError> {
    let count = SeaOrmCustomerRepository::new(db.clone()).count().await?;
    if count > 0 {
        tracing::debug!("customers table has {} rows, skipping seed", count);
        return Ok(0);
    }

    let txn = db.begin().await?;
    for (name, age) in SEED_CUSTOMERS {
        let row = customer::ActiveModel {
            name: Set(name.to_owned()),
            age: Set(age),
            ..Default::default()
        };
        Customer::insert(row).exec(&txn).await?;
    }
    txn.commit().await?;

    Ok(SEED_CUSTOMERS.len() as u64)
}

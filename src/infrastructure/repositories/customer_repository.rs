//! SeaORM implementation of CustomerRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder, Set,
};

use crate::domain::{Customer, CustomerInput, CustomerRepository, DomainError};
use crate::models::customer::{ActiveModel, Column, Entity as CustomerEntity};

/// SeaORM-based implementation of CustomerRepository
pub struct SeaOrmCustomerRepository {
    db: DatabaseConnection,
}

impl SeaOrmCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn find_all(&self) -> Result<Vec<Customer>, DomainError> {
        let customers = CustomerEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(customers.into_iter().map(Customer::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Customer, DomainError> {
        CustomerEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Customer::from)
            .ok_or(DomainError::NotFound)
    }

    async fn create(&self, input: CustomerInput) -> Result<Customer, DomainError> {
        let customer = ActiveModel {
            name: Set(input.name),
            age: Set(input.age),
            ..Default::default()
        };

        let result = customer.insert(&self.db).await?;

        Ok(Customer::from(result))
    }

    async fn update(&self, id: i32, input: CustomerInput) -> Result<Customer, DomainError> {
        // A zero-row UPDATE looks like success, so confirm the row first
        if CustomerEntity::find_by_id(id).one(&self.db).await?.is_none() {
            return Err(DomainError::NotFound);
        }

        let customer = ActiveModel {
            id: Set(id),
            name: Set(input.name),
            age: Set(input.age),
        };

        match customer.update(&self.db).await {
            Ok(model) => Ok(Customer::from(model)),
            // Deleted between the check and the write
            Err(DbErr::RecordNotUpdated) => Err(DomainError::NotFound),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let result = CustomerEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(CustomerEntity::find().count(&self.db).await?)
    }
}

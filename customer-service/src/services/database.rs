use crate::models::Customer;
use futures::TryStreamExt;
use mongodb::{
    bson::doc, options::FindOptions, options::IndexOptions, Client as MongoClient, Collection,
    Database, IndexModel,
};
use service_core::error::AppError;

#[derive(Clone)]
pub struct CustomerDb {
    client: MongoClient,
    db: Database,
}

impl CustomerDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for customer-service");

        let customers = self.customers();

        // Lookup index only; customer_id carries no uniqueness constraint.
        let customer_id_index = IndexModel::builder()
            .keys(doc! { "customer_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("customer_id_lookup".to_string())
                    .build(),
            )
            .build();

        customers
            .create_index(customer_id_index, None)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to create customer_id index on customers collection: {}",
                    e
                );
                AppError::from(e)
            })?;
        tracing::info!("Created index on customers.customer_id");

        // Descending created_at backs the newest-first listing.
        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        customers
            .create_index(created_at_index, None)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to create created_at index on customers collection: {}",
                    e
                );
                AppError::from(e)
            })?;
        tracing::info!("Created index on customers.created_at");

        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    /// Page through all customers, newest `created_at` first.
    pub async fn list_customers(&self, skip: u64, limit: i64) -> Result<Vec<Customer>, AppError> {
        let find_options = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .skip(skip)
            .limit(limit)
            .build();

        let mut cursor = self
            .customers()
            .find(doc! {}, find_options)
            .await
            .map_err(AppError::from)?;

        let mut customers = Vec::new();
        while let Some(customer) = cursor.try_next().await.map_err(AppError::from)? {
            customers.push(customer);
        }

        Ok(customers)
    }

    /// Lookup by the external `customer_id` field, not the store's `_id`.
    pub async fn find_by_customer_id(
        &self,
        customer_id: &str,
    ) -> Result<Option<Customer>, AppError> {
        self.customers()
            .find_one(doc! { "customer_id": customer_id }, None)
            .await
            .map_err(AppError::from)
    }

    pub async fn insert_customer(&self, customer: &Customer) -> Result<(), AppError> {
        self.customers()
            .insert_one(customer, None)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to insert customer {} into database: {}",
                    customer.customer_id,
                    e
                );
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn customers(&self) -> Collection<Customer> {
        self.db.collection("customers")
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }
}

use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Store-assigned identifier; never the public lookup key.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// External identifier served on the lookup route. Not unique: ids are
    /// drawn from a 1000-value range with no collision check.
    pub customer_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    pub fn new(
        customer_id: String,
        name: String,
        email: String,
        phone: String,
        address: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            customer_id,
            name,
            email,
            phone,
            address,
            created_at: now,
            updated_at: now,
        }
    }
}

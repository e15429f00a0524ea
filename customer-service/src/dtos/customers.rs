use crate::models::Customer;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    // Fields default to empty when absent so a missing field reports the same
    // violation as an empty one, and all violations come back in one pass.
    #[serde(default)]
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: String,

    #[serde(default)]
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Phone cannot be empty"))]
    pub phone: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Address cannot be empty"))]
    pub address: String,
}

#[derive(Debug, Deserialize)]
pub struct CustomerListParams {
    #[serde(default, deserialize_with = "lenient_u64")]
    pub page: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub limit: Option<u64>,
}

/// Non-numeric query values fall back to the route defaults instead of
/// rejecting the request.
fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.and_then(|raw| raw.parse().ok()))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CustomerResponse {
    pub customer_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            customer_id: customer.customer_id,
            name: customer.name,
            email: customer.email,
            phone: customer.phone,
            address: customer.address,
            created_at: customer.created_at.to_rfc3339(),
            updated_at: customer.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CustomerListResponse {
    pub status: String,
    pub data: Vec<CustomerResponse>,
}

#[derive(Debug, Serialize)]
pub struct CustomerDetailResponse {
    pub status: String,
    pub data: CustomerResponse,
}

#[derive(Debug, Serialize)]
pub struct CreateCustomerResponse {
    pub status: String,
    pub message: String,
}

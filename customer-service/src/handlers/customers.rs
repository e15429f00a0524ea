use crate::dtos::{
    CreateCustomerRequest, CreateCustomerResponse, CustomerDetailResponse, CustomerListParams,
    CustomerListResponse, CustomerResponse,
};
use crate::models::Customer;
use crate::startup::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rand::Rng;
use service_core::error::AppError;
use validator::Validate;

pub async fn list_customers(
    State(state): State<AppState>,
    Query(params): Query<CustomerListParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = params.page.unwrap_or(1).max(1);
    let limit = params.limit.unwrap_or(10).max(1);
    let skip = (page - 1) * limit;

    let customers = state.db.list_customers(skip, limit as i64).await?;

    Ok(Json(CustomerListResponse {
        status: "success".to_string(),
        data: customers.into_iter().map(CustomerResponse::from).collect(),
    }))
}

pub async fn get_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let customer = state
        .db
        .find_by_customer_id(&customer_id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Customer not found")))?;

    Ok(Json(CustomerDetailResponse {
        status: "success".to_string(),
        data: CustomerResponse::from(customer),
    }))
}

#[tracing::instrument(skip(state, request))]
pub async fn create_customer(
    State(state): State<AppState>,
    Json(request): Json<CreateCustomerRequest>,
) -> Result<impl IntoResponse, AppError> {
    request.validate()?;

    // Assigned ids are CUST0..CUST999. No collision check: duplicates are
    // possible and tolerated by the current contract.
    let customer_id = format!("CUST{}", rand::thread_rng().gen_range(0..1000));
    let customer = Customer::new(
        customer_id,
        request.name,
        request.email,
        request.phone,
        request.address,
    );

    state.db.insert_customer(&customer).await?;

    tracing::info!(customer_id = %customer.customer_id, "Customer created");

    Ok((
        StatusCode::CREATED,
        Json(CreateCustomerResponse {
            status: "success".to_string(),
            message: "Customer added successfully".to_string(),
        }),
    ))
}

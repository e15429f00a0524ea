pub mod customers;

pub use customers::{
    CreateCustomerRequest, CreateCustomerResponse, CustomerDetailResponse, CustomerListParams,
    CustomerListResponse, CustomerResponse,
};

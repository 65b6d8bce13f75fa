use serde::{Deserialize, Serialize};
use shared_types::Customer;

/// Response for the customer listing endpoint.
///
/// `page` and `limit` echo the values the window was computed with, as
/// integers, regardless of how the caller spelled them.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListCustomersResponse {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub customers: Vec<Customer>,
}

/// Request body for creating a customer.
///
/// Fields missing from the body deserialize to empty strings so the
/// handler can answer with the field-validation message instead of a
/// body-parser rejection.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateCustomerRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub company: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

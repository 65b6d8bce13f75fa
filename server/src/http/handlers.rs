use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use shared_types::Customer;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    dto::{CreateCustomerRequest, ListCustomersResponse},
    error::{ApiError, ApiResult},
    state::AppState,
};

const DEFAULT_PAGE: u64 = 1;
const DEFAULT_LIMIT: u64 = 10;

/// Query parameters accepted by the listing endpoint.
///
/// `page` and `limit` arrive as raw strings so malformed values can fall
/// back to the defaults instead of failing extraction.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub city: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Case-insensitive substring match. An absent or empty filter matches
/// every record.
fn field_matches(value: &str, filter: Option<&str>) -> bool {
    match filter {
        Some(f) if !f.is_empty() => value.to_lowercase().contains(&f.to_lowercase()),
        _ => true,
    }
}

/// Parses a caller-supplied number, falling back to `default` when the
/// value is missing, non-numeric, or negative.
fn parse_or_default(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

/// GET /customers
/// List customers with optional filters and pagination
#[instrument(skip(state))]
pub async fn list_customers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<ListCustomersResponse>> {
    let customers = state.storage.load().await?;

    let filtered: Vec<Customer> = customers
        .into_iter()
        .filter(|c| {
            field_matches(&c.first_name, params.first_name.as_deref())
                && field_matches(&c.last_name, params.last_name.as_deref())
                && field_matches(&c.city, params.city.as_deref())
        })
        .collect();

    let total = filtered.len() as u64;
    let page = parse_or_default(params.page.as_deref(), DEFAULT_PAGE).max(1);
    let limit = parse_or_default(params.limit.as_deref(), DEFAULT_LIMIT);

    // Page window over the filtered sequence; an out-of-range page yields
    // an empty window rather than an error.
    let start = usize::try_from((page - 1).saturating_mul(limit)).unwrap_or(usize::MAX);
    let window: Vec<Customer> = filtered
        .into_iter()
        .skip(start)
        .take(usize::try_from(limit).unwrap_or(usize::MAX))
        .collect();

    info!(total, page, limit, "listed customers");

    Ok(Json(ListCustomersResponse {
        page,
        limit,
        total,
        customers: window,
    }))
}

/// GET /customers/{id}
/// Get a single customer by id
#[instrument(skip(state))]
pub async fn get_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> ApiResult<Json<Customer>> {
    let customers = state.storage.load().await?;

    let customer = customers
        .into_iter()
        .find(|c| c.id == id)
        .ok_or_else(|| ApiError::NotFound("Customer not found".to_string()))?;

    Ok(Json(customer))
}

/// GET /customers/unique/cities
/// Count customers per city, exhaustively over the whole collection
#[instrument(skip(state))]
pub async fn city_counts(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<BTreeMap<String, u64>>> {
    let customers = state.storage.load().await?;

    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for customer in customers {
        *counts.entry(customer.city).or_insert(0) += 1;
    }

    Ok(Json(counts))
}

/// POST /customers
/// Create a customer after validating its fields against the collection
#[instrument(skip(state, request))]
pub async fn create_customer(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateCustomerRequest>,
) -> ApiResult<(StatusCode, Json<Customer>)> {
    // At most one create may run its load-append-save cycle at a time,
    // otherwise two writers could assign the same id or lose an update.
    let _guard = state.write_lock.lock().await;

    let mut customers = state.storage.load().await?;

    if request.first_name.is_empty()
        || request.last_name.is_empty()
        || request.city.is_empty()
        || request.company.is_empty()
    {
        return Err(ApiError::Validation("All fields are required".to_string()));
    }

    // A new record may only reference a city and company already present
    // somewhere in the collection. On an empty collection this can never
    // succeed; customers are seeded out of band.
    let city_known = customers.iter().any(|c| c.city == request.city);
    let company_known = customers.iter().any(|c| c.company == request.company);
    if !city_known || !company_known {
        return Err(ApiError::Validation(
            "City and Company must already exist".to_string(),
        ));
    }

    let customer = Customer {
        id: customers.len() as u64 + 1,
        first_name: request.first_name,
        last_name: request.last_name,
        city: request.city,
        company: request.company,
    };

    customers.push(customer.clone());
    state.storage.save(&customers).await?;

    info!("Created customer {}", customer.id);

    Ok((StatusCode::CREATED, Json(customer)))
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "customer-api",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

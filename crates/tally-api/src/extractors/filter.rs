//! Ledger filter extractor
//!
//! Parses `category`, `type`, `startDate` and `endDate` query parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use tally_core::TransactionFilter;
use tally_service::TransactionQuery;

use crate::response::ApiError;

/// Transaction listing filter built from the query string
#[derive(Debug, Clone, Default)]
pub struct LedgerFilter(pub TransactionFilter);

#[async_trait]
impl<S> FromRequestParts<S> for LedgerFilter
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<TransactionQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        if let (Some(start), Some(end)) = (query.start_date, query.end_date) {
            if start > end {
                return Err(ApiError::invalid_query("startDate must not be after endDate"));
            }
        }

        Ok(LedgerFilter(query.into()))
    }
}

//! Path parameter extractors

use activity_core::{DomainError, Snowflake};
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::response::ApiError;

/// Group id taken from the `:id` path segment
///
/// Anything that is not a positive numeric id is rejected with
/// `INVALID_GROUP_ID` before a handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupId(pub Snowflake);

impl GroupId {
    /// Parse a raw path segment
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        match Snowflake::parse(raw) {
            Ok(id) if id.into_inner() > 0 => Ok(Self(id)),
            _ => Err(DomainError::InvalidGroupId.into()),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for GroupId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::from(DomainError::InvalidGroupId))?;

        Self::parse(&raw)
    }
}

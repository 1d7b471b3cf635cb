//! Common validation utilities and helpers.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer};
use validator::ValidationErrors;

use crate::errors::ApiError;

/// Convert validator errors to ApiError::ValidationError.
///
/// This helper function extracts error messages from ValidationErrors
/// and converts them into a format suitable for API responses.
///
/// # Example
/// ```ignore
/// body.validate().map_err(validation_errors_to_api_error)?;
/// ```
pub fn validation_errors_to_api_error(e: ValidationErrors) -> ApiError {
    let errors: Vec<String> = e
        .field_errors()
        .iter()
        .flat_map(|(_, errs)| {
            errs.iter()
                .map(|e| e.message.clone().unwrap_or_default().to_string())
        })
        .collect();
    ApiError::ValidationError(errors)
}

/// Parse a path-supplied hex id into an ObjectId.
///
/// A malformed id is a client error, never a store error.
pub fn parse_object_id(id: &str, error_msg: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| ApiError::BadRequest(error_msg.to_string()))
}

/// Deserialize a query-string number leniently.
///
/// Missing, empty, or non-numeric values become `None` instead of failing
/// the whole request; the listing contract treats them as defaults.
pub fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, serde::Deserialize)]
    struct PageParams {
        #[serde(default, deserialize_with = "lenient_u64")]
        limit: Option<u64>,
        #[serde(default, deserialize_with = "lenient_u64")]
        cpage: Option<u64>,
    }

    #[test]
    fn test_parse_object_id_valid() {
        let id = parse_object_id("665f1f77bcf86cd799439011", "bad id").unwrap();
        assert_eq!(id.to_hex(), "665f1f77bcf86cd799439011");
    }

    #[test]
    fn test_parse_object_id_invalid() {
        let err = parse_object_id("not-an-id", "bad id").unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_lenient_numbers_parse() {
        let params: PageParams =
            serde_json::from_value(json!({ "limit": "10", "cpage": "3" })).unwrap();
        assert_eq!(params.limit, Some(10));
        assert_eq!(params.cpage, Some(3));
    }

    #[test]
    fn test_lenient_numbers_tolerate_garbage() {
        let params: PageParams =
            serde_json::from_value(json!({ "limit": "abc", "cpage": "-2" })).unwrap();
        assert_eq!(params.limit, None);
        assert_eq!(params.cpage, None);
    }

    #[test]
    fn test_lenient_numbers_tolerate_absence() {
        let params: PageParams = serde_json::from_value(json!({})).unwrap();
        assert_eq!(params.limit, None);
        assert_eq!(params.cpage, None);
    }
}

use super::ApiError;

pub fn validate_required<'a>(name: &str, value: Option<&'a str>) -> Result<&'a str, ApiError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::validation(format!("{name} is required"))),
    }
}

/// Checks a coordinate parameter and hands back its trimmed text without reformatting.
pub fn validate_coordinate<'a>(
    name: &str,
    value: Option<&'a str>,
    limit: f64,
) -> Result<&'a str, ApiError> {
    let raw = validate_required(name, value)?;

    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v.abs() <= limit => Ok(raw.trim()),
        _ => Err(ApiError::validation(format!(
            "Invalid {name}: {raw}. Must be a number between -{limit} and {limit}"
        ))),
    }
}

pub fn validate_latitude(value: Option<&str>) -> Result<&str, ApiError> {
    validate_coordinate("latitude", value, 90.0)
}

pub fn validate_longitude(value: Option<&str>) -> Result<&str, ApiError> {
    validate_coordinate("longitude", value, 180.0)
}

/// 1-indexed page number; absent means the first page.
pub fn validate_page(value: Option<&str>) -> Result<usize, ApiError> {
    let Some(raw) = value else {
        return Ok(1);
    };

    match raw.trim().parse::<usize>() {
        Ok(page) if page >= 1 => Ok(page),
        _ => Err(ApiError::validation(format!(
            "Invalid page: {raw}. Page must be a positive integer"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required() {
        assert_eq!(validate_required("city", Some("seattle")).unwrap(), "seattle");
        assert_eq!(validate_required("city", Some(" Seattle ")).unwrap(), " Seattle ");
        assert!(validate_required("city", Some("   ")).is_err());
        assert!(validate_required("city", None).is_err());
    }

    #[test]
    fn test_validate_coordinates() {
        assert_eq!(validate_latitude(Some("47.6062095")).unwrap(), "47.6062095");
        assert_eq!(validate_longitude(Some("-122.3320708")).unwrap(), "-122.3320708");
        assert!(validate_latitude(Some("91")).is_err());
        assert!(validate_longitude(Some("-180.5")).is_err());
        assert!(validate_latitude(Some("north")).is_err());
        assert!(validate_latitude(Some("NaN")).is_err());
        assert!(validate_longitude(None).is_err());
    }

    #[test]
    fn test_validate_page() {
        assert_eq!(validate_page(None).unwrap(), 1);
        assert_eq!(validate_page(Some("2")).unwrap(), 2);
        assert!(validate_page(Some("0")).is_err());
        assert!(validate_page(Some("-1")).is_err());
        assert!(validate_page(Some("two")).is_err());
    }
}

use crate::utils::error::{PyramidError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PyramidError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(PyramidError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_route(field_name: &str, route: &str) -> Result<()> {
    let invalid = |reason: &str| PyramidError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: route.to_string(),
        reason: reason.to_string(),
    };

    if !route.starts_with('/') {
        return Err(invalid("Route must start with '/'"));
    }
    if route.contains(['?', '#']) {
        return Err(invalid("Route cannot carry a query or fragment"));
    }
    if route.chars().any(char::is_whitespace) {
        return Err(invalid("Route cannot contain whitespace"));
    }
    // 路由只能是固定路徑，捕獲語法會讓 axum 在註冊時 panic
    if route.contains(['{', '}']) {
        return Err(invalid("Route cannot contain '{' or '}'"));
    }
    if route
        .split('/')
        .any(|segment| segment.starts_with(':') || segment.starts_with('*'))
    {
        return Err(invalid("Route segments cannot start with ':' or '*'"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("host", "127.0.0.1").is_ok());
        assert!(validate_non_empty_string("host", "").is_err());
        assert!(validate_non_empty_string("host", "   ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("port", 8080u32, 1, 65535).is_ok());
        assert!(validate_range("port", 0u32, 1, 65535).is_err());
        assert!(validate_range("port", 70000u32, 1, 65535).is_err());
    }

    #[test]
    fn test_validate_route() {
        assert!(validate_route("route", "/pyramid-word").is_ok());
        assert!(validate_route("route", "/").is_ok());
        assert!(validate_route("route", "pyramid-word").is_err());
        assert!(validate_route("route", "/pyramid-word?x").is_err());
        assert!(validate_route("route", "/pyramid word").is_err());
    }

    #[test]
    fn test_validate_route_rejects_captures() {
        assert!(validate_route("route", "/:word").is_err());
        assert!(validate_route("route", "/words/*rest").is_err());
        assert!(validate_route("route", "/{word}").is_err());
        assert!(validate_route("route", "/words/{*rest}").is_err());
        assert!(validate_route("route", "/words/a}b").is_err());
        // 段落中間的冒號或星號是合法的
        assert!(validate_route("route", "/words/a:b").is_ok());
        assert!(validate_route("route", "/words/a*b").is_ok());
    }
}

use crate::utils::error::{CalcError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 所有提供的數值都不是 NaN 才算有效
///
/// 解析失敗的參數在上游已轉為 NaN。無限大會通過檢查。
pub fn validate_numbers(num1: f64, num2: Option<f64>) -> bool {
    match num2 {
        Some(num2) => !num1.is_nan() && !num2.is_nan(),
        None => !num1.is_nan(),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CalcError::InvalidConfigValueError {
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
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_numbers_binary() {
        assert!(validate_numbers(5.0, Some(3.0)));
        assert!(validate_numbers(-0.0, Some(1e300)));
        assert!(!validate_numbers(f64::NAN, Some(3.0)));
        assert!(!validate_numbers(5.0, Some(f64::NAN)));
        assert!(!validate_numbers(f64::NAN, Some(f64::NAN)));
    }

    #[test]
    fn test_validate_numbers_unary() {
        assert!(validate_numbers(9.0, None));
        assert!(validate_numbers(-9.0, None));
        assert!(!validate_numbers(f64::NAN, None));
    }

    #[test]
    fn test_validate_numbers_accepts_infinity() {
        assert!(validate_numbers(f64::INFINITY, Some(1.0)));
        assert!(validate_numbers(1.0, Some(f64::NEG_INFINITY)));
        assert!(validate_numbers(f64::INFINITY, None));
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("server.port", 3000u32, 1, 65535).is_ok());
        assert!(validate_range("server.port", 0u32, 1, 65535).is_err());
        assert!(validate_range("server.port", 70000u32, 1, 65535).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("server.host", "0.0.0.0").is_ok());
        assert!(validate_non_empty_string("server.host", "   ").is_err());
    }
}

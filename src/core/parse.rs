use regex::Regex;
use std::sync::LazyLock;

// 十進位字面值或帶正負號的 Infinity，只比對字串開頭
static NUMERIC_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)")
        .expect("numeric prefix pattern is valid")
});

/// 將查詢參數轉為浮點數
///
/// 略過開頭空白後取最長的數字前綴，其餘字元忽略（`"12px"` 得到 12）。
/// 參數不存在或沒有可解析的前綴時回傳 NaN，由驗證器拒絕。
pub fn parse_number(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return f64::NAN;
    };

    let trimmed = raw.trim_start();
    let Some(prefix) = NUMERIC_PREFIX.find(trimmed) else {
        return f64::NAN;
    };

    let literal = prefix.as_str();
    match literal.trim_start_matches(['+', '-']) {
        "Infinity" if literal.starts_with('-') => f64::NEG_INFINITY,
        "Infinity" => f64::INFINITY,
        _ => literal.parse().unwrap_or(f64::NAN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("5", 5.0)]
    #[case("-3.25", -3.25)]
    #[case("+7", 7.0)]
    #[case(".5", 0.5)]
    #[case("-.5", -0.5)]
    #[case("1.", 1.0)]
    #[case("2e3", 2000.0)]
    #[case("1e", 1.0)]
    #[case("12px", 12.0)]
    #[case("1.25.5", 1.25)]
    #[case("  42", 42.0)]
    #[case("0x10", 0.0)]
    fn test_parse_number_prefix(#[case] raw: &str, #[case] expected: f64) {
        assert_eq!(parse_number(Some(raw)), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("")]
    #[case("   ")]
    #[case("inf")]
    #[case("nan")]
    #[case("NaN")]
    #[case("-")]
    #[case(".")]
    #[case("e5")]
    fn test_parse_number_invalid(#[case] raw: &str) {
        assert!(parse_number(Some(raw)).is_nan());
    }

    #[test]
    fn test_parse_number_missing() {
        assert!(parse_number(None).is_nan());
    }

    #[test]
    fn test_parse_number_infinity() {
        assert_eq!(parse_number(Some("Infinity")), f64::INFINITY);
        assert_eq!(parse_number(Some("+Infinity")), f64::INFINITY);
        assert_eq!(parse_number(Some("-Infinity")), f64::NEG_INFINITY);
        assert_eq!(parse_number(Some("Infinityx")), f64::INFINITY);
    }

    #[test]
    fn test_parse_number_negative_zero() {
        let value = parse_number(Some("-0"));
        assert_eq!(value, 0.0);
        assert!(value.is_sign_negative());
    }
}

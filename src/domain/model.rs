use serde::{Serialize, Serializer};

/// 服務支援的運算，固定的封閉集合
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Exponentiation,
    SquareRoot,
    Modulo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
}

impl Operation {
    pub const ALL: [Operation; 7] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
        Operation::Exponentiation,
        Operation::SquareRoot,
        Operation::Modulo,
    ];

    /// 回應中的 `operation` 標籤
    pub fn name(self) -> &'static str {
        match self {
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
            Operation::Multiplication => "multiplication",
            Operation::Division => "division",
            Operation::Exponentiation => "exponentiation",
            Operation::SquareRoot => "square_root",
            Operation::Modulo => "modulo",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Operation::Addition => "/add",
            Operation::Subtraction => "/subtract",
            Operation::Multiplication => "/multiply",
            Operation::Division => "/divide",
            Operation::Exponentiation => "/power",
            Operation::SquareRoot => "/sqrt",
            Operation::Modulo => "/modulo",
        }
    }

    /// 歡迎頁面上顯示的範例查詢
    pub fn example(self) -> &'static str {
        match self {
            Operation::Addition => "/add?num1=5&num2=3",
            Operation::Subtraction => "/subtract?num1=5&num2=3",
            Operation::Multiplication => "/multiply?num1=5&num2=3",
            Operation::Division => "/divide?num1=5&num2=3",
            Operation::Exponentiation => "/power?num1=2&num2=3",
            Operation::SquareRoot => "/sqrt?num1=9",
            Operation::Modulo => "/modulo?num1=10&num2=3",
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            Operation::SquareRoot => Arity::Unary,
            _ => Arity::Binary,
        }
    }

    /// 發生未預期錯誤時的描述，例如 "square root calculation"
    pub fn failure_context(self) -> &'static str {
        match self {
            Operation::SquareRoot => "square root calculation",
            Operation::Modulo => "modulo operation",
            other => other.name(),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationResult {
    pub operation: &'static str,
    #[serde(serialize_with = "serialize_number")]
    pub num1: f64,
    #[serde(
        serialize_with = "serialize_optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub num2: Option<f64>,
    #[serde(serialize_with = "serialize_number")]
    pub result: f64,
}

impl OperationResult {
    pub fn binary(operation: Operation, num1: f64, num2: f64, result: f64) -> Self {
        Self {
            operation: operation.name(),
            num1,
            num2: Some(num2),
            result,
        }
    }

    pub fn unary(operation: Operation, num1: f64, result: f64) -> Self {
        Self {
            operation: operation.name(),
            num1,
            num2: None,
            result,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WelcomeDocument {
    pub message: &'static str,
    pub endpoints: EndpointExamples,
    pub note: &'static str,
}

/// 欄位順序即為輸出順序
#[derive(Debug, Clone, Serialize)]
pub struct EndpointExamples {
    pub addition: &'static str,
    pub subtraction: &'static str,
    pub multiplication: &'static str,
    pub division: &'static str,
    pub exponentiation: &'static str,
    pub square_root: &'static str,
    pub modulo: &'static str,
}

impl WelcomeDocument {
    pub fn new() -> Self {
        Self {
            message: "Welcome to the Enhanced Calculator Microservice!",
            endpoints: EndpointExamples {
                addition: Operation::Addition.example(),
                subtraction: Operation::Subtraction.example(),
                multiplication: Operation::Multiplication.example(),
                division: Operation::Division.example(),
                exponentiation: Operation::Exponentiation.example(),
                square_root: Operation::SquareRoot.example(),
                modulo: Operation::Modulo.example(),
            },
            note: "Replace the numbers in the examples with your desired values.",
        }
    }
}

impl Default for WelcomeDocument {
    fn default() -> Self {
        Self::new()
    }
}

// 整數值輸出為 8 而非 8.0，負零輸出為 0，非有限值輸出為 null
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn serialize_number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if !value.is_finite() {
        serializer.serialize_none()
    } else if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

fn serialize_optional_number<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(v) => serialize_number(v, serializer),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integral_results_serialize_without_fraction() {
        let result = OperationResult::binary(Operation::Addition, 5.0, 3.0, 8.0);
        let text = serde_json::to_string(&result).unwrap();
        assert_eq!(
            text,
            r#"{"operation":"addition","num1":5,"num2":3,"result":8}"#
        );
    }

    #[test]
    fn test_fractional_and_special_values() {
        let result = OperationResult::binary(Operation::Division, 1.0, 0.0, f64::INFINITY);
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"operation": "division", "num1": 1, "num2": 0, "result": null})
        );

        let result = OperationResult::binary(Operation::Multiplication, -0.5, 0.0, -0.0);
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"operation": "multiplication", "num1": -0.5, "num2": 0, "result": 0})
        );
    }

    #[test]
    fn test_unary_result_omits_num2() {
        let result = OperationResult::unary(Operation::SquareRoot, 2.25, 1.5);
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"operation": "square_root", "num1": 2.25, "result": 1.5})
        );
    }

    #[test]
    fn test_welcome_document_lists_every_endpoint() {
        let doc = serde_json::to_value(WelcomeDocument::new()).unwrap();
        assert_eq!(doc["message"], "Welcome to the Enhanced Calculator Microservice!");
        assert_eq!(doc["endpoints"].as_object().unwrap().len(), 7);
        assert_eq!(doc["endpoints"]["square_root"], "/sqrt?num1=9");
        assert_eq!(doc["endpoints"]["exponentiation"], "/power?num1=2&num2=3");

        let text = serde_json::to_string(&WelcomeDocument::new()).unwrap();
        let addition = text.find("\"addition\"").unwrap();
        let modulo = text.find("\"modulo\"").unwrap();
        assert!(addition < modulo);
    }

    #[test]
    fn test_paths_are_unique() {
        let mut paths: Vec<_> = Operation::ALL.iter().map(|op| op.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), Operation::ALL.len());
        assert!(Operation::ALL
            .iter()
            .all(|op| op.example().starts_with(op.path())));
    }

    #[test]
    fn test_failure_context() {
        assert_eq!(Operation::Addition.failure_context(), "addition");
        assert_eq!(Operation::SquareRoot.failure_context(), "square root calculation");
        assert_eq!(Operation::Modulo.failure_context(), "modulo operation");
    }
}

use axum::{
    extract::{rejection::QueryRejection, Query},
    Json,
};
use crate::core::parse::parse_number;
use crate::domain::model::{Operation, OperationResult, WelcomeDocument};
use crate::utils::error::{CalcError, ErrorCategory};

/// 查詢字串中的原始參數，尚未轉為數字
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OperandQuery {
    pub num1: Option<String>,
    pub num2: Option<String>,
}

impl OperandQuery {
    /// 重複的鍵只取第一個值，其他鍵忽略
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "num1" => &mut query.num1,
                "num2" => &mut query.num2,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

pub type OperandExtract = Result<Query<Vec<(String, String)>>, QueryRejection>;
pub type CalcResponse = Result<Json<OperationResult>, CalcError>;

pub async fn welcome() -> Json<WelcomeDocument> {
    Json(WelcomeDocument::new())
}

pub async fn not_found() -> CalcError {
    CalcError::NotFound
}

pub async fn add(query: OperandExtract) -> CalcResponse {
    calculate(Operation::Addition, query)
}

pub async fn subtract(query: OperandExtract) -> CalcResponse {
    calculate(Operation::Subtraction, query)
}

pub async fn multiply(query: OperandExtract) -> CalcResponse {
    calculate(Operation::Multiplication, query)
}

pub async fn divide(query: OperandExtract) -> CalcResponse {
    calculate(Operation::Division, query)
}

pub async fn power(query: OperandExtract) -> CalcResponse {
    calculate(Operation::Exponentiation, query)
}

pub async fn sqrt(query: OperandExtract) -> CalcResponse {
    calculate(Operation::SquareRoot, query)
}

pub async fn modulo(query: OperandExtract) -> CalcResponse {
    calculate(Operation::Modulo, query)
}

fn calculate(operation: Operation, query: OperandExtract) -> CalcResponse {
    // 無法解析的查詢字串視同無效輸入
    let Query(pairs) = query.map_err(|rejection| {
        tracing::debug!(%operation, %rejection, "Rejected malformed query string");
        CalcError::invalid_input(operation.arity())
    })?;
    let query = OperandQuery::from_pairs(pairs);

    let num1 = parse_number(query.num1.as_deref());
    let num2 = parse_number(query.num2.as_deref());

    match operation.evaluate(num1, num2) {
        Ok(result) => {
            tracing::debug!(%operation, num1, num2, result = result.result, "Calculated");
            Ok(Json(result))
        }
        Err(error) => {
            if error.category() == ErrorCategory::Internal {
                tracing::error!(%operation, num1, num2, "Unexpected failure: {}", error);
            } else {
                tracing::debug!(%operation, num1, num2, "Rejected request: {}", error);
            }
            Err(error)
        }
    }
}

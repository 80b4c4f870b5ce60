use crate::domain::model::{Arity, Operation};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Invalid input. Please provide valid numbers for num1 and num2.")]
    InvalidOperands,

    #[error("Invalid input. Please provide a valid number for num1.")]
    InvalidOperand,

    #[error("Division by zero is not allowed.")]
    DivisionByZero,

    #[error("Modulo by zero is not allowed.")]
    ModuloByZero,

    #[error("Square root of a negative number is not allowed.")]
    NegativeSquareRoot,

    #[error("An unexpected error occurred during {}.", .0.failure_context())]
    Internal(Operation),

    #[error("Endpoint not found. Please check the API documentation.")]
    NotFound,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 使用者輸入或前置條件不符
    Client,
    /// 路由不存在
    Routing,
    /// 運算過程中的未預期錯誤
    Internal,
    /// 啟動時的設定或系統錯誤
    Startup,
}

impl CalcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::InvalidOperands
            | CalcError::InvalidOperand
            | CalcError::DivisionByZero
            | CalcError::ModuloByZero
            | CalcError::NegativeSquareRoot => ErrorCategory::Client,
            CalcError::NotFound => ErrorCategory::Routing,
            CalcError::Internal(_) => ErrorCategory::Internal,
            CalcError::IoError(_)
            | CalcError::ConfigError { .. }
            | CalcError::InvalidConfigValueError { .. } => ErrorCategory::Startup,
        }
    }

    pub fn invalid_input(arity: Arity) -> Self {
        match arity {
            Arity::Unary => CalcError::InvalidOperand,
            Arity::Binary => CalcError::InvalidOperands,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;

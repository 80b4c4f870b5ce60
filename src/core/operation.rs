use crate::core::{Arity, Operation, OperationResult};
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::validate_numbers;
use std::panic;

impl Operation {
    /// 驗證 → 前置條件 → 計算
    ///
    /// 單元運算會忽略 `num2`。
    pub fn evaluate(self, num1: f64, num2: f64) -> Result<OperationResult> {
        let num2 = match self.arity() {
            Arity::Unary => None,
            Arity::Binary => Some(num2),
        };

        if !validate_numbers(num1, num2) {
            return Err(CalcError::invalid_input(self.arity()));
        }

        self.check_precondition(num1, num2)?;

        let result = panic::catch_unwind(|| self.apply(num1, num2.unwrap_or(f64::NAN)))
            .map_err(|_| CalcError::Internal(self))?;

        Ok(match num2 {
            Some(num2) => OperationResult::binary(self, num1, num2, result),
            None => OperationResult::unary(self, num1, result),
        })
    }

    fn check_precondition(self, num1: f64, num2: Option<f64>) -> Result<()> {
        match (self, num2) {
            (Operation::Division, Some(divisor)) if divisor == 0.0 => Err(CalcError::DivisionByZero),
            (Operation::Modulo, Some(divisor)) if divisor == 0.0 => Err(CalcError::ModuloByZero),
            (Operation::SquareRoot, _) if num1 < 0.0 => Err(CalcError::NegativeSquareRoot),
            _ => Ok(()),
        }
    }

    /// IEEE 754 雙精度運算；`%` 的結果與被除數同號
    pub fn apply(self, num1: f64, num2: f64) -> f64 {
        match self {
            Operation::Addition => num1 + num2,
            Operation::Subtraction => num1 - num2,
            Operation::Multiplication => num1 * num2,
            Operation::Division => num1 / num2,
            Operation::Exponentiation => num1.powf(num2),
            Operation::SquareRoot => num1.sqrt(),
            Operation::Modulo => num1 % num2,
        }
    }
}

pub mod operation;
pub mod parse;
pub mod server;

pub use crate::domain::model::{Arity, Operation, OperationResult};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;

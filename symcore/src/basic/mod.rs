mod symbol;
mod number;
mod basic;
mod add;
mod mul;
mod pow;
mod ops;
mod expression;

pub use symbol::*;
pub use number::*;
pub use basic::*;
pub use add::*;
pub use mul::*;
pub use pow::*;
pub use ops::*;
pub use expression::*;

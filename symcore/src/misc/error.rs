use derive_more::Display;
use crate::Symbol;

#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum Error { 
    #[display("variable mismatch: {_0} vs {_1}")]
    VariableMismatch(Symbol, Symbol),

    #[display("no value given for variable {_0}")]
    MissingValue(Symbol),

    #[display("exponent vector of length {found} given for {expected} variables")]
    ExponentLength { expected: usize, found: usize },

    #[display("not supported: {_0}")]
    Unsupported(String),

    #[display("negative exponent: {_0}")]
    NegativeExponent(i64),

    #[display("division by zero")]
    DivisionByZero,
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

macro_rules! ensure {
    ($cond:expr, $err:expr) => {{
        if !$cond { 
            return Err($err.into());
        }
    }}
}

pub(crate) use ensure;

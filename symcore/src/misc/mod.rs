mod error;

pub use error::{Error, Result};
pub(crate) use error::ensure;

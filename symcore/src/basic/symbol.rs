use std::sync::Arc;
use derive_more::{Debug, Display};

// Named variable. Identity and order are by name; clones share the name.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Debug)]
#[display("{_0}")]
#[debug("{_0}")]
pub struct Symbol(Arc<str>);

impl Symbol { 
    pub fn new(name: &str) -> Self { 
        Self(Arc::from(name))
    }

    pub fn name(&self) -> &str { 
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_by_name() { 
        let x0 = Symbol::new("x");
        let x1 = Symbol::from("x");
        let y = Symbol::new("y");

        assert_eq!(x0, x1);
        assert_ne!(x0, y);
        assert!(x0 < y);
        assert_eq!(x0.name(), "x");
        assert_eq!(format!("{x0}"), "x");
        assert_eq!(format!("{x0:?}"), "x");
    }
}

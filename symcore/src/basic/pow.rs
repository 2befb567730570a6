use std::fmt::Display;
use std::sync::Arc;

use crate::{Basic, RcBasic, VecBasic};
use crate::basic::mul::paren_factor;

#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct PowExpr { 
    base: RcBasic,
    exp: RcBasic,
}

impl PowExpr { 
    // No folding; see `pow` for the simplifying constructor.
    pub fn new(base: RcBasic, exp: RcBasic) -> RcBasic { 
        Arc::new(Basic::Pow(Self { base, exp }))
    }

    pub fn base(&self) -> &RcBasic { 
        &self.base
    }

    pub fn exp(&self) -> &RcBasic { 
        &self.exp
    }

    pub fn args(&self) -> VecBasic { 
        vec![self.base.clone(), self.exp.clone()]
    }
}

impl Display for PowExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}^{}", paren_factor(&self.base), paren_factor(&self.exp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{add, integer, rational, symbol};

    #[test]
    fn display() { 
        let x = symbol("x");
        assert_eq!(PowExpr::new(x.clone(), integer(3)).to_string(), "x^3");
        assert_eq!(PowExpr::new(x.clone(), rational(1, 2)).to_string(), "x^(1/2)");

        let s = add(&x, &integer(1));
        assert_eq!(PowExpr::new(s, integer(-1)).to_string(), "(x + 1)^(-1)");
    }
}

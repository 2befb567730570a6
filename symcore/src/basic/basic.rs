use std::fmt::Display;
use std::sync::Arc;
use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::{hash_of, AddExpr, MIntPoly, MulExpr, Number, PowExpr, Symbol, UIntPoly, VecBasic};

// Shared handle to an immutable expression node. Equality, order and hash
// are structural (they follow the content, not the allocation).
pub type RcBasic = Arc<Basic>;

// Variants are ranked in declaration order, so e.g. every number sorts
// before every symbol.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum Basic { 
    Number(Number),
    Symbol(Symbol),
    Add(AddExpr),
    Mul(MulExpr),
    Pow(PowExpr),
    UIntPoly(UIntPoly),
    MIntPoly(MIntPoly),
}

impl Basic { 
    pub fn hash_value(&self) -> u64 { 
        hash_of(self)
    }

    pub fn as_number(&self) -> Option<&Number> { 
        match self { 
            Basic::Number(n) => Some(n),
            _ => None
        }
    }

    pub fn as_symbol(&self) -> Option<&Symbol> { 
        match self { 
            Basic::Symbol(x) => Some(x),
            _ => None
        }
    }

    pub fn is_number(&self) -> bool { 
        self.as_number().is_some()
    }

    pub fn is_zero(&self) -> bool { 
        self.as_number().is_some_and(|n| n.is_zero())
    }

    pub fn is_one(&self) -> bool { 
        self.as_number().is_some_and(|n| n.is_one())
    }

    pub fn args(&self) -> VecBasic { 
        match self { 
            Basic::Number(_) | 
            Basic::Symbol(_) => vec![],
            Basic::Add(e)      => e.args(),
            Basic::Mul(e)      => e.args(),
            Basic::Pow(e)      => e.args(),
            Basic::UIntPoly(p) => p.args(),
            Basic::MIntPoly(p) => p.args(),
        }
    }
}

impl Display for Basic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self { 
            Basic::Number(n)   => n.fmt(f),
            Basic::Symbol(x)   => x.fmt(f),
            Basic::Add(e)      => e.fmt(f),
            Basic::Mul(e)      => e.fmt(f),
            Basic::Pow(e)      => e.fmt(f),
            Basic::UIntPoly(p) => p.fmt(f),
            Basic::MIntPoly(p) => p.fmt(f),
        }
    }
}

// Lowering of coefficients and atoms into expression nodes.
pub trait ToBasic { 
    fn to_basic(&self) -> RcBasic;
}

impl ToBasic for Number {
    fn to_basic(&self) -> RcBasic {
        Arc::new(Basic::Number(self.clone()))
    }
}

impl ToBasic for BigInt {
    fn to_basic(&self) -> RcBasic {
        Arc::new(Basic::Number(Number::Integer(self.clone())))
    }
}

impl ToBasic for Symbol {
    fn to_basic(&self) -> RcBasic {
        Arc::new(Basic::Symbol(self.clone()))
    }
}

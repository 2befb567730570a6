use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use auto_impl_ops::auto_ops;
use derive_more::{Debug, Display};
use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::{add, integer, mul, neg, pow, sub, Elem, Number, RcBasic, Ring, RingOps, Symbol, ToBasic};

/// Value-type handle on an expression node, usable as a ring of
/// coefficients.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Debug)]
#[display("{_0}")]
#[debug("{_0}")]
pub struct Expression(RcBasic);

impl Expression { 
    pub fn new(b: RcBasic) -> Self { 
        Self(b)
    }

    pub fn get_basic(&self) -> &RcBasic { 
        &self.0
    }

    pub fn into_basic(self) -> RcBasic { 
        self.0
    }

    pub fn as_number(&self) -> Option<&Number> { 
        self.0.as_number()
    }

    pub fn pow(&self, e: &Expression) -> Expression { 
        Self(pow(&self.0, &e.0))
    }
}

impl From<RcBasic> for Expression {
    fn from(b: RcBasic) -> Self {
        Self(b)
    }
}

impl From<i32> for Expression {
    fn from(i: i32) -> Self {
        Self(integer(i))
    }
}

impl From<BigInt> for Expression {
    fn from(i: BigInt) -> Self {
        Self(i.to_basic())
    }
}

impl From<Number> for Expression {
    fn from(n: Number) -> Self {
        Self(n.to_basic())
    }
}

impl From<Symbol> for Expression {
    fn from(x: Symbol) -> Self {
        Self(x.to_basic())
    }
}

impl ToBasic for Expression {
    fn to_basic(&self) -> RcBasic {
        self.0.clone()
    }
}

impl Default for Expression {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Expression {
    fn zero() -> Self {
        Self(integer(0))
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Expression {
    fn one() -> Self {
        Self(integer(1))
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }
}

impl Neg for Expression {
    type Output = Expression;
    fn neg(self) -> Self::Output {
        Self(neg(&self.0))
    }
}

impl Neg for &Expression {
    type Output = Expression;
    fn neg(self) -> Self::Output {
        Expression(neg(&self.0))
    }
}

#[auto_ops]
impl AddAssign<&Expression> for Expression {
    fn add_assign(&mut self, rhs: &Expression) {
        self.0 = add(&self.0, &rhs.0)
    }
}

#[auto_ops]
impl SubAssign<&Expression> for Expression {
    fn sub_assign(&mut self, rhs: &Expression) {
        self.0 = sub(&self.0, &rhs.0)
    }
}

#[auto_ops]
impl MulAssign<&Expression> for Expression {
    fn mul_assign(&mut self, rhs: &Expression) {
        self.0 = mul(&self.0, &rhs.0)
    }
}

impl RingOps for Expression {}
impl<'a> RingOps<Expression> for &'a Expression {}

impl Elem for Expression {
    fn math_symbol() -> String { 
        String::from("Expr")
    }
}

impl Ring for Expression {
    fn inv(&self) -> Option<Self> {
        match self.as_number() { 
            Some(n) => n.inv().map(Self::from),
            None => Some(self.pow(&Self::from(-1)))
        }
    }
}

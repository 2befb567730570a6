use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use auto_impl_ops::auto_ops;
use derive_more::Display;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Pow, Signed, ToPrimitive, Zero};

// Exact numbers. A rational with denominator 1 is always stored as an
// integer, so structural equality coincides with numeric equality.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Display)]
pub enum Number { 
    Integer(BigInt),
    Rational(BigRational)
}

impl Number { 
    pub fn from_rational(r: BigRational) -> Self { 
        if r.is_integer() { 
            Number::Integer(r.to_integer())
        } else { 
            Number::Rational(r)
        }
    }

    pub fn to_rational(&self) -> BigRational { 
        match self { 
            Number::Integer(i) => BigRational::from_integer(i.clone()),
            Number::Rational(r) => r.clone()
        }
    }

    pub fn as_integer(&self) -> Option<&BigInt> { 
        match self { 
            Number::Integer(i) => Some(i),
            Number::Rational(_) => None
        }
    }

    pub fn is_integer(&self) -> bool { 
        matches!(self, Number::Integer(_))
    }

    pub fn is_minus_one(&self) -> bool { 
        matches!(self, Number::Integer(i) if (-i).is_one())
    }

    pub fn is_negative(&self) -> bool { 
        match self { 
            Number::Integer(i) => i.is_negative(),
            Number::Rational(r) => r.is_negative()
        }
    }

    pub fn inv(&self) -> Option<Number> { 
        if self.is_zero() { 
            None
        } else { 
            Some(Self::from_rational(self.to_rational().recip()))
        }
    }

    // None for negative powers of zero.
    pub fn powi(&self, n: &BigInt) -> Option<Number> { 
        let e = n.abs().to_u32()?;
        let base = if n.is_negative() { self.inv()? } else { self.clone() };
        let r = base.to_rational();
        let (n, d) = (Pow::pow(r.numer(), e), Pow::pow(r.denom(), e));
        Some(Self::from_rational(BigRational::new(n, d)))
    }
}

impl From<i32> for Number {
    fn from(i: i32) -> Self {
        Number::Integer(BigInt::from(i))
    }
}

impl From<BigInt> for Number {
    fn from(i: BigInt) -> Self {
        Number::Integer(i)
    }
}

impl From<BigRational> for Number {
    fn from(r: BigRational) -> Self {
        Self::from_rational(r)
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Number {
    fn zero() -> Self {
        Number::Integer(BigInt::zero())
    }

    fn is_zero(&self) -> bool {
        matches!(self, Number::Integer(i) if i.is_zero())
    }
}

impl One for Number {
    fn one() -> Self {
        Number::Integer(BigInt::one())
    }

    fn is_one(&self) -> bool {
        matches!(self, Number::Integer(i) if i.is_one())
    }
}

impl Neg for Number {
    type Output = Number;
    fn neg(self) -> Self::Output {
        match self { 
            Number::Integer(i) => Number::Integer(-i),
            Number::Rational(r) => Number::Rational(-r)
        }
    }
}

impl Neg for &Number {
    type Output = Number;
    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

macro_rules! impl_assop {
    ($trait:ident, $method:ident) => {
        #[auto_ops]
        impl $trait<&Number> for Number {
            fn $method(&mut self, rhs: &Number) {
                if let (Number::Integer(a), Number::Integer(b)) = (&mut *self, rhs) { 
                    a.$method(b);
                    return
                }
                let mut r = self.to_rational();
                r.$method(rhs.to_rational());
                *self = Number::from_rational(r);
            }
        }
    };
}

impl_assop!(AddAssign, add_assign);
impl_assop!(SubAssign, sub_assign);
impl_assop!(MulAssign, mul_assign);

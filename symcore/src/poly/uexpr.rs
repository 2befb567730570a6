use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use auto_impl_ops::auto_ops;
use delegate::delegate;
use derive_more::{Debug, Display};
use num_traits::One;

use crate::{add, add_upoly, hash_of, integer, mul, mul_upoly, neg_upoly, pow, sub_upoly, Basic, Error, Exponent, Expression, MapUintExpr, RcBasic, Result, Ring, Symbol, ToBasic, UIntPoly, UPoly};

/// Univariate polynomial whose coefficients are symbolic expressions.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Debug)]
#[display("{_0}")]
#[debug("{_0}")]
pub struct UExprPoly(UPoly<Expression>);

impl UExprPoly { 
    pub fn new(p: UPoly<Expression>) -> Self { 
        Self(p)
    }

    pub fn from_terms(var: Symbol, dict: MapUintExpr) -> Self { 
        Self(UPoly::from_terms(var, dict))
    }

    pub fn from_vec(var: Symbol, v: Vec<Expression>) -> Self { 
        Self(UPoly::from_vec(var, v))
    }

    pub fn constant(var: Symbol, c: Expression) -> Self { 
        Self(UPoly::constant(var, c))
    }

    /// Wraps `e` as a polynomial in `var`. Only numbers and integer
    /// polynomials in `var` are accepted.
    pub fn from_expr(var: &Symbol, e: &Expression) -> Result<Self> { 
        match e.get_basic().as_ref() { 
            Basic::Number(_) => Ok(Self::constant(var.clone(), e.clone())),
            Basic::UIntPoly(p) if p.var() == var => Ok(Self::from(p.clone())),
            _ => Err(Error::Unsupported(format!("{e} as a polynomial in {var}")))
        }
    }

    pub fn get_univariate_poly(&self) -> &UPoly<Expression> { 
        &self.0
    }

    delegate! { 
        to self.0 { 
            pub fn var(&self) -> &Symbol;
            pub fn degree(&self) -> Exponent;
            pub fn dict(&self) -> &MapUintExpr;
            pub fn nterms(&self) -> usize;
            pub fn coeff(&self, n: Exponent) -> Expression;
            pub fn eval(&self, x: &Expression) -> Expression;
            pub fn is_zero(&self) -> bool;
            pub fn is_one(&self) -> bool;
            pub fn is_minus_one(&self) -> bool;
            pub fn is_integer(&self) -> bool;
            pub fn is_symbol(&self) -> bool;
            pub fn is_mul(&self) -> bool;
            pub fn is_pow(&self) -> bool;
            pub fn is_canonical(&self) -> bool;
        }
    }

    /// Lowers to `Σ cₙ·xⁿ` as a plain expression.
    pub fn get_basic(&self) -> RcBasic { 
        let x = self.var().to_basic();
        self.0.iter().fold(integer(0), |res, (&n, c)| { 
            let t = if n == 0 { 
                c.to_basic()
            } else { 
                mul(c.get_basic(), &pow(&x, &integer(n)))
            };
            add(&res, &t)
        })
    }

    pub fn compare(&self, other: &Self) -> Ordering { 
        self.cmp(other)
    }

    pub fn hash_value(&self) -> u64 { 
        hash_of(self)
    }

    pub fn checked_add(&self, rhs: &Self) -> Result<Self> { 
        add_upoly(&self.0, &rhs.0).map(Self)
    }

    pub fn checked_sub(&self, rhs: &Self) -> Result<Self> { 
        sub_upoly(&self.0, &rhs.0).map(Self)
    }

    pub fn checked_mul(&self, rhs: &Self) -> Result<Self> { 
        mul_upoly(&self.0, &rhs.0).map(Self)
    }

    pub fn checked_div(&self, c: &Expression) -> Result<Self> { 
        let Some(inv) = c.inv() else { 
            return Err(Error::DivisionByZero)
        };
        let dict = self.dict().iter().map(|(&n, a)| (n, a * &inv)).collect();
        Ok(Self::from_terms(self.var().clone(), dict))
    }
}

/// `base^exp` by repeated multiplication.
pub fn pow_poly(base: &UExprPoly, exp: i64) -> Result<UExprPoly> { 
    match exp { 
        e if e < 0 => Err(Error::NegativeExponent(e)),
        0 => Ok(UExprPoly::constant(base.var().clone(), Expression::one())),
        1 => Ok(base.clone()),
        _ => { 
            let mut res = base.0.clone();
            for _ in 1..exp { 
                res = mul_upoly(&res, &base.0)?;
            }
            Ok(UExprPoly(res))
        }
    }
}

impl From<UIntPoly> for UExprPoly {
    fn from(p: UIntPoly) -> Self {
        let var = p.var().clone();
        let degree = p.degree();
        let dict = p.into_dict().into_iter().map(|(n, c)| (n, Expression::from(c))).collect();
        Self(UPoly::new(var, degree, dict))
    }
}

impl PartialEq<i32> for UExprPoly {
    fn eq(&self, other: &i32) -> bool {
        self.is_integer() && self.coeff(0) == Expression::from(*other)
    }
}

fn or_panic<T>(r: Result<T>) -> T { 
    r.unwrap_or_else(|e| panic!("{e}"))
}

#[auto_ops]
impl AddAssign<&UExprPoly> for UExprPoly {
    fn add_assign(&mut self, rhs: &UExprPoly) {
        *self = or_panic(self.checked_add(rhs))
    }
}

#[auto_ops]
impl SubAssign<&UExprPoly> for UExprPoly {
    fn sub_assign(&mut self, rhs: &UExprPoly) {
        *self = or_panic(self.checked_sub(rhs))
    }
}

#[auto_ops]
impl MulAssign<&UExprPoly> for UExprPoly {
    fn mul_assign(&mut self, rhs: &UExprPoly) {
        *self = or_panic(self.checked_mul(rhs))
    }
}

// Panics on a zero divisor.
#[auto_ops]
impl DivAssign<&Expression> for UExprPoly {
    fn div_assign(&mut self, rhs: &Expression) {
        *self = or_panic(self.checked_div(rhs))
    }
}

impl Neg for UExprPoly {
    type Output = UExprPoly;
    fn neg(self) -> Self::Output {
        UExprPoly(neg_upoly(&self.0))
    }
}

impl Neg for &UExprPoly {
    type Output = UExprPoly;
    fn neg(self) -> Self::Output {
        UExprPoly(neg_upoly(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;
    use crate::{symbol, udict, MapUintExpr};

    fn e(b: RcBasic) -> Expression { 
        Expression::from(b)
    }

    fn x() -> Symbol { 
        Symbol::new("x")
    }

    fn poly(v: &[Expression]) -> UExprPoly { 
        UExprPoly::from_vec(x(), v.to_vec())
    }

    #[test]
    fn ops() { 
        let a = e(symbol("a"));
        let p = poly(&[Expression::from(1), a.clone()]);
        let q = poly(&[a.clone(), Expression::from(2)]);

        let s = &p + &q;
        assert_eq!(s, poly(&[&a + Expression::from(1), &a + Expression::from(2)]));

        let d = &p - &p;
        assert!(d.is_zero());
        assert_eq!(d, 0);

        let m = &p * &q;
        assert_eq!(m.degree(), 2);
        assert_eq!(m.coeff(2), &a * Expression::from(2));
        assert_eq!(m.coeff(0), a.clone());

        let n = -&p;
        assert_eq!(n.coeff(1), -&a);

        let mut r = p.clone();
        r += &q;
        r -= &q;
        assert_eq!(r, p);
    }

    #[test]
    fn div_scalar() { 
        let p = poly(&[Expression::from(2), Expression::from(4)]);
        let q = &p / Expression::from(2);
        assert_eq!(q, poly(&[Expression::from(1), Expression::from(2)]));
        assert_eq!(p.checked_div(&Expression::zero()), Err(Error::DivisionByZero));
    }

    #[test]
    #[should_panic]
    fn div_by_zero() { 
        let p = poly(&[Expression::from(2)]);
        let _ = p / Expression::zero();
    }

    #[test]
    fn eq_const() { 
        assert_eq!(poly(&[]), 0);
        assert_eq!(poly(&[Expression::from(3)]), 3);
        assert!(poly(&[Expression::from(3), Expression::from(1)]) != 3);
    }

    #[test]
    fn pow_repeated() { 
        let p = poly(&[Expression::from(1), Expression::from(1)]);
        assert_eq!(pow_poly(&p, 0).unwrap(), 1);
        assert_eq!(pow_poly(&p, 1).unwrap(), p);

        let p3 = pow_poly(&p, 3).unwrap();
        let c = [1, 3, 3, 1].map(Expression::from);
        assert_eq!(p3, poly(&c));

        assert_eq!(pow_poly(&p, -1), Err(Error::NegativeExponent(-1)));
    }

    #[test]
    fn get_basic() { 
        let (a, xb) = (symbol("a"), symbol("x"));
        let p = poly(&[Expression::from(5), e(a.clone()), Expression::from(1)]);
        let expected = add(
            &add(&integer(5), &mul(&a, &xb)), 
            &pow(&xb, &integer(2))
        );
        assert_eq!(p.get_basic(), expected);
        assert_eq!(poly(&[]).get_basic(), integer(0));
    }

    #[test]
    fn from_expr() { 
        let p = UExprPoly::from_expr(&x(), &Expression::from(4)).unwrap();
        assert_eq!(p, 4);

        let u = UIntPoly::from_terms(x(), udict!{ 0 => 1, 1 => 2 });
        let p = UExprPoly::from_expr(&x(), &e(u.to_basic())).unwrap();
        assert_eq!(p, UExprPoly::from(u));

        let r = UExprPoly::from_expr(&x(), &e(symbol("y")));
        assert!(matches!(r, Err(Error::Unsupported(_))));
    }

    #[test]
    fn eval() { 
        let a = e(symbol("a"));
        let p = poly(&[a.clone(), Expression::from(2)]);
        let v = p.eval(&Expression::from(3));
        assert_eq!(v, &a + Expression::from(6));
    }

    #[test]
    fn identity() { 
        let a = e(symbol("a"));
        let p = UExprPoly::from_terms(x(), MapUintExpr::from([(1, a.clone()), (0, Expression::one())]));
        let q = poly(&[Expression::one(), a]);
        assert_eq!(p.compare(&q), Ordering::Equal);
        assert_eq!(p.hash_value(), q.hash_value());
        assert_eq!(p.to_string(), "ax + 1");
    }
}

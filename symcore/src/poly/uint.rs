use std::sync::Arc;
use log::debug;
use num_bigint::BigInt;
use num_traits::Zero;

use crate::{integer, mul, pow, Basic, Exponent, MapUintMpz, RcBasic, Symbol, ToBasic, UPoly, VecBasic};

/// Univariate polynomial with big-integer coefficients.
pub type UIntPoly = UPoly<BigInt>;

impl UIntPoly { 
    /// Canonicalizes `dict` and collapses a polynomial with at most one
    /// term into the plain expression it denotes.
    pub fn from_dict(var: &Symbol, dict: MapUintMpz) -> RcBasic { 
        let p = Self::from_terms(var.clone(), dict);
        if p.nterms() > 1 { 
            return p.to_basic()
        }
        debug!("degenerate polynomial in {var}: {p}");
        match p.dict().first_key_value() { 
            None => integer(0),
            Some((&n, c)) => term(var, c, n)
        }
    }

    pub fn args(&self) -> VecBasic { 
        self.iter().map(|(&n, c)| term(self.var(), c, n)).collect()
    }

    /// Evaluates at `2^k` using shifts only.
    pub fn eval_bit(&self, k: u32) -> BigInt { 
        let mut res = BigInt::zero();
        let mut prev = self.top_exponent();
        for (&n, c) in self.iter().rev() { 
            res <<= (k as usize) * ((prev - n) as usize);
            res += c;
            prev = n;
        }
        res << ((k as usize) * (prev as usize))
    }

    /// The largest coefficient, or zero for the zero polynomial.
    pub fn max_coef(&self) -> BigInt { 
        self.dict().values().max().cloned().unwrap_or_else(BigInt::zero)
    }
}

// c·xⁿ as a plain expression.
fn term(x: &Symbol, c: &BigInt, n: Exponent) -> RcBasic { 
    let c = c.to_basic();
    if n == 0 { 
        return c
    }
    let xn = pow(&x.to_basic(), &integer(n));
    if c.is_one() { 
        xn
    } else { 
        mul(&c, &xn)
    }
}

impl ToBasic for UIntPoly {
    fn to_basic(&self) -> RcBasic {
        Arc::new(Basic::UIntPoly(self.clone()))
    }
}

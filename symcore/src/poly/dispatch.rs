use derive_more::{Display, From};
use log::trace;

use crate::{add_mpoly, add_mpoly_upoly, add_upoly, add_upoly_upoly, mul_mpoly, mul_mpoly_upoly, mul_upoly, mul_upoly_upoly, neg_mpoly, neg_upoly, sub_mpoly, sub_mpoly_upoly, sub_upoly, sub_upoly_mpoly, sub_upoly_upoly};
use crate::{Error, MIntPoly, RcBasic, Result, UExprPoly, UIntPoly};

/// Any of the polynomial kinds, for arithmetic between mixed operands.
#[derive(Clone, PartialEq, Eq, Debug, Display, From)]
pub enum AnyPoly { 
    UInt(UIntPoly),
    UExpr(UExprPoly),
    MInt(MIntPoly),
}

impl AnyPoly { 
    fn kind(&self) -> &'static str { 
        match self { 
            AnyPoly::UInt(_)  => "UIntPoly",
            AnyPoly::UExpr(_) => "UExprPoly",
            AnyPoly::MInt(_)  => "MIntPoly",
        }
    }

    /// Lowers into the canonical expression node, collapsing trivial
    /// shapes.
    pub fn into_basic(self) -> RcBasic { 
        match self { 
            AnyPoly::UInt(p) => { 
                let var = p.var().clone();
                UIntPoly::from_dict(&var, p.into_dict())
            },
            AnyPoly::UExpr(p) => p.get_basic(),
            AnyPoly::MInt(p) => p.into_basic(),
        }
    }
}

fn unsupported(op: &str, a: &AnyPoly, b: &AnyPoly) -> Error { 
    Error::Unsupported(format!("{op} of {} and {}", a.kind(), b.kind()))
}

// Same variable (or a constant operand) stays univariate, otherwise the
// result is promoted.
fn uint_or_promote<F>(r: Result<UIntPoly>, promote: F) -> Result<AnyPoly>
where F: FnOnce() -> MIntPoly {
    match r { 
        Ok(p) => Ok(AnyPoly::UInt(p)),
        Err(Error::VariableMismatch(x, y)) => { 
            trace!("promote to multivariate: {x}, {y}");
            Ok(AnyPoly::MInt(promote()))
        },
        Err(e) => Err(e)
    }
}

pub fn poly_add(a: &AnyPoly, b: &AnyPoly) -> Result<AnyPoly> { 
    use AnyPoly::*;
    match (a, b) { 
        (UInt(p),  UInt(q))  => uint_or_promote(add_upoly(p, q), || add_upoly_upoly(p, q)),
        (UInt(p),  UExpr(q)) => UExprPoly::from(p.clone()).checked_add(q).map(UExpr),
        (UExpr(p), UInt(q))  => p.checked_add(&UExprPoly::from(q.clone())).map(UExpr),
        (UExpr(p), UExpr(q)) => p.checked_add(q).map(UExpr),
        (UInt(p),  MInt(q))  => Ok(MInt(add_mpoly_upoly(q, p))),
        (MInt(p),  UInt(q))  => Ok(MInt(add_mpoly_upoly(p, q))),
        (MInt(p),  MInt(q))  => Ok(MInt(add_mpoly(p, q))),
        (UExpr(_), MInt(_)) | 
        (MInt(_),  UExpr(_)) => Err(unsupported("sum", a, b))
    }
}

pub fn poly_sub(a: &AnyPoly, b: &AnyPoly) -> Result<AnyPoly> { 
    use AnyPoly::*;
    match (a, b) { 
        (UInt(p),  UInt(q))  => uint_or_promote(sub_upoly(p, q), || sub_upoly_upoly(p, q)),
        (UInt(p),  UExpr(q)) => UExprPoly::from(p.clone()).checked_sub(q).map(UExpr),
        (UExpr(p), UInt(q))  => p.checked_sub(&UExprPoly::from(q.clone())).map(UExpr),
        (UExpr(p), UExpr(q)) => p.checked_sub(q).map(UExpr),
        (UInt(p),  MInt(q))  => Ok(MInt(sub_upoly_mpoly(p, q))),
        (MInt(p),  UInt(q))  => Ok(MInt(sub_mpoly_upoly(p, q))),
        (MInt(p),  MInt(q))  => Ok(MInt(sub_mpoly(p, q))),
        (UExpr(_), MInt(_)) | 
        (MInt(_),  UExpr(_)) => Err(unsupported("difference", a, b))
    }
}

pub fn poly_mul(a: &AnyPoly, b: &AnyPoly) -> Result<AnyPoly> { 
    use AnyPoly::*;
    match (a, b) { 
        (UInt(p),  UInt(q))  => uint_or_promote(mul_upoly(p, q), || mul_upoly_upoly(p, q)),
        (UInt(p),  UExpr(q)) => UExprPoly::from(p.clone()).checked_mul(q).map(UExpr),
        (UExpr(p), UInt(q))  => p.checked_mul(&UExprPoly::from(q.clone())).map(UExpr),
        (UExpr(p), UExpr(q)) => p.checked_mul(q).map(UExpr),
        (UInt(p),  MInt(q))  => Ok(MInt(mul_mpoly_upoly(q, p))),
        (MInt(p),  UInt(q))  => Ok(MInt(mul_mpoly_upoly(p, q))),
        (MInt(p),  MInt(q))  => Ok(MInt(mul_mpoly(p, q))),
        (UExpr(_), MInt(_)) | 
        (MInt(_),  UExpr(_)) => Err(unsupported("product", a, b))
    }
}

pub fn poly_neg(a: &AnyPoly) -> AnyPoly { 
    match a { 
        AnyPoly::UInt(p)  => AnyPoly::UInt(neg_upoly(p)),
        AnyPoly::UExpr(p) => AnyPoly::UExpr(-p),
        AnyPoly::MInt(p)  => AnyPoly::MInt(neg_mpoly(p)),
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use super::*;
    use crate::{integer, mdict, symbol, symbols, udict, Expression, SetSym, Symbol, ToBasic};

    fn uint(x: &Symbol, d: crate::MapUintMpz) -> AnyPoly { 
        AnyPoly::UInt(UIntPoly::from_terms(x.clone(), d))
    }

    #[test]
    fn uint_same_var() { 
        let (x,) = symbols!(x);
        let p = uint(&x, udict!{ 0 => 1, 1 => 2, 2 => 1 });
        let q = uint(&x, udict!{ 0 => 1, 1 => 1 });

        let s = poly_add(&p, &q).unwrap();
        assert_eq!(s, uint(&x, udict!{ 0 => 2, 1 => 3, 2 => 1 }));

        let m = poly_mul(&p, &q).unwrap();
        assert_eq!(m, uint(&x, udict!{ 0 => 1, 1 => 3, 2 => 3, 3 => 1 }));

        let d = poly_sub(&p, &p).unwrap();
        assert_eq!(d.into_basic(), integer(0));
    }

    #[test]
    fn uint_promote() { 
        let (x, y) = symbols!(x, y);
        let p = uint(&x, udict!{ 1 => 1 });
        let q = uint(&y, udict!{ 1 => 1 });

        let s = poly_add(&p, &q).unwrap();
        let AnyPoly::MInt(s) = s else { panic!() };
        assert_eq!(s.vars(), &SetSym::from([x.clone(), y.clone()]));

        let m = poly_mul(&p, &q).unwrap().into_basic();
        assert_eq!(m, crate::mul(&symbol("x"), &symbol("y")));
    }

    #[test]
    fn uint_uexpr() { 
        let (x,) = symbols!(x);
        let p = uint(&x, udict!{ 0 => 1, 1 => 1 });
        let a = Expression::from(symbol("a"));
        let q = AnyPoly::UExpr(UExprPoly::from_vec(x.clone(), vec![a.clone()]));

        let s = poly_add(&p, &q).unwrap();
        let AnyPoly::UExpr(s) = &s else { panic!() };
        assert_eq!(s.coeff(0), &a + Expression::from(1));
        assert_eq!(s.coeff(1), Expression::from(1));

        let r = poly_mul(&q, &p).unwrap();
        let AnyPoly::UExpr(r) = &r else { panic!() };
        assert_eq!(r.coeff(1), a);
    }

    #[test]
    fn mint_mixed() { 
        let (x, y) = symbols!(x, y);
        let vars = SetSym::from([x.clone(), y.clone()]);
        let p = AnyPoly::MInt(MIntPoly::from_terms(vars.clone(), mdict!{ [1, 2] => 1, [4, 5] => 3 }).unwrap());
        let q = uint(&x, udict!{ 2 => 1 });

        let s = poly_add(&p, &q).unwrap();
        let t = poly_add(&q, &p).unwrap();
        assert_eq!(s, t);

        let expected = MIntPoly::from_terms(vars, mdict!{ [1, 2] => 1, [4, 5] => 3, [2, 0] => 1 }).unwrap();
        assert_eq!(s, AnyPoly::MInt(expected));

        let d = poly_sub(&q, &p).unwrap();
        assert_eq!(poly_neg(&d), poly_sub(&p, &q).unwrap());
    }

    #[test]
    fn uexpr_mint_unsupported() { 
        let (x, y) = symbols!(x, y);
        let p = AnyPoly::UExpr(UExprPoly::from_vec(x.clone(), vec![Expression::from(1), Expression::from(2)]));
        let q = AnyPoly::MInt(MIntPoly::from_terms(SetSym::from([x, y]), mdict!{ [1, 1] => 1 }).unwrap());

        assert!(matches!(poly_add(&p, &q), Err(Error::Unsupported(_))));
        assert!(matches!(poly_mul(&q, &p), Err(Error::Unsupported(_))));
    }

    #[test]
    fn uexpr_var_mismatch() { 
        let (x, y) = symbols!(x, y);
        let p = AnyPoly::UExpr(UExprPoly::from_vec(x.clone(), vec![Expression::from(0), Expression::from(1)]));
        let q = uint(&y, udict!{ 1 => 1 });
        assert_eq!(poly_add(&p, &q), Err(Error::VariableMismatch(x, y)));
    }

    #[test]
    fn into_basic() { 
        let (x,) = symbols!(x);
        let p = uint(&x, udict!{ 3 => 2 });
        assert_eq!(p.into_basic(), crate::mul(&integer(2), &crate::pow(&symbol("x"), &integer(3))));

        let q = uint(&x, udict!{ 0 => 1, 3 => 2 });
        let AnyPoly::UInt(u) = &q else { panic!() };
        assert_eq!(q.clone().into_basic(), u.to_basic());
        assert_eq!(poly_neg(&poly_neg(&q)), q);

        let c = BigInt::from(4);
        assert_eq!(uint(&x, udict!{ 0 => 4 }).into_basic(), c.to_basic());
    }
}

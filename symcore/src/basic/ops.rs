use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::{AddExpr, Basic, MapBasicBasic, MapBasicNum, MulExpr, Number, PowExpr, RcBasic, Symbol, ToBasic};

pub fn integer<I>(i: I) -> RcBasic
where BigInt: From<I> {
    BigInt::from(i).to_basic()
}

/// `n / d` in lowest terms. Panics if `d` is zero.
pub fn rational(n: i32, d: i32) -> RcBasic { 
    Number::from(BigRational::new(n.into(), d.into())).to_basic()
}

pub fn symbol(name: &str) -> RcBasic { 
    Symbol::new(name).to_basic()
}

pub fn add(a: &RcBasic, b: &RcBasic) -> RcBasic { 
    if let (Basic::Number(x), Basic::Number(y)) = (a.as_ref(), b.as_ref()) { 
        return (x + y).to_basic()
    }

    let mut coef = Number::from(0);
    let mut dict = MapBasicNum::new();

    for x in [a, b] { 
        AddExpr::collect(&mut coef, &mut dict, x);
    }

    AddExpr::from_dict(coef, dict)
}

pub fn sub(a: &RcBasic, b: &RcBasic) -> RcBasic { 
    add(a, &neg(b))
}

pub fn neg(a: &RcBasic) -> RcBasic { 
    mul(&integer(-1), a)
}

// A number times a sum is distributed over the sum.
pub fn mul(a: &RcBasic, b: &RcBasic) -> RcBasic { 
    match (a.as_ref(), b.as_ref()) { 
        (Basic::Number(x), Basic::Number(y)) => return (x * y).to_basic(),
        (Basic::Number(c), Basic::Add(s)) | 
        (Basic::Add(s), Basic::Number(c)) => return s.scale(c),
        _ => ()
    }

    let mut coef = Number::one();
    let mut dict = MapBasicBasic::new();

    for x in [a, b] { 
        MulExpr::collect(&mut coef, &mut dict, x);
    }

    MulExpr::from_dict(coef, dict)
}

pub fn pow(base: &RcBasic, exp: &RcBasic) -> RcBasic { 
    if let Basic::Number(e) = exp.as_ref() { 
        if e.is_zero() { 
            return integer(1)
        }
        if e.is_one() { 
            return base.clone()
        }
        if let Some(k) = e.as_integer() { 
            match base.as_ref() { 
                Basic::Number(b) => { 
                    if let Some(r) = b.powi(k) { 
                        return r.to_basic()
                    }
                },
                Basic::Mul(m) => { 
                    if let Some(c) = m.coef().powi(k) { 
                        let dict = m.dict().iter().map(|(b, e)| 
                            (b.clone(), mul(e, exp))
                        ).collect();
                        return MulExpr::from_dict(c, dict)
                    }
                },
                Basic::Pow(p) if p.exp().is_number() => { 
                    return pow(p.base(), &mul(p.exp(), exp))
                },
                _ => ()
            }
        }
    }
    PowExpr::new(base.clone(), exp.clone())
}

pub fn div(a: &RcBasic, b: &RcBasic) -> RcBasic { 
    mul(a, &pow(b, &integer(-1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers() { 
        assert_eq!(add(&integer(2), &integer(3)), integer(5));
        assert_eq!(mul(&integer(2), &rational(1, 4)), rational(1, 2));
        assert_eq!(div(&integer(3), &integer(6)), rational(1, 2));
        assert_eq!(pow(&integer(2), &integer(5)), integer(32));
        assert_eq!(pow(&integer(2), &integer(-1)), rational(1, 2));
    }

    #[test]
    fn distribute() { 
        let (x, y) = (symbol("x"), symbol("y"));
        let s = add(&x, &y);
        let e = mul(&integer(2), &s);
        assert_eq!(e, add(&mul(&integer(2), &x), &mul(&integer(2), &y)));
        assert_eq!(mul(&integer(0), &s), integer(0));
    }

    #[test]
    fn pow_fold() { 
        let (x, y) = (symbol("x"), symbol("y"));
        assert_eq!(pow(&x, &integer(0)), integer(1));
        assert_eq!(pow(&x, &integer(1)), x);

        let e = pow(&pow(&x, &integer(2)), &integer(3));
        assert_eq!(e, pow(&x, &integer(6)));

        let e = pow(&mul(&integer(2), &mul(&x, &y)), &integer(2));
        let f = mul(&integer(4), &mul(&pow(&x, &integer(2)), &pow(&y, &integer(2))));
        assert_eq!(e, f);
    }

    #[test]
    fn neg_sub() { 
        let x = symbol("x");
        assert_eq!(neg(&neg(&x)), x);
        assert_eq!(sub(&x, &x), integer(0));
        assert_eq!(div(&x, &x), integer(1));
    }
}

use std::cmp::Ordering;
use std::fmt::Display;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use num_traits::{One, Zero};

use crate::{add, hash_combine, hash_of, map_compare, map_eq, map_hash, Basic, MapBasicBasic, Number, PowExpr, RcBasic, ToBasic, VecBasic};
use crate::util::format::paren_expr;

/// A product `coef · Π bᵢ^eᵢ`, stored as a base → exponent dictionary.
#[derive(Clone, Debug)]
pub struct MulExpr { 
    coef: Number,
    dict: MapBasicBasic,
}

impl MulExpr { 
    pub fn coef(&self) -> &Number { 
        &self.coef
    }

    pub fn dict(&self) -> &MapBasicBasic { 
        &self.dict
    }

    pub fn from_dict(coef: Number, mut dict: MapBasicBasic) -> RcBasic { 
        if coef.is_zero() { 
            return coef.to_basic()
        }

        dict.retain(|_, e| !e.is_zero());

        if dict.is_empty() { 
            return coef.to_basic()
        }

        if coef.is_one() && dict.len() == 1 { 
            if let Some((b, e)) = dict.pop_first() { 
                return if e.is_one() { 
                    b
                } else { 
                    PowExpr::new(b, e)
                }
            }
        }

        Arc::new(Basic::Mul(Self { coef, dict }))
    }

    /// Multiplies `b^e` into `dict`, adding exponents of equal bases.
    pub fn dict_add_term(dict: &mut MapBasicBasic, b: &RcBasic, e: &RcBasic) { 
        match dict.get_mut(b) { 
            Some(e0) => { 
                let sum = add(e0, e);
                *e0 = sum;
                if e0.is_zero() { 
                    dict.remove(b);
                }
            },
            None => { 
                dict.insert(b.clone(), e.clone());
            }
        }
    }

    pub(crate) fn collect(coef: &mut Number, dict: &mut MapBasicBasic, x: &RcBasic) { 
        match x.as_ref() { 
            Basic::Number(n) => *coef *= n,
            Basic::Mul(m) => { 
                *coef *= &m.coef;
                for (b, e) in m.dict.iter() { 
                    Self::dict_add_term(dict, b, e)
                }
            },
            Basic::Pow(p) => Self::dict_add_term(dict, p.base(), p.exp()),
            _ => Self::dict_add_term(dict, x, &Number::one().to_basic())
        }
    }

    pub fn is_canonical(&self) -> bool { 
        let size_ok = self.dict.len() >= 2 || (self.dict.len() == 1 && !self.coef.is_one());
        !self.coef.is_zero() && size_ok && self.dict.iter().all(|(b, e)| 
            !e.is_zero() && !matches!(b.as_ref(), Basic::Mul(_))
        )
    }

    pub fn args(&self) -> VecBasic { 
        let mut args = VecBasic::with_capacity(self.dict.len() + 1);
        if !self.coef.is_one() { 
            args.push(self.coef.to_basic());
        }
        args.extend(self.dict.iter().map(|(b, e)| 
            if e.is_one() { b.clone() } else { PowExpr::new(b.clone(), e.clone()) }
        ));
        args
    }
}

impl PartialEq for MulExpr {
    fn eq(&self, other: &Self) -> bool {
        self.coef == other.coef && map_eq(&self.dict, &other.dict)
    }
}

impl Eq for MulExpr {}

impl PartialOrd for MulExpr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MulExpr {
    fn cmp(&self, other: &Self) -> Ordering {
        map_compare(&self.dict, &other.dict).then_with(|| 
            self.coef.cmp(&other.coef)
        )
    }
}

impl Hash for MulExpr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut h = hash_of(&self.coef);
        hash_combine(&mut h, map_hash(&self.dict));
        state.write_u64(h);
    }
}

impl Display for MulExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let factors = self.dict.iter().map(|(b, e)| { 
            let b = paren_factor(b);
            if e.is_one() { 
                b
            } else { 
                format!("{b}^{}", paren_factor(e))
            }
        }).collect::<Vec<_>>().join("*");

        if self.coef.is_one() { 
            write!(f, "{factors}")
        } else if self.coef.is_minus_one() { 
            write!(f, "-{factors}")
        } else { 
            write!(f, "{}*{factors}", paren_factor(&self.coef.to_basic()))
        }
    }
}

pub(crate) fn paren_factor(x: &RcBasic) -> String { 
    match x.as_ref() { 
        Basic::Number(n) if n.is_negative() || !n.is_integer() => format!("({n})"),
        Basic::Mul(_) | Basic::Pow(_) => format!("({x})"),
        _ => paren_expr(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{integer, mul, pow, symbol};

    #[test]
    fn from_dict_degenerate() { 
        let x = symbol("x");
        let one = integer(1);

        let e = MulExpr::from_dict(Number::zero(), MapBasicBasic::from([(x.clone(), one.clone())]));
        assert_eq!(e, integer(0));

        let e = MulExpr::from_dict(Number::from(5), MapBasicBasic::new());
        assert_eq!(e, integer(5));

        let e = MulExpr::from_dict(Number::one(), MapBasicBasic::from([(x.clone(), one.clone())]));
        assert_eq!(e, x);

        let e = MulExpr::from_dict(Number::one(), MapBasicBasic::from([(x.clone(), integer(3))]));
        assert!(matches!(e.as_ref(), Basic::Pow(_)));
    }

    #[test]
    fn collect_powers() { 
        let (x, y) = (symbol("x"), symbol("y"));
        let e = mul(&mul(&x, &y), &mul(&integer(3), &x));
        let Basic::Mul(m) = e.as_ref() else { panic!() };

        assert!(m.is_canonical());
        assert_eq!(m.coef(), &Number::from(3));
        assert_eq!(m.dict()[&x], integer(2));
        assert_eq!(m.dict()[&y], integer(1));

        let inv = pow(&x, &integer(-2));
        assert_eq!(mul(&mul(&x, &x), &inv), integer(1));
    }

    #[test]
    fn display() { 
        let (x, y) = (symbol("x"), symbol("y"));
        let e = mul(&mul(&integer(2), &x), &pow(&y, &integer(2)));
        assert_eq!(e.to_string(), "2*x*y^2");

        let e = mul(&integer(-1), &mul(&x, &y));
        assert_eq!(e.to_string(), "-x*y");
    }
}

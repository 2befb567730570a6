use std::cmp::Ordering;
use std::fmt::Display;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use num_traits::{One, Zero};

use crate::{hash_combine, hash_of, map_compare, map_eq, map_hash, mul, Basic, MapBasicNum, MulExpr, Number, RcBasic, ToBasic, VecBasic};

/// A sum `coef + Σ cᵢ·tᵢ`, stored as a term → coefficient dictionary.
/// 
/// Keys are never numbers, sums, or products with a non-unit coefficient,
/// and no coefficient in the dictionary is zero.
#[derive(Clone, Debug)]
pub struct AddExpr { 
    coef: Number,
    dict: MapBasicNum,
}

impl AddExpr { 
    pub fn coef(&self) -> &Number { 
        &self.coef
    }

    pub fn dict(&self) -> &MapBasicNum { 
        &self.dict
    }

    /// Builds the canonical node for `coef + Σ dict`, degenerating to a
    /// number or a single term when possible.
    pub fn from_dict(coef: Number, mut dict: MapBasicNum) -> RcBasic { 
        dict.retain(|_, c| !c.is_zero());

        if dict.is_empty() { 
            return coef.to_basic()
        }

        if coef.is_zero() && dict.len() == 1 { 
            if let Some((t, c)) = dict.pop_first() { 
                return if c.is_one() { 
                    t
                } else { 
                    mul(&c.to_basic(), &t)
                }
            }
        }

        Arc::new(Basic::Add(Self { coef, dict }))
    }

    /// Adds `c·t` into `dict`, removing the entry if it cancels.
    pub fn dict_add_term(dict: &mut MapBasicNum, c: &Number, t: &RcBasic) { 
        match dict.get_mut(t) { 
            Some(v) => { 
                *v += c;
                if v.is_zero() { 
                    dict.remove(t);
                }
            },
            None => if !c.is_zero() { 
                dict.insert(t.clone(), c.clone());
            }
        }
    }

    /// Accumulates `x` into `(coef, dict)`, flattening nested sums.
    pub(crate) fn collect(coef: &mut Number, dict: &mut MapBasicNum, x: &RcBasic) { 
        match x.as_ref() { 
            Basic::Number(n) => *coef += n,
            Basic::Add(s) => { 
                *coef += &s.coef;
                for (t, c) in s.dict.iter() { 
                    Self::dict_add_term(dict, c, t)
                }
            },
            _ => { 
                let (c, t) = Self::as_coef_term(x);
                Self::dict_add_term(dict, &c, &t)
            }
        }
    }

    /// Splits `x` into a numeric coefficient and the remaining term.
    pub fn as_coef_term(x: &RcBasic) -> (Number, RcBasic) { 
        match x.as_ref() { 
            Basic::Number(n) => (n.clone(), Number::one().to_basic()),
            Basic::Mul(m) if !m.coef().is_one() => { 
                let t = MulExpr::from_dict(Number::one(), m.dict().clone());
                (m.coef().clone(), t)
            },
            _ => (Number::one(), x.clone())
        }
    }

    pub(crate) fn scale(&self, c: &Number) -> RcBasic { 
        if c.is_zero() { 
            return Number::zero().to_basic()
        }
        let coef = &self.coef * c;
        let dict = self.dict.iter().map(|(t, d)| (t.clone(), d * c)).collect();
        Self::from_dict(coef, dict)
    }

    pub fn is_canonical(&self) -> bool { 
        let size_ok = self.dict.len() >= 2 || (self.dict.len() == 1 && !self.coef.is_zero());
        size_ok && self.dict.iter().all(|(t, c)| 
            !c.is_zero() && match t.as_ref() { 
                Basic::Number(_) | Basic::Add(_) => false,
                Basic::Mul(m) => m.coef().is_one(),
                _ => true
            }
        )
    }

    pub fn args(&self) -> VecBasic { 
        let mut args = VecBasic::with_capacity(self.dict.len() + 1);
        if !self.coef.is_zero() { 
            args.push(self.coef.to_basic());
        }
        args.extend(self.dict.iter().map(|(t, c)| 
            mul(&c.to_basic(), t)
        ));
        args
    }
}

impl PartialEq for AddExpr {
    fn eq(&self, other: &Self) -> bool {
        self.coef == other.coef && map_eq(&self.dict, &other.dict)
    }
}

impl Eq for AddExpr {}

impl PartialOrd for AddExpr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AddExpr {
    fn cmp(&self, other: &Self) -> Ordering {
        map_compare(&self.dict, &other.dict).then_with(|| 
            self.coef.cmp(&other.coef)
        )
    }
}

impl Hash for AddExpr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut h = hash_of(&self.coef);
        hash_combine(&mut h, map_hash(&self.dict));
        state.write_u64(h);
    }
}

impl Display for AddExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut terms = self.dict.iter().map(|(t, c)| { 
            let t = t.to_string();
            if c.is_one() { 
                t
            } else if c.is_minus_one() { 
                format!("-{t}")
            } else { 
                format!("{c}*{t}")
            }
        }).collect::<Vec<_>>();

        if !self.coef.is_zero() { 
            terms.push(self.coef.to_string());
        }

        let mut s = String::new();
        for (i, t) in terms.iter().enumerate() { 
            match (i, t.strip_prefix('-')) { 
                (0, _) => s.push_str(t),
                (_, Some(t)) => { s.push_str(" - "); s.push_str(t) },
                (_, None)    => { s.push_str(" + "); s.push_str(t) }
            }
        }
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{add, integer, neg, rational, sub, symbol};

    #[test]
    fn from_dict_degenerate() { 
        let x = symbol("x");

        let e = AddExpr::from_dict(Number::from(3), MapBasicNum::new());
        assert_eq!(e, integer(3));

        let e = AddExpr::from_dict(Number::zero(), MapBasicNum::from([(x.clone(), Number::one())]));
        assert_eq!(e, x);

        let e = AddExpr::from_dict(Number::zero(), MapBasicNum::from([(x.clone(), Number::from(2))]));
        assert!(matches!(e.as_ref(), Basic::Mul(_)));

        let e = AddExpr::from_dict(Number::zero(), MapBasicNum::from([(x.clone(), Number::zero())]));
        assert_eq!(e, integer(0));
    }

    #[test]
    fn collect_like_terms() { 
        let (x, y) = (symbol("x"), symbol("y"));
        let e = add(&add(&x, &y), &x);
        let Basic::Add(s) = e.as_ref() else { panic!() };

        assert!(s.is_canonical());
        assert_eq!(s.dict()[&x], Number::from(2));
        assert_eq!(s.dict()[&y], Number::from(1));
        assert_eq!(sub(&e, &e), integer(0));
    }

    #[test]
    fn coef_term() { 
        let x = symbol("x");
        let e = neg(&x);
        assert_eq!(AddExpr::as_coef_term(&e), (Number::from(-1), x.clone()));
        assert_eq!(AddExpr::as_coef_term(&x), (Number::one(), x));
    }

    #[test]
    fn display() { 
        let (x, y) = (symbol("x"), symbol("y"));
        let e = add(&sub(&x, &y), &integer(1));
        assert_eq!(e.to_string(), "x - y + 1");

        let e = add(&x, &rational(1, 2));
        assert_eq!(e.to_string(), "x + 1/2");
    }
}

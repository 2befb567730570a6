use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::hash::{Hash, Hasher};
use delegate::delegate;
use log::trace;

use crate::{hash_combine, hash_of, map_compare, map_eq, map_hash, Error, Exponent, Result, Ring, RingOps, Symbol};
use crate::config::check_canonical;
use crate::util::format::{lc, mono};

/// A sparse univariate polynomial `Σ cₙ·xⁿ` over the ring `R`.
/// 
/// In canonical form no stored coefficient is zero and `degree` is the
/// largest exponent present (zero for constants).
#[derive(Clone, Debug)]
pub struct UPoly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    var: Symbol,
    degree: Exponent,
    dict: BTreeMap<Exponent, R>,
}

impl<R> UPoly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    /// Takes `dict` and `degree` as given, without canonicalizing.
    pub fn new(var: Symbol, degree: Exponent, dict: BTreeMap<Exponent, R>) -> Self { 
        Self { var, degree, dict }
    }

    pub fn from_terms(var: Symbol, mut dict: BTreeMap<Exponent, R>) -> Self { 
        dict.retain(|_, c| !c.is_zero());
        let degree = dict.last_key_value().map(|(n, _)| *n).unwrap_or(0);
        Self::new(var, degree, dict)
    }

    /// From dense coefficients `[c₀, c₁, ...]`.
    pub fn from_vec(var: Symbol, v: Vec<R>) -> Self { 
        let dict = v.into_iter().enumerate().map(|(n, c)| (n as Exponent, c)).collect();
        Self::from_terms(var, dict)
    }

    pub fn constant(var: Symbol, c: R) -> Self { 
        Self::from_terms(var, BTreeMap::from([(0, c)]))
    }

    pub fn variable(var: Symbol) -> Self { 
        Self::new(var, 1, BTreeMap::from([(1, R::one())]))
    }

    pub fn is_canonical(&self) -> bool { 
        let degree = self.dict.last_key_value().map(|(n, _)| *n).unwrap_or(0);
        self.degree == degree && self.dict.values().all(|c| !c.is_zero())
    }

    /// Adds `coef·xⁿ` into `dict`, removing the entry if it cancels.
    pub fn dict_add_term(dict: &mut BTreeMap<Exponent, R>, coef: &R, n: Exponent) { 
        match dict.get_mut(&n) { 
            Some(c) => { 
                *c += coef;
                if c.is_zero() { 
                    dict.remove(&n);
                }
            },
            None => if !coef.is_zero() { 
                dict.insert(n, coef.clone());
            }
        }
    }

    pub fn var(&self) -> &Symbol { 
        &self.var
    }

    pub fn degree(&self) -> Exponent { 
        self.degree
    }

    pub fn dict(&self) -> &BTreeMap<Exponent, R> { 
        &self.dict
    }

    pub fn into_dict(self) -> BTreeMap<Exponent, R> { 
        self.dict
    }

    delegate! { 
        to self.dict { 
            #[call(len)]
            pub fn nterms(&self) -> usize;
            pub fn iter(&self) -> std::collections::btree_map::Iter<'_, Exponent, R>;
        }
    }

    pub fn coeff(&self, n: Exponent) -> R { 
        self.dict.get(&n).cloned().unwrap_or_else(R::zero)
    }

    pub fn is_zero(&self) -> bool { 
        self.dict.is_empty()
    }

    pub fn is_one(&self) -> bool { 
        self.single_term().is_some_and(|(n, c)| n == 0 && c.is_one())
    }

    pub fn is_minus_one(&self) -> bool { 
        self.single_term().is_some_and(|(n, c)| n == 0 && (-c).is_one())
    }

    // At most a constant term.
    pub fn is_integer(&self) -> bool { 
        self.dict.keys().all(|&n| n == 0)
    }

    pub fn is_symbol(&self) -> bool { 
        self.single_term().is_some_and(|(n, c)| n == 1 && c.is_one())
    }

    pub fn is_mul(&self) -> bool { 
        self.single_term().is_some_and(|(n, c)| n != 0 && !c.is_one())
    }

    pub fn is_pow(&self) -> bool { 
        self.single_term().is_some_and(|(n, c)| n > 1 && c.is_one())
    }

    fn single_term(&self) -> Option<(Exponent, &R)> { 
        match self.dict.first_key_value() { 
            Some((n, c)) if self.dict.len() == 1 => Some((*n, c)),
            _ => None
        }
    }

    // largest stored exponent, independent of the cached degree.
    pub(crate) fn top_exponent(&self) -> Exponent { 
        self.dict.last_key_value().map(|(n, _)| *n).unwrap_or(0)
    }

    /// Sparse Horner evaluation.
    pub fn eval(&self, x: &R) -> R { 
        let mut res = R::zero();
        let mut prev = self.top_exponent();
        for (&n, c) in self.dict.iter().rev() { 
            res *= &num_traits::pow(x.clone(), (prev - n) as usize);
            res += c;
            prev = n;
        }
        res * num_traits::pow(x.clone(), prev as usize)
    }

    pub fn math_symbol(&self) -> String { 
        format!("{}[{}]", R::math_symbol(), self.var)
    }
}

// A constant operand adopts the other operand's variable.
fn unify_var<R>(p: &UPoly<R>, q: &UPoly<R>) -> Result<Symbol>
where R: Ring, for<'x> &'x R: RingOps<R> {
    if p.var == q.var || q.is_integer() { 
        Ok(p.var.clone())
    } else if p.is_integer() { 
        Ok(q.var.clone())
    } else { 
        Err(Error::VariableMismatch(p.var.clone(), q.var.clone()))
    }
}

pub fn add_upoly<R>(p: &UPoly<R>, q: &UPoly<R>) -> Result<UPoly<R>>
where R: Ring, for<'x> &'x R: RingOps<R> {
    let var = unify_var(p, q)?;
    let mut dict = p.dict.clone();
    for (&n, c) in q.dict.iter() { 
        UPoly::dict_add_term(&mut dict, c, n);
    }
    Ok(check_canonical!(UPoly::from_terms(var, dict)))
}

pub fn sub_upoly<R>(p: &UPoly<R>, q: &UPoly<R>) -> Result<UPoly<R>>
where R: Ring, for<'x> &'x R: RingOps<R> {
    let var = unify_var(p, q)?;
    let mut dict = p.dict.clone();
    for (&n, c) in q.dict.iter() { 
        UPoly::dict_add_term(&mut dict, &-c, n);
    }
    Ok(check_canonical!(UPoly::from_terms(var, dict)))
}

pub fn neg_upoly<R>(p: &UPoly<R>) -> UPoly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    let dict = p.dict.iter().map(|(&n, c)| (n, -c)).collect();
    UPoly::new(p.var.clone(), p.degree, dict)
}

pub fn mul_upoly<R>(p: &UPoly<R>, q: &UPoly<R>) -> Result<UPoly<R>>
where R: Ring, for<'x> &'x R: RingOps<R> {
    let var = unify_var(p, q)?;

    trace!("mul_upoly: {} x {} terms", p.nterms(), q.nterms());

    let mut dict = BTreeMap::new();
    for (&i, a) in p.dict.iter() { 
        for (&j, b) in q.dict.iter() { 
            UPoly::dict_add_term(&mut dict, &(a * b), i + j);
        }
    }
    Ok(check_canonical!(UPoly::from_terms(var, dict)))
}

impl<R> PartialEq for UPoly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn eq(&self, other: &Self) -> bool {
        self.var == other.var && map_eq(&self.dict, &other.dict)
    }
}

impl<R> Eq for UPoly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {}

impl<R> PartialOrd for UPoly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<R> Ord for UPoly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.var.cmp(&other.var).then_with(|| 
            map_compare(&self.dict, &other.dict)
        )
    }
}

impl<R> Hash for UPoly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut h = hash_of(&self.var);
        hash_combine(&mut h, map_hash(&self.dict));
        state.write_u64(h);
    }
}

impl<R> Display for UPoly<R>
where R: Ring, for<'x> &'x R: RingOps<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let terms = self.dict.iter().rev().map(|(&n, c)| (mono(&self.var, n), c));
        write!(f, "{}", lc(terms))
    }
}

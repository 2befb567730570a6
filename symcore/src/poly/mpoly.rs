use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::sync::Arc;
use auto_impl_ops::auto_ops;
use itertools::Itertools;
use log::{debug, trace};
use num_bigint::BigInt;
use num_traits::{One, Pow, Zero};

use crate::{hash_combine, integer, mul, order_umap, pow, reconcile, reconcile_uni, set_compare, set_eq, translate, translate_uni, uint_vec_translate_and_add, uint_vec_translate_and_add_uni, umap_compare, umap_eq_raw, umap_hash, vec_hash, Basic, Error, ExpVec, MapUintMpz, RcBasic, Result, SetSym, Symbol, ToBasic, UIntPoly, UmapSymUint, UmapUvecMpz, VecBasic};
use crate::config::check_canonical;
use crate::misc::ensure;
use crate::util::format::{lc, mono};

/// Sparse multivariate polynomial with big-integer coefficients.
/// 
/// Exponent vectors are indexed by the position of each variable in the
/// ordered set `vars`. Only variables that occur with a positive exponent
/// are kept.
#[derive(Clone, Debug)]
pub struct MIntPoly { 
    vars: SetSym,
    degrees: UmapSymUint,
    dict: UmapUvecMpz,
}

impl MIntPoly { 
    /// Takes the parts as given, without canonicalizing.
    pub fn new(vars: SetSym, degrees: UmapSymUint, dict: UmapUvecMpz) -> Self { 
        Self { vars, degrees, dict }
    }

    pub fn from_terms(vars: SetSym, dict: UmapUvecMpz) -> Result<Self> { 
        let n = vars.len();
        for k in dict.keys() { 
            ensure!(k.len() == n, Error::ExponentLength { expected: n, found: k.len() });
        }
        Ok(Self::canonicalize(vars, dict))
    }

    /// Canonicalizes and collapses trivial shapes: no terms, a single
    /// variable, or a single monomial.
    pub fn from_dict(vars: SetSym, dict: UmapUvecMpz) -> Result<RcBasic> { 
        let p = Self::from_terms(vars, dict)?;
        Ok(p.into_basic())
    }

    pub fn from_upoly(p: &UIntPoly) -> Self { 
        let vars = SetSym::from([p.var().clone()]);
        let dict = p.iter().map(|(&n, c)| (ExpVec::from([n]), c.clone())).collect();
        Self::canonicalize(vars, dict)
    }

    // Keys must already have length `vars.len()`.
    fn canonicalize(vars: SetSym, mut dict: UmapUvecMpz) -> Self { 
        dict.retain(|_, c| !c.is_zero());

        let n = vars.len();
        let mut max = vec![0u32; n];
        for k in dict.keys() { 
            for (i, &e) in k.iter().enumerate() { 
                max[i] = max[i].max(e);
            }
        }

        if max.iter().all(|&d| d > 0) { 
            let degrees = vars.iter().cloned().zip(max).collect();
            return Self::new(vars, degrees, dict)
        }

        let keep = (0..n).filter(|&i| max[i] > 0).collect_vec();

        debug!("prune variables: {} -> {}", n, keep.len());

        let vars: SetSym = vars.into_iter().enumerate().filter_map(|(i, x)| 
            (max[i] > 0).then_some(x)
        ).collect();
        let dict = dict.into_iter().map(|(k, c)| 
            (keep.iter().map(|&i| k[i]).collect::<ExpVec>(), c)
        ).collect();
        let degrees = vars.iter().cloned().zip(keep.iter().map(|&i| max[i])).collect();

        Self::new(vars, degrees, dict)
    }

    pub fn is_canonical(&self) -> bool { 
        let n = self.vars.len();
        let mut max = vec![0u32; n];
        for (k, c) in self.dict.iter() { 
            if k.len() != n || c.is_zero() { 
                return false
            }
            for (i, &e) in k.iter().enumerate() { 
                max[i] = max[i].max(e);
            }
        }
        self.degrees.len() == n && 
        self.vars.iter().zip(max).all(|(x, d)| 
            d > 0 && self.degrees.get(x) == Some(&d)
        )
    }

    /// Adds `c·x^k` into `dict`, removing the entry if it cancels.
    pub fn dict_add_term(dict: &mut UmapUvecMpz, c: &BigInt, k: ExpVec) { 
        match dict.get_mut(&k) { 
            Some(a) => { 
                *a += c;
                if a.is_zero() { 
                    dict.remove(&k);
                }
            },
            None => if !c.is_zero() { 
                dict.insert(k, c.clone());
            }
        }
    }

    pub fn vars(&self) -> &SetSym { 
        &self.vars
    }

    pub fn degrees(&self) -> &UmapSymUint { 
        &self.degrees
    }

    pub fn dict(&self) -> &UmapUvecMpz { 
        &self.dict
    }

    pub fn nterms(&self) -> usize { 
        self.dict.len()
    }

    pub fn is_zero(&self) -> bool { 
        self.dict.is_empty()
    }

    pub fn into_basic(self) -> RcBasic { 
        if let (1, Some(x)) = (self.vars.len(), self.vars.first()) { 
            let x = x.clone();
            let dict: MapUintMpz = self.dict.into_iter().map(|(k, c)| (k[0], c)).collect();
            return UIntPoly::from_dict(&x, dict)
        }
        if let Ok((k, c)) = self.dict.iter().exactly_one() { 
            return self.monomial(k, c)
        }
        if self.dict.is_empty() { 
            integer(0)
        } else { 
            self.to_basic()
        }
    }

    // c·Π xᵢ^eᵢ as a plain expression.
    fn monomial(&self, k: &ExpVec, c: &BigInt) -> RcBasic { 
        self.vars.iter().zip(k.iter()).fold(c.to_basic(), |res, (x, &e)| 
            if e == 0 { 
                res
            } else { 
                mul(&res, &pow(&x.to_basic(), &integer(e)))
            }
        )
    }

    pub fn args(&self) -> VecBasic { 
        order_umap(&self.dict).into_iter().map(|k| 
            self.monomial(k, &self.dict[k])
        ).collect()
    }

    pub fn eval(&self, values: &BTreeMap<Symbol, BigInt>) -> Result<BigInt> { 
        let xs = self.vars.iter().map(|x| 
            values.get(x).ok_or_else(|| Error::MissingValue(x.clone()))
        ).collect::<Result<Vec<_>>>()?;

        let res: BigInt = self.dict.iter().map(|(k, c)| 
            xs.iter().zip(k.iter()).fold(c.clone(), |res, (&x, &e)| 
                res * Pow::pow(x, e)
            )
        ).sum();

        Ok(res)
    }
}

impl ToBasic for MIntPoly {
    fn to_basic(&self) -> RcBasic {
        Arc::new(Basic::MIntPoly(self.clone()))
    }
}

// Merges the terms of `q` (times `sign`) into those of `p`.
fn merge(p: &MIntPoly, q: &MIntPoly, sign: &BigInt) -> MIntPoly { 
    if p.vars == q.vars { 
        let mut dict = p.dict.clone();
        for (k, c) in q.dict.iter() { 
            MIntPoly::dict_add_term(&mut dict, &(c * sign), k.clone());
        }
        return MIntPoly::canonicalize(p.vars.clone(), dict)
    }

    let r = reconcile(&p.vars, &q.vars);
    let size = r.size();
    let mut dict = UmapUvecMpz::default();

    for (k, c) in p.dict.iter() { 
        MIntPoly::dict_add_term(&mut dict, c, translate(k, &r.left, size));
    }
    for (k, c) in q.dict.iter() { 
        MIntPoly::dict_add_term(&mut dict, &(c * sign), translate(k, &r.right, size));
    }
    MIntPoly::canonicalize(r.vars, dict)
}

fn merge_upoly(p: &MIntPoly, q: &UIntPoly, sign: &BigInt) -> MIntPoly { 
    let r = reconcile_uni(&p.vars, q.var());
    let size = r.size();
    let mut dict = UmapUvecMpz::default();

    for (k, c) in p.dict.iter() { 
        MIntPoly::dict_add_term(&mut dict, c, translate(k, &r.left, size));
    }
    for (&n, c) in q.iter() { 
        MIntPoly::dict_add_term(&mut dict, &(c * sign), translate_uni(n, r.right, size));
    }
    MIntPoly::canonicalize(r.vars, dict)
}

pub fn add_mpoly(p: &MIntPoly, q: &MIntPoly) -> MIntPoly { 
    check_canonical!(merge(p, q, &BigInt::one()))
}

pub fn sub_mpoly(p: &MIntPoly, q: &MIntPoly) -> MIntPoly { 
    check_canonical!(merge(p, q, &-BigInt::one()))
}

pub fn neg_mpoly(p: &MIntPoly) -> MIntPoly { 
    let dict = p.dict.iter().map(|(k, c)| (k.clone(), -c)).collect();
    MIntPoly::new(p.vars.clone(), p.degrees.clone(), dict)
}

pub fn mul_mpoly(p: &MIntPoly, q: &MIntPoly) -> MIntPoly { 
    let r = reconcile(&p.vars, &q.vars);
    let size = r.size();

    trace!("mul_mpoly: {} x {} terms over {} vars", p.nterms(), q.nterms(), size);

    let mut dict = UmapUvecMpz::default();
    for (k1, c1) in p.dict.iter() { 
        for (k2, c2) in q.dict.iter() { 
            let k = uint_vec_translate_and_add(k1, k2, &r.left, &r.right, size);
            MIntPoly::dict_add_term(&mut dict, &(c1 * c2), k);
        }
    }
    check_canonical!(MIntPoly::canonicalize(r.vars, dict))
}

pub fn add_mpoly_upoly(p: &MIntPoly, q: &UIntPoly) -> MIntPoly { 
    check_canonical!(merge_upoly(p, q, &BigInt::one()))
}

pub fn sub_mpoly_upoly(p: &MIntPoly, q: &UIntPoly) -> MIntPoly { 
    check_canonical!(merge_upoly(p, q, &-BigInt::one()))
}

pub fn sub_upoly_mpoly(p: &UIntPoly, q: &MIntPoly) -> MIntPoly { 
    neg_mpoly(&sub_mpoly_upoly(q, p))
}

pub fn mul_mpoly_upoly(p: &MIntPoly, q: &UIntPoly) -> MIntPoly { 
    let r = reconcile_uni(&p.vars, q.var());
    let size = r.size();

    trace!("mul_mpoly_upoly: {} x {} terms over {} vars", p.nterms(), q.nterms(), size);

    let mut dict = UmapUvecMpz::default();
    for (k1, c1) in p.dict.iter() { 
        for (&n, c2) in q.iter() { 
            let k = uint_vec_translate_and_add_uni(k1, n, &r.left, r.right, size);
            MIntPoly::dict_add_term(&mut dict, &(c1 * c2), k);
        }
    }
    check_canonical!(MIntPoly::canonicalize(r.vars, dict))
}

pub fn add_upoly_upoly(p: &UIntPoly, q: &UIntPoly) -> MIntPoly { 
    add_mpoly(&MIntPoly::from_upoly(p), &MIntPoly::from_upoly(q))
}

pub fn sub_upoly_upoly(p: &UIntPoly, q: &UIntPoly) -> MIntPoly { 
    sub_mpoly(&MIntPoly::from_upoly(p), &MIntPoly::from_upoly(q))
}

pub fn mul_upoly_upoly(p: &UIntPoly, q: &UIntPoly) -> MIntPoly { 
    mul_mpoly(&MIntPoly::from_upoly(p), &MIntPoly::from_upoly(q))
}

#[auto_ops]
impl AddAssign<&MIntPoly> for MIntPoly {
    fn add_assign(&mut self, rhs: &MIntPoly) {
        *self = add_mpoly(self, rhs)
    }
}

#[auto_ops]
impl SubAssign<&MIntPoly> for MIntPoly {
    fn sub_assign(&mut self, rhs: &MIntPoly) {
        *self = sub_mpoly(self, rhs)
    }
}

#[auto_ops]
impl MulAssign<&MIntPoly> for MIntPoly {
    fn mul_assign(&mut self, rhs: &MIntPoly) {
        *self = mul_mpoly(self, rhs)
    }
}

impl Neg for MIntPoly {
    type Output = MIntPoly;
    fn neg(self) -> Self::Output {
        neg_mpoly(&self)
    }
}

impl Neg for &MIntPoly {
    type Output = MIntPoly;
    fn neg(self) -> Self::Output {
        neg_mpoly(self)
    }
}

impl PartialEq for MIntPoly {
    fn eq(&self, other: &Self) -> bool {
        set_eq(&self.vars, &other.vars) && umap_eq_raw(&self.dict, &other.dict)
    }
}

impl Eq for MIntPoly {}

impl PartialOrd for MIntPoly {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MIntPoly {
    fn cmp(&self, other: &Self) -> Ordering {
        set_compare(&self.vars, &other.vars).then_with(|| 
            umap_compare(&self.dict, &other.dict)
        )
    }
}

impl Hash for MIntPoly {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut h = vec_hash(&self.vars);
        hash_combine(&mut h, umap_hash(&self.dict));
        state.write_u64(h);
    }
}

impl Display for MIntPoly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let terms = order_umap(&self.dict).into_iter().rev().map(|k| { 
            let m = self.vars.iter().zip(k.iter())
                .filter(|&(_, &e)| e > 0)
                .map(|(x, &e)| mono(x, e))
                .join("");
            let m = if m.is_empty() { String::from("1") } else { m };
            (m, &self.dict[k])
        });
        write!(f, "{}", lc(terms))
    }
}

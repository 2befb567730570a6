use itertools::{EitherOrBoth, Itertools};
use log::trace;

use crate::{Exponent, ExpVec, SetSym, Symbol};

/// A merged variable ordering together with, for each operand, the
/// position of each of its variables in the merged ordering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reconciled<T> { 
    pub vars: SetSym,
    pub left: Vec<usize>,
    pub right: T,
}

impl<T> Reconciled<T> { 
    pub fn size(&self) -> usize { 
        self.vars.len()
    }
}

pub fn reconcile(s1: &SetSym, s2: &SetSym) -> Reconciled<Vec<usize>> { 
    let mut vars = SetSym::new();
    let mut left = Vec::with_capacity(s1.len());
    let mut right = Vec::with_capacity(s2.len());

    for (i, e) in s1.iter().merge_join_by(s2.iter(), |a, b| a.cmp(b)).enumerate() { 
        match e { 
            EitherOrBoth::Left(x) => { 
                left.push(i);
                vars.insert(x.clone());
            },
            EitherOrBoth::Right(y) => { 
                right.push(i);
                vars.insert(y.clone());
            },
            EitherOrBoth::Both(x, _) => { 
                left.push(i);
                right.push(i);
                vars.insert(x.clone());
            }
        }
    }

    trace!("reconcile: {:?} + {:?} -> {:?}", s1, s2, vars);

    Reconciled { vars, left, right }
}

pub fn reconcile_uni(s1: &SetSym, x: &Symbol) -> Reconciled<usize> { 
    let r = reconcile(s1, &SetSym::from([x.clone()]));
    Reconciled { vars: r.vars, left: r.left, right: r.right[0] }
}

/// Places each exponent of `v` at its translated position in a vector of
/// length `size`, zero elsewhere.
pub fn translate(v: &ExpVec, translator: &[usize], size: usize) -> ExpVec { 
    assert_eq!(v.len(), translator.len(), "translator length mismatch");
    let mut res = ExpVec::zeros(size);
    for (&e, &i) in v.iter().zip(translator) { 
        res[i] = e;
    }
    res
}

pub fn translate_uni(e: Exponent, translator: usize, size: usize) -> ExpVec { 
    let mut res = ExpVec::zeros(size);
    res[translator] = e;
    res
}

/// Translates both vectors and adds them in one pass.
pub fn uint_vec_translate_and_add(v1: &ExpVec, v2: &ExpVec, t1: &[usize], t2: &[usize], size: usize) -> ExpVec { 
    assert_eq!(v1.len(), t1.len(), "translator length mismatch");
    assert_eq!(v2.len(), t2.len(), "translator length mismatch");
    let mut res = ExpVec::zeros(size);
    for (&e, &i) in v1.iter().zip(t1) { 
        res[i] += e;
    }
    for (&e, &i) in v2.iter().zip(t2) { 
        res[i] += e;
    }
    res
}

pub fn uint_vec_translate_and_add_uni(v1: &ExpVec, e2: Exponent, t1: &[usize], t2: usize, size: usize) -> ExpVec { 
    assert_eq!(v1.len(), t1.len(), "translator length mismatch");
    let mut res = ExpVec::zeros(size);
    for (&e, &i) in v1.iter().zip(t1) { 
        res[i] += e;
    }
    res[t2] += e2;
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&str]) -> SetSym { 
        names.iter().map(|&s| Symbol::new(s)).collect()
    }

    #[test]
    fn reconcile_disjoint() { 
        let r = reconcile(&set(&["x", "z"]), &set(&["w", "y"]));
        assert_eq!(r.vars, set(&["w", "x", "y", "z"]));
        assert_eq!(r.left, vec![1, 3]);
        assert_eq!(r.right, vec![0, 2]);
        assert_eq!(r.size(), 4);
    }

    #[test]
    fn reconcile_overlap() { 
        let r = reconcile(&set(&["x", "y"]), &set(&["y", "z"]));
        assert_eq!(r.vars, set(&["x", "y", "z"]));
        assert_eq!(r.left, vec![0, 1]);
        assert_eq!(r.right, vec![1, 2]);
    }

    #[test]
    fn reconcile_same() { 
        let s = set(&["a", "b"]);
        let r = reconcile(&s, &s);
        assert_eq!(r.vars, s);
        assert_eq!(r.left, r.right);
    }

    #[test]
    fn reconcile_univariate() { 
        let r = reconcile_uni(&set(&["x", "y"]), &Symbol::new("x"));
        assert_eq!(r.vars, set(&["x", "y"]));
        assert_eq!(r.left, vec![0, 1]);
        assert_eq!(r.right, 0);

        let r = reconcile_uni(&set(&["x", "z"]), &Symbol::new("y"));
        assert_eq!(r.left, vec![0, 2]);
        assert_eq!(r.right, 1);
    }

    #[test]
    fn translate_vec() { 
        let v = ExpVec::from([3, 4]);
        assert_eq!(translate(&v, &[1, 3], 4), ExpVec::from([0, 3, 0, 4]));
        assert_eq!(translate_uni(2, 0, 2), ExpVec::from([2, 0]));
    }

    #[test]
    #[should_panic]
    fn translate_mismatch() { 
        translate(&ExpVec::from([1, 2, 3]), &[0, 1], 3);
    }

    #[test]
    fn translate_and_add() { 
        let v1 = ExpVec::from([1, 2]);
        let v2 = ExpVec::from([5, 7]);
        let r = uint_vec_translate_and_add(&v1, &v2, &[0, 1], &[1, 2], 3);
        assert_eq!(r, ExpVec::from([1, 7, 7]));

        let r = uint_vec_translate_and_add_uni(&v1, 4, &[0, 2], 1, 3);
        assert_eq!(r, ExpVec::from([1, 4, 2]));
    }
}

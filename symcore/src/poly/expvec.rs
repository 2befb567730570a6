use std::cmp::Ordering;
use std::fmt::Display;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Index, IndexMut};

use auto_impl_ops::auto_ops;
use delegate::delegate;
use derive_more::Debug;
use itertools::Itertools;

pub type Exponent = u32;

/// A fixed-length vector of exponents: the monomial `x₀^e₀ ⋯ xₙ^eₙ` over an
/// ordered variable set.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
#[debug("{_0:?}")]
pub struct ExpVec(Vec<Exponent>);

impl ExpVec { 
    pub fn zeros(n: usize) -> Self { 
        Self(vec![0; n])
    }

    delegate! { 
        to self.0 { 
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn iter(&self) -> std::slice::Iter<'_, Exponent>;
            pub fn as_slice(&self) -> &[Exponent];
        }
    }

    pub fn total(&self) -> u64 { 
        self.0.iter().map(|&e| e as u64).sum()
    }

    // h ^= e + 0x9e3779b + (h << 6) + (h >> 2)
    pub fn hash_value(&self) -> u64 { 
        self.0.iter().fold(0u64, |h, &e| { 
            h ^ (e as u64)
                .wrapping_add(0x9e3779b)
                .wrapping_add(h << 6)
                .wrapping_add(h >> 2)
        })
    }
}

impl From<Vec<Exponent>> for ExpVec {
    fn from(v: Vec<Exponent>) -> Self {
        Self(v)
    }
}

impl<const N: usize> From<[Exponent; N]> for ExpVec {
    fn from(v: [Exponent; N]) -> Self {
        Self(v.to_vec())
    }
}

impl FromIterator<Exponent> for ExpVec {
    fn from_iter<T: IntoIterator<Item = Exponent>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Index<usize> for ExpVec {
    type Output = Exponent;
    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}

impl IndexMut<usize> for ExpVec {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.0[i]
    }
}

impl Hash for ExpVec {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_value())
    }
}

impl PartialOrd for ExpVec {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Shorter vectors first, then lexicographic.
impl Ord for ExpVec {
    fn cmp(&self, other: &Self) -> Ordering {
        self.len().cmp(&other.len()).then_with(|| 
            self.0.cmp(&other.0)
        )
    }
}

// Panics on length mismatch.
#[auto_ops]
impl AddAssign<&ExpVec> for ExpVec {
    fn add_assign(&mut self, rhs: &ExpVec) {
        assert_eq!(self.len(), rhs.len(), "exponent vectors of different lengths");
        for (a, b) in self.0.iter_mut().zip(rhs.iter()) { 
            *a += b;
        }
    }
}

impl Display for ExpVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", self.0.iter().join(", "))
    }
}

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};
use std::ops::Deref;
use itertools::Itertools;

// Equality and total order for the containers holding expression nodes.
//
// All comparisons decide on size first: a shorter container sorts before a
// longer one regardless of content. Only same-size containers are compared
// element by element.

/// Unordered map equality, comparing mapped values through `Deref`
/// (i.e. by the content of shared nodes).
pub fn umap_eq<K, V, S>(a: &HashMap<K, V, S>, b: &HashMap<K, V, S>) -> bool
where 
    K: Eq + Hash, 
    V: Deref, 
    V::Target: PartialEq, 
    S: BuildHasher
{
    a.len() == b.len() && a.iter().all(|(k, v)| 
        b.get(k).is_some_and(|w| v.deref() == w.deref())
    )
}

/// Unordered map equality, comparing mapped values as stored.
pub fn umap_eq_raw<K, V, S>(a: &HashMap<K, V, S>, b: &HashMap<K, V, S>) -> bool
where 
    K: Eq + Hash, 
    V: PartialEq, 
    S: BuildHasher
{
    a.len() == b.len() && a.iter().all(|(k, v)| 
        b.get(k).is_some_and(|w| v == w)
    )
}

pub fn map_eq<'a, K, V, I>(a: I, b: I) -> bool
where 
    K: PartialEq + 'a, 
    V: PartialEq + 'a, 
    I: IntoIterator<Item = (&'a K, &'a V)>,
    I::IntoIter: ExactSizeIterator
{
    let (a, b) = (a.into_iter(), b.into_iter());
    a.len() == b.len() && a.zip(b).all(|((k0, v0), (k1, v1))| 
        k0 == k1 && v0 == v1
    )
}

pub fn vec_set_eq<'a, T, I>(a: I, b: I) -> bool
where 
    T: PartialEq + 'a + ?Sized, 
    I: IntoIterator<Item = &'a T>,
    I::IntoIter: ExactSizeIterator
{
    let (a, b) = (a.into_iter(), b.into_iter());
    a.len() == b.len() && a.zip(b).all(|(x, y)| x == y)
}

pub fn set_eq<'a, T, I>(a: I, b: I) -> bool
where 
    T: PartialEq + 'a + ?Sized, 
    I: IntoIterator<Item = &'a T>,
    I::IntoIter: ExactSizeIterator
{
    vec_set_eq(a, b)
}

pub fn vec_set_compare<'a, T, I>(a: I, b: I) -> Ordering
where 
    T: Ord + 'a + ?Sized, 
    I: IntoIterator<Item = &'a T>,
    I::IntoIter: ExactSizeIterator
{
    let (a, b) = (a.into_iter(), b.into_iter());
    a.len().cmp(&b.len()).then_with(|| 
        first_ne(a.zip(b).map(|(x, y)| x.cmp(y)))
    )
}

pub fn set_compare<'a, T, I>(a: I, b: I) -> Ordering
where 
    T: Ord + 'a + ?Sized, 
    I: IntoIterator<Item = &'a T>,
    I::IntoIter: ExactSizeIterator
{
    vec_set_compare(a, b)
}

pub fn map_compare<'a, K, V, I>(a: I, b: I) -> Ordering
where 
    K: Ord + 'a, 
    V: Ord + 'a, 
    I: IntoIterator<Item = (&'a K, &'a V)>,
    I::IntoIter: ExactSizeIterator
{
    let (a, b) = (a.into_iter(), b.into_iter());
    a.len().cmp(&b.len()).then_with(|| 
        first_ne(a.zip(b).map(|((k0, v0), (k1, v1))| 
            k0.cmp(k1).then_with(|| v0.cmp(v1))
        ))
    )
}

// Unordered maps are compared through their sorted key sequences.
pub fn umap_compare<K, V, S>(a: &HashMap<K, V, S>, b: &HashMap<K, V, S>) -> Ordering
where 
    K: Ord + Hash, 
    V: Ord, 
    S: BuildHasher
{
    a.len().cmp(&b.len()).then_with(|| { 
        let (ka, kb) = (order_umap(a), order_umap(b));
        first_ne(ka.into_iter().zip(kb).map(|(k0, k1)| 
            k0.cmp(k1).then_with(|| a[k0].cmp(&b[k1]))
        ))
    })
}

pub fn order_umap<K, V, S>(d: &HashMap<K, V, S>) -> Vec<&K>
where K: Ord {
    d.keys().sorted().collect()
}

// Equality up to permutation, counting multiplicities.
pub fn vec_basic_eq_perm<T>(a: &[T], b: &[T]) -> bool
where T: Ord {
    a.len() == b.len() && 
    a.iter().sorted().zip(b.iter().sorted()).all(|(x, y)| x == y)
}

fn first_ne<I>(mut iter: I) -> Ordering
where I: Iterator<Item = Ordering> {
    iter.find(|c| c.is_ne()).unwrap_or(Ordering::Equal)
}

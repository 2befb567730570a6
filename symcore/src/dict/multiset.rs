use std::cmp::Ordering;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};

use super::{vec_hash, vec_set_compare, vec_set_eq};

// Sorted multiset, iterated with repetitions in ascending order.
#[derive(Clone)]
pub struct Multiset<T> { 
    data: BTreeMap<T, usize>,
    len: usize
}

impl<T> Multiset<T>
where T: Ord {
    pub fn new() -> Self { 
        Self { data: BTreeMap::new(), len: 0 }
    }

    pub fn insert(&mut self, x: T) { 
        *self.data.entry(x).or_insert(0) += 1;
        self.len += 1;
    }

    pub fn remove(&mut self, x: &T) -> bool { 
        let Some(n) = self.data.get_mut(x) else { 
            return false
        };
        *n -= 1;
        if *n == 0 { 
            self.data.remove(x);
        }
        self.len -= 1;
        true
    }

    pub fn count(&self, x: &T) -> usize { 
        self.data.get(x).copied().unwrap_or(0)
    }

    pub fn contains(&self, x: &T) -> bool { 
        self.data.contains_key(x)
    }
}

impl<T> Multiset<T> { 
    pub fn len(&self) -> usize { 
        self.len
    }

    pub fn is_empty(&self) -> bool { 
        self.len == 0
    }

    pub fn iter(&self) -> Iter<'_, T> { 
        Iter { inner: self.data.iter(), front: None, remaining: self.len }
    }
}

impl<T> Default for Multiset<T>
where T: Ord {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Multiset<T>
where T: Ord {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut res = Self::new();
        for x in iter { 
            res.insert(x)
        }
        res
    }
}

pub struct Iter<'a, T> { 
    inner: btree_map::Iter<'a, T, usize>,
    front: Option<(&'a T, usize)>,
    remaining: usize
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop { 
            if let Some((x, n)) = self.front.as_mut() { 
                if *n > 0 { 
                    *n -= 1;
                    self.remaining -= 1;
                    return Some(*x)
                }
            }
            let (x, n) = self.inner.next()?;
            self.front = Some((x, *n));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a Multiset<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> PartialEq for Multiset<T>
where T: PartialEq {
    fn eq(&self, other: &Self) -> bool {
        vec_set_eq(self, other)
    }
}

impl<T> Eq for Multiset<T>
where T: Eq {}

impl<T> PartialOrd for Multiset<T>
where T: Ord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Multiset<T>
where T: Ord {
    fn cmp(&self, other: &Self) -> Ordering {
        vec_set_compare(self, other)
    }
}

impl<T> Hash for Multiset<T>
where T: Hash {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(vec_hash(self))
    }
}

impl<T> Debug for Multiset<T>
where T: Debug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{hash_of, symbol, MultisetBasic};

    #[test]
    fn iter_with_repetition() { 
        let m = Multiset::from_iter([3, 1, 3, 2, 3]);
        assert_eq!(m.len(), 5);
        assert_eq!(m.iter().len(), 5);
        assert_eq!(m.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 3, 3]);
        assert_eq!(m.count(&3), 3);
    }

    #[test]
    fn remove() { 
        let mut m = Multiset::from_iter([1, 1, 2]);
        assert!(m.remove(&1));
        assert_eq!(m.count(&1), 1);
        assert!(m.remove(&1));
        assert!(!m.contains(&1));
        assert!(!m.remove(&1));
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn eq_cmp_hash() { 
        let a: MultisetBasic = [symbol("x"), symbol("y"), symbol("x")].into_iter().collect();
        let b: MultisetBasic = [symbol("x"), symbol("x"), symbol("y")].into_iter().collect();
        let c: MultisetBasic = [symbol("x"), symbol("y")].into_iter().collect();

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, c);
        assert!(c < a);
    }
}

use std::hash::{BuildHasher, Hash};
use ahash::{AHasher, RandomState};

// Hasher with fixed seeds, so that structural hashes and the iteration order
// of unordered dictionaries are reproducible.
#[derive(Clone, Debug)]
pub struct FixedState(RandomState);

impl Default for FixedState {
    fn default() -> Self {
        Self(RandomState::with_seeds(0, 0, 0, 0))
    }
}

impl BuildHasher for FixedState {
    type Hasher = AHasher;

    fn build_hasher(&self) -> Self::Hasher {
        self.0.build_hasher()
    }
}

pub fn hash_of<T>(t: &T) -> u64
where T: Hash + ?Sized {
    FixedState::default().hash_one(t)
}

pub fn hash_combine(seed: &mut u64, h: u64) { 
    *seed ^= h
        .wrapping_add(0x9e3779b9)
        .wrapping_add(*seed << 6)
        .wrapping_add(*seed >> 2);
}

// Order-sensitive: vectors, ordered sets, multisets.
pub fn vec_hash<'a, T, I>(iter: I) -> u64
where 
    T: Hash + 'a + ?Sized, 
    I: IntoIterator<Item = &'a T>
{
    iter.into_iter().fold(0, |mut seed, x| { 
        hash_combine(&mut seed, hash_of(x));
        seed
    })
}

// Order-sensitive: ordered maps.
pub fn map_hash<'a, K, V, I>(iter: I) -> u64
where 
    K: Hash + 'a, 
    V: Hash + 'a, 
    I: IntoIterator<Item = (&'a K, &'a V)>
{
    iter.into_iter().fold(0, |mut seed, (k, v)| { 
        hash_combine(&mut seed, hash_of(k));
        hash_combine(&mut seed, hash_of(v));
        seed
    })
}

// Order-insensitive: unordered maps. Entries are hashed independently and
// summed, so any iteration order gives the same value.
pub fn umap_hash<'a, K, V, I>(iter: I) -> u64
where 
    K: Hash + 'a, 
    V: Hash + 'a, 
    I: IntoIterator<Item = (&'a K, &'a V)>
{
    iter.into_iter().fold(0u64, |acc, (k, v)| { 
        let mut h = hash_of(k);
        hash_combine(&mut h, hash_of(v));
        acc.wrapping_add(h)
    })
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap};
    use super::*;

    #[test]
    fn fixed_state_is_deterministic() { 
        assert_eq!(hash_of("x"), hash_of("x"));
        assert_eq!(hash_of(&[1u32, 2, 3]), hash_of(&[1u32, 2, 3]));
        assert_ne!(hash_of("x"), hash_of("y"));
    }

    #[test]
    fn vec_hash_is_order_sensitive() { 
        assert_eq!(vec_hash(&vec![1, 2, 3]), vec_hash(&vec![1, 2, 3]));
        assert_ne!(vec_hash(&vec![1, 2, 3]), vec_hash(&vec![3, 2, 1]));
    }

    #[test]
    fn map_hash_follows_contents() { 
        let a = BTreeMap::from_iter([(1, 10), (2, 20)]);
        let b = BTreeMap::from_iter([(2, 20), (1, 10)]);
        let c = BTreeMap::from_iter([(1, 10), (2, 21)]);
        assert_eq!(map_hash(&a), map_hash(&b));
        assert_ne!(map_hash(&a), map_hash(&c));
    }

    #[test]
    fn umap_hash_is_order_insensitive() { 
        let mut a: HashMap<u32, i64, FixedState> = HashMap::default();
        let mut b: HashMap<u32, i64, FixedState> = HashMap::with_capacity_and_hasher(64, FixedState::default());
        for i in 0..20 { 
            a.insert(i, i as i64 * 3);
        }
        for i in (0..20).rev() { 
            b.insert(i, i as i64 * 3);
        }
        assert_eq!(umap_hash(&a), umap_hash(&b));

        b.insert(3, 0);
        assert_ne!(umap_hash(&a), umap_hash(&b));
    }
}

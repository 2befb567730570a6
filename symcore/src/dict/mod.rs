mod cmp;
mod hash;
mod multiset;

pub use cmp::*;
pub use hash::*;
pub use multiset::*;

use std::collections::{BTreeMap, BTreeSet, HashMap};
use num_bigint::BigInt;
use crate::{Exponent, ExpVec, Expression, Number, RcBasic, Symbol};

pub type VecBasic       = Vec<RcBasic>;
pub type SetBasic       = BTreeSet<RcBasic>;
pub type MultisetBasic  = Multiset<RcBasic>;
pub type MapBasicNum    = BTreeMap<RcBasic, Number>;
pub type MapBasicBasic  = BTreeMap<RcBasic, RcBasic>;
pub type UmapBasicNum   = HashMap<RcBasic, Number, FixedState>;
pub type UmapBasicBasic = HashMap<RcBasic, RcBasic, FixedState>;

pub type SetSym         = BTreeSet<Symbol>;
pub type UmapSymUint    = HashMap<Symbol, Exponent, FixedState>;

pub type MapUintMpz     = BTreeMap<Exponent, BigInt>;
pub type MapUintExpr    = BTreeMap<Exponent, Expression>;
pub type UmapUvecMpz    = HashMap<ExpVec, BigInt, FixedState>;

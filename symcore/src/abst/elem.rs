use std::fmt::{Debug, Display};
use std::hash::Hash;

// Values that can live in the canonical containers: structurally comparable,
// hashable, printable and shareable across threads.

pub trait ElemBase: 
    Default + 
    Eq + 
    Hash + 
    Ord + 
    Clone + 
    Send + 
    Sync + 
    Display + 
    Debug + 
    'static
{}

impl<T> ElemBase for T where T: 
    Default + 
    Eq + 
    Hash + 
    Ord + 
    Clone + 
    Send + 
    Sync + 
    Display + 
    Debug + 
    'static
{}

pub trait Elem: ElemBase { 
    fn math_symbol() -> String;
}

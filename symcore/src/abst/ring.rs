use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use crate::Elem;

// Coefficient domains of the polynomial core.

pub trait RingOps<T = Self>: 
    Sized + 
    Add<T, Output = T> + 
    for<'a> Add<&'a T, Output = T> + 
    Sub<T, Output = T> + 
    for<'a> Sub<&'a T, Output = T> + 
    Mul<T, Output = T> + 
    for<'a> Mul<&'a T, Output = T> + 
    Neg<Output = T>
{}

pub trait Ring: 
    Elem + 
    RingOps + 
    Zero + 
    One + 
    AddAssign + 
    for<'a> AddAssign<&'a Self> + 
    for<'a> SubAssign<&'a Self> + 
    for<'a> MulAssign<&'a Self> + 
    From<i32>
where
    for<'a> &'a Self: RingOps<Self>
{
    fn inv(&self) -> Option<Self>;

    fn is_unit(&self) -> bool { 
        self.inv().is_some()
    }

    fn is_pm_one(&self) -> bool { 
        self.is_one() || (-self).is_one()
    }
}

impl RingOps for BigInt {}
impl<'a> RingOps<BigInt> for &'a BigInt {}

impl Elem for BigInt {
    fn math_symbol() -> String { 
        String::from("Z")
    }
}

impl Ring for BigInt {
    fn inv(&self) -> Option<Self> {
        if self.abs().is_one() { 
            Some(self.clone())
        } else { 
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;
    use crate::Ring;
 
    #[test]
    fn is_pm_one() { 
        assert!(BigInt::from(1).is_pm_one());
        assert!(BigInt::from(-1).is_pm_one());
        assert!(!BigInt::from(2).is_pm_one());
        assert!(!BigInt::from(-2).is_pm_one());
    }

    #[test]
    fn inv() { 
        assert_eq!(BigInt::from(-1).inv(), Some(BigInt::from(-1)));
        assert_eq!(BigInt::from(3).inv(), None);
        assert_eq!(BigInt::from(0).inv(), None);
        assert!(!BigInt::from(0).is_unit());
    }
}

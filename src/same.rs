//! Same-value comparison for list elements.
//!
//! This is equality by natural value identity, with two differences from `==`
//! on floats: every NaN is the same as every other NaN, and `0.0` is not the
//! same as `-0.0`.
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;

pub trait SameValue {
    fn same_value(&self, other: &Self) -> bool;
}

macro_rules! same_value_eq {
    ($($t:ty),*) => {
        $(
            impl SameValue for $t {
                fn same_value(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    }
}
macro_rules! same_value_float {
    ($($t:ty),*) => {
        $(
            impl SameValue for $t {
                fn same_value(&self, other: &Self) -> bool {
                    (self.is_nan() && other.is_nan()) || self.to_bits() == other.to_bits()
                }
            }
        )*
    }
}

same_value_eq! { (), bool, char, str, String }
same_value_eq! { i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize }
same_value_float! { f32, f64 }

impl<T: SameValue + ?Sized> SameValue for &T {
    fn same_value(&self, other: &Self) -> bool {
        T::same_value(*self, *other)
    }
}
impl<T: SameValue + ?Sized> SameValue for Box<T> {
    fn same_value(&self, other: &Self) -> bool {
        T::same_value(self, other)
    }
}
impl<T: SameValue + ?Sized> SameValue for Rc<T> {
    fn same_value(&self, other: &Self) -> bool {
        T::same_value(self, other)
    }
}
impl<T: SameValue> SameValue for Option<T> {
    fn same_value(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.same_value(b),
            (None, None) => true,
            _ => false,
        }
    }
}
impl<T: SameValue> SameValue for [T] {
    fn same_value(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().zip(other).all(|(a, b)| a.same_value(b))
    }
}
impl<T: SameValue> SameValue for Vec<T> {
    fn same_value(&self, other: &Self) -> bool {
        self.as_slice().same_value(other.as_slice())
    }
}
impl<T: SameValue> SameValue for VecDeque<T> {
    fn same_value(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().zip(other).all(|(a, b)| a.same_value(b))
    }
}
impl<K: SameValue, V: SameValue> SameValue for BTreeMap<K, V> {
    fn same_value(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().zip(other).all(|((k1, v1), (k2, v2))| {
                k1.same_value(k2) && v1.same_value(v2)
            })
    }
}
impl<A: SameValue, B: SameValue> SameValue for (A, B) {
    fn same_value(&self, other: &Self) -> bool {
        self.0.same_value(&other.0) && self.1.same_value(&other.1)
    }
}

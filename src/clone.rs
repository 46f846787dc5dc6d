//! Deep copies of caller-owned input.
//!
//! [`LazyList::from_array`](crate::LazyList::from_array) takes a snapshot of its
//! input with [`DeepCopy`] so later changes to the caller's data are never seen by
//! the list. Unlike [`Clone`], a deep copy gives shared and interior-mutable
//! containers (`Rc`, `RefCell`, `Cell`) fresh allocations.
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;

pub trait DeepCopy {
    fn deep_copy(&self) -> Self;
}

macro_rules! deep_copy_value {
    ($($t:ty),*) => {
        $(
            impl DeepCopy for $t {
                fn deep_copy(&self) -> Self {
                    self.clone()
                }
            }
        )*
    }
}

deep_copy_value! { (), bool, char, String }
deep_copy_value! { i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64 }

/// Borrowed data cannot be changed through the reference, so the reference itself
/// is the snapshot.
impl<T: ?Sized> DeepCopy for &T {
    fn deep_copy(&self) -> Self {
        *self
    }
}
impl<T: DeepCopy> DeepCopy for Box<T> {
    fn deep_copy(&self) -> Self {
        Box::new(T::deep_copy(self))
    }
}
impl<T: DeepCopy> DeepCopy for Rc<T> {
    fn deep_copy(&self) -> Self {
        Rc::new(T::deep_copy(self))
    }
}
impl<T: DeepCopy> DeepCopy for RefCell<T> {
    fn deep_copy(&self) -> Self {
        RefCell::new(T::deep_copy(&self.borrow()))
    }
}
impl<T: Copy> DeepCopy for Cell<T> {
    fn deep_copy(&self) -> Self {
        Cell::new(self.get())
    }
}
impl<T: DeepCopy> DeepCopy for Option<T> {
    fn deep_copy(&self) -> Self {
        self.as_ref().map(T::deep_copy)
    }
}
impl<T: DeepCopy> DeepCopy for Vec<T> {
    fn deep_copy(&self) -> Self {
        self.iter().map(T::deep_copy).collect()
    }
}
impl<T: DeepCopy> DeepCopy for VecDeque<T> {
    fn deep_copy(&self) -> Self {
        self.iter().map(T::deep_copy).collect()
    }
}
impl<K: Clone + Ord, V: DeepCopy> DeepCopy for BTreeMap<K, V> {
    fn deep_copy(&self) -> Self {
        self.iter()
            .map(|(k, v)| (k.clone(), v.deep_copy()))
            .collect()
    }
}
impl<K, V, S> DeepCopy for HashMap<K, V, S>
    where K: Clone + Eq + Hash,
        V: DeepCopy,
        S: BuildHasher + Clone
{
    fn deep_copy(&self) -> Self {
        let mut copy = HashMap::with_capacity_and_hasher(self.len(), self.hasher().clone());
        copy.extend(self.iter().map(|(k, v)| (k.clone(), v.deep_copy())));
        copy
    }
}
impl<A: DeepCopy, B: DeepCopy> DeepCopy for (A, B) {
    fn deep_copy(&self) -> Self {
        (self.0.deep_copy(), self.1.deep_copy())
    }
}
impl<A: DeepCopy, B: DeepCopy, C: DeepCopy> DeepCopy for (A, B, C) {
    fn deep_copy(&self) -> Self {
        (self.0.deep_copy(), self.1.deep_copy(), self.2.deep_copy())
    }
}

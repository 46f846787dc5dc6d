//! Persistent, lazily evaluated linked lists built out of deferred values.
//!
//! A [`Thunk`] is a zero-argument computation which runs every time it is forced.
//! A [`LazyList`] yields a [`Node`] when forced: either the end of the list,
//! or an [`Element`] head followed by another `LazyList`.
//!
//! Lists are never mutated. Every combinator returns a new list which closes over
//! its input and only forces it when its own nodes are pulled.
pub mod transform;
pub mod list;
pub mod value;
pub mod clone;
pub mod same;
pub mod error;
pub mod iter;
pub mod cell;

pub use clone::DeepCopy;
pub use error::LazyListError;
pub use list::{Element, LazyList, Node};
pub use same::SameValue;
pub use value::Value;

use std::rc::Rc;

pub trait Thunkable {
    type Item;
    fn resolve(&self) -> Self::Item;

    fn into_thunk<'a>(self) -> Thunk<'a, Self::Item>
        where Self: Sized + 'a
    {
        Thunk::new(self)
    }

    fn map<U, M: Fn(Self::Item) -> U>(self, f: M) -> transform::Map<Self, M>
        where Self: Sized
    {
        transform::Map(self, f)
    }
    fn and_then<U: Thunkable, M: Fn(Self::Item) -> U>(self, f: M) -> transform::AndThen<Self, M>
        where Self: Sized
    {
        transform::AndThen(self, f)
    }
    fn inspect<I: Fn(&Self::Item)>(self, f: I) -> transform::Inspect<Self, I>
        where Self: Sized
    {
        transform::Inspect(self, f)
    }
    /// Caches the first resolution. Later resolutions hand out clones.
    fn memoized(self) -> cell::Memo<Self>
        where Self: Sized,
            Self::Item: Clone
    {
        cell::Memo::new(self)
    }
}
impl<T, F: Fn() -> T> Thunkable for F {
    type Item = T;

    fn resolve(&self) -> Self::Item {
        self()
    }
}

/// A shared deferred value.
///
/// Forcing a thunk runs its computation again each time unless it was created
/// with [`Thunk::cached`]. Cloning a thunk shares the computation.
pub struct Thunk<'a, T>(Rc<dyn Thunkable<Item = T> + 'a>);

impl<'a, T> Thunk<'a, T> {
    pub fn new(f: impl Thunkable<Item = T> + 'a) -> Self {
        Thunk(Rc::new(f))
    }
    /// Wraps an already evaluated value.
    ///
    /// The argument is evaluated before the thunk exists, so `Thunk::of(n + 1)`
    /// holds a number and not a pending addition.
    pub fn of(t: T) -> Self
        where T: Clone + 'a
    {
        Thunk::new(transform::Known(t))
    }
    /// A thunk which panics when forced.
    pub fn undef() -> Self
        where T: 'a
    {
        Thunk::new(|| -> T { panic!("undef") })
    }
    pub fn force(&self) -> T {
        self.0.resolve()
    }
    /// Runs the computation at most once. Every force after the first clones
    /// the stored value.
    pub fn cached(self) -> Self
        where T: Clone + 'a
    {
        Thunk::new(self.memoized())
    }
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for Thunk<'_, T> {
    fn clone(&self) -> Self {
        Thunk(Rc::clone(&self.0))
    }
}
impl<'a, T> Thunkable for Thunk<'a, T> {
    type Item = T;

    fn resolve(&self) -> Self::Item {
        self.force()
    }
    fn into_thunk<'b>(self) -> Thunk<'b, Self::Item>
        where Self: 'b
    {
        self
    }
}
impl<T> std::ops::Not for Thunk<'_, T> {
    type Output = T;

    /// Forces a thunk.
    ///
    /// This syntax is inspired by the strict use of `!` in Haskell.
    fn not(self) -> Self::Output {
        self.force()
    }
}
impl<T> std::ops::Not for &Thunk<'_, T> {
    type Output = T;

    /// Forces a thunk.
    ///
    /// This syntax is inspired by the strict use of `!` in Haskell.
    fn not(self) -> Self::Output {
        self.force()
    }
}
impl<T> std::fmt::Debug for Thunk<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Thunk(..)")
    }
}
impl<'a, T: Default + 'a> Default for Thunk<'a, T> {
    fn default() -> Self {
        Thunk::new(T::default)
    }
}
impl<'a, T: Clone + 'a> From<T> for Thunk<'a, T> {
    fn from(value: T) -> Self {
        Thunk::of(value)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use crate::{Thunk, Thunkable};

    /// Creates a Thunk with a const value and a cell that counts how many times
    /// the value has been resolved.
    fn counted<'a, T: Clone + 'a>(t: T) -> (Rc<Cell<usize>>, Thunk<'a, T>) {
        let cell = Rc::new(Cell::new(0));
        let cell2 = Rc::clone(&cell);

        let thunk = Thunk::of(t)
            .inspect(move |_| cell.set(cell.get() + 1))
            .into_thunk();

        (cell2, thunk)
    }

    #[test]
    fn of_returns_the_value() {
        let s = Thunk::of("Hello, World!");
        let n = Thunk::of(11);
        assert_eq!(s.force(), "Hello, World!");
        assert_eq!(!&n, 11);
        assert_eq!(!n, 11);
    }

    #[test]
    fn of_captures_eagerly() {
        let mut x = 3;
        let t = Thunk::of(x + 3);
        x += 100;
        assert_eq!(t.force(), 6);
        assert_eq!(x, 103);
    }

    #[test]
    fn of_does_not_copy_shared_state() {
        let shared = Rc::new(RefCell::new(vec![0, 1, 2]));
        let t = Thunk::of(Rc::clone(&shared));
        shared.borrow_mut()[0] = 100;
        assert_eq!(t.force().borrow()[0], 100);
    }

    #[test]
    fn forcing_recomputes() {
        let (ct, x) = counted(2);
        assert_eq!(ct.get(), 0);

        let y = x.clone().map(|t| t + 14).into_thunk();
        assert_eq!(ct.get(), 0);

        assert_eq!(y.force(), 16);
        assert_eq!(y.force(), 16);
        assert_eq!(x.force(), 2);
        assert_eq!(ct.get(), 3);
    }

    #[test]
    fn cached_forces_once() {
        let (ct, x) = counted(String::from("hello"));
        let x = x.cached();

        assert_eq!(ct.get(), 0);
        assert_eq!(x.force(), "hello");
        assert_eq!(x.clone().force(), "hello");
        assert_eq!(ct.get(), 1);
    }

    #[test]
    fn and_then_flattens() {
        let inner = Thunk::of(5);
        let outer = Thunk::of(2).and_then(move |n| {
            let inner = inner.clone();
            move || inner.force() * n
        });
        assert_eq!(outer.resolve(), 10);
    }

    #[test]
    fn undef_is_lazy() {
        let x: Thunk<usize> = Thunk::undef();
        let y = x.clone().map(|n| n + 1).into_thunk();
        let z = y.clone();
        assert!(z.ptr_eq(&y));
        assert!(!x.ptr_eq(&y));
    }

    #[test]
    #[should_panic(expected = "undef")]
    fn undef_panics_when_forced() {
        let x: Thunk<usize> = Thunk::undef();
        x.force();
    }
}

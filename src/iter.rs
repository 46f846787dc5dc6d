//! Utilities to better handle [`Thunk`][`crate::Thunk`]s when used with iterators.

use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::list::{Element, LazyList};
use crate::{Thunk, Thunkable};

/// A set of methods to apply onto iterators to better interop with thunks.
///
/// These can be accessed by importing this trait.
pub trait ThunkItertools: Iterator {
    /// Like [`Iterator::map`], but instead of evaluating the result,
    /// it is delegated to a thunk which will lazily evaluate the result
    /// every time it is forced.
    fn map_delayed<'a, U, F>(self, f: F) -> MapDelayed<'a, Self, F>
        where Self: Sized,
            Self::Item: Clone + 'a,
            F: Fn(Self::Item) -> U + Clone + 'a
    {
        MapDelayed(self, f, PhantomData)
    }
    /// Resolves all the thunkables in this iterator and returns the values.
    fn resolved(self) -> Resolved<Self>
        where Self: Sized,
            Self::Item: Thunkable
    {
        Resolved(self)
    }
    /// Builds a [`LazyList`] out of the thunks in this iterator.
    ///
    /// Unlike [`Iterator::collect`] into a `Vec` of values, no thunk is forced here.
    /// The iterator itself is consumed right away.
    fn collect_list<'a, T: 'a>(self) -> LazyList<'a, T>
        where Self: Sized + Iterator<Item = Thunk<'a, T>>
    {
        LazyList::from_elements(self.map(Element::Scalar))
    }
}
impl<I: Iterator> ThunkItertools for I {}

/// Like [`Iterator::map`], but with lazy resolution. Created by [`ThunkItertools::map_delayed`].
pub struct MapDelayed<'a, I, F>(I, F, PhantomData<Thunk<'a, ()>>);
impl<'a, U, I, F> Iterator for MapDelayed<'a, I, F>
    where I: Iterator,
        I::Item: Clone + 'a,
        F: Fn(I::Item) -> U + Clone + 'a
{
    type Item = Thunk<'a, U>;

    fn next(&mut self) -> Option<Self::Item> {
        let f = self.1.clone();
        self.0.next()
            .map(|t| Thunk::of(t).map(f).into_thunk())
    }
}
impl<'a, U, I, F> DoubleEndedIterator for MapDelayed<'a, I, F>
    where I: DoubleEndedIterator,
        I::Item: Clone + 'a,
        F: Fn(I::Item) -> U + Clone + 'a
{
    fn next_back(&mut self) -> Option<Self::Item> {
        let f = self.1.clone();
        self.0.next_back()
            .map(|t| Thunk::of(t).map(f).into_thunk())
    }
}
impl<'a, U, I, F> ExactSizeIterator for MapDelayed<'a, I, F>
    where I: ExactSizeIterator,
        I::Item: Clone + 'a,
        F: Fn(I::Item) -> U + Clone + 'a
{
    fn len(&self) -> usize {
        self.0.len()
    }
}
impl<'a, U, I, F> FusedIterator for MapDelayed<'a, I, F>
    where I: FusedIterator,
        I::Item: Clone + 'a,
        F: Fn(I::Item) -> U + Clone + 'a
{}

/// Resolves every thunkable as it is pulled. Created by [`ThunkItertools::resolved`].
pub struct Resolved<I>(I);
impl<I> Iterator for Resolved<I>
    where I: Iterator,
        I::Item: Thunkable
{
    type Item = <I::Item as Thunkable>::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().as_ref().map(Thunkable::resolve)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}
impl<I> DoubleEndedIterator for Resolved<I>
    where I: DoubleEndedIterator,
        I::Item: Thunkable
{
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().as_ref().map(Thunkable::resolve)
    }
}
impl<I: ExactSizeIterator> ExactSizeIterator for Resolved<I>
    where I::Item: Thunkable
{}
impl<I: FusedIterator> FusedIterator for Resolved<I>
    where I::Item: Thunkable
{}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::iter::ThunkItertools;
    use crate::{values, LazyList, Thunk};

    #[test]
    fn map_delayed_defers() {
        let calls = Cell::new(0);
        let thunks: Vec<_> = (1..=3)
            .map_delayed(|n| {
                calls.set(calls.get() + 1);
                n * 10
            })
            .collect();
        assert_eq!(calls.get(), 0);

        let values: Vec<_> = thunks.iter().map(Thunk::force).collect();
        assert_eq!(values, [10, 20, 30]);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn map_delayed_reverse() {
        let values: Vec<_> = ["a", "b"].into_iter()
            .map_delayed(|s| s.repeat(2))
            .rev()
            .resolved()
            .collect();
        assert_eq!(values, ["bb", "aa"]);
    }

    #[test]
    fn resolved_elements() {
        let xs = LazyList::from_array(&values![1, [2, 3]]);
        let values: Vec<_> = xs.iter().resolved().collect();
        assert_eq!(values, values![1, [2, 3]]);
    }

    #[test]
    fn resolved_keeps_length() {
        let thunks = [Thunk::of(1), Thunk::of(2)];
        let it = thunks.iter().cloned().resolved();
        assert_eq!(it.len(), 2);
    }

    #[test]
    fn collect_list_stays_lazy() {
        let xs = [Thunk::of(1), Thunk::undef(), Thunk::of(3)]
            .into_iter()
            .collect_list();

        assert_eq!(xs.length(), 3);
        assert_eq!(xs.at(2).unwrap().force_scalar(), Some(3));
    }

    #[test]
    #[should_panic(expected = "undef")]
    fn collect_list_forces_on_demand() {
        let xs = [Thunk::of(1), Thunk::undef()]
            .into_iter()
            .collect_list();
        xs.unsafe_to_array();
    }
}

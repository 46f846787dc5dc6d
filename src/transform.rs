//! Adapters returned by the combinators on [`Thunkable`].
use crate::Thunkable;

/// A value which is already known. Resolving it hands out a clone.
pub struct Known<T>(pub(crate) T);
impl<T: Clone> Thunkable for Known<T> {
    type Item = T;

    fn resolve(&self) -> Self::Item {
        self.0.clone()
    }
}

pub struct Map<F, M>(pub(crate) F, pub(crate) M);
impl<U, F: Thunkable, M: Fn(F::Item) -> U> Thunkable for Map<F, M> {
    type Item = U;

    fn resolve(&self) -> Self::Item {
        (self.1)(self.0.resolve())
    }
}

pub struct AndThen<F, M>(pub(crate) F, pub(crate) M);
impl<U: Thunkable, F: Thunkable, M: Fn(F::Item) -> U> Thunkable for AndThen<F, M> {
    type Item = U::Item;

    fn resolve(&self) -> Self::Item {
        (self.1)(self.0.resolve()).resolve()
    }
}

pub struct Inspect<F, I>(pub(crate) F, pub(crate) I);
impl<F: Thunkable, I: Fn(&F::Item)> Thunkable for Inspect<F, I> {
    type Item = F::Item;

    fn resolve(&self) -> Self::Item {
        let t = self.0.resolve();
        (self.1)(&t);
        t
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use crate::Thunkable;
    use super::Known;

    #[test]
    fn map_chain() {
        let t = Known(3)
            .map(|n| n * 2)
            .map(|n| format!("<{n}>"));
        assert_eq!(t.resolve(), "<6>");
    }

    #[test]
    fn inspect_sees_each_resolution() {
        let seen = RefCell::new(vec![]);
        let t = Known('a').inspect(|c| seen.borrow_mut().push(*c));
        t.resolve();
        t.resolve();
        assert_eq!(*seen.borrow(), ['a', 'a']);
    }
}

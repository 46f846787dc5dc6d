//! Opt-in caching for thunkables.
use once_cell::unsync::OnceCell;

use crate::Thunkable;

/// Resolves the wrapped thunkable at most once.
///
/// Created by [`Thunkable::memoized`].
pub struct Memo<F: Thunkable> {
    value: OnceCell<F::Item>,
    init: F,
}
impl<F: Thunkable> Memo<F> {
    pub fn new(init: F) -> Self {
        Memo { value: OnceCell::new(), init }
    }
    pub fn get(&self) -> Option<&F::Item> {
        self.value.get()
    }
    pub fn is_initialized(&self) -> bool {
        self.value.get().is_some()
    }
}
impl<F: Thunkable> Thunkable for Memo<F>
    where F::Item: Clone
{
    type Item = F::Item;

    /// # Panics
    ///
    /// Panics if resolving the inner thunkable resolves this cell again.
    fn resolve(&self) -> Self::Item {
        self.value
            .get_or_init(|| self.init.resolve())
            .clone()
    }
}

use std::iter::FusedIterator;
use std::rc::Rc;

use crate::error::LazyListError;
use crate::same::SameValue;
use crate::{Thunk, Thunkable};

/// The head of a node: a deferred value, or a whole nested list.
///
/// Which one is decided when the list is built, from the shape of the input.
pub enum Element<'a, T> {
    Scalar(Thunk<'a, T>),
    Nested(LazyList<'a, T>),
}
impl<'a, T> Element<'a, T> {
    pub fn of(t: T) -> Self
        where T: Clone + 'a
    {
        Element::Scalar(Thunk::of(t))
    }
    /// Whether this element holds a nested list rather than a plain value.
    pub fn is_lazy_list(&self) -> bool {
        matches!(self, Element::Nested(_))
    }
    pub fn as_scalar(&self) -> Option<&Thunk<'a, T>> {
        match self {
            Element::Scalar(t) => Some(t),
            Element::Nested(_) => None,
        }
    }
    pub fn as_list(&self) -> Option<&LazyList<'a, T>> {
        match self {
            Element::Scalar(_) => None,
            Element::Nested(l) => Some(l),
        }
    }
    /// Forces a plain value. Returns None for a nested list.
    pub fn force_scalar(&self) -> Option<T> {
        self.as_scalar().map(Thunk::force)
    }
}
impl<T> Clone for Element<'_, T> {
    fn clone(&self) -> Self {
        match self {
            Element::Scalar(t) => Element::Scalar(t.clone()),
            Element::Nested(l) => Element::Nested(l.clone()),
        }
    }
}
impl<T> std::fmt::Debug for Element<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Element::Scalar(t) => f.debug_tuple("Scalar").field(t).finish(),
            Element::Nested(l) => f.debug_tuple("Nested").field(l).finish(),
        }
    }
}
impl<'a, T> From<Thunk<'a, T>> for Element<'a, T> {
    fn from(value: Thunk<'a, T>) -> Self {
        Element::Scalar(value)
    }
}
impl<'a, T> From<LazyList<'a, T>> for Element<'a, T> {
    fn from(value: LazyList<'a, T>) -> Self {
        Element::Nested(value)
    }
}

/// The forced shape of a list at one position.
pub enum Node<'a, T> {
    Empty,
    Cons(Element<'a, T>, LazyList<'a, T>),
}
impl<'a, T> Node<'a, T> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Node::Empty)
    }
    pub fn head(&self) -> Option<&Element<'a, T>> {
        match self {
            Node::Cons(head, _) => Some(head),
            Node::Empty => None,
        }
    }
    pub fn rest(&self) -> Option<&LazyList<'a, T>> {
        match self {
            Node::Cons(_, rest) => Some(rest),
            Node::Empty => None,
        }
    }
    pub fn into_parts(self) -> Option<(Element<'a, T>, LazyList<'a, T>)> {
        match self {
            Node::Cons(head, rest) => Some((head, rest)),
            Node::Empty => None,
        }
    }
}
impl<T> Clone for Node<'_, T> {
    fn clone(&self) -> Self {
        match self {
            Node::Empty => Node::Empty,
            Node::Cons(head, rest) => Node::Cons(head.clone(), rest.clone()),
        }
    }
}

/// A persistent singly-linked list whose nodes are produced on demand.
///
/// A list may be infinite. Operations which have to reach the end of the list
/// (`length`, `last`, `reversed`, `unsafe_to_array`, ...) will hang on one.
pub struct LazyList<'a, T>(Rc<Link<'a, T>>);

// Cells built by `cons` are kept apart from deferred nodes so that a long chain
// of them can be unlinked without recursing.
enum Link<'a, T> {
    Empty,
    Cons(Element<'a, T>, LazyList<'a, T>),
    Delayed(Thunk<'a, Node<'a, T>>),
}

impl<'a, T: 'a> LazyList<'a, T> {
    /// Creates a list from a function producing its first node.
    pub fn new(f: impl Fn() -> Node<'a, T> + 'a) -> Self {
        LazyList::from_thunk(Thunk::new(f))
    }
    pub fn from_thunk(thunk: Thunk<'a, Node<'a, T>>) -> Self {
        LazyList(Rc::new(Link::Delayed(thunk)))
    }
    pub fn empty() -> Self {
        LazyList(Rc::new(Link::Empty))
    }
    /// Puts an element in front of `rest`.
    pub fn cons(head: impl Into<Element<'a, T>>, rest: LazyList<'a, T>) -> Self {
        LazyList(Rc::new(Link::Cons(head.into(), rest)))
    }
    pub fn from_elements(elements: impl IntoIterator<Item = Element<'a, T>>) -> Self {
        let elements: Rc<[Element<'a, T>]> = elements.into_iter().collect();
        LazyList::from_shared(elements, 0)
    }
    fn from_shared(elements: Rc<[Element<'a, T>]>, idx: usize) -> Self {
        LazyList::new(move || match elements.get(idx) {
            Some(head) => Node::Cons(head.clone(), LazyList::from_shared(Rc::clone(&elements), idx + 1)),
            None => Node::Empty,
        })
    }
    pub fn from_vec(xs: Vec<T>) -> Self
        where T: Clone
    {
        LazyList::from_elements(xs.into_iter().map(Element::of))
    }

    /// Forces the first node of this list.
    pub fn force(&self) -> Node<'a, T> {
        match &*self.0 {
            Link::Empty => Node::Empty,
            Link::Cons(head, rest) => Node::Cons(head.clone(), rest.clone()),
            Link::Delayed(thunk) => thunk.force(),
        }
    }
    /// Whether both lists are the same shared list.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
    /// Iterates the elements, forcing one node per step.
    pub fn iter(&self) -> Iter<'a, T> {
        Iter(Some(self.clone()))
    }

    /// The first `n` elements. Empty when `n <= 0`.
    pub fn take(&self, n: i64) -> Self {
        let xs = self.clone();
        LazyList::new(move || {
            if n <= 0 {
                return Node::Empty;
            }
            match xs.force() {
                Node::Empty => Node::Empty,
                Node::Cons(head, rest) => Node::Cons(head, rest.take(n - 1)),
            }
        })
    }

    /// Applies `f` to every element when its node is forced.
    pub fn map_elements<U: 'a>(&self, f: impl Fn(Element<'a, T>) -> Element<'a, U> + 'a) -> LazyList<'a, U> {
        LazyList::map_with(self.clone(), Rc::new(f))
    }
    fn map_with<U: 'a>(xs: Self, f: Rc<dyn Fn(Element<'a, T>) -> Element<'a, U> + 'a>) -> LazyList<'a, U> {
        LazyList::new(move || match xs.force() {
            Node::Empty => Node::Empty,
            Node::Cons(head, rest) => Node::Cons(f(head), LazyList::map_with(rest, Rc::clone(&f))),
        })
    }
    /// Applies `f` to every plain value, including those inside nested lists.
    ///
    /// `f` runs when a value is forced, not when its node is.
    pub fn map<U: 'a>(&self, f: impl Fn(T) -> U + 'a) -> LazyList<'a, U> {
        let f: Rc<dyn Fn(T) -> U + 'a> = Rc::new(f);
        self.map_elements(move |head| map_element(head, &f))
    }

    /// Keeps the elements satisfying `pred`.
    ///
    /// Forcing a node of the result forces the input up to the next match.
    pub fn filter_elements(&self, pred: impl Fn(&Element<'a, T>) -> bool + 'a) -> Self {
        LazyList::filter_with(self.clone(), Rc::new(pred))
    }
    fn filter_with(xs: Self, pred: Rc<dyn Fn(&Element<'a, T>) -> bool + 'a>) -> Self {
        LazyList::new(move || {
            let mut node = xs.force();
            loop {
                match node {
                    Node::Empty => return Node::Empty,
                    Node::Cons(head, rest) if pred(&head) => {
                        return Node::Cons(head, LazyList::filter_with(rest, Rc::clone(&pred)));
                    },
                    Node::Cons(_, rest) => node = rest.force(),
                }
            }
        })
    }
    /// Keeps the plain values satisfying `pred`. Nested lists are kept as they are.
    pub fn filter(&self, pred: impl Fn(&T) -> bool + 'a) -> Self {
        self.filter_elements(move |head| match head {
            Element::Scalar(t) => pred(&t.force()),
            Element::Nested(_) => true,
        })
    }

    /// Right fold: `f(x1, f(x2, ... f(xn, init)))`.
    ///
    /// This recurses once per element, so a long enough list overflows the stack.
    pub fn foldr<U>(&self, init: U, f: impl Fn(Element<'a, T>, U) -> U) -> U {
        fn go<'a, T: 'a, U>(xs: &LazyList<'a, T>, init: U, f: &impl Fn(Element<'a, T>, U) -> U) -> U {
            match xs.force() {
                Node::Empty => init,
                Node::Cons(head, rest) => {
                    let acc = go(&rest, init, f);
                    f(head, acc)
                },
            }
        }

        go(self, init, &f)
    }
    /// Left fold written recursively.
    ///
    /// Rust does not guarantee tail calls, so this recurses once per element.
    /// Use [`LazyList::fold`] on long lists.
    pub fn foldl<U>(&self, init: U, f: impl Fn(U, Element<'a, T>) -> U) -> U {
        fn go<'a, T: 'a, U>(xs: &LazyList<'a, T>, acc: U, f: &impl Fn(U, Element<'a, T>) -> U) -> U {
            match xs.force() {
                Node::Empty => acc,
                Node::Cons(head, rest) => go(&rest, f(acc, head), f),
            }
        }

        go(self, init, &f)
    }
    /// Left fold in constant stack space.
    pub fn fold<U>(&self, init: U, f: impl FnMut(U, Element<'a, T>) -> U) -> U {
        self.iter().fold(init, f)
    }

    pub fn head(&self) -> Result<Element<'a, T>, LazyListError> {
        match self.force() {
            Node::Cons(head, _) => Ok(head),
            Node::Empty => Err(LazyListError::empty_list("head")),
        }
    }
    pub fn last(&self) -> Result<Element<'a, T>, LazyListError> {
        self.iter()
            .last()
            .ok_or_else(|| LazyListError::empty_list("last"))
    }
    /// Everything after the first element. The result shares its nodes with `self`.
    pub fn tail(&self) -> Result<Self, LazyListError> {
        match self.force() {
            Node::Cons(_, rest) => Ok(rest),
            Node::Empty => Err(LazyListError::empty_list("tail")),
        }
    }
    /// Everything but the last element.
    pub fn init(&self) -> Result<Self, LazyListError> {
        match self.force() {
            Node::Cons(head, rest) => Ok(LazyList::init_from(head, rest)),
            Node::Empty => Err(LazyListError::empty_list("init")),
        }
    }
    // `head` is only emitted once `rest` is known to be non-empty.
    fn init_from(head: Element<'a, T>, rest: Self) -> Self {
        LazyList::new(move || match rest.force() {
            Node::Empty => Node::Empty,
            Node::Cons(next, after) => Node::Cons(head.clone(), LazyList::init_from(next, after)),
        })
    }
    /// The element at a zero-based index.
    pub fn at(&self, idx: i64) -> Result<Element<'a, T>, LazyListError> {
        if idx < 0 {
            return Err(LazyListError::negative_index(idx));
        }

        let mut remaining = idx;
        let mut node = self.force();
        loop {
            match node {
                Node::Empty => {
                    let len = (idx - remaining) as usize;
                    return Err(LazyListError::out_of_range(idx, len));
                },
                Node::Cons(head, _) if remaining == 0 => return Ok(head),
                Node::Cons(_, rest) => {
                    remaining -= 1;
                    node = rest.force();
                },
            }
        }
    }

    pub fn prepended(&self, value: impl Into<Element<'a, T>>) -> Self {
        LazyList::cons(value, self.clone())
    }
    /// Appends an element at the end.
    ///
    /// The end is only looked for as the result is forced. On an infinite list it is
    /// never reached, so the result behaves exactly like `self`.
    pub fn pushed(&self, value: impl Into<Element<'a, T>>) -> Self {
        LazyList::pushed_with(self.clone(), value.into())
    }
    fn pushed_with(xs: Self, value: Element<'a, T>) -> Self {
        LazyList::new(move || match xs.force() {
            Node::Empty => Node::Cons(value.clone(), LazyList::empty()),
            Node::Cons(head, rest) => Node::Cons(head, LazyList::pushed_with(rest, value.clone())),
        })
    }

    /// Structural equality.
    ///
    /// Nested lists are compared recursively and plain values with [`SameValue`].
    /// A nested list is never equal to a plain value.
    pub fn is_equal(&self, other: &Self) -> bool
        where T: SameValue
    {
        let mut xs = self.force();
        let mut ys = other.force();
        loop {
            match (xs, ys) {
                (Node::Empty, Node::Empty) => return true,
                (Node::Cons(x, x_rest), Node::Cons(y, y_rest)) => {
                    let same = match (&x, &y) {
                        (Element::Nested(a), Element::Nested(b)) => a.is_equal(b),
                        (Element::Scalar(a), Element::Scalar(b)) => a.force().same_value(&b.force()),
                        _ => false,
                    };
                    if !same {
                        return false;
                    }
                    xs = x_rest.force();
                    ys = y_rest.force();
                },
                _ => return false,
            }
        }
    }
    pub fn is_empty(&self) -> bool {
        self.force().is_empty()
    }
    /// The number of elements in the outermost list.
    pub fn length(&self) -> usize {
        self.fold(0, |n, _| n + 1)
    }
    /// Reverses the outermost list. Nested lists keep their order.
    ///
    /// Nothing is forced until the result is.
    pub fn reversed(&self) -> Self {
        let xs = self.clone();
        let reversed = Thunk::new(move || {
            let mut elements: Vec<_> = xs.iter().collect();
            elements.reverse();
            LazyList::from_elements(elements)
        });

        LazyList::from(reversed.cached())
    }
}

impl<'a> LazyList<'a, i64> {
    /// Integers from `start` up to, not including, `end`.
    /// Without an `end` the list is infinite.
    pub fn range(start: i64, end: Option<i64>) -> Self {
        match end {
            Some(end) => LazyList::range_to(start, end),
            None => LazyList::range_from(start),
        }
    }
    /// Every integer from `start` upwards. Ends at `i64::MAX`.
    pub fn range_from(start: i64) -> Self {
        LazyList::new(move || {
            let rest = match start.checked_add(1) {
                Some(next) => LazyList::range_from(next),
                None => LazyList::empty(),
            };
            Node::Cons(Element::of(start), rest)
        })
    }
    fn range_to(start: i64, end: i64) -> Self {
        LazyList::new(move || {
            if start >= end {
                return Node::Empty;
            }
            let next = start + 1;
            Node::Cons(Element::of(start), LazyList::range_to(next, end))
        })
    }
}

fn map_element<'a, T: 'a, U: 'a>(head: Element<'a, T>, f: &Rc<dyn Fn(T) -> U + 'a>) -> Element<'a, U> {
    let f = Rc::clone(f);
    match head {
        Element::Scalar(t) => Element::Scalar(t.map(move |t| f(t)).into_thunk()),
        Element::Nested(l) => Element::Nested(l.map_elements(move |head| map_element(head, &f))),
    }
}

impl<T> Clone for LazyList<'_, T> {
    fn clone(&self) -> Self {
        LazyList(Rc::clone(&self.0))
    }
}
impl<T> Drop for LazyList<'_, T> {
    fn drop(&mut self) {
        while let Some(link) = Rc::get_mut(&mut self.0) {
            match std::mem::replace(link, Link::Empty) {
                Link::Cons(_, rest) => *self = rest,
                _ => break,
            }
        }
    }
}
impl<'a, T: 'a> Default for LazyList<'a, T> {
    fn default() -> Self {
        LazyList::empty()
    }
}
impl<T> std::fmt::Debug for LazyList<'_, T> {
    /// Does not force the list, which may be infinite.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("LazyList(..)")
    }
}
impl<'a, T: SameValue + 'a> PartialEq for LazyList<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}
impl<'a, T: 'a> From<Thunk<'a, LazyList<'a, T>>> for LazyList<'a, T> {
    /// Creates a list from a lazily computed list.
    ///
    /// The thunk is not forced until the list is.
    fn from(thunk: Thunk<'a, LazyList<'a, T>>) -> Self {
        LazyList::from_thunk(thunk.map(|list: LazyList<'a, T>| list.force()).into_thunk())
    }
}
impl<'a, T: Clone + 'a> FromIterator<T> for LazyList<'a, T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        LazyList::from_elements(iter.into_iter().map(Element::of))
    }
}
impl<'a, T: Clone + 'a, const N: usize> From<[T; N]> for LazyList<'a, T> {
    fn from(value: [T; N]) -> Self {
        LazyList::from_iter(value)
    }
}

pub struct Iter<'a, T>(Option<LazyList<'a, T>>);
impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = Element<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let (head, rest) = self.0.take()?.force().into_parts()?;
        self.0 = Some(rest);
        Some(head)
    }
}
impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

impl<'a, T: 'a> IntoIterator for LazyList<'a, T> {
    type Item = Element<'a, T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(Some(self))
    }
}
impl<'a, T: 'a> IntoIterator for &LazyList<'a, T> {
    type Item = Element<'a, T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

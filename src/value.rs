//! Eager nested values, and the conversions between them and [`LazyList`]s.
use std::fmt::Display;
use std::io::Write;

use crate::clone::DeepCopy;
use crate::list::{Element, LazyList};
use crate::Thunkable;

/// A fully evaluated element: a plain value, or a list of values.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<T> {
    Scalar(T),
    List(Vec<Value<T>>),
}
impl<T> Value<T> {
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }
    pub fn as_scalar(&self) -> Option<&T> {
        match self {
            Value::Scalar(t) => Some(t),
            Value::List(_) => None,
        }
    }
}
impl<T: DeepCopy> DeepCopy for Value<T> {
    fn deep_copy(&self) -> Self {
        match self {
            Value::Scalar(t) => Value::Scalar(t.deep_copy()),
            Value::List(vs) => Value::List(vs.deep_copy()),
        }
    }
}
impl<T: Display> Display for Value<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Scalar(t) => t.fmt(f),
            Value::List(vs) => {
                f.write_str("[")?;
                for (i, v) in vs.iter().enumerate() {
                    if i != 0 {
                        f.write_str(", ")?;
                    }
                    v.fmt(f)?;
                }
                f.write_str("]")
            },
        }
    }
}
impl<T> From<T> for Value<T> {
    fn from(value: T) -> Self {
        Value::Scalar(value)
    }
}

/// Creates a [`Value`] from a literal.
///
/// Bracketed groups become [`Value::List`]s and anything else is a [`Value::Scalar`].
/// Each list item must be a single token tree, so wrap negative numbers and other
/// compound expressions in parentheses.
///
/// ```
/// use lazy_thunk::{value, Value};
///
/// let v: Value<i32> = value!([1, [2, 3]]);
/// assert_eq!(v.to_string(), "[1, [2, 3]]");
/// ```
#[macro_export]
macro_rules! value {
    ([$($x:tt),* $(,)?]) => {
        $crate::Value::List(vec![$($crate::value!($x)),*])
    };
    ($x:expr) => {
        $crate::Value::Scalar($x)
    };
}

/// Creates a `Vec` of [`Value`]s, with the same syntax as [`value!`].
#[macro_export]
macro_rules! values {
    ($($x:tt),* $(,)?) => {
        vec![$($crate::value!($x)),*]
    };
}

impl<'a, T: Clone + 'a> Element<'a, T> {
    /// Forces this element completely, including every node of a nested list.
    pub fn force(&self) -> Value<T> {
        match self {
            Element::Scalar(t) => Value::Scalar(t.force()),
            Element::Nested(l) => Value::List(l.unsafe_to_array()),
        }
    }
}
impl<'a, T: Clone + 'a> Thunkable for Element<'a, T> {
    type Item = Value<T>;

    fn resolve(&self) -> Self::Item {
        self.force()
    }
}

impl<'a, T: Clone + 'a> LazyList<'a, T> {
    /// Creates a list out of a snapshot of `values`.
    ///
    /// The input is deep-copied first, so changing it afterwards, even through
    /// shared cells, does not change the list.
    pub fn from_array(values: &[Value<T>]) -> Self
        where T: DeepCopy
    {
        tracing::trace!(len = values.len(), "building list from array");
        let values: Vec<Value<T>> = values.iter().map(Value::deep_copy).collect();
        LazyList::from_values(values)
    }
    fn from_values(values: Vec<Value<T>>) -> Self {
        LazyList::from_elements(values.into_iter().map(|v| match v {
            Value::Scalar(t) => Element::of(t),
            Value::List(vs) => Element::Nested(LazyList::from_values(vs)),
        }))
    }

    /// Forces every node and every value of this list, including nested lists.
    ///
    /// This never returns on an infinite list.
    pub fn unsafe_to_array(&self) -> Vec<Value<T>> {
        let values: Vec<_> = self.iter()
            .map(|e| e.force())
            .collect();
        tracing::trace!(len = values.len(), "forced list to array");
        values
    }

    /// Prints every plain value of this list on its own line.
    pub fn print_list(&self) -> std::io::Result<()>
        where T: Display
    {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.write_list(&mut lock)?;
        lock.flush()
    }
    /// Writes every plain value of this list to `w` on its own line, one node at a time.
    ///
    /// Nested lists are written in place, so `[1, [2, 3], 4]` writes four lines.
    pub fn write_list<W: Write>(&self, w: &mut W) -> std::io::Result<()>
        where T: Display
    {
        let mut written = 0usize;
        for el in self {
            match el {
                Element::Scalar(t) => writeln!(w, "{}", t.force())?,
                Element::Nested(l) => l.write_list(&mut *w)?,
            }
            written += 1;
        }
        tracing::trace!(len = written, "wrote list");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use crate::{value, values, Element, LazyList, Value};

    #[test]
    fn round_trip() {
        let flat = values![1, 2, 3];
        assert_eq!(LazyList::from_array(&flat).unsafe_to_array(), flat);

        let nested = values![[[1, 2], [3, 4]], [[5], [6, 7, 8]], [], 9];
        assert_eq!(LazyList::from_array(&nested).unsafe_to_array(), nested);

        let empty: Vec<Value<i32>> = vec![];
        assert_eq!(LazyList::from_array(&empty).unsafe_to_array(), empty);
    }

    #[test]
    fn nested_elements_are_lists() {
        let xs = LazyList::from_array(&values![1, [2]]);
        let els: Vec<_> = xs.iter().map(|e| e.is_lazy_list()).collect();
        assert_eq!(els, [false, true]);
    }

    #[test]
    fn isolated_from_input() {
        let mut input = values![[[1, 2], [3, 4]], [[5], [6, 7, 8]]];
        let xs = LazyList::from_array(&input);

        if let Value::List(outer) = &mut input[0] {
            outer[0] = value!(10000);
        }
        input.push(value!(9));

        assert_eq!(xs.unsafe_to_array(), values![[[1, 2], [3, 4]], [[5], [6, 7, 8]]]);
    }

    #[test]
    fn isolated_from_shared_cells() {
        let shared = Rc::new(RefCell::new(vec![1, 2, 3]));
        let xs = LazyList::from_array(&[Value::Scalar(Rc::clone(&shared))]);

        shared.borrow_mut().push(4);

        let head = xs.head().unwrap().force_scalar().unwrap();
        assert_eq!(*head.borrow(), [1, 2, 3]);
        assert!(!Rc::ptr_eq(&head, &shared));
    }

    #[test]
    fn element_force() {
        let xs = LazyList::from_array(&values!["a", ["b", ["c"]]]);
        assert_eq!(xs.at(0).unwrap().force(), value!("a"));
        assert_eq!(xs.at(1).unwrap().force(), value!(["b", ["c"]]));

        let scalar: Element<i32> = Element::of(3);
        assert_eq!(scalar.force(), Value::Scalar(3));
    }

    #[test]
    fn value_accessors() {
        let xs = LazyList::from_array(&values![7, [8]]).unsafe_to_array();
        assert!(!xs[0].is_list());
        assert_eq!(xs[0].as_scalar(), Some(&7));
        assert!(xs[1].is_list());
        assert_eq!(xs[1].as_scalar(), None);
    }

    #[test]
    fn display() {
        assert_eq!(value!([1, [2, 3], []]).to_string(), "[1, [2, 3], []]");
        assert_eq!(value!("x").to_string(), "x");
    }

    #[test]
    fn write_list_lines() {
        let xs = LazyList::from_array(&values![1, [2, 3], [], 4]);
        let mut out = vec![];
        xs.write_list(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1\n2\n3\n4\n");
    }

    #[test]
    fn write_list_prefix_of_infinite() {
        let xs = LazyList::range(10, None).take(3);
        let mut out = vec![];
        xs.write_list(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "10\n11\n12\n");
    }

    #[test]
    fn print_list_smoke() {
        LazyList::from([1, 2, 3]).print_list().unwrap();
    }
}

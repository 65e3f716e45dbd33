//! Terminal operations: to_vec, to_map, reduce, sum
//!
//! Terminals drain their iterator. None of them may be used on an endless
//! iterator (`count` with a mismatched step, `repeat`) unless it is bounded
//! upstream with `limit` or `take_while`.
//!
//! When the source fails, the error carries whatever was accumulated before
//! the failure, see [`Partial`].
use super::core::Iter;
use super::keyvalue::KeyValue;
use crate::error::{finish, Partial};
use std::collections::HashMap;
use std::hash::Hash;

/// Values that can be summed by [`TerminalIterExt::sum`], starting from
/// their default value.
pub trait Summable: Default {
    fn accumulate(acc: Self, value: Self) -> Self;
}

macro_rules! summable_numbers {
    ($($t:ty),*) => {
        $(
            impl Summable for $t {
                fn accumulate(acc: Self, value: Self) -> Self {
                    acc + value
                }
            }
        )*
    };
}

summable_numbers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Strings are concatenated in order.
impl Summable for String {
    fn accumulate(mut acc: Self, value: Self) -> Self {
        acc.push_str(&value);
        acc
    }
}

pub trait TerminalIterExt: Iter + Sized {
    /// Collect every value, in order.
    fn to_vec(mut self) -> Result<Vec<Self::Item>, Partial<Vec<Self::Item>>> {
        let mut values = Vec::new();
        while let Some(value) = self.next() {
            values.push(value);
        }
        finish(values, self.error())
    }

    /// Collect key/value pairs into a map; later keys overwrite earlier ones.
    fn to_map<K, V>(mut self) -> Result<HashMap<K, V>, Partial<HashMap<K, V>>>
    where
        Self: Iter<Item = KeyValue<K, V>>,
        K: Eq + Hash,
    {
        let mut map = HashMap::new();
        while let Some(kv) = self.next() {
            map.insert(kv.key, kv.value);
        }
        finish(map, self.error())
    }

    /// Left fold: `f(f(f(initial, v0), v1), v2)...`
    ///
    /// ```ignore
    /// let length = from_slice(&["hello", "world"]).reduce(0, |a, v| a + v.len())?;
    /// ```
    fn reduce<A, F>(mut self, initial: A, mut f: F) -> Result<A, Partial<A>>
    where
        F: FnMut(A, Self::Item) -> A,
    {
        let mut acc = initial;
        while let Some(value) = self.next() {
            acc = f(acc, value);
        }
        finish(acc, self.error())
    }

    fn sum(self) -> Result<Self::Item, Partial<Self::Item>>
    where
        Self::Item: Summable,
    {
        self.reduce(<Self::Item as Default>::default(), <Self::Item as Summable>::accumulate)
    }
}

impl<T> TerminalIterExt for T where T: Iter {}

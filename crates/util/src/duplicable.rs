use serde_json::{Map, Value};

/// Values that know whether they need a fresh copy before being handed out.
///
/// Immutable scalars report `false` and are returned as they are; anything a
/// caller could mutate in place reports `true` and is copied with [`dup`].
///
/// [`dup`]: Duplicable::dup
pub trait Duplicable: Sized {
    /// Returns `true` when handing out `self` requires a copy.
    fn is_duplicable(&self) -> bool;

    /// Creates an independent copy of `self`.
    fn dup(&self) -> Self;

    /// Copies `self` when it is duplicable and passes it through otherwise.
    fn dup_if_needed(&self) -> Self
    where
        Self: Clone,
    {
        if self.is_duplicable() {
            self.dup()
        } else {
            self.clone()
        }
    }
}

impl Duplicable for Value {
    fn is_duplicable(&self) -> bool {
        matches!(self, Value::String(_) | Value::Array(_) | Value::Object(_))
    }

    fn dup(&self) -> Self {
        match self {
            Value::Null => Value::Null,
            Value::Bool(b) => Value::Bool(*b),
            Value::Number(n) => Value::Number(n.clone()),
            Value::String(s) => Value::String(s.clone()),
            Value::Array(arr) => Value::Array(arr.iter().map(Duplicable::dup).collect()),
            Value::Object(obj) => {
                let mut new_obj = Map::with_capacity(obj.len());
                for (key, val) in obj {
                    new_obj.insert(key.clone(), val.dup());
                }
                Value::Object(new_obj)
            }
        }
    }
}

impl Duplicable for String {
    fn is_duplicable(&self) -> bool {
        true
    }

    fn dup(&self) -> Self {
        self.clone()
    }
}

impl<T: Duplicable> Duplicable for Vec<T> {
    fn is_duplicable(&self) -> bool {
        true
    }

    fn dup(&self) -> Self {
        self.iter().map(Duplicable::dup).collect()
    }
}

macro_rules! copy_free {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Duplicable for $ty {
                fn is_duplicable(&self) -> bool {
                    false
                }

                fn dup(&self) -> Self {
                    *self
                }
            }
        )*
    };
}

copy_free!(bool, i32, i64, u32, u64, f64);

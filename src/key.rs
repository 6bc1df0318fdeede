use rustc_hash::FxHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// The normalized form of a property identifier
///
/// Every identifier handed to a [`PropertyStore`](crate::PropertyStore) is reduced to a `Key`
/// before it touches the underlying map. Distinct identifiers that hash to the same key share a
/// slot, so the most recent `set` wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(u64);

impl Key {
    /// Hashes any value into a key.
    pub fn of<T: Hash + ?Sized>(value: &T) -> Self {
        let mut hasher = FxHasher::default();
        value.hash(&mut hasher);
        Self(hasher.finish())
    }

    /// Builds the key for a numeric identifier, such as an enum discriminant.
    ///
    /// All numeric identifiers share this key space: `3u8`, `3i64` and the enum member whose
    /// discriminant is `3` all normalize to the same key.
    pub fn from_discriminant(discriminant: u64) -> Self {
        Self::of(&discriminant)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "key {:#018x}", self.0)
    }
}

/// Anything that can address a property in a [`PropertyStore`](crate::PropertyStore)
///
/// Implementations exist for the integer primitives, `bool`, `char` and strings. Identifier
/// namespaces are declared with [`property_ids!`](crate::property_ids), and small `Copy` structs
/// can opt in with [`value_id!`](crate::value_id).
///
/// Types without this capability cannot be used as identifiers at all.
pub trait PropertyId {
    /// Normalizes this identifier into the store's key space.
    fn key(&self) -> Key;
}

impl PropertyId for Key {
    fn key(&self) -> Key {
        *self
    }
}

impl<T: PropertyId + ?Sized> PropertyId for &T {
    fn key(&self) -> Key {
        (**self).key()
    }
}

macro_rules! impl_numeric_ids {
    ($($ty:ty),+) => {$(
        impl PropertyId for $ty {
            fn key(&self) -> Key {
                Key::from_discriminant(*self as u64)
            }
        }
    )+};
}

impl_numeric_ids!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl PropertyId for bool {
    fn key(&self) -> Key {
        Key::from_discriminant(u64::from(*self))
    }
}

impl PropertyId for char {
    fn key(&self) -> Key {
        Key::from_discriminant(u64::from(*self))
    }
}

impl PropertyId for str {
    fn key(&self) -> Key {
        Key::of(self)
    }
}

impl PropertyId for String {
    fn key(&self) -> Key {
        self.as_str().key()
    }
}

impl PropertyId for Box<str> {
    fn key(&self) -> Key {
        (**self).key()
    }
}

/// Declares one or more identifier namespaces
///
/// Each enum gets `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq` and `Hash`, and a
/// [`PropertyId`] implementation keyed on the member's discriminant. Namespaces are
/// not isolated from each other: members of different namespaces with the same
/// discriminant address the same slot.
///
/// ```
/// use sovran_props::{property_ids, PropertyId};
///
/// property_ids! {
///     pub enum ShipPropertyId {
///         Invalid,
///         Hull,
///         Crew,
///     }
/// }
///
/// assert_eq!(ShipPropertyId::Crew.key(), 2u32.key());
/// ```
#[macro_export]
macro_rules! property_ids {
    ($(
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident $(= $value:expr)?),* $(,)?
        }
    )+) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$vmeta])* $variant $(= $value)?),*
        }

        impl $crate::PropertyId for $name {
            fn key(&self) -> $crate::Key {
                $crate::Key::from_discriminant(*self as u64)
            }
        }
    )+};
}

/// Lets small `Copy + Eq + Hash` value types act as identifiers, keyed by their own value
///
/// ```
/// use sovran_props::{value_id, PropertyId};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash)]
/// struct Slot {
///     row: u8,
///     column: u8,
/// }
///
/// value_id!(Slot);
///
/// let a = Slot { row: 1, column: 2 };
/// assert_eq!(a.key(), Slot { row: 1, column: 2 }.key());
/// assert_ne!(a.key(), Slot { row: 2, column: 1 }.key());
/// ```
#[macro_export]
macro_rules! value_id {
    ($($ty:ty),+ $(,)?) => {$(
        const _: fn() = || {
            fn trivially_comparable<T: ::core::marker::Copy + ::core::cmp::Eq + ::core::hash::Hash>() {}
            trivially_comparable::<$ty>();
        };

        impl $crate::PropertyId for $ty {
            fn key(&self) -> $crate::Key {
                $crate::Key::of(self)
            }
        }
    )+};
}

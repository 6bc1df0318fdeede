use std::any::{self, Any, TypeId};
use std::fmt;
use std::mem;

/// Holds exactly one property value of a single concrete type
///
/// The type of a cell is fixed when it is created. Only the value can change afterwards.
///
/// ```
/// use sovran_props::ValueCell;
///
/// let mut cell = ValueCell::new(10u32);
/// assert_eq!(cell.set(12), 10);
/// assert_eq!(*cell.get(), 12);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueCell<T> {
    value: T,
}

impl<T> ValueCell<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Replaces the held value, returning the previous one.
    pub fn set(&mut self, value: T) -> T {
        mem::replace(&mut self.value, value)
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

/// The capability every `ValueCell<T>` exposes once its type has been erased
pub(crate) trait ErasedCell: Send {
    fn type_name(&self) -> &'static str;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any + Send> ErasedCell for ValueCell<T> {
    fn type_name(&self) -> &'static str {
        any::type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A type-erased cell plus the type tag it was created with
pub(crate) struct AnyValue {
    type_id: TypeId,
    cell: Box<dyn ErasedCell>,
}

impl AnyValue {
    /// Wrap a value in a new cell
    pub(crate) fn new<T: Any + Send>(value: T) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            cell: Box::new(ValueCell::new(value)),
        }
    }

    /// Check if the cell holds a `T`
    pub(crate) fn is_type<T: Any>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    pub(crate) fn type_name(&self) -> &'static str {
        self.cell.type_name()
    }

    /// The cell as a `ValueCell<T>`, if it was created with a `T`
    ///
    /// Identity is decided by the `TypeId` constant recorded in [`new`](Self::new); the
    /// `Any` downcast afterwards only re-confirms what the tag already proved.
    pub(crate) fn cell<T: Any>(&self) -> Option<&ValueCell<T>> {
        if !self.is_type::<T>() {
            return None;
        }
        self.cell.as_any().downcast_ref::<ValueCell<T>>()
    }

    pub(crate) fn cell_mut<T: Any>(&mut self) -> Option<&mut ValueCell<T>> {
        if !self.is_type::<T>() {
            return None;
        }
        self.cell.as_any_mut().downcast_mut::<ValueCell<T>>()
    }

    /// Copy the value out if the cell holds a `T`, otherwise `None`
    pub(crate) fn try_get<T: Any + Clone>(&self) -> Option<T> {
        self.cell::<T>().map(|cell| cell.get().clone())
    }
}

impl fmt::Debug for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("AnyValue")
            .field("type", &self.type_name())
            .finish_non_exhaustive()
    }
}

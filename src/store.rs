use crate::any_value::{AnyValue, ValueCell};
use crate::config::{MismatchPolicy, StoreConfig};
use crate::error::StoreError;
use crate::key::{Key, PropertyId};
use log::{error, trace, warn};
use rustc_hash::FxHashMap;
use std::any::{self, Any};

/// A heterogeneous map from identifiers to values of arbitrary types
///
/// Identifiers of any [`PropertyId`] type can be mixed freely; they are normalized into a
/// single key space. Each stored value keeps the type it was set with, and reading it back
/// as another type is treated according to the store's [`MismatchPolicy`].
///
/// The store does no locking of its own. Wrap it in a `Mutex` or `RwLock` to share it
/// between threads.
///
/// # Examples
///
/// ```
/// use sovran_props::{PropertyStore, StoreConfig};
///
/// let mut store = PropertyStore::with_config(StoreConfig::lenient());
/// store.set("name", String::from("Barracks"));
/// store.set(7u32, 250i32);
///
/// assert_eq!(store.get::<String>("name").as_deref(), Some("Barracks"));
/// assert_eq!(store.get_or(7u32, 0i32), 250);
///
/// // Wrong type, handled as if the property were missing
/// assert_eq!(store.get_or(7u32, 1.0f32), 1.0);
/// ```
#[derive(Debug, Default)]
pub struct PropertyStore {
    items: FxHashMap<Key, AnyValue>,
    config: StoreConfig,
}

impl PropertyStore {
    /// Creates an empty store using the build profile's default configuration
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Creates an empty store with an explicit configuration
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            items: FxHashMap::default(),
            config,
        }
    }

    pub fn config(&self) -> StoreConfig {
        self.config
    }

    /// Stores a value, replacing whatever was previously held under the same key
    ///
    /// The replaced value may have had a different type; the new cell always takes the type
    /// of `value`.
    pub fn set<T>(&mut self, id: impl PropertyId, value: T)
    where
        T: Any + Send,
    {
        let key = id.key();
        match self.items.insert(key, AnyValue::new(value)) {
            Some(previous) => trace!(
                "replaced {} (`{}` -> `{}`)",
                key,
                previous.type_name(),
                any::type_name::<T>()
            ),
            None => trace!("set {} as `{}`", key, any::type_name::<T>()),
        }
    }

    /// Retrieves a copy of a value
    ///
    /// Returns `None` if nothing was stored under `id`. If a value of another type is stored
    /// there, the configured [`MismatchPolicy`] applies: `Abort` panics, `Fallback` logs a
    /// warning and returns `None`.
    ///
    /// # Panics
    ///
    /// On a type mismatch when the policy is [`MismatchPolicy::Abort`].
    pub fn get<T>(&self, id: impl PropertyId) -> Option<T>
    where
        T: Any + Clone,
    {
        match self.try_get::<T>(id) {
            Ok(value) => Some(value),
            Err(StoreError::KeyNotFound(key)) => {
                trace!("get {}: not set", key);
                None
            }
            Err(err) => self.on_mismatch(err),
        }
    }

    /// Retrieves a copy of a value, or `fallback` if it is missing or of another type
    ///
    /// # Panics
    ///
    /// On a type mismatch when the policy is [`MismatchPolicy::Abort`].
    pub fn get_or<T>(&self, id: impl PropertyId, fallback: T) -> T
    where
        T: Any + Clone,
    {
        self.get(id).unwrap_or(fallback)
    }

    /// Retrieves a copy of a value, reporting why it could not be read
    ///
    /// Unlike [`get`](Self::get), this never panics; a type mismatch is returned as an error
    /// whatever the configured policy.
    ///
    /// # Errors
    ///
    /// - Returns `StoreError::KeyNotFound` if nothing was stored under `id`
    /// - Returns `StoreError::TypeMismatch` if the stored value is not a `T`
    pub fn try_get<T>(&self, id: impl PropertyId) -> Result<T, StoreError>
    where
        T: Any + Clone,
    {
        let key = id.key();
        let entry = self.entry(key)?;
        entry
            .try_get::<T>()
            .ok_or_else(|| mismatch::<T>(key, entry))
    }

    /// Runs a closure with read access to a value, without cloning it
    ///
    /// ```
    /// use sovran_props::PropertyStore;
    ///
    /// let mut store = PropertyStore::new();
    /// store.set(1u8, vec![3, 1, 2]);
    ///
    /// let largest = store.with(1u8, |v: &Vec<i32>| v.iter().copied().max())?;
    /// assert_eq!(largest, Some(3));
    /// # Ok::<(), sovran_props::StoreError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// - Returns `StoreError::KeyNotFound` if nothing was stored under `id`
    /// - Returns `StoreError::TypeMismatch` if the stored value is not a `T`
    pub fn with<T, R, F>(&self, id: impl PropertyId, f: F) -> Result<R, StoreError>
    where
        T: Any,
        F: FnOnce(&T) -> R,
    {
        let key = id.key();
        let entry = self.entry(key)?;
        let cell = entry.cell::<T>().ok_or_else(|| mismatch::<T>(key, entry))?;
        Ok(f(cell.get()))
    }

    /// Runs a closure with write access to a value, modifying it in place
    ///
    /// # Errors
    ///
    /// - Returns `StoreError::KeyNotFound` if nothing was stored under `id`
    /// - Returns `StoreError::TypeMismatch` if the stored value is not a `T`
    pub fn with_mut<T, R, F>(&mut self, id: impl PropertyId, f: F) -> Result<R, StoreError>
    where
        T: Any,
        F: FnOnce(&mut T) -> R,
    {
        let cell = self.cell_mut::<T>(id.key())?;
        Ok(f(cell.get_mut()))
    }

    /// Reassigns the value of an existing property, keeping its type
    ///
    /// Returns the previous value. Unlike [`set`](Self::set), this refuses to change the
    /// stored type.
    ///
    /// # Errors
    ///
    /// - Returns `StoreError::KeyNotFound` if nothing was stored under `id`
    /// - Returns `StoreError::TypeMismatch` if the stored value is not a `T`
    pub fn replace<T>(&mut self, id: impl PropertyId, value: T) -> Result<T, StoreError>
    where
        T: Any,
    {
        let key = id.key();
        let previous = self.cell_mut::<T>(key)?.set(value);
        trace!("reassigned {}", key);
        Ok(previous)
    }

    /// Returns true if a value of any type is stored under `id`
    pub fn contains(&self, id: impl PropertyId) -> bool {
        self.items.contains_key(&id.key())
    }

    /// Returns the number of occupied slots
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the store holds no properties
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn entry(&self, key: Key) -> Result<&AnyValue, StoreError> {
        self.items.get(&key).ok_or(StoreError::KeyNotFound(key))
    }

    fn cell_mut<T: Any>(&mut self, key: Key) -> Result<&mut ValueCell<T>, StoreError> {
        let entry = self
            .items
            .get_mut(&key)
            .ok_or(StoreError::KeyNotFound(key))?;
        let stored = entry.type_name();
        entry.cell_mut::<T>().ok_or(StoreError::TypeMismatch {
            key,
            stored,
            requested: any::type_name::<T>(),
        })
    }

    fn on_mismatch<T>(&self, err: StoreError) -> Option<T> {
        match self.config.mismatch_policy() {
            MismatchPolicy::Abort => {
                error!("{}", err);
                panic!("{}", err);
            }
            MismatchPolicy::Fallback => {
                warn!("{}; treating as absent", err);
                None
            }
        }
    }
}

fn mismatch<T>(key: Key, entry: &AnyValue) -> StoreError {
    StoreError::TypeMismatch {
        key,
        stored: entry.type_name(),
        requested: any::type_name::<T>(),
    }
}

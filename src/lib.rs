//! # sovran-props
//!
//! A type-safe heterogeneous property store.
//!
//! `sovran-props` associates identifiers with values of arbitrary, unrelated types. Values
//! are read back by naming the expected type; asking for the wrong type never hands out a
//! wrongly-typed value. There is no closed list of storable types and no registration step.
//!
//! ## Key Features
//!
//! - **Any value type**: anything `'static + Send` can be stored
//! - **Mixed identifiers**: enum namespaces, integers, strings and small `Copy` structs
//!   all address the same store
//! - **Fail fast or degrade**: type mismatches panic in debug builds and fall back
//!   to "absent" in release builds, configurable per store
//! - **Cheap**: one hash lookup and one type tag comparison per read
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use sovran_props::{Bounds, BuildingPropertyId, BuildingType, Entity, EntityType};
//!
//! let mut entity = Entity::new(EntityType::Building);
//! entity
//!     .properties_mut()
//!     .set(BuildingPropertyId::BuildingType, BuildingType::TownCenter);
//! entity
//!     .properties_mut()
//!     .set(BuildingPropertyId::Bounds, Bounds::new(0, 0, 2, 2));
//!
//! let kind = entity
//!     .properties()
//!     .get_or(BuildingPropertyId::BuildingType, BuildingType::Invalid);
//! assert_eq!(kind, BuildingType::TownCenter);
//!
//! // Never set, so the fallback comes back
//! assert_eq!(entity.properties().get_or(BuildingPropertyId::Invalid, 0), 0);
//! ```
//!
//! ### Declaring Your Own Namespaces
//!
//! ```rust
//! use sovran_props::{property_ids, PropertyStore};
//!
//! property_ids! {
//!     pub enum QuestPropertyId {
//!         Title,
//!         Reward,
//!     }
//! }
//!
//! let mut quest = PropertyStore::new();
//! quest.set(QuestPropertyId::Title, String::from("Clear the mine"));
//! quest.set(QuestPropertyId::Reward, 150u32);
//!
//! assert_eq!(quest.get::<u32>(QuestPropertyId::Reward), Some(150));
//! ```
//!
//! Namespaces share one key space. Members of two namespaces with the same discriminant
//! address the same slot, so keep the namespaces used on one store disjoint.
//!
//! ### Error Handling
//!
//! ```rust
//! use sovran_props::{PropertyStore, StoreError};
//!
//! let mut store = PropertyStore::new();
//! store.set("speed", 1.25f32);
//!
//! match store.try_get::<u32>("speed") {
//!     Ok(value) => println!("Speed: {}", value),
//!     Err(StoreError::KeyNotFound(key)) => println!("{} is not set", key),
//!     Err(StoreError::TypeMismatch { stored, .. }) => println!("speed is a {}", stored),
//! }
//! ```
//!
//! ### Choosing the Mismatch Policy
//!
//! ```rust
//! use sovran_props::{MismatchPolicy, PropertyStore, StoreConfig};
//!
//! let mut store = PropertyStore::with_config(StoreConfig::lenient());
//! store.set(1u8, "one");
//!
//! // Would panic under MismatchPolicy::Abort
//! assert_eq!(store.get::<u64>(1u8), None);
//! assert_eq!(store.config().mismatch_policy(), MismatchPolicy::Fallback);
//! ```

mod any_value;
mod bounds;
mod catalog;
mod config;
mod entity;
mod error;
mod key;
mod store;

pub use any_value::ValueCell;
pub use bounds::Bounds;
pub use catalog::{
    BuildingPropertyId, BuildingType, CommonPropertyId, EntityType, ResourceType,
    UnitPropertyId, UnitType,
};
pub use config::{MismatchPolicy, StoreConfig};
pub use entity::Entity;
pub use error::StoreError;
pub use key::{Key, PropertyId};
pub use store::PropertyStore;

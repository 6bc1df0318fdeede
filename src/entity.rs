use crate::catalog::EntityType;
use crate::config::StoreConfig;
use crate::store::PropertyStore;

/// A game object that owns a property store for its whole lifetime
///
/// ```
/// use sovran_props::{Bounds, BuildingPropertyId, Entity, EntityType};
///
/// let mut barracks = Entity::new(EntityType::Building);
/// barracks
///     .properties_mut()
///     .set(BuildingPropertyId::Bounds, Bounds::new(4, 4, 3, 3));
///
/// let bounds = barracks
///     .properties()
///     .get_or(BuildingPropertyId::Bounds, Bounds::default());
/// assert!(bounds.contains(5, 6));
/// ```
#[derive(Debug)]
pub struct Entity {
    kind: EntityType,
    properties: PropertyStore,
}

impl Entity {
    pub fn new(kind: EntityType) -> Self {
        Self::with_config(kind, StoreConfig::default())
    }

    pub fn with_config(kind: EntityType, config: StoreConfig) -> Self {
        Self {
            kind,
            properties: PropertyStore::with_config(config),
        }
    }

    pub fn kind(&self) -> EntityType {
        self.kind
    }

    pub fn properties(&self) -> &PropertyStore {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut PropertyStore {
        &mut self.properties
    }
}

//! Enumerations describing game objects
//!
//! The `*Type` enums are plain values that can be stored as properties. The `*PropertyId`
//! enums are identifier namespaces, one per category of property.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EntityType {
    #[default]
    Invalid,
    Building,
    Unit,
    Resource,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BuildingType {
    #[default]
    Invalid,
    TownCenter,
    Barracks,
    ArcheryRange,
    Stable,
    Monastery,
    SiegeWorkshop,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UnitType {
    #[default]
    Invalid,
    Worker,
    Archer,
    Swordman,
    Horseman,
    Monk,
    Mangonel,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ResourceType {
    #[default]
    Invalid,
    Food,
    Wood,
    Gold,
}

crate::property_ids! {
    /// Properties every entity may carry
    pub enum CommonPropertyId {
        Invalid,
        HealthPoints,
        Bounds,
    }

    /// Properties specific to buildings
    pub enum BuildingPropertyId {
        Invalid,
        BuildingType,
        Bounds,
    }

    /// Properties specific to units
    pub enum UnitPropertyId {
        Invalid,
        MovementSpeed,
    }
}

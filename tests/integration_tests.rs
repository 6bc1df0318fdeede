use sovran_props::{
    property_ids, value_id, Bounds, BuildingPropertyId, BuildingType, CommonPropertyId, Entity,
    EntityType, MismatchPolicy, PropertyId, PropertyStore, ResourceType, StoreConfig, StoreError,
    UnitPropertyId, UnitType,
};
use std::sync::{Arc, Mutex};
use std::thread;

property_ids! {
    enum ResourcePropertyId {
        Invalid,
        ResourceType,
        Amount,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Tile {
    x: i16,
    y: i16,
}

value_id!(Tile);

fn town_center(config: StoreConfig) -> Entity {
    let mut entity = Entity::with_config(EntityType::Building, config);
    entity
        .properties_mut()
        .set(BuildingPropertyId::BuildingType, BuildingType::TownCenter);
    entity
        .properties_mut()
        .set(BuildingPropertyId::Bounds, Bounds::new(0, 0, 2, 2));
    entity
}

#[test]
fn test_town_center_scenario() {
    let entity = town_center(StoreConfig::lenient());
    let props = entity.properties();

    assert_eq!(entity.kind(), EntityType::Building);
    assert_eq!(
        props.get_or(BuildingPropertyId::BuildingType, BuildingType::Invalid),
        BuildingType::TownCenter
    );
    // Wrong type: an integer was asked for, an enum is stored
    assert_eq!(props.get_or(BuildingPropertyId::BuildingType, 0), 0);
    // Never set
    assert_eq!(props.get_or(BuildingPropertyId::Invalid, 0), 0);

    let bounds = props.get_or(BuildingPropertyId::Bounds, Bounds::default());
    assert!(bounds.contains(0, 0));
    assert!(bounds.contains(2, 2));
    assert!(!bounds.contains(3, 3));
    assert!(!bounds.contains(-1, 0));
}

#[test]
#[should_panic]
fn test_town_center_scenario_diagnostic() {
    let entity = town_center(StoreConfig::diagnostic());
    let _ = entity
        .properties()
        .get_or(BuildingPropertyId::BuildingType, 0);
}

#[test]
fn test_diagnostic_tolerates_missing() {
    let entity = town_center(StoreConfig::diagnostic());
    assert_eq!(entity.properties().get_or(BuildingPropertyId::Invalid, 0), 0);
}

#[test]
fn test_entity_default_config() {
    let entity = Entity::new(EntityType::Unit);
    assert_eq!(
        entity.properties().config().mismatch_policy(),
        MismatchPolicy::for_build()
    );
    assert!(entity.properties().is_empty());
}

#[test]
fn test_unit_properties() -> Result<(), StoreError> {
    let mut worker = Entity::with_config(EntityType::Unit, StoreConfig::lenient());
    let props = worker.properties_mut();

    props.set(CommonPropertyId::HealthPoints, 25u32);
    props.set(UnitPropertyId::MovementSpeed, 0.75f32);

    props.with_mut(UnitPropertyId::MovementSpeed, |speed: &mut f32| {
        *speed *= 2.0;
    })?;
    props.replace(CommonPropertyId::HealthPoints, 20u32)?;

    assert_eq!(props.get::<f32>(UnitPropertyId::MovementSpeed), Some(1.5));
    assert_eq!(props.get::<u32>(CommonPropertyId::HealthPoints), Some(20));
    assert_eq!(props.get::<UnitType>(UnitPropertyId::Invalid), None);
    Ok(())
}

#[test]
fn test_caller_defined_namespace() {
    let mut mine = Entity::with_config(EntityType::Resource, StoreConfig::lenient());
    let props = mine.properties_mut();

    props.set(ResourcePropertyId::ResourceType, ResourceType::Gold);
    props.set(ResourcePropertyId::Amount, 800u32);

    assert_eq!(
        props.get_or(ResourcePropertyId::ResourceType, ResourceType::Invalid),
        ResourceType::Gold
    );
    assert_eq!(props.get_or(ResourcePropertyId::Amount, 0u32), 800);
    assert_eq!(props.get_or(ResourcePropertyId::Invalid, 0u32), 0);
}

#[test]
fn test_namespaces_collide() {
    let mut store = PropertyStore::with_config(StoreConfig::lenient());

    // ResourcePropertyId::ResourceType and BuildingPropertyId::BuildingType are both 1
    store.set(BuildingPropertyId::BuildingType, BuildingType::Barracks);
    store.set(ResourcePropertyId::ResourceType, ResourceType::Wood);

    assert_eq!(
        BuildingPropertyId::BuildingType.key(),
        ResourcePropertyId::ResourceType.key()
    );
    assert_eq!(store.len(), 1);
    assert_eq!(
        store.get_or(BuildingPropertyId::BuildingType, BuildingType::Invalid),
        BuildingType::Invalid
    );
    assert_eq!(
        store.get_or(BuildingPropertyId::BuildingType, ResourceType::Invalid),
        ResourceType::Wood
    );
}

#[test]
fn test_value_identifiers() {
    let mut store = PropertyStore::with_config(StoreConfig::lenient());
    store.set(Tile { x: 3, y: 4 }, ResourceType::Food);
    store.set(Tile { x: 4, y: 3 }, ResourceType::Gold);

    assert_eq!(
        store.get::<ResourceType>(Tile { x: 3, y: 4 }),
        Some(ResourceType::Food)
    );
    assert_eq!(
        store.get::<ResourceType>(Tile { x: 4, y: 3 }),
        Some(ResourceType::Gold)
    );
    assert_eq!(store.get::<ResourceType>(Tile { x: 0, y: 0 }), None);
}

#[test]
fn test_error_display() {
    let mut store = PropertyStore::with_config(StoreConfig::lenient());
    store.set("rally point", Bounds::new(9, 9, 0, 0));

    let err = store.try_get::<u64>("rally point").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Bounds"));
    assert!(message.contains("`u64`"));

    let err = store.try_get::<u64>("gather point").unwrap_err();
    assert!(err.to_string().starts_with("no property stored under key"));
}

#[test]
fn test_external_locking() {
    let store = Arc::new(Mutex::new(PropertyStore::with_config(StoreConfig::lenient())));
    store
        .lock()
        .unwrap()
        .set(CommonPropertyId::HealthPoints, 0u32);

    let mut handles = vec![];
    for _ in 0..8 {
        let store = Arc::clone(&store);
        handles.push(thread::spawn(move || {
            for _ in 0..50 {
                store
                    .lock()
                    .unwrap()
                    .with_mut(CommonPropertyId::HealthPoints, |hp: &mut u32| *hp += 1)
                    .unwrap();
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    let hp = store
        .lock()
        .unwrap()
        .get_or(CommonPropertyId::HealthPoints, 0u32);
    assert_eq!(hp, 400);
}

use log::{info, LevelFilter};
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Config;
use sovran_props::{
    Bounds, BuildingPropertyId, BuildingType, Entity, EntityType, StoreConfig, StoreError,
};

// Use an ISO 8601 timestamp format and color coded level tag
const LOG_PATTERN: &str = "{d(%Y-%m-%dT%H:%M:%SZ)} {h({l})} {t} - {m}{n}";

fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Trace))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;

    // Lenient so the wrong-type lookup below degrades instead of panicking
    let mut entity = Entity::with_config(EntityType::Building, StoreConfig::lenient());
    entity
        .properties_mut()
        .set(BuildingPropertyId::BuildingType, BuildingType::TownCenter);
    entity
        .properties_mut()
        .set(BuildingPropertyId::Bounds, Bounds::new(0, 0, 2, 2));

    let props = entity.properties();

    let building = props.get_or(BuildingPropertyId::BuildingType, BuildingType::Invalid);
    info!("building type: {:?}", building);

    let as_int = props.get_or(BuildingPropertyId::BuildingType, 0);
    info!("building type read as an integer: {}", as_int);

    let missing = props.get_or(BuildingPropertyId::Invalid, 0);
    info!("unset property: {}", missing);

    let covers = props.with(BuildingPropertyId::Bounds, |bounds: &Bounds| {
        bounds.contains(1, 1)
    })?;
    info!("town center covers (1, 1): {}", covers);

    match props.try_get::<u32>(BuildingPropertyId::Bounds) {
        Ok(value) => info!("bounds as u32: {}", value),
        Err(StoreError::TypeMismatch { stored, .. }) => info!("bounds is stored as {}", stored),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

mod atmosphere;

pub use atmosphere::{AtmosphereConfig, AtmosphereProperties, AtmosphereType, MAX_ALTITUDE};

pub mod appliance;
pub mod components;

pub use appliance::{ApplianceRecord, Generation, GenerationSpec, CO2_FACTOR_KG_PER_KWH};
pub use components::{ComponentBreakdown, ComponentRow, ComponentSlots};

/// Grid emission factor in kg CO₂ per kWh, shared by every category and generation.
pub const CO2_FACTOR_KG_PER_KWH: f64 = 0.82;

/// Maturity tier of an appliance design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Generation {
    Old,
    Modern,
    Updated,
}

impl Generation {
    pub const ALL: [Generation; 3] = [Generation::Old, Generation::Modern, Generation::Updated];

    pub fn label(self) -> &'static str {
        match self {
            Generation::Old => "Legacy",
            Generation::Modern => "Modern",
            Generation::Updated => "Updated",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSpec {
    pub component_name: &'static str,
    pub power_watts: f64,
    pub efficiency_percent: f64,
    pub cost: f64,
}

impl GenerationSpec {
    /// Emission rate while running, in kg CO₂ per hour.
    pub fn co2_per_hour(&self) -> f64 {
        self.power_watts / 1000.0 * CO2_FACTOR_KG_PER_KWH
    }
}

// Serialized with the derived `co2_per_hour` so consumers never need the factor.
#[cfg(feature = "serde")]
impl serde::Serialize for GenerationSpec {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut s = serializer.serialize_struct("GenerationSpec", 5)?;
        s.serialize_field("component_name", self.component_name)?;
        s.serialize_field("power_watts", &self.power_watts)?;
        s.serialize_field("efficiency_percent", &self.efficiency_percent)?;
        s.serialize_field("cost", &self.cost)?;
        s.serialize_field("co2_per_hour", &self.co2_per_hour())?;
        s.end()
    }
}

/// One appliance category with its three generations.
///
/// Values are taken as-is from the static table; nothing requires power draw
/// to decrease from one generation to the next.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ApplianceRecord {
    pub category: &'static str,
    pub old: GenerationSpec,
    pub modern: GenerationSpec,
    pub updated: GenerationSpec,
}

impl ApplianceRecord {
    pub fn generation(&self, generation: Generation) -> &GenerationSpec {
        match generation {
            Generation::Old => &self.old,
            Generation::Modern => &self.modern,
            Generation::Updated => &self.updated,
        }
    }

    pub fn component_name(&self, generation: Generation) -> &'static str {
        self.generation(generation).component_name
    }

    pub fn power_watts(&self, generation: Generation) -> f64 {
        self.generation(generation).power_watts
    }

    pub fn efficiency_percent(&self, generation: Generation) -> f64 {
        self.generation(generation).efficiency_percent
    }

    pub fn cost(&self, generation: Generation) -> f64 {
        self.generation(generation).cost
    }

    pub fn co2_per_hour(&self, generation: Generation) -> f64 {
        self.generation(generation).co2_per_hour()
    }
}

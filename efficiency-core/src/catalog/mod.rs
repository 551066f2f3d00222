//! Static appliance catalog and component breakdown lookup.
//!
//! The whole table is compiled into the binary; lookups borrow from it and
//! never allocate records.

mod components;

use crate::domain::{ApplianceRecord, ComponentBreakdown, GenerationSpec};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown appliance category '{0}'")]
    NotFound(String),
}

const fn spec(component_name: &'static str, power_watts: f64, efficiency_percent: f64, cost: f64) -> GenerationSpec {
    GenerationSpec {
        component_name,
        power_watts,
        efficiency_percent,
        cost,
    }
}

// Columns: component name, power (W), efficiency (%), cost.
static RECORDS: [ApplianceRecord; 8] = [
    ApplianceRecord {
        category: "Air Conditioner",
        old: spec("Conventional AC", 1800.0, 55.0, 600.0),
        modern: spec("Inverter AC", 1200.0, 95.0, 800.0),
        updated: spec("AI Adaptive AC", 900.0, 98.0, 1000.0),
    },
    ApplianceRecord {
        category: "Refrigerator",
        old: spec("Old Refrigerator", 250.0, 40.0, 200.0),
        modern: spec("Smart Refrigerator", 150.0, 75.0, 500.0),
        updated: spec("IoT Smart Refrigerator", 120.0, 90.0, 700.0),
    },
    ApplianceRecord {
        category: "Washing Machine",
        old: spec("Semi-Automatic Washing Machine", 500.0, 60.0, 150.0),
        modern: spec("Front-Load Washing Machine", 300.0, 85.0, 300.0),
        updated: spec("AI Sensor Washing Machine", 250.0, 92.0, 450.0),
    },
    ApplianceRecord {
        category: "Fan",
        old: spec("Ceiling Fan", 75.0, 70.0, 40.0),
        modern: spec("BLDC Fan", 35.0, 92.0, 70.0),
        updated: spec("Smart IoT Fan", 25.0, 96.0, 90.0),
    },
    ApplianceRecord {
        category: "Television",
        old: spec("CRT TV", 120.0, 50.0, 150.0),
        modern: spec("LED TV", 60.0, 90.0, 300.0),
        updated: spec("Quantum Dot OLED TV", 40.0, 95.0, 500.0),
    },
    ApplianceRecord {
        category: "Computer",
        old: spec("Desktop PC", 200.0, 45.0, 800.0),
        modern: spec("Laptop", 60.0, 80.0, 900.0),
        updated: spec("AI Edge PC", 45.0, 90.0, 1200.0),
    },
    ApplianceRecord {
        category: "Lighting",
        old: spec("CFL Bulb", 20.0, 60.0, 3.0),
        modern: spec("LED Bulb", 9.0, 95.0, 5.0),
        updated: spec("Smart Adaptive LED", 6.0, 98.0, 7.0),
    },
    ApplianceRecord {
        category: "Cooking Appliance",
        old: spec("Microwave Oven", 1200.0, 60.0, 100.0),
        modern: spec("Induction Cooktop", 1800.0, 90.0, 150.0),
        updated: spec("Smart Induction Hob", 1500.0, 95.0, 200.0),
    },
];

pub fn records() -> &'static [ApplianceRecord] {
    &RECORDS
}

/// Category names in catalog order.
pub fn categories() -> Vec<&'static str> {
    RECORDS.iter().map(|r| r.category).collect()
}

/// Exact, case-sensitive lookup of a category's record.
pub fn get_record(category: &str) -> Result<&'static ApplianceRecord, CatalogError> {
    RECORDS
        .iter()
        .find(|r| r.category == category)
        .ok_or_else(|| CatalogError::NotFound(category.to_string()))
}

/// Component breakdown for a category, or `None` when no breakdown is on file.
pub fn component_breakdown(category: &str) -> Option<&'static ComponentBreakdown> {
    components::BREAKDOWNS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, breakdown)| breakdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Generation;

    #[test]
    fn categories_are_the_eight_known_names_in_fixed_order() {
        assert_eq!(
            categories(),
            vec![
                "Air Conditioner",
                "Refrigerator",
                "Washing Machine",
                "Fan",
                "Television",
                "Computer",
                "Lighting",
                "Cooking Appliance",
            ]
        );
    }

    #[test]
    fn each_category_appears_exactly_once() {
        let names = categories();
        for name in &names {
            assert_eq!(names.iter().filter(|n| *n == name).count(), 1, "{name}");
        }
    }

    #[test]
    fn get_record_returns_the_refrigerator_row() {
        let r = get_record("Refrigerator").unwrap();
        assert_eq!(r.component_name(Generation::Old), "Old Refrigerator");
        assert_eq!(r.component_name(Generation::Modern), "Smart Refrigerator");
        assert_eq!(r.component_name(Generation::Updated), "IoT Smart Refrigerator");
        assert_eq!(r.power_watts(Generation::Old), 250.0);
        assert_eq!(r.power_watts(Generation::Updated), 120.0);
        assert_eq!(r.efficiency_percent(Generation::Old), 40.0);
        assert_eq!(r.efficiency_percent(Generation::Updated), 90.0);
        assert_eq!(r.cost(Generation::Modern), 500.0);
    }

    #[test]
    fn get_record_rejects_unknown_category() {
        let err = get_record("Nonexistent").unwrap_err();
        assert_eq!(err, CatalogError::NotFound("Nonexistent".to_string()));
        assert_eq!(err.to_string(), "unknown appliance category 'Nonexistent'");
    }

    #[test]
    fn get_record_is_case_sensitive() {
        assert!(get_record("refrigerator").is_err());
        assert!(get_record(" Fan").is_err());
    }

    #[test]
    fn cooking_appliance_power_is_not_monotonic() {
        let r = get_record("Cooking Appliance").unwrap();
        assert!(r.power_watts(Generation::Modern) > r.power_watts(Generation::Old));
        assert!(r.power_watts(Generation::Updated) > r.power_watts(Generation::Old));
    }

    #[test]
    fn every_category_has_a_component_breakdown() {
        for name in categories() {
            let b = component_breakdown(name).unwrap_or_else(|| panic!("missing breakdown for {name}"));
            assert_eq!(b.old.len(), 10, "{name}");
            assert_eq!(b.modern.len(), 10, "{name}");
            assert_eq!(b.updated.len(), 12, "{name}");
        }
    }

    #[test]
    fn component_breakdown_is_none_for_unknown_category() {
        assert!(component_breakdown("Nonexistent").is_none());
    }

    #[test]
    fn refrigerator_breakdown_matches_stored_slots() {
        let b = component_breakdown("Refrigerator").unwrap();
        assert_eq!(b.get(Generation::Old, "Compressor"), Some("Reciprocating"));
        assert_eq!(b.get(Generation::Modern, "Refrigerant"), Some("R600a"));
        assert_eq!(b.get(Generation::Updated, "Connectivity"), Some("IoT + Inventory Tracking"));
        assert_eq!(b.get(Generation::Old, "Connectivity"), None);
    }
}

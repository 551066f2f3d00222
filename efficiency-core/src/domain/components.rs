use super::appliance::Generation;

/// Ordered `(slot, description)` pairs for one generation of an appliance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentSlots(pub &'static [(&'static str, &'static str)]);

impl ComponentSlots {
    pub fn get(&self, slot: &str) -> Option<&'static str> {
        self.0
            .iter()
            .find(|(name, _)| *name == slot)
            .map(|(_, description)| *description)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Serialized as a JSON object, keeping slot order.
#[cfg(feature = "serde")]
impl serde::Serialize for ComponentSlots {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (slot, description) in self.0 {
            map.serialize_entry(slot, description)?;
        }
        map.end()
    }
}

/// Per-generation component descriptions for one category.
///
/// Slot sets differ between generations; newer designs usually list extra
/// slots such as connectivity.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComponentBreakdown {
    pub old: ComponentSlots,
    pub modern: ComponentSlots,
    pub updated: ComponentSlots,
}

/// One line of the side-by-side component comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComponentRow {
    pub slot: &'static str,
    pub legacy: &'static str,
    pub modern: &'static str,
    pub updated: &'static str,
}

impl ComponentBreakdown {
    pub fn slots(&self, generation: Generation) -> ComponentSlots {
        match generation {
            Generation::Old => self.old,
            Generation::Modern => self.modern,
            Generation::Updated => self.updated,
        }
    }

    pub fn get(&self, generation: Generation, slot: &str) -> Option<&'static str> {
        self.slots(generation).get(slot)
    }

    /// Union of all slot names across generations, in first-appearance order.
    ///
    /// A generation without a given slot contributes an empty string.
    pub fn aligned_rows(&self) -> Vec<ComponentRow> {
        let mut order: Vec<&'static str> = Vec::new();
        for generation in Generation::ALL {
            for (slot, _) in self.slots(generation).iter() {
                if !order.contains(&slot) {
                    order.push(slot);
                }
            }
        }

        order
            .into_iter()
            .map(|slot| ComponentRow {
                slot,
                legacy: self.old.get(slot).unwrap_or(""),
                modern: self.modern.get(slot).unwrap_or(""),
                updated: self.updated.get(slot).unwrap_or(""),
            })
            .collect()
    }
}

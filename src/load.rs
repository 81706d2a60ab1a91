//! Appliance selection and total load aggregation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{APPLIANCES, Appliance, appliance};
use crate::error::InputError;

/// Quantity per built-in appliance id. Absent ids count as zero.
///
/// Only ids from [`APPLIANCES`] are accepted, so a selection can never
/// reference an appliance the load calculation does not know about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, u32>", into = "BTreeMap<String, u32>")]
pub struct ApplianceSelection {
    quantities: BTreeMap<&'static str, u32>,
}

impl ApplianceSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quantity selected for `id`, zero when not selected.
    pub fn quantity(&self, id: &str) -> u32 {
        self.quantities.get(id).copied().unwrap_or(0)
    }

    /// Sets the quantity for `id`. Setting zero removes the entry.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::UnknownAppliance`] if `id` is not in the catalog.
    pub fn set(&mut self, id: &str, quantity: u32) -> Result<(), InputError> {
        let key = lookup(id)?.id;
        if quantity == 0 {
            self.quantities.remove(key);
        } else {
            self.quantities.insert(key, quantity);
        }
        Ok(())
    }

    /// Adds one unit of `id` and returns the new quantity.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::UnknownAppliance`] if `id` is not in the catalog.
    pub fn increment(&mut self, id: &str) -> Result<u32, InputError> {
        let next = self.quantity(id).saturating_add(1);
        self.set(id, next)?;
        Ok(next)
    }

    /// Removes one unit of `id`, stopping at zero, and returns the new quantity.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::UnknownAppliance`] if `id` is not in the catalog.
    pub fn decrement(&mut self, id: &str) -> Result<u32, InputError> {
        let next = self.quantity(id).saturating_sub(1);
        self.set(id, next)?;
        Ok(next)
    }

    /// True when every quantity is zero.
    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Selected appliances with a non-zero quantity, in catalog order.
    pub fn selected(&self) -> impl Iterator<Item = (&'static Appliance, u32)> + '_ {
        APPLIANCES.iter().filter_map(move |a| match self.quantity(a.id) {
            0 => None,
            q => Some((a, q)),
        })
    }
}

fn lookup(id: &str) -> Result<&'static Appliance, InputError> {
    appliance(id).ok_or_else(|| InputError::UnknownAppliance(id.to_string()))
}

impl TryFrom<BTreeMap<String, u32>> for ApplianceSelection {
    type Error = InputError;

    fn try_from(map: BTreeMap<String, u32>) -> Result<Self, Self::Error> {
        let mut selection = Self::new();
        for (id, quantity) in map {
            selection.set(&id, quantity)?;
        }
        Ok(selection)
    }
}

impl From<ApplianceSelection> for BTreeMap<String, u32> {
    fn from(selection: ApplianceSelection) -> Self {
        selection
            .quantities
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }
}

/// A user-described appliance that is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCustomAppliance")]
pub struct CustomAppliance {
    name: String,
    wattage: u32,
    quantity: u32,
}

#[derive(Deserialize)]
struct RawCustomAppliance {
    name: String,
    wattage: u32,
    #[serde(default = "one")]
    quantity: u32,
}

fn one() -> u32 {
    1
}

impl TryFrom<RawCustomAppliance> for CustomAppliance {
    type Error = InputError;

    fn try_from(raw: RawCustomAppliance) -> Result<Self, Self::Error> {
        Self::new(&raw.name, raw.wattage, raw.quantity)
    }
}

impl CustomAppliance {
    /// Builds a custom appliance from already-typed values.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if the trimmed name is empty or wattage or
    /// quantity is zero.
    pub fn new(name: &str, wattage: u32, quantity: u32) -> Result<Self, InputError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(InputError::EmptyApplianceName);
        }
        if wattage == 0 {
            return Err(InputError::InvalidWattage);
        }
        if quantity == 0 {
            return Err(InputError::InvalidQuantity);
        }
        Ok(Self {
            name: name.to_string(),
            wattage,
            quantity,
        })
    }

    /// Builds a custom appliance from raw form text.
    ///
    /// Checks run in form order: name, then wattage, then quantity.
    ///
    /// # Errors
    ///
    /// Returns the first [`InputError`] encountered.
    pub fn parse(name: &str, wattage: &str, quantity: &str) -> Result<Self, InputError> {
        if name.trim().is_empty() {
            return Err(InputError::EmptyApplianceName);
        }
        let wattage = parse_positive(wattage).ok_or(InputError::InvalidWattage)?;
        let quantity = parse_positive(quantity).ok_or(InputError::InvalidQuantity)?;
        Self::new(name, wattage, quantity)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn wattage(&self) -> u32 {
        self.wattage
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Combined draw of all units (W).
    pub fn load_watts(&self) -> u64 {
        u64::from(self.wattage).saturating_mul(u64::from(self.quantity))
    }
}

fn parse_positive(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|&n| n > 0)
}

/// Total simultaneous draw of the selection plus custom appliances (W).
///
/// Saturates at `u64::MAX`; an absurd load sizes into the industrial band
/// rather than wrapping to a small one.
pub fn total_load(selection: &ApplianceSelection, custom: &[CustomAppliance]) -> u64 {
    APPLIANCES
        .iter()
        .map(|a| u64::from(a.wattage).saturating_mul(u64::from(selection.quantity(a.id))))
        .chain(custom.iter().map(CustomAppliance::load_watts))
        .fold(0, u64::saturating_add)
}

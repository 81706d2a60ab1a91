//! Static reference data: the appliance list and the battery/inverter combos
//! offered at each sizing band.

use serde::Serialize;

/// A household appliance with a nominal running wattage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Appliance {
    /// Stable key used in selections (e.g. `"washing_machine"`).
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Running power per unit (W).
    pub wattage: u32,
    /// Unit label shown next to the quantity, may be empty.
    pub unit: &'static str,
}

/// Built-in appliances, in display order.
pub const APPLIANCES: &[Appliance] = &[
    Appliance { id: "lights", name: "Lights", wattage: 60, unit: "each" },
    Appliance { id: "fans", name: "Fans", wattage: 75, unit: "each" },
    Appliance { id: "tv", name: "TV", wattage: 150, unit: "" },
    Appliance { id: "fridge", name: "Refrigerator", wattage: 200, unit: "" },
    Appliance { id: "computer", name: "Computer", wattage: 200, unit: "" },
    Appliance { id: "ac", name: "Air Conditioner", wattage: 1500, unit: "each" },
    Appliance { id: "pump", name: "Water Pump", wattage: 750, unit: "" },
    Appliance { id: "washing_machine", name: "Washing Machine", wattage: 500, unit: "" },
];

/// Looks up a built-in appliance by id.
pub fn appliance(id: &str) -> Option<&'static Appliance> {
    APPLIANCES.iter().find(|a| a.id == id)
}

/// A battery or inverter as listed in the store catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProductRecord {
    pub name: &'static str,
    /// Short capacity label, e.g. `"150Ah"` or `"1500VA MPPT"`.
    pub capacity: &'static str,
    /// Spec lines in display order.
    pub specs: &'static [&'static str],
}

/// Sizing band a load falls into. Each band maps to one fixed combo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComboBand {
    /// Nothing selected.
    NoLoad,
    /// 150Ah battery with 1050VA inverter.
    Base,
    /// 200Ah battery with 1500VA MPPT inverter.
    Mid,
    /// Multiple 200Ah units with an industrial inverter.
    Industrial,
}

const PROMPT: &[&str] = &["Please select appliances to get recommendation"];

const NO_BATTERY: ProductRecord = ProductRecord {
    name: "No battery needed",
    capacity: "0Ah",
    specs: PROMPT,
};

const NO_INVERTER: ProductRecord = ProductRecord {
    name: "No inverter needed",
    capacity: "0VA",
    specs: PROMPT,
};

const BATTERY_150AH: ProductRecord = ProductRecord {
    name: "Exide Inverter Battery 150Ah",
    capacity: "150Ah",
    specs: &[
        "Capacity: 150Ah",
        "Warranty: 48 Months",
        "Type: Tubular",
        "Voltage: 12V",
    ],
};

const INVERTER_1050VA: ProductRecord = ProductRecord {
    name: "Exide 1050VA Inverter",
    capacity: "1050VA",
    specs: &[
        "Capacity: 1050VA",
        "Pure Sine Wave",
        "Overload Protection",
        "Digital Display",
    ],
};

const BATTERY_200AH: ProductRecord = ProductRecord {
    name: "Exide Inva Master 200Ah",
    capacity: "200Ah",
    specs: &[
        "Capacity: 200Ah",
        "Warranty: 60 Months",
        "Type: Tubular",
        "Voltage: 12V",
    ],
};

const INVERTER_1500VA_MPPT: ProductRecord = ProductRecord {
    name: "Exide 1500VA MPPT",
    capacity: "1500VA MPPT",
    specs: &[
        "Capacity: 1500VA",
        "MPPT Technology",
        "Solar Compatible",
        "LCD Display",
    ],
};

const BATTERY_200AH_MULTI: ProductRecord = ProductRecord {
    name: "Exide Inva Master 200Ah (Multiple Units)",
    capacity: "200Ah+",
    specs: &[
        "Capacity: 200Ah per unit",
        "Multiple batteries recommended",
        "Warranty: 60 Months",
        "Type: Tubular",
    ],
};

const INVERTER_INDUSTRIAL: ProductRecord = ProductRecord {
    name: "Exide Industrial Inverter",
    capacity: "2000VA+",
    specs: &[
        "High capacity system",
        "MPPT Technology",
        "Contact for custom solution",
        "Industrial grade",
    ],
};

impl ComboBand {
    /// All bands, in evaluation order.
    pub const ALL: [ComboBand; 4] = [
        ComboBand::NoLoad,
        ComboBand::Base,
        ComboBand::Mid,
        ComboBand::Industrial,
    ];

    pub fn battery(self) -> ProductRecord {
        match self {
            ComboBand::NoLoad => NO_BATTERY,
            ComboBand::Base => BATTERY_150AH,
            ComboBand::Mid => BATTERY_200AH,
            ComboBand::Industrial => BATTERY_200AH_MULTI,
        }
    }

    pub fn inverter(self) -> ProductRecord {
        match self {
            ComboBand::NoLoad => NO_INVERTER,
            ComboBand::Base => INVERTER_1050VA,
            ComboBand::Mid => INVERTER_1500VA_MPPT,
            ComboBand::Industrial => INVERTER_INDUSTRIAL,
        }
    }

    /// Wire name, as serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            ComboBand::NoLoad => "no_load",
            ComboBand::Base => "base",
            ComboBand::Mid => "mid",
            ComboBand::Industrial => "industrial",
        }
    }

    /// Whether the band names a real product pair worth quoting.
    pub fn is_quotable(self) -> bool {
        self != ComboBand::NoLoad
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appliance_ids_are_unique() {
        for (i, a) in APPLIANCES.iter().enumerate() {
            assert!(
                APPLIANCES[i + 1..].iter().all(|b| b.id != a.id),
                "duplicate id {}",
                a.id
            );
        }
    }

    #[test]
    fn base_wattages_match_catalog() {
        let watts: Vec<(&str, u32)> = APPLIANCES.iter().map(|a| (a.id, a.wattage)).collect();
        assert_eq!(
            watts,
            vec![
                ("lights", 60),
                ("fans", 75),
                ("tv", 150),
                ("fridge", 200),
                ("computer", 200),
                ("ac", 1500),
                ("pump", 750),
                ("washing_machine", 500),
            ]
        );
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(appliance("ac").map(|a| a.name), Some("Air Conditioner"));
        assert!(appliance("heater").is_none());
    }

    #[test]
    fn every_band_has_four_specs_except_no_load() {
        for band in ComboBand::ALL {
            let expected = if band == ComboBand::NoLoad { 1 } else { 4 };
            assert_eq!(band.battery().specs.len(), expected);
            assert_eq!(band.inverter().specs.len(), expected);
        }
    }

    #[test]
    fn only_no_load_is_not_quotable() {
        assert!(!ComboBand::NoLoad.is_quotable());
        assert!(ComboBand::Base.is_quotable());
        assert!(ComboBand::Industrial.is_quotable());
    }
}

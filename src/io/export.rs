//! CSV export for recommendation sweeps.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::battery::BatteryRecommendation;
use crate::solar::SolarRecommendation;

/// Column header for battery sweep export.
const BATTERY_HEADER: &str = "backup_hours,total_load_w,required_battery_ah,\
                              required_inverter_va,band,battery,inverter";

/// Column header for solar sweep export.
const SOLAR_HEADER: &str = "installation_type,goal,monthly_bill,roof_space,monthly_units,\
                            system_size_kw,panel_count,monthly_savings,annual_savings,\
                            estimated_cost,payback_years,roof_space_needed,roof_ok";

/// Exports battery recommendations to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_battery_csv(rows: &[BatteryRecommendation], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    write_battery_csv(rows, io::BufWriter::new(file))
}

/// Writes battery recommendations as CSV to any writer.
///
/// One row per recommendation, in input order. Output is deterministic.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_battery_csv(rows: &[BatteryRecommendation], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(BATTERY_HEADER.split(',').map(str::trim))?;

    for r in rows {
        wtr.write_record(&[
            format!("{:.1}", r.backup_hours),
            r.total_load_w.to_string(),
            r.required_battery_ah.to_string(),
            r.required_inverter_va.to_string(),
            r.band.as_str().to_string(),
            r.battery.name.to_string(),
            r.inverter.name.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Exports solar recommendations to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_solar_csv(rows: &[SolarRecommendation], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    write_solar_csv(rows, io::BufWriter::new(file))
}

/// Writes solar recommendations as CSV to any writer.
///
/// A missing payback period is written as an empty field.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_solar_csv(rows: &[SolarRecommendation], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(SOLAR_HEADER.split(',').map(str::trim))?;

    for r in rows {
        wtr.write_record(&[
            r.installation_type.as_str().to_string(),
            r.goal.as_str().to_string(),
            format!("{:.2}", r.monthly_bill),
            format!("{:.2}", r.roof_space),
            r.estimated_monthly_units.to_string(),
            r.system_size_kw.to_string(),
            r.panel_count.to_string(),
            r.estimated_monthly_savings.to_string(),
            r.estimated_annual_savings.to_string(),
            r.estimated_cost.to_string(),
            r.payback_years.map(|y| format!("{y:.1}")).unwrap_or_default(),
            format!("{:.1}", r.roof_space_needed),
            r.is_roof_sufficient.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

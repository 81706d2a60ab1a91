//! Plain-text recommendation reports for the terminal.

use std::io::{self, Write};

use crate::battery::BatteryRecommendation;
use crate::format::format_inr;
use crate::quote::QuoteRequest;
use crate::solar::SolarRecommendation;

/// Writes a battery/inverter report, with the quote link when one is given.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_battery_report(
    out: &mut impl Write,
    rec: &BatteryRecommendation,
    quote: Option<&QuoteRequest>,
) -> io::Result<()> {
    writeln!(out, "--- Battery & Inverter Recommendation ---")?;
    writeln!(out, "Total load:        {} W", rec.total_load_w)?;
    writeln!(out, "Backup duration:   {:.1} h", rec.backup_hours)?;
    writeln!(out, "Required battery:  {} Ah", rec.required_battery_ah)?;
    writeln!(out, "Required inverter: {} VA", rec.required_inverter_va)?;
    writeln!(out)?;
    writeln!(out, "Battery:  {} ({})", rec.battery.name, rec.battery.capacity)?;
    for spec in rec.battery.specs {
        writeln!(out, "  - {spec}")?;
    }
    writeln!(out, "Inverter: {} ({})", rec.inverter.name, rec.inverter.capacity)?;
    for spec in rec.inverter.specs {
        writeln!(out, "  - {spec}")?;
    }
    writeln!(out)?;
    writeln!(out, "{}", rec.explanation)?;
    if let Some(q) = quote {
        writeln!(out)?;
        writeln!(out, "Get a quote: {}", q.mailto_url())?;
    }
    Ok(())
}

/// Writes a solar report, with the quote link when one is given.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_solar_report(
    out: &mut impl Write,
    rec: &SolarRecommendation,
    quote: Option<&QuoteRequest>,
) -> io::Result<()> {
    writeln!(out, "--- Solar Recommendation ---")?;
    writeln!(out, "System:            {} kW {}", rec.system_size_kw, rec.system_type)?;
    writeln!(out, "Panels:            {}", rec.panel_count)?;
    writeln!(
        out,
        "Monthly savings:   ₹{}",
        format_inr(rec.estimated_monthly_savings as f64)
    )?;
    writeln!(
        out,
        "Annual savings:    ₹{}",
        format_inr(rec.estimated_annual_savings as f64)
    )?;
    writeln!(out, "Estimated cost:    ₹{}", format_inr(rec.estimated_cost as f64))?;
    match rec.payback_years {
        Some(years) => writeln!(out, "Payback:           {years:.1} years")?,
        None => writeln!(out, "Payback:           n/a")?,
    }
    writeln!(
        out,
        "Roof space:        {} sq.ft needed, {} available{}",
        rec.roof_space_needed,
        rec.roof_space,
        if rec.is_roof_sufficient { "" } else { " (downsized)" }
    )?;
    writeln!(out)?;
    writeln!(out, "{}", rec.explanation)?;
    if let Some(q) = quote {
        writeln!(out)?;
        writeln!(out, "Get a quote: {}", q.mailto_url())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battery;
    use crate::config::{BatteryParams, SolarParams};
    use crate::load::ApplianceSelection;
    use crate::quote::solar_quote;
    use crate::solar::{self, InstallationType, SolarGoal};

    #[test]
    fn battery_report_lists_specs() {
        let mut selection = ApplianceSelection::new();
        selection.set("lights", 2).unwrap();
        let rec = battery::recommend(&selection, 4.0, &[], &BatteryParams::default());
        let mut out = Vec::new();
        write_battery_report(&mut out, &rec, None).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Total load:        120 W"));
        assert!(text.contains("  - Warranty: 48 Months"));
        assert!(!text.contains("Get a quote"));
    }

    #[test]
    fn solar_report_flags_downsizing_and_quote() {
        let rec = solar::recommend(
            InstallationType::Residential,
            50_000.0,
            100.0,
            SolarGoal::Independence,
            &SolarParams::default(),
        );
        let quote = solar_quote(&rec, "sales@example.com");
        let mut out = Vec::new();
        write_solar_report(&mut out, &rec, Some(&quote)).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("(downsized)"));
        assert!(text.contains("Get a quote: mailto:sales@example.com?subject="));
    }
}

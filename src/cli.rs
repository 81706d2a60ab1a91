//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::error::InputError;
use crate::load::{ApplianceSelection, CustomAppliance};
use crate::request::{BACKUP_HOURS, MONTHLY_BILL, SliderRange};
use crate::solar::{InstallationType, SolarGoal};

#[derive(Parser, Debug)]
#[command(author, version, about = "Battery/inverter and solar sizing calculators")]
pub struct Cli {
    /// Advisor configuration (TOML). Built-in values are used when omitted.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the built-in appliances and their wattage.
    Appliances,
    /// Recommend a battery and inverter for a set of appliances.
    Battery {
        #[command(flatten)]
        load: LoadArgs,
        /// Backup duration in hours.
        #[arg(long, default_value_t = 4.0)]
        hours: f64,
        /// Also print a pre-filled quote request.
        #[arg(long)]
        quote: bool,
    },
    /// Recommend a rooftop solar system from a monthly bill.
    Solar {
        #[command(flatten)]
        site: SiteArgs,
        /// Monthly electricity bill.
        #[arg(long)]
        bill: f64,
        /// Also print a pre-filled quote request.
        #[arg(long)]
        quote: bool,
    },
    /// Battery recommendations across a range of backup durations, as CSV.
    SweepBattery {
        #[command(flatten)]
        load: LoadArgs,
        #[arg(long, default_value_t = BACKUP_HOURS.min)]
        from: f64,
        #[arg(long, default_value_t = BACKUP_HOURS.max)]
        to: f64,
        #[arg(long, default_value_t = BACKUP_HOURS.step)]
        step: f64,
        /// Output CSV path. Writes to stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Solar recommendations across a range of monthly bills, as CSV.
    SweepSolar {
        #[command(flatten)]
        site: SiteArgs,
        #[arg(long, default_value_t = MONTHLY_BILL.min)]
        from: f64,
        #[arg(long, default_value_t = MONTHLY_BILL.max)]
        to: f64,
        #[arg(long, default_value_t = MONTHLY_BILL.step)]
        step: f64,
        /// Output CSV path. Writes to stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Serve the calculators over HTTP.
    #[cfg(feature = "api")]
    Serve {
        /// Port to listen on.
        #[arg(long, default_value_t = 3000)]
        port: u16,
    },
}

/// Appliances making up the load.
#[derive(Args, Debug, Clone, Default)]
pub struct LoadArgs {
    /// Built-in appliance as `id=quantity`, e.g. `lights=4`. Repeatable.
    #[arg(long = "select", value_parser = parse_selection_entry)]
    pub select: Vec<(String, u32)>,
    /// Custom appliance as `name:watts[:quantity]`, e.g. `Microwave:800`. Repeatable.
    #[arg(long = "custom", value_parser = parse_custom)]
    pub custom: Vec<CustomAppliance>,
}

impl LoadArgs {
    /// Builds the selection, summing repeated ids.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::UnknownAppliance`] for an id not in the catalog.
    pub fn selection(&self) -> Result<ApplianceSelection, InputError> {
        let mut selection = ApplianceSelection::new();
        for (id, qty) in &self.select {
            let total = selection.quantity(id).saturating_add(*qty);
            selection.set(id, total)?;
        }
        Ok(selection)
    }
}

/// Site description shared by the solar commands.
#[derive(Args, Debug, Clone)]
pub struct SiteArgs {
    #[arg(long, value_enum, default_value_t = InstallationType::Residential)]
    pub installation: InstallationType,
    /// Available roof space in sq ft.
    #[arg(long, default_value_t = 500.0)]
    pub roof: f64,
    #[arg(long, value_enum, default_value_t = SolarGoal::ReduceBills)]
    pub goal: SolarGoal,
}

/// Range for a sweep command.
pub fn sweep_range(from: f64, to: f64, step: f64) -> SliderRange {
    SliderRange {
        min: from,
        max: to,
        step,
    }
}

fn parse_selection_entry(s: &str) -> Result<(String, u32), String> {
    let (id, qty) = s
        .split_once('=')
        .ok_or_else(|| format!("expected `id=quantity`, got \"{s}\""))?;
    let qty = qty
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("quantity for \"{id}\" must be a non-negative integer"))?;
    Ok((id.trim().to_string(), qty))
}

fn parse_custom(s: &str) -> Result<CustomAppliance, String> {
    let parts: Vec<&str> = s.split(':').collect();
    let result = match parts.as_slice() {
        [name, watts] => CustomAppliance::parse(name, watts, "1"),
        [name, watts, qty] => CustomAppliance::parse(name, watts, qty),
        _ => return Err(format!("expected `name:watts[:quantity]`, got \"{s}\"")),
    };
    result.map_err(|e| e.to_string())
}

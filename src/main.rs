//! power-advisor entry point: CLI wiring and config-driven calculator runs.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde_json::json;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use power_advisor::catalog::APPLIANCES;
use power_advisor::cli::{Cli, Command, OutputFormat, sweep_range};
use power_advisor::config::AdvisorConfig;
use power_advisor::io::export::{
    export_battery_csv, export_solar_csv, write_battery_csv, write_solar_csv,
};
use power_advisor::quote::{QuoteView, battery_quote, solar_quote};
use power_advisor::reporting::{write_battery_report, write_solar_report};
use power_advisor::request::{BatteryRequest, SolarRequest};
use power_advisor::sweep::{backup_hours_sweep, monthly_bill_sweep};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<AdvisorConfig> {
    let config = match path {
        Some(p) => AdvisorConfig::from_toml_file(p)?,
        None => AdvisorConfig::default(),
    };

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        bail!("invalid configuration ({} error(s))", errors.len());
    }
    Ok(config)
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    println!("{text}");
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    debug!(?config, "configuration loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Appliances => match cli.format {
            OutputFormat::Json => print_json(&APPLIANCES)?,
            OutputFormat::Text => {
                for a in APPLIANCES {
                    writeln!(out, "{:<16} {:<16} {:>5} W", a.id, a.name, a.wattage)?;
                }
            }
        },
        Command::Battery { load, hours, quote } => {
            let req = BatteryRequest {
                appliances: load.selection()?,
                backup_hours: hours,
                custom_appliances: load.custom,
            };
            let rec = req.recommend(&config)?;
            let quote = if quote {
                battery_quote(
                    &req.appliances,
                    &req.custom_appliances,
                    &rec,
                    &config.quote.recipient,
                )
            } else {
                None
            };
            match cli.format {
                OutputFormat::Json => print_json(&json!({
                    "recommendation": rec,
                    "quote": quote.map(QuoteView::from),
                }))?,
                OutputFormat::Text => write_battery_report(&mut out, &rec, quote.as_ref())?,
            }
        }
        Command::Solar { site, bill, quote } => {
            let req = SolarRequest {
                installation_type: site.installation,
                monthly_bill: bill,
                roof_space: site.roof,
                goal: site.goal,
            };
            let rec = req.recommend(&config)?;
            let quote = quote.then(|| solar_quote(&rec, &config.quote.recipient));
            match cli.format {
                OutputFormat::Json => print_json(&json!({
                    "recommendation": rec,
                    "quote": quote.map(QuoteView::from),
                }))?,
                OutputFormat::Text => write_solar_report(&mut out, &rec, quote.as_ref())?,
            }
        }
        Command::SweepBattery {
            load,
            from,
            to,
            step,
            out: path,
        } => {
            let rows = backup_hours_sweep(
                &load.selection()?,
                &load.custom,
                sweep_range(from, to, step),
                &config.battery,
            )?;
            match path {
                Some(p) => {
                    export_battery_csv(&rows, &p)
                        .with_context(|| format!("failed to write CSV to {}", p.display()))?;
                    info!(rows = rows.len(), path = %p.display(), "battery sweep written");
                }
                None => write_battery_csv(&rows, &mut out)?,
            }
        }
        Command::SweepSolar {
            site,
            from,
            to,
            step,
            out: path,
        } => {
            let rows = monthly_bill_sweep(
                site.installation,
                site.roof,
                site.goal,
                sweep_range(from, to, step),
                &config.solar,
            )?;
            match path {
                Some(p) => {
                    export_solar_csv(&rows, &p)
                        .with_context(|| format!("failed to write CSV to {}", p.display()))?;
                    info!(rows = rows.len(), path = %p.display(), "solar sweep written");
                }
                None => write_solar_csv(&rows, &mut out)?,
            }
        }
        #[cfg(feature = "api")]
        Command::Serve { port } => {
            use std::net::SocketAddr;
            use std::sync::Arc;

            let state = Arc::new(power_advisor::api::AppState { config });
            let addr = SocketAddr::from(([0, 0, 0, 0], port));
            let rt = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;
            rt.block_on(power_advisor::api::serve(state, addr))?;
        }
    }

    out.flush()?;
    Ok(())
}

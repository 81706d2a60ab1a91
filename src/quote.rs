//! Pre-filled quote request messages built from a recommendation.

use serde::Serialize;

use crate::battery::BatteryRecommendation;
use crate::format::format_inr;
use crate::load::{ApplianceSelection, CustomAppliance};
use crate::solar::SolarRecommendation;

/// A ready-to-send quote request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteRequest {
    pub recipient: String,
    pub subject: String,
    /// Message body, lines separated by `\n`.
    pub body: String,
}

impl QuoteRequest {
    /// `mailto:` link with percent-encoded subject and body. Newlines are
    /// sent as CRLF.
    pub fn mailto_url(&self) -> String {
        let body = self.body.replace('\n', "\r\n");
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&body)
        )
    }
}

/// Quote message together with its ready-made `mailto:` link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteView {
    #[serde(flatten)]
    pub request: QuoteRequest,
    pub mailto: String,
}

impl From<QuoteRequest> for QuoteView {
    fn from(request: QuoteRequest) -> Self {
        let mailto = request.mailto_url();
        Self { request, mailto }
    }
}

/// Comma-separated `Name (Nx)` list, catalog appliances first.
fn appliance_list(selection: &ApplianceSelection, custom: &[CustomAppliance]) -> String {
    selection
        .selected()
        .map(|(a, q)| format!("{} ({q}x)", a.name))
        .chain(custom.iter().map(|c| format!("{} ({}x)", c.name(), c.quantity())))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Quote request for a battery/inverter combo. `None` when nothing was selected.
pub fn battery_quote(
    selection: &ApplianceSelection,
    custom: &[CustomAppliance],
    rec: &BatteryRecommendation,
    recipient: &str,
) -> Option<QuoteRequest> {
    if !rec.band.is_quotable() {
        return None;
    }
    let lines = [
        "I need a quote for:".to_string(),
        String::new(),
        format!("Appliances: {}", appliance_list(selection, custom)),
        format!("Backup Duration: {} hours", rec.backup_hours),
        format!("Total Load: {}W", rec.total_load_w),
        String::new(),
        "Recommended:".to_string(),
        format!("Battery: {}", rec.battery.name),
        format!("Inverter: {}", rec.inverter.name),
    ];
    Some(QuoteRequest {
        recipient: recipient.to_string(),
        subject: format!("Quote Request: {} + {}", rec.battery.name, rec.inverter.name),
        body: lines.join("\n"),
    })
}

/// Quote request for a solar installation.
pub fn solar_quote(rec: &SolarRecommendation, recipient: &str) -> QuoteRequest {
    let lines = [
        "I'm interested in a solar installation:".to_string(),
        String::new(),
        format!("Type: {}", rec.installation_type),
        format!("Monthly Bill: ₹{}", format_inr(rec.monthly_bill)),
        format!("Roof Space: {} sq.ft", rec.roof_space),
        String::new(),
        "Recommended:".to_string(),
        format!("System Size: {}kW", rec.system_size_kw),
        format!("Panels: {} units", rec.panel_count),
        format!("Estimated Cost: ₹{}", format_inr(rec.estimated_cost as f64)),
    ];
    QuoteRequest {
        recipient: recipient.to_string(),
        subject: format!("Solar Installation Quote: {}kW System", rec.system_size_kw),
        body: lines.join("\n"),
    }
}

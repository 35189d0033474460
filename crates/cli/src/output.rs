//! Result rendering
//!
//! JSON output is the pretty-printed payload; table output goes through
//! [`Tabular`], one implementation per resource.

use std::collections::BTreeMap;
use std::io::Write;

use anyhow::Context as _;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use searchads_domain::{
    AdGroup, AppInfo, Campaign, GeoEntity, Keyword, Money, NegativeKeyword, ReportRow,
    ReportingDataResponse, UserAcl,
};
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

/// Printed in place of an empty table
pub const NO_RESULTS: &str = "No results found.";

/// Column layout of a resource in table output
pub trait Tabular {
    fn headers() -> Vec<&'static str>;
    fn row(&self) -> Vec<String>;
}

/// Render a list of resources.
pub fn render_list<T>(out: &mut dyn Write, format: OutputFormat, items: &[T]) -> anyhow::Result<()>
where
    T: Tabular + Serialize,
{
    match format {
        OutputFormat::Json => write_json(out, &items),
        OutputFormat::Table => write_table(out, T::headers(), items.iter().map(Tabular::row)),
    }
}

/// Render a single resource as a one-row table or a JSON object.
pub fn render_one<T>(out: &mut dyn Write, format: OutputFormat, item: &T) -> anyhow::Result<()>
where
    T: Tabular + Serialize,
{
    match format {
        OutputFormat::Json => write_json(out, item),
        OutputFormat::Table => write_table(out, T::headers(), std::iter::once(item.row())),
    }
}

/// Render a report; table output appends the grand totals row when present.
pub fn render_report(
    out: &mut dyn Write,
    format: OutputFormat,
    report: &ReportingDataResponse,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, report),
        OutputFormat::Table => {
            let totals = report.grand_totals.as_ref().map(|totals| {
                let mut row = totals.row();
                row[0] = "TOTAL".to_string();
                row
            });
            let rows = report.row.iter().map(Tabular::row).chain(totals);
            write_table(out, ReportRow::headers(), rows)
        }
    }
}

/// Write a plain status line such as "Campaign 7 deleted."
pub fn render_message(out: &mut dyn Write, message: &str) -> anyhow::Result<()> {
    writeln!(out, "{message}").context("writing output")
}

fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value).context("encoding JSON output")?;
    writeln!(out, "{text}").context("writing output")
}

fn write_table<I>(out: &mut dyn Write, headers: Vec<&'static str>, rows: I) -> anyhow::Result<()>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(headers);

    let mut count = 0usize;
    for row in rows {
        table.add_row(row);
        count += 1;
    }

    if count == 0 {
        return render_message(out, NO_RESULTS);
    }
    writeln!(out, "{table}").context("writing output")
}

fn money(value: Option<&Money>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

fn text(value: Option<&String>) -> String {
    value.cloned().unwrap_or_default()
}

fn id(value: Option<i64>) -> String {
    value.map(|id| id.to_string()).unwrap_or_default()
}

impl Tabular for Campaign {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "STATUS", "SERVING", "BUDGET", "DAILY BUDGET", "COUNTRIES"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            id(self.id),
            self.name.clone(),
            text(self.status.as_ref()),
            text(self.serving_status.as_ref()),
            money(self.budget_amount.as_ref()),
            money(self.daily_budget_amount.as_ref()),
            self.countries_or_regions.join(","),
        ]
    }
}

impl Tabular for AdGroup {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "NAME", "STATUS", "SERVING", "DEFAULT BID", "CPA GOAL"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            id(self.id),
            self.name.clone(),
            text(self.status.as_ref()),
            text(self.serving_status.as_ref()),
            money(self.default_bid_amount.as_ref()),
            money(self.cpa_goal.as_ref()),
        ]
    }
}

impl Tabular for Keyword {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "TEXT", "MATCH TYPE", "STATUS", "BID"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            id(self.id),
            self.text.clone(),
            self.match_type.clone(),
            text(self.status.as_ref()),
            money(self.bid_amount.as_ref()),
        ]
    }
}

impl Tabular for NegativeKeyword {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "TEXT", "MATCH TYPE", "STATUS"]
    }

    fn row(&self) -> Vec<String> {
        vec![id(self.id), self.text.clone(), self.match_type.clone(), text(self.status.as_ref())]
    }
}

impl Tabular for AppInfo {
    fn headers() -> Vec<&'static str> {
        vec!["ADAM ID", "APP NAME", "DEVELOPER"]
    }

    fn row(&self) -> Vec<String> {
        vec![self.adam_id.to_string(), self.app_name.clone(), self.developer_name.clone()]
    }
}

impl Tabular for GeoEntity {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "ENTITY", "NAME"]
    }

    fn row(&self) -> Vec<String> {
        vec![self.id.clone(), self.entity.clone(), self.display_name.clone()]
    }
}

impl Tabular for UserAcl {
    fn headers() -> Vec<&'static str> {
        vec!["ORG ID", "ORG NAME", "CURRENCY", "ROLES"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.org_id.to_string(),
            self.org_name.clone(),
            self.currency.clone(),
            self.role_names.join(","),
        ]
    }
}

/// Metadata keys that name the subject of a report row, most specific first
const REPORT_LABEL_KEYS: [&str; 5] =
    ["searchTermText", "keyword", "adGroupName", "campaignName", "countryOrRegion"];

fn report_label(metadata: &BTreeMap<String, Value>) -> String {
    REPORT_LABEL_KEYS
        .iter()
        .find_map(|key| metadata.get(*key))
        .map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .unwrap_or_default()
}

impl Tabular for ReportRow {
    fn headers() -> Vec<&'static str> {
        vec!["NAME", "IMPRESSIONS", "TAPS", "INSTALLS", "TTR", "AVG CPT", "AVG CPA", "SPEND"]
    }

    fn row(&self) -> Vec<String> {
        let label = report_label(&self.metadata);

        match &self.total {
            Some(total) => vec![
                label,
                total.impressions.to_string(),
                total.taps.to_string(),
                total.installs.to_string(),
                format!("{:.2}%", total.ttr * 100.0),
                total.avg_cpt.to_string(),
                total.avg_cpa.to_string(),
                total.local_spend.to_string(),
            ],
            None => {
                let mut row = vec![String::new(); 8];
                row[0] = label;
                row
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use searchads_domain::SpendRow;
    use serde_json::json;

    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> anyhow::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn campaign() -> Campaign {
        Campaign {
            id: Some(7),
            name: "Brand".to_string(),
            status: Some("ENABLED".to_string()),
            budget_amount: Some(Money::new("1000", "USD")),
            countries_or_regions: vec!["US".to_string(), "GB".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn empty_table_prints_no_results() {
        let out = render(|buf| render_list::<Campaign>(buf, OutputFormat::Table, &[]));
        assert_eq!(out, "No results found.\n");
    }

    #[test]
    fn empty_json_prints_empty_array() {
        let out = render(|buf| render_list::<Campaign>(buf, OutputFormat::Json, &[]));
        assert_eq!(out.trim(), "[]");
    }

    #[test]
    fn table_contains_headers_and_money() {
        let out = render(|buf| render_list(buf, OutputFormat::Table, &[campaign()]));
        assert!(out.contains("DAILY BUDGET"));
        assert!(out.contains("1000 USD"));
        assert!(out.contains("US,GB"));
    }

    #[test]
    fn json_is_indented_by_two() {
        let out = render(|buf| render_one(buf, OutputFormat::Json, &campaign()));
        assert!(out.starts_with("{\n  \"id\": 7,"));
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["budgetAmount"], json!({"amount": "1000", "currency": "USD"}));
    }

    #[test]
    fn report_row_uses_most_specific_label() {
        let row = ReportRow {
            metadata: [
                ("campaignName".to_string(), json!("Brand")),
                ("keyword".to_string(), json!("maps")),
            ]
            .into_iter()
            .collect(),
            total: Some(SpendRow {
                impressions: 1000,
                taps: 50,
                ttr: 0.05,
                local_spend: Money::new("25.00", "USD"),
                ..Default::default()
            }),
            ..Default::default()
        };

        let cells = row.row();
        assert_eq!(cells[0], "maps");
        assert_eq!(cells[1], "1000");
        assert_eq!(cells[4], "5.00%");
        assert_eq!(cells[7], "25.00 USD");
    }

    #[test]
    fn report_table_appends_grand_totals() {
        let report = ReportingDataResponse {
            row: vec![ReportRow {
                metadata: [("campaignName".to_string(), json!("Brand"))].into_iter().collect(),
                total: Some(SpendRow { impressions: 10, ..Default::default() }),
                ..Default::default()
            }],
            grand_totals: Some(ReportRow {
                total: Some(SpendRow { impressions: 10, ..Default::default() }),
                ..Default::default()
            }),
        };

        let out = render(|buf| render_report(buf, OutputFormat::Table, &report));
        assert!(out.contains("Brand"));
        assert!(out.contains("TOTAL"));
    }
}

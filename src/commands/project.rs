use crate::commands::{Out, OutputFormat};
use crate::projection::{project_budget, BudgetProjection, MonthlyVector, Row};
use crate::source::BudgetSource;
use crate::Result;
use anyhow::{anyhow, Context};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use uuid::Uuid;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Projects budget `uuid` for `year` and renders it in `format`.
pub async fn project(
    source: &dyn BudgetSource,
    uuid: Uuid,
    year: i32,
    format: OutputFormat,
) -> Result<Out<BudgetProjection>> {
    let projection = project_budget(source, uuid, year).await?;
    let output = match format {
        OutputFormat::Table => table(&projection),
        OutputFormat::Json => serde_json::to_string_pretty(&projection)
            .context("Unable to serialize the projection")?,
        OutputFormat::Csv => csv(&projection)?,
    };
    let message = format!(
        "Projected '{}' for {year}: net {}",
        projection.name,
        money(projection.total.total())
    );
    Ok(Out::new(message, projection).with_output(output))
}

fn money(value: Decimal) -> String {
    format_num::format_num!(",.2", value.to_f64().unwrap_or_default())
}

fn label(row: &Row<'_>) -> String {
    format!("{}{}", "  ".repeat(row.depth), row.name)
}

fn cells(monthly: &MonthlyVector) -> Vec<String> {
    monthly
        .iter()
        .copied()
        .chain(std::iter::once(monthly.total()))
        .map(money)
        .collect()
}

/// A fixed-width table with one line per budget, group and item.
fn table(projection: &BudgetProjection) -> String {
    let rows = projection.rows();
    let mut lines: Vec<Vec<String>> = vec![std::iter::once(projection.year.to_string())
        .chain(MONTH_NAMES.iter().map(|m| m.to_string()))
        .chain(std::iter::once("Total".to_string()))
        .collect()];
    for row in &rows {
        let mut line = vec![label(row)];
        line.extend(cells(row.monthly));
        lines.push(line);
    }

    let columns = lines[0].len();
    let widths: Vec<usize> = (0..columns)
        .map(|c| lines.iter().map(|l| l[c].chars().count()).max().unwrap_or(0))
        .collect();

    lines
        .iter()
        .map(|line| {
            line.iter()
                .enumerate()
                .map(|(c, cell)| {
                    if c == 0 {
                        format!("{cell:<width$}", width = widths[c])
                    } else {
                        format!("{cell:>width$}", width = widths[c])
                    }
                })
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The rows of the projection as CSV with exact decimal amounts.
fn csv(projection: &BudgetProjection) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    let header = ["kind", "depth", "uuid", "name"]
        .into_iter()
        .map(str::to_string)
        .chain(MONTH_NAMES.iter().map(|m| m.to_lowercase()))
        .chain(std::iter::once("total".to_string()));
    writer
        .write_record(header)
        .context("Unable to write the CSV header")?;
    for row in projection.rows() {
        let total = row.monthly.total();
        let record = [
            row.kind.to_string(),
            row.depth.to_string(),
            row.uuid.to_string(),
            row.name.to_string(),
        ]
        .into_iter()
        .chain(
            row.monthly
                .iter()
                .chain(std::iter::once(&total))
                .map(|v| v.normalize().to_string()),
        );
        writer
            .write_record(record)
            .with_context(|| format!("Unable to write the CSV row for '{}'", row.name))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow!("Unable to flush the CSV output: {}", e.error()))?;
    String::from_utf8(bytes).context("The CSV output is not UTF-8")
}

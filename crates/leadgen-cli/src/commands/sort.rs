use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use anyhow::{Context as _, Result};
use clap::{Args, ValueEnum};
use leadgen_core::{
    partition, ClientKind, LeadPipeline, LeadReport, OwnerRow, PropertyRow, ProspectiveClient,
};
use leadgen_sheets::{
    owner_rows, property_rows, read_table, render_text, write_csv_file, write_xlsx, OutputFormat,
    OutputScope, Table,
};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, warn};

#[derive(Debug, Args)]
pub struct SortArgs {
    #[arg(
        long = "properties",
        value_name = "SRC",
        required = true,
        help = "Property sheet as PATH or PATH#SHEET (zero-based); repeatable"
    )]
    pub properties: Vec<String>,
    #[arg(
        long = "owners",
        value_name = "SRC",
        required = true,
        help = "Owner sheet as PATH or PATH#SHEET (zero-based); repeatable"
    )]
    pub owners: Vec<String>,
    #[arg(long, help = "Write results to this file instead of stdout")]
    pub out: Option<PathBuf>,
    #[arg(long, value_enum, help = "Output format (defaults to the --out extension)")]
    pub format: Option<FormatArg>,
    #[arg(long, value_enum, default_value_t = ScopeArg::All)]
    pub scope: ScopeArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Xlsx,
    Csv,
    Text,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ScopeArg {
    All,
    Homeowners,
    Investors,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Xlsx => OutputFormat::Xlsx,
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Text => OutputFormat::Text,
        }
    }
}

impl From<ScopeArg> for OutputScope {
    fn from(value: ScopeArg) -> Self {
        match value {
            ScopeArg::All => OutputScope::All,
            ScopeArg::Homeowners => OutputScope::Homeowners,
            ScopeArg::Investors => OutputScope::Investors,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSource {
    pub path: PathBuf,
    pub sheet: usize,
}

impl SheetSource {
    /// `PATH#N` selects sheet `N`; a suffix that is not a number stays part
    /// of the path.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(invalid_input("sheet source cannot be empty"));
        }
        if let Some((path, sheet)) = trimmed.rsplit_once('#') {
            if !sheet.is_empty() && sheet.chars().all(|ch| ch.is_ascii_digit()) {
                if path.is_empty() {
                    return Err(invalid_input(format!("missing path in {trimmed:?}")));
                }
                let sheet = sheet
                    .parse()
                    .map_err(|_| invalid_input(format!("invalid sheet index in {trimmed:?}")))?;
                return Ok(Self {
                    path: PathBuf::from(path),
                    sheet,
                });
            }
        }
        Ok(Self {
            path: PathBuf::from(trimmed),
            sheet: 0,
        })
    }

    fn read(&self) -> Result<Table> {
        let table = read_table(&self.path, self.sheet).with_context(|| format!("read {}", self))?;
        debug!(
            source = %self,
            headers = table.headers.len(),
            rows = table.rows.len(),
            "sheet loaded"
        );
        Ok(table)
    }
}

impl fmt::Display for SheetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.path.display(), self.sheet)
    }
}

#[derive(Debug, Serialize)]
struct SortReport<'a> {
    report: &'a LeadReport,
    total_clients: usize,
    homeowners: usize,
    investors: usize,
    output: Option<String>,
    clients: Vec<ClientEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct ClientEntry<'a> {
    kind: ClientKind,
    #[serde(flatten)]
    client: &'a ProspectiveClient,
}

pub fn sort(ctx: &Context<'_>, args: SortArgs) -> Result<()> {
    let property_sources = parse_sources(&args.properties)?;
    let owner_sources = parse_sources(&args.owners)?;

    // Both sides are loaded in full before linkage starts.
    let mut properties: Vec<PropertyRow> = Vec::new();
    for source in &property_sources {
        let table = source.read()?;
        let rows = property_rows(&table, &ctx.config.property_headers)
            .with_context(|| format!("locate property columns in {}", source))?;
        properties.extend(rows);
    }

    let mut owners: Vec<OwnerRow> = Vec::new();
    for source in &owner_sources {
        let table = source.read()?;
        let rows = owner_rows(&table, &ctx.config.owner_headers)
            .with_context(|| format!("locate owner columns in {}", source))?;
        owners.extend(rows);
    }

    let pipeline = LeadPipeline::new(ctx.config.qualification.clone());
    let outcome = pipeline.run(properties, owners);
    log_report(&outcome.report);

    let split = partition(&outcome.clients);
    let scope = OutputScope::from(args.scope);
    let selected = scope.select(&outcome.clients);

    let mut written = None;
    if let Some(path) = args.out.as_ref() {
        let format = match args.format {
            Some(format) => OutputFormat::from(format),
            None => OutputFormat::from_path(path)
                .with_context(|| format!("infer output format for {}", path.display()))?,
        };
        let result = match format {
            OutputFormat::Xlsx => write_xlsx(path, &split),
            OutputFormat::Csv => write_csv_file(path, &selected),
            OutputFormat::Text => fs::write(path, render_text(&selected)).map_err(Into::into),
        };
        result.with_context(|| format!("write {}", path.display()))?;
        debug!(path = %path.display(), ?format, "results written");
        written = Some(path.display().to_string());
    }

    if ctx.json {
        let report = SortReport {
            report: &outcome.report,
            total_clients: outcome.clients.len(),
            homeowners: split.homeowners.len(),
            investors: split.investors.len(),
            output: written,
            clients: selected
                .iter()
                .copied()
                .map(|client| ClientEntry {
                    kind: client.kind(),
                    client,
                })
                .collect(),
        };
        return print_json(&report);
    }

    match written {
        Some(path) => println!(
            "{} prospective clients ({} homeowners, {} investors) written to {}",
            outcome.clients.len(),
            split.homeowners.len(),
            split.investors.len(),
            path
        ),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(render_text(&selected).as_bytes())?;
        }
    }
    Ok(())
}

fn parse_sources(raw: &[String]) -> Result<Vec<SheetSource>> {
    raw.iter().map(|value| SheetSource::parse(value)).collect()
}

fn log_report(report: &LeadReport) {
    let ingest = &report.ingest;
    debug!(
        properties = ingest.properties_read,
        owners = ingest.owners_read,
        "rows ingested"
    );
    if ingest.properties_missing_key > 0 {
        warn!(
            count = ingest.properties_missing_key,
            "skipped property rows without a usable key"
        );
    }
    if ingest.owners_missing_key > 0 || ingest.owners_missing_name > 0 {
        warn!(
            missing_key = ingest.owners_missing_key,
            missing_name = ingest.owners_missing_name,
            "skipped owner rows"
        );
    }

    let qualify = &report.qualify;
    debug!(
        qualified = qualify.qualified,
        rejected_keyword = qualify.rejected_keyword,
        no_contact = qualify.no_contact,
        "owners screened"
    );
    let rejected = qualify.rejected_keyword + qualify.no_contact;
    if rejected > 0 {
        warn!(
            rejected_keyword = qualify.rejected_keyword,
            no_contact = qualify.no_contact,
            "disqualified owners"
        );
    }

    let link = &report.link;
    debug!(
        promoted = link.clients_promoted,
        by_name = link.properties_by_name,
        by_phone = link.properties_by_phone,
        names_joined = link.names_joined,
        without_property = link.owners_without_property,
        "owners linked"
    );
}

#[cfg(test)]
mod tests {
    use super::SheetSource;
    use std::path::PathBuf;

    #[test]
    fn sheet_source_defaults_to_first_sheet() {
        let source = SheetSource::parse("data/town_square.xlsx").expect("parse");
        assert_eq!(source.path, PathBuf::from("data/town_square.xlsx"));
        assert_eq!(source.sheet, 0);
    }

    #[test]
    fn sheet_source_reads_sheet_suffix() {
        let source = SheetSource::parse("town_square.xlsx#2").expect("parse");
        assert_eq!(source.path, PathBuf::from("town_square.xlsx"));
        assert_eq!(source.sheet, 2);
        assert_eq!(source.to_string(), "town_square.xlsx#2");
    }

    #[test]
    fn sheet_source_keeps_non_numeric_suffix_in_path() {
        let source = SheetSource::parse("exports/#owners.csv").expect("parse");
        assert_eq!(source.path, PathBuf::from("exports/#owners.csv"));
        assert_eq!(source.sheet, 0);
    }

    #[test]
    fn sheet_source_rejects_empty_values() {
        assert!(SheetSource::parse("  ").is_err());
        assert!(SheetSource::parse("#1").is_err());
    }
}

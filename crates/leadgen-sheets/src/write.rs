use crate::error::{Result, SheetError};
use leadgen_core::{ClientKind, Partition, ProspectiveClient};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const HOMEOWNER_SHEET: &str = "Prospective Clients";
pub const INVESTOR_SHEET: &str = "Investors";

const PHONE_SEPARATOR: &str = ", ";
const PROPERTY_SEPARATOR: &str = "; ";
const CSV_HEADERS: [&str; 6] = [
    "name",
    "sex",
    "phone_numbers",
    "email",
    "property_count",
    "properties",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputScope {
    #[default]
    All,
    Homeowners,
    Investors,
}

impl OutputScope {
    pub fn select<'a>(&self, clients: &'a [ProspectiveClient]) -> Vec<&'a ProspectiveClient> {
        clients
            .iter()
            .filter(|client| match self {
                OutputScope::All => true,
                OutputScope::Homeowners => client.kind() == ClientKind::Homeowner,
                OutputScope::Investors => client.kind() == ClientKind::Investor,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Xlsx,
    Csv,
    Text,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "xlsx" => Ok(OutputFormat::Xlsx),
            "csv" => Ok(OutputFormat::Csv),
            "txt" | "text" => Ok(OutputFormat::Text),
            _ => Err(SheetError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Writes homeowners and investors to two worksheets of a new workbook.
pub fn write_xlsx(path: &Path, partition: &Partition<'_>) -> Result<()> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let homeowners = workbook.add_worksheet().set_name(HOMEOWNER_SHEET)?;
    fill_worksheet(homeowners, "Property", &partition.homeowners, &bold)?;

    let investors = workbook.add_worksheet().set_name(INVESTOR_SHEET)?;
    fill_worksheet(investors, "Properties", &partition.investors, &bold)?;

    workbook.save(path)?;
    Ok(())
}

fn fill_worksheet(
    worksheet: &mut Worksheet,
    property_header: &str,
    clients: &[&ProspectiveClient],
    header_format: &Format,
) -> Result<()> {
    let headers = ["Name", "Phone Number(s)", "e-Mail", property_header];
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, header_format)?;
    }

    for (idx, client) in clients.iter().enumerate() {
        let row = idx as u32 + 1;
        worksheet.write_string(row, 0, &client.name)?;
        worksheet.write_string(row, 1, phones_cell(client))?;
        worksheet.write_string(row, 2, client.email.as_deref().unwrap_or_default())?;
        worksheet.write_string(row, 3, properties_cell(client))?;
    }
    Ok(())
}

pub fn write_csv<W: Write>(writer: W, clients: &[&ProspectiveClient]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(CSV_HEADERS)?;
    for client in clients {
        let count = client.property_count().to_string();
        writer.write_record([
            client.name.as_str(),
            client.sex.as_deref().unwrap_or_default(),
            phones_cell(client).as_str(),
            client.email.as_deref().unwrap_or_default(),
            count.as_str(),
            properties_cell(client).as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_csv_file(path: &Path, clients: &[&ProspectiveClient]) -> Result<()> {
    let file = File::create(path)?;
    write_csv(file, clients)
}

/// One block per client, separated by blank lines.
pub fn render_text(clients: &[&ProspectiveClient]) -> String {
    let mut out = String::new();
    for (idx, client) in clients.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        match client.sex.as_deref() {
            Some(sex) => out.push_str(&format!("Name: {} ({})\n", client.name, sex)),
            None => out.push_str(&format!("Name: {}\n", client.name)),
        }
        out.push_str(&format!(
            "e-Mail: {}\n",
            client.email.as_deref().unwrap_or("-")
        ));
        out.push_str(&format!("Phone Numbers: {}\n", phones_cell(client)));
        out.push_str("Properties:\n");
        for property in client.properties() {
            out.push_str(&format!("- {}\n", property));
        }
    }
    out
}

fn phones_cell(client: &ProspectiveClient) -> String {
    client.phone_numbers.joined(PHONE_SEPARATOR)
}

fn properties_cell(client: &ProspectiveClient) -> String {
    client
        .properties()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(PROPERTY_SEPARATOR)
}

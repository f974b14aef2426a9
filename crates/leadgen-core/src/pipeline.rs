use crate::domain::ProspectiveClient;
use crate::ingest::{ingest_owners, ingest_properties, IngestReport, OwnerRow, PropertyRow};
use crate::linkage::{link, LinkReport};
use crate::rules::{Disqualification, QualificationPolicy};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QualifyReport {
    pub qualified: usize,
    pub rejected_keyword: usize,
    pub no_contact: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeadReport {
    pub ingest: IngestReport,
    pub qualify: QualifyReport,
    pub link: LinkReport,
}

#[derive(Debug, Clone)]
pub struct LeadOutcome {
    pub clients: Vec<ProspectiveClient>,
    pub report: LeadReport,
}

/// Rows in, prospective clients out.
#[derive(Debug, Clone, Default)]
pub struct LeadPipeline {
    policy: QualificationPolicy,
}

impl LeadPipeline {
    pub fn new(policy: QualificationPolicy) -> Self {
        Self { policy }
    }

    pub fn run<P, O>(&self, property_rows: P, owner_rows: O) -> LeadOutcome
    where
        P: IntoIterator<Item = PropertyRow>,
        O: IntoIterator<Item = OwnerRow>,
    {
        let mut report = LeadReport::default();
        let properties = ingest_properties(property_rows, &mut report.ingest);
        let owners = ingest_owners(owner_rows, &mut report.ingest);

        let mut qualified = Vec::with_capacity(owners.len());
        for owner in owners {
            match self.policy.disqualification(&owner) {
                None => {
                    report.qualify.qualified += 1;
                    qualified.push(owner);
                }
                Some(Disqualification::RejectedKeyword(_)) => report.qualify.rejected_keyword += 1,
                Some(Disqualification::NoContact) => report.qualify.no_contact += 1,
            }
        }

        let linkage = link(qualified, &properties);
        report.link = linkage.report;

        LeadOutcome {
            clients: linkage.clients,
            report,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LeadPipeline;
    use crate::ingest::{CellValue, OwnerRow, PropertyRow};

    fn property_row(key: &str) -> PropertyRow {
        PropertyRow {
            key: CellValue::text(key),
            ..PropertyRow::default()
        }
    }

    fn owner_row(key: &str, name: &str, phone: &str) -> OwnerRow {
        OwnerRow {
            key: CellValue::text(key),
            name: CellValue::text(name),
            phones: vec![CellValue::from(phone)],
            ..OwnerRow::default()
        }
    }

    #[test]
    fn run_filters_before_linking() {
        let outcome = LeadPipeline::default().run(
            vec![property_row("1"), property_row("2"), property_row("3")],
            vec![
                owner_row("1", "Ada Lovelace", "0501111111"),
                owner_row("2", "Emirates Bank", "0502222222"),
                owner_row("3", "Silent Owner", ""),
            ],
        );

        assert_eq!(outcome.clients.len(), 1);
        assert_eq!(outcome.clients[0].name, "Ada Lovelace");
        assert_eq!(outcome.report.qualify.qualified, 1);
        assert_eq!(outcome.report.qualify.rejected_keyword, 1);
        assert_eq!(outcome.report.qualify.no_contact, 1);
        assert_eq!(outcome.report.link.clients_promoted, 1);
    }

    #[test]
    fn fractional_workbook_key_is_skipped_not_truncated() {
        let owner = OwnerRow {
            key: CellValue::Number(12.7),
            ..owner_row("", "Ada Lovelace", "0501111111")
        };
        let outcome = LeadPipeline::default().run(vec![property_row("12")], vec![owner]);

        assert!(outcome.clients.is_empty());
        assert_eq!(outcome.report.ingest.owners_missing_key, 1);
        assert_eq!(outcome.report.link.owners_considered, 0);
    }
}

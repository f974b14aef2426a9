use crate::domain::ProspectiveClient;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientKind {
    Homeowner,
    Investor,
}

impl ProspectiveClient {
    pub fn kind(&self) -> ClientKind {
        if self.property_count() > 1 {
            ClientKind::Investor
        } else {
            ClientKind::Homeowner
        }
    }

    pub fn is_investor(&self) -> bool {
        self.kind() == ClientKind::Investor
    }
}

/// Borrowed view of the client list split by property count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition<'a> {
    pub homeowners: Vec<&'a ProspectiveClient>,
    pub investors: Vec<&'a ProspectiveClient>,
}

impl<'a> Partition<'a> {
    pub fn len(&self) -> usize {
        self.homeowners.len() + self.investors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn partition(clients: &[ProspectiveClient]) -> Partition<'_> {
    let mut out = Partition::default();
    for client in clients {
        match client.kind() {
            ClientKind::Homeowner => out.homeowners.push(client),
            ClientKind::Investor => out.investors.push(client),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{partition, ClientKind};
    use crate::domain::{Owner, Property, ProspectiveClient};

    fn client(name: &str, properties: usize) -> ProspectiveClient {
        let mut client = ProspectiveClient::promote(Owner::new(1, name), Property::new(1));
        for _ in 1..properties {
            client.add_property(Property::new(1));
        }
        client
    }

    #[test]
    fn kind_follows_property_count() {
        assert_eq!(client("Ada", 1).kind(), ClientKind::Homeowner);
        assert_eq!(client("Bob", 2).kind(), ClientKind::Investor);
        assert!(client("Cy", 5).is_investor());
    }

    #[test]
    fn partition_is_exhaustive_and_disjoint() {
        let clients = vec![client("Ada", 1), client("Bob", 3), client("Cy", 1)];
        let split = partition(&clients);

        let homeowners: Vec<&str> = split.homeowners.iter().map(|c| c.name.as_str()).collect();
        let investors: Vec<&str> = split.investors.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(homeowners, vec!["Ada", "Cy"]);
        assert_eq!(investors, vec!["Bob"]);
        assert_eq!(split.len(), clients.len());
    }

    #[test]
    fn partition_of_nothing_is_empty() {
        assert!(partition(&[]).is_empty());
    }
}

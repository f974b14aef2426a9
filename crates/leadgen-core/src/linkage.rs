use crate::domain::{Owner, PhoneNumbers, Property, PropertyKey, ProspectiveClient};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkReport {
    pub owners_considered: usize,
    pub owners_without_property: usize,
    pub clients_promoted: usize,
    pub properties_by_name: usize,
    pub properties_by_phone: usize,
    pub names_joined: usize,
}

#[derive(Debug, Clone)]
pub struct Linkage {
    pub clients: Vec<ProspectiveClient>,
    pub report: LinkReport,
}

/// Joins owners to properties on the property key and folds owners that
/// denote the same person into one prospective client.
///
/// Owners are processed in order, and each owner's properties in sheet order.
/// For every (owner, property) pair the earliest client with exactly the same
/// name takes the property; failing that, the earliest client sharing a phone
/// number absorbs the owner. An owner matching neither becomes a new client.
/// Both sides must be fully loaded before calling this.
pub fn link(owners: Vec<Owner>, properties: &[Property]) -> Linkage {
    let mut by_key: HashMap<PropertyKey, Vec<&Property>> = HashMap::new();
    for property in properties {
        by_key.entry(property.key).or_default().push(property);
    }

    let mut linker = Linker::default();
    for owner in owners {
        linker.report.owners_considered += 1;
        match by_key.get(&owner.key) {
            Some(matches) => linker.attach(owner, matches),
            None => linker.report.owners_without_property += 1,
        }
    }

    Linkage {
        clients: linker.clients,
        report: linker.report,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Match {
    Name(usize),
    Phone(usize),
}

#[derive(Default)]
struct Linker {
    clients: Vec<ProspectiveClient>,
    by_name: HashMap<String, BTreeSet<usize>>,
    by_phone: HashMap<String, BTreeSet<usize>>,
    report: LinkReport,
}

impl Linker {
    fn attach(&mut self, owner: Owner, properties: &[&Property]) {
        // Set once this owner becomes a client; its later properties go there.
        let mut promoted: Option<usize> = None;

        for property in properties {
            let property = (*property).clone();
            let found = match promoted {
                Some(idx) => Some(Match::Name(idx)),
                None => self.find(&owner.name, &owner.phone_numbers),
            };
            match found {
                Some(Match::Name(idx)) => {
                    self.clients[idx].add_property(property);
                    self.report.properties_by_name += 1;
                }
                Some(Match::Phone(idx)) => {
                    self.merge(idx, &owner.name, owner.email.as_deref(), property);
                    self.report.properties_by_phone += 1;
                }
                None => promoted = Some(self.promote(owner.clone(), property)),
            }
        }
    }

    fn find(&self, name: &str, phones: &PhoneNumbers) -> Option<Match> {
        if let Some(idx) = self.by_name.get(name).and_then(BTreeSet::first) {
            return Some(Match::Name(*idx));
        }
        phones
            .iter()
            .filter_map(|phone| self.by_phone.get(phone).and_then(BTreeSet::first))
            .min()
            .map(|idx| Match::Phone(*idx))
    }

    fn merge(&mut self, idx: usize, name: &str, email: Option<&str>, property: Property) {
        let previous = self.clients[idx].name.clone();
        if self.clients[idx].absorb(name, email, property) {
            self.report.names_joined += 1;
            self.unindex_name(&previous, idx);
            let renamed = self.clients[idx].name.clone();
            self.by_name.entry(renamed).or_default().insert(idx);
        }
    }

    fn promote(&mut self, owner: Owner, property: Property) -> usize {
        let idx = self.clients.len();
        let client = ProspectiveClient::promote(owner, property);
        self.by_name
            .entry(client.name.clone())
            .or_default()
            .insert(idx);
        for phone in client.phone_numbers.iter() {
            self.by_phone.entry(phone.to_string()).or_default().insert(idx);
        }
        self.clients.push(client);
        self.report.clients_promoted += 1;
        idx
    }

    fn unindex_name(&mut self, name: &str, idx: usize) {
        if let Some(slots) = self.by_name.get_mut(name) {
            slots.remove(&idx);
            if slots.is_empty() {
                self.by_name.remove(name);
            }
        }
    }
}

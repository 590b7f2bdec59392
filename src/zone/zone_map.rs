use serde::{Serialize, Serializer, ser::SerializeMap};
use std::collections::HashMap;

/// PTR entries of a single reverse zone, keyed by host label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneEntries {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

/// Reverse zones and their PTR entries.
///
/// Zones and host labels iterate in the order they were first inserted, so
/// rendering follows the order records came out of deduplication.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneMap {
    zones: Vec<(String, ZoneEntries)>,
    index: HashMap<String, usize>,
}

impl ZoneEntries {
    /// Sets the FQDN for `host`. An existing label keeps its position.
    pub fn insert(&mut self, host: String, fqdn: String) {
        match self.index.get(&host) {
            Some(&position) => self.entries[position].1 = fqdn,
            None => {
                self.index.insert(host.clone(), self.entries.len());
                self.entries.push((host, fqdn));
            }
        }
    }

    #[cfg(test)]
    pub fn get(&self, host: &str) -> Option<&str> {
        self.index
            .get(host)
            .map(|&position| self.entries[position].1.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(host, fqdn)| (host.as_str(), fqdn.as_str()))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ZoneMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a PTR entry, creating the zone on first use.
    pub fn insert(&mut self, zone: String, host: String, fqdn: String) {
        let position = match self.index.get(&zone) {
            Some(&position) => position,
            None => {
                let position = self.zones.len();
                self.index.insert(zone.clone(), position);
                self.zones.push((zone, ZoneEntries::default()));
                position
            }
        };
        self.zones[position].1.insert(host, fqdn);
    }

    #[cfg(test)]
    pub fn get(&self, zone: &str) -> Option<&ZoneEntries> {
        self.index.get(zone).map(|&position| &self.zones[position].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ZoneEntries)> {
        self.zones
            .iter()
            .map(|(zone, entries)| (zone.as_str(), entries))
    }

    pub fn zone_names(&self) -> impl Iterator<Item = &str> {
        self.zones.iter().map(|(zone, _)| zone.as_str())
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Number of PTR entries across all zones.
    pub fn record_count(&self) -> usize {
        self.zones.iter().map(|(_, zone)| zone.entries.len()).sum()
    }
}

impl Serialize for ZoneEntries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (host, fqdn) in &self.entries {
            map.serialize_entry(host, fqdn)?;
        }
        map.end()
    }
}

impl Serialize for ZoneMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.zones.len()))?;
        for (zone, entries) in &self.zones {
            map.serialize_entry(zone, entries)?;
        }
        map.end()
    }
}

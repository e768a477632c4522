//! Stop directory lookup.

use crate::domain::{BusStop, LatLng};

/// A stop returned from a directory search.
#[derive(Debug, Clone, PartialEq)]
pub struct StopMatch {
    pub id: String,
    pub name: String,
    pub location: LatLng,
}

impl From<&BusStop> for StopMatch {
    fn from(stop: &BusStop) -> Self {
        Self {
            id: stop.id.clone(),
            name: stop.name.clone(),
            location: stop.location,
        }
    }
}

/// Read-only directory of named stops.
#[derive(Debug, Clone, Default)]
pub struct StopDirectory {
    stops: Vec<BusStop>,
}

impl StopDirectory {
    pub fn new(stops: Vec<BusStop>) -> Self {
        Self { stops }
    }

    pub fn all(&self) -> &[BusStop] {
        &self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Case-insensitive name search.
    ///
    /// Names starting with the query rank before names merely containing it;
    /// ties keep directory order. A blank query matches nothing.
    pub fn search(&self, query: &str, limit: usize) -> Vec<StopMatch> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<(bool, &BusStop)> = self
            .stops
            .iter()
            .filter_map(|s| {
                let name = s.name.to_lowercase();
                if name.starts_with(&needle) {
                    Some((true, s))
                } else if name.contains(&needle) {
                    Some((false, s))
                } else {
                    None
                }
            })
            .collect();

        // Stable sort: prefix matches first.
        hits.sort_by_key(|(prefix, _)| !prefix);

        hits.into_iter()
            .take(limit)
            .map(|(_, s)| StopMatch::from(s))
            .collect()
    }
}

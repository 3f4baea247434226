// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity records as returned by `GET /activities`.

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One activity on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Free-text description
    pub description: String,
    /// Human-readable schedule, e.g. "Fridays, 3:30 PM - 5:00 PM"
    pub schedule: String,
    /// Capacity
    pub max_participants: u32,
    /// Registered emails, in server order
    pub participants: Vec<String>,
}

impl Activity {
    /// Capacity minus registered participants. Negative when overbooked.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

/// All activities keyed by name, in the order the server sent them.
#[derive(Debug, Clone, Default)]
pub struct ActivityCollection {
    entries: Vec<(String, Activity)>,
    /// Name to position in `entries`.
    index: HashMap<String, usize>,
}

impl PartialEq for ActivityCollection {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for ActivityCollection {}

impl ActivityCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an activity. A replaced entry keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&pos) => self.entries[pos].1 = activity,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, activity));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.index.get(name).map(|&pos| &self.entries[pos].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for ActivityCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CollectionVisitor;

        impl<'de> Visitor<'de> for CollectionVisitor {
            type Value = ActivityCollection;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut map: M) -> Result<Self::Value, M::Error> {
                let capacity = map.size_hint().unwrap_or(0);
                let mut collection = ActivityCollection {
                    entries: Vec::with_capacity(capacity),
                    index: HashMap::with_capacity(capacity),
                };
                while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
                    collection.insert(name, activity);
                }
                Ok(collection)
            }
        }

        deserializer.deserialize_map(CollectionVisitor)
    }
}

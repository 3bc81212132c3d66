//! Grouping of a flat record list into container sections.
//!
//! HubSpot object types and Airtable bases arrive in the same flat list as
//! their children. Children point at their container by name through
//! `parent_path_or_name`.

use crate::record::Record;
use std::collections::HashMap;

/// A container and the children assigned to it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordGroup {
    /// The key children use to reference this container.
    pub name: String,
    pub container: Record,
    /// Children in input order.
    pub items: Vec<Record>,
}

/// Groups keyed by container name, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedRecords {
    groups: Vec<RecordGroup>,
    index: HashMap<String, usize>,
}

impl GroupedRecords {
    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Looks up a group by container name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RecordGroup> {
        self.index.get(name).map(|&position| &self.groups[position])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RecordGroup> {
        self.groups.iter()
    }

    /// Total number of children placed in any group.
    #[must_use]
    pub fn grouped_item_count(&self) -> usize {
        self.groups.iter().map(|group| group.items.len()).sum()
    }

    fn upsert_container(&mut self, name: String, container: &Record) {
        match self.index.get(&name) {
            // A later container with the same name replaces the earlier one
            // but keeps its position.
            Some(&position) => self.groups[position].container = container.clone(),
            None => {
                self.index.insert(name.clone(), self.groups.len());
                self.groups.push(RecordGroup {
                    name,
                    container: container.clone(),
                    items: Vec::new(),
                });
            }
        }
    }
}

impl IntoIterator for GroupedRecords {
    type Item = RecordGroup;
    type IntoIter = std::vec::IntoIter<RecordGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a> IntoIterator for &'a GroupedRecords {
    type Item = &'a RecordGroup;
    type IntoIter = std::slice::Iter<'a, RecordGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Partitions records into container groups.
///
/// Containers are collected first, so a child may appear before its container
/// in the input. Children whose parent reference matches no container are not
/// placed in any group.
#[must_use]
pub fn group_records(records: &[Record]) -> GroupedRecords {
    let mut grouped = GroupedRecords::default();

    for container in records.iter().filter(|record| record.is_container()) {
        let name = container.name.clone().unwrap_or_default();
        grouped.upsert_container(name, container);
    }

    for child in records.iter().filter(|record| !record.is_container()) {
        let Some(parent) = child.parent_path_or_name.as_deref() else {
            continue;
        };
        if let Some(&position) = grouped.index.get(parent) {
            grouped.groups[position].items.push(child.clone());
        }
    }

    grouped
}

use super::issue::{Issue, Priority};
use crate::error::CollectionError;
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use uuid::Uuid;

/// Container for [`Issue`]s in insertion order, indexed by identifier.
///
/// The container keeps two structures consistent on every mutation: the
/// ordered sequence backing positional access and iteration, and an
/// id-to-position map backing [`find_by_id`](Issues::find_by_id) and
/// [`remove`](Issues::remove). Per-priority counts are maintained
/// incrementally. A single writer at a time is assumed.
#[derive(Debug, Clone, Default)]
pub struct Issues {
    elements: Vec<Issue>,
    positions: HashMap<Uuid, usize>,
    size_of_priority: [usize; 3],
}

impl Issues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges the given containers into a new one, preserving the order of
    /// the individual containers.
    pub fn merge(collections: impl IntoIterator<Item = Issues>) -> Issues {
        let mut merged = Issues::new();
        for collection in collections {
            merged.add_all(collection);
        }
        merged
    }

    /// Appends the issue to the end of this container and returns it.
    pub fn add(&mut self, issue: Issue) -> &Issue {
        self.size_of_priority[priority_slot(issue.priority())] += 1;
        self.positions.insert(issue.id(), self.elements.len());
        self.elements.push(issue);
        &self.elements[self.elements.len() - 1]
    }

    /// Appends all issues in iteration order. An empty source is a no-op.
    pub fn add_all(&mut self, issues: impl IntoIterator<Item = Issue>) {
        for issue in issues {
            self.add(issue);
        }
    }

    /// Removes and returns the issue with the given identifier.
    pub fn remove(&mut self, id: Uuid) -> Result<Issue, CollectionError> {
        let position = self.positions.remove(&id).ok_or(CollectionError::NotFound(id))?;
        let issue = self.elements.remove(position);
        self.size_of_priority[priority_slot(issue.priority())] -= 1;

        // Everything after the removed element shifted down by one.
        for later in &self.elements[position..] {
            if let Some(stored) = self.positions.get_mut(&later.id()) {
                *stored -= 1;
            }
        }

        Ok(issue)
    }

    /// Returns the issue with the given identifier.
    pub fn find_by_id(&self, id: Uuid) -> Result<&Issue, CollectionError> {
        self.positions
            .get(&id)
            .map(|&position| &self.elements[position])
            .ok_or(CollectionError::NotFound(id))
    }

    /// Returns the issue at the given position in insertion order.
    pub fn get(&self, index: usize) -> Option<&Issue> {
        self.elements.get(index)
    }

    pub fn size(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of issues with the given priority.
    pub fn size_of(&self, priority: Priority) -> usize {
        self.size_of_priority[priority_slot(priority)]
    }

    pub fn high_priority_size(&self) -> usize {
        self.size_of(Priority::High)
    }

    pub fn normal_priority_size(&self) -> usize {
        self.size_of(Priority::Normal)
    }

    pub fn low_priority_size(&self) -> usize {
        self.size_of(Priority::Low)
    }

    /// The distinct files referenced by the issues, sorted.
    pub fn affected_files(&self) -> BTreeSet<&str> {
        self.elements.iter().map(Issue::file_name).collect()
    }

    pub fn affected_file_count(&self) -> usize {
        self.affected_files().len()
    }

    /// The distinct categories of the issues, sorted.
    pub fn categories(&self) -> BTreeSet<&str> {
        self.elements.iter().map(Issue::category).collect()
    }

    /// The distinct parser identifiers of the issues, sorted.
    pub fn kinds(&self) -> BTreeSet<&str> {
        self.elements.iter().map(Issue::kind).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Issue> {
        self.elements.iter()
    }
}

fn priority_slot(priority: Priority) -> usize {
    match priority {
        Priority::High => 0,
        Priority::Normal => 1,
        Priority::Low => 2,
    }
}

impl fmt::Display for Issues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} issues", self.size())
    }
}

impl IntoIterator for Issues {
    type Item = Issue;
    type IntoIter = std::vec::IntoIter<Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a Issues {
    type Item = &'a Issue;
    type IntoIter = std::slice::Iter<'a, Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl FromIterator<Issue> for Issues {
    fn from_iter<I: IntoIterator<Item = Issue>>(iter: I) -> Self {
        let mut issues = Issues::new();
        issues.add_all(iter);
        issues
    }
}

// Serializes as the plain sequence of issues; the index is an internal detail.
impl Serialize for Issues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.elements.len()))?;
        for issue in &self.elements {
            seq.serialize_element(issue)?;
        }
        seq.end()
    }
}

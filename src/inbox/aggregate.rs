//! Per-organisation statistics derived from a fetched notification list.

use std::collections::{BTreeSet, HashMap};

use crate::github::models::NotificationRecord;

/// Subject-type tallies in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeCounts(Vec<(String, usize)>);

impl TypeCounts {
    fn increment(&mut self, subject_type: &str) {
        if let Some((_, count)) = self.0.iter_mut().find(|(kind, _)| kind == subject_type) {
            *count += 1;
        } else {
            self.0.push((subject_type.to_owned(), 1));
        }
    }

    /// Count for one subject type, zero when never seen.
    #[must_use]
    pub fn get(&self, subject_type: &str) -> usize {
        self.0
            .iter()
            .find(|(kind, _)| kind == subject_type)
            .map_or(0, |(_, count)| *count)
    }

    /// Iterate over `(subject type, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(kind, count)| (kind.as_str(), *count))
    }
}

/// Statistics for one organisation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupStats<'records> {
    /// Total records in the group.
    pub count: usize,
    /// Records still unread.
    pub unread_count: usize,
    /// Distinct repository names, without the owner prefix.
    pub repos: BTreeSet<String>,
    /// Subject type tallies.
    pub type_counts: TypeCounts,
    /// Member records in input order.
    pub members: Vec<&'records NotificationRecord>,
}

impl<'records> GroupStats<'records> {
    fn add(&mut self, repo: &str, record: &'records NotificationRecord) {
        self.count += 1;
        if record.unread {
            self.unread_count += 1;
        }
        if !self.repos.contains(repo) {
            self.repos.insert(repo.to_owned());
        }
        self.type_counts.increment(&record.subject_type);
        self.members.push(record);
    }
}

/// Organisation name to statistics, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedStats<'records> {
    groups: Vec<(String, GroupStats<'records>)>,
    positions: HashMap<String, usize>,
}

impl<'records> GroupedStats<'records> {
    fn record(&mut self, record: &'records NotificationRecord) {
        let Some((owner, repo)) = record.owner_and_repo() else {
            return;
        };

        let position = if let Some(position) = self.positions.get(owner) {
            *position
        } else {
            let position = self.groups.len();
            self.groups.push((owner.to_owned(), GroupStats::default()));
            self.positions.insert(owner.to_owned(), position);
            position
        };

        if let Some((_, stats)) = self.groups.get_mut(position) {
            stats.add(repo, record);
        }
    }

    /// Statistics for one organisation.
    #[must_use]
    pub fn get(&self, owner: &str) -> Option<&GroupStats<'records>> {
        let position = *self.positions.get(owner)?;
        self.groups.get(position).map(|(_, stats)| stats)
    }

    /// Iterate over `(organisation, statistics)` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &GroupStats<'records>)> {
        self.groups
            .iter()
            .map(|(owner, stats)| (owner.as_str(), stats))
    }

    /// Number of organisations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true when no record could be grouped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Sum of `count` over every group.
    #[must_use]
    pub fn total(&self) -> usize {
        self.groups.iter().map(|(_, stats)| stats.count).sum()
    }
}

/// Groups records by organisation in a single pass.
///
/// Records whose full name has no `/` are skipped.
#[must_use]
pub fn aggregate(records: &[NotificationRecord]) -> GroupedStats<'_> {
    records
        .iter()
        .fold(GroupedStats::default(), |mut stats, record| {
            stats.record(record);
            stats
        })
}

/// Records whose repository belongs to `owner`, in input order.
#[must_use]
pub fn filter_by_group(records: &[NotificationRecord], owner: &str) -> Vec<NotificationRecord> {
    records
        .iter()
        .filter(|record| record.belongs_to(owner))
        .cloned()
        .collect()
}

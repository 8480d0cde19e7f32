//! Type and group taxonomy derived from a set of components
//!
//! Nothing here is cached: every function is a pure derivation over the
//! component slice it is given, and bucket contents keep store order.

use crate::components::Component;
use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// A (type, group) pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupRef {
    pub kind: String,
    pub group: String,
}

impl GroupRef {
    pub fn new(kind: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            group: group.into(),
        }
    }
}

impl fmt::Display for GroupRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.kind, self.group)
    }
}

/// Bucket key within a type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupKey {
    Named(String),
    Ungrouped,
}

impl GroupKey {
    fn of(component: &Component) -> Self {
        match &component.group {
            Some(group) => GroupKey::Named(group.clone()),
            None => GroupKey::Ungrouped,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            GroupKey::Named(name) => Some(name),
            GroupKey::Ungrouped => None,
        }
    }
}

/// Components of one group (or the ungrouped remainder) of a type
#[derive(Debug, Clone)]
pub struct GroupBucket<'a> {
    pub key: GroupKey,
    pub components: Vec<&'a Component>,
}

/// All buckets of one type
#[derive(Debug, Clone)]
pub struct TypeBucket<'a> {
    pub kind: String,
    pub groups: Vec<GroupBucket<'a>>,
}

impl<'a> TypeBucket<'a> {
    pub fn group(&self, key: &GroupKey) -> Option<&GroupBucket<'a>> {
        self.groups.iter().find(|bucket| &bucket.key == key)
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|bucket| bucket.components.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Nested type → group → components view
#[derive(Debug, Clone, Default)]
pub struct Structure<'a> {
    pub types: Vec<TypeBucket<'a>>,
}

impl<'a> Structure<'a> {
    pub fn get(&self, kind: &str) -> Option<&TypeBucket<'a>> {
        self.types.iter().find(|bucket| bucket.kind == kind)
    }

    /// Components in one bucket, empty when the bucket does not exist
    pub fn bucket(&self, kind: &str, key: &GroupKey) -> &[&'a Component] {
        self.get(kind)
            .and_then(|bucket| bucket.group(key))
            .map(|bucket| bucket.components.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.types.iter().all(TypeBucket::is_empty)
    }
}

/// Distinct types, ascending
pub fn available_types(components: &[Component]) -> Vec<String> {
    components
        .iter()
        .map(|c| c.kind.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct (type, group) pairs among grouped components of the selected types, sorted
pub fn available_groups(components: &[Component], selected_types: &[String]) -> Vec<GroupRef> {
    components
        .iter()
        .filter(|c| selected_types.contains(&c.kind))
        .filter_map(|c| c.group.as_ref().map(|g| GroupRef::new(&c.kind, g)))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Partition components into type → group buckets.
///
/// With `selected_groups` set, grouped components outside the set are dropped.
/// Ungrouped components are never filtered by group selection.
pub fn structure<'a>(
    components: &'a [Component],
    selected_types: &[String],
    selected_groups: Option<&HashSet<GroupRef>>,
) -> Structure<'a> {
    let mut types: Vec<TypeBucket<'a>> = available_types(components)
        .into_iter()
        .filter(|kind| selected_types.contains(kind))
        .map(|kind| TypeBucket {
            kind,
            groups: Vec::new(),
        })
        .collect();

    for component in components {
        let Some(type_bucket) = types.iter_mut().find(|b| b.kind == component.kind) else {
            continue;
        };

        if let (Some(allowed), Some(group)) = (selected_groups, &component.group) {
            if !allowed.contains(&GroupRef::new(&component.kind, group)) {
                continue;
            }
        }

        let key = GroupKey::of(component);
        match type_bucket.groups.iter_mut().find(|b| b.key == key) {
            Some(bucket) => bucket.components.push(component),
            None => type_bucket.groups.push(GroupBucket {
                key,
                components: vec![component],
            }),
        }
    }

    Structure { types }
}

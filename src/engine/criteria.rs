//! Filter criteria

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::LocationScope;

/// Constraint on a single record field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Criterion {
    /// Case-insensitive substring match
    Contains(String),
    /// Field value must be one of the listed values
    OneOf(Vec<String>),
    /// `[category, specific]` pair for hierarchical location fields
    Location(LocationScope, String),
}

impl Criterion {
    pub fn contains(value: impl Into<String>) -> Self {
        Self::Contains(value.into())
    }

    pub fn one_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::OneOf(values.into_iter().map(Into::into).collect())
    }

    pub fn location(scope: LocationScope, specific: impl Into<String>) -> Self {
        Self::Location(scope, specific.into())
    }

    /// True when the criterion carries no usable value
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Contains(s) => s.trim().is_empty(),
            Self::OneOf(values) => values.is_empty(),
            Self::Location(..) => false,
        }
    }

    /// Test a record's field value against this criterion.
    ///
    /// `None` means the record has no such field; that never matches,
    /// except for the world-scope wildcard which ignores the value.
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Self::Location(LocationScope::World, _) => true,
            Self::Location(_, specific) => value == Some(specific.as_str()),
            Self::OneOf(allowed) => value.is_some_and(|v| allowed.iter().any(|a| a == v)),
            Self::Contains(needle) => value
                .is_some_and(|v| v.to_lowercase().contains(&needle.to_lowercase())),
        }
    }

    /// Short text for status lines and preset listings
    pub fn summary(&self) -> String {
        match self {
            Self::Contains(s) => format!("~{}", s),
            Self::OneOf(values) => values.join("/"),
            Self::Location(scope, specific) => format!("{}:{}", scope, specific),
        }
    }
}

/// Active constraints keyed by field. A missing key means no constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterCriteria<F: Ord> {
    conditions: BTreeMap<F, Criterion>,
}

impl<F: Ord> Default for FilterCriteria<F> {
    fn default() -> Self {
        Self {
            conditions: BTreeMap::new(),
        }
    }
}

impl<F: Ord + Copy> FilterCriteria<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`FilterCriteria::set`]
    pub fn with(mut self, field: F, criterion: Criterion) -> Self {
        self.set(field, criterion);
        self
    }

    /// Set the constraint on `field`. An empty criterion clears the field.
    pub fn set(&mut self, field: F, criterion: Criterion) {
        if criterion.is_empty() {
            self.conditions.remove(&field);
        } else {
            self.conditions.insert(field, criterion);
        }
    }

    pub fn get(&self, field: F) -> Option<&Criterion> {
        self.conditions.get(&field)
    }

    /// True when no field carries a usable value
    pub fn is_empty(&self) -> bool {
        self.conditions.values().all(Criterion::is_empty)
    }

    /// Number of constrained fields
    pub fn len(&self) -> usize {
        self.conditions.values().filter(|c| !c.is_empty()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &Criterion)> {
        self.conditions.iter().map(|(f, c)| (*f, c))
    }

    /// Overlay `other` field by field; fields it does not mention are kept.
    pub fn merge(&mut self, other: &FilterCriteria<F>) {
        for (field, criterion) in other.iter() {
            self.set(field, criterion.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttackField;

    #[test]
    fn empty_values_clear_the_field() {
        let mut criteria = FilterCriteria::new()
            .with(AttackField::IntelType, Criterion::contains("僵尸网络"));
        assert_eq!(criteria.len(), 1);

        criteria.set(AttackField::IntelType, Criterion::contains("   "));
        assert!(criteria.is_empty());
        assert!(criteria.get(AttackField::IntelType).is_none());

        criteria.set(AttackField::Action, Criterion::OneOf(Vec::new()));
        assert!(criteria.is_empty());
    }

    #[test]
    fn merge_overlays_without_dropping_other_fields() {
        let mut form = FilterCriteria::new()
            .with(AttackField::AttackerIp, Criterion::contains("10.0"))
            .with(AttackField::Action, Criterion::one_of(["阻断"]));
        let preset = FilterCriteria::new()
            .with(AttackField::Action, Criterion::one_of(["告警"]))
            .with(AttackField::IntelType, Criterion::contains("钓鱼"));

        form.merge(&preset);

        assert_eq!(form.get(AttackField::AttackerIp), Some(&Criterion::contains("10.0")));
        assert_eq!(form.get(AttackField::Action), Some(&Criterion::one_of(["告警"])));
        assert_eq!(form.get(AttackField::IntelType), Some(&Criterion::contains("钓鱼")));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let criteria = FilterCriteria::new()
            .with(AttackField::IntelType, Criterion::contains("僵尸网络"))
            .with(AttackField::Location, Criterion::location(LocationScope::China, "中国 | 北京"));

        let json = serde_json::to_value(&criteria).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "location": { "location": ["china", "中国 | 北京"] },
                "intelType": { "contains": "僵尸网络" },
            })
        );

        let back: FilterCriteria<AttackField> = serde_json::from_value(json).unwrap();
        assert_eq!(back, criteria);
    }

    #[test]
    fn contains_is_case_insensitive() {
        let c = Criterion::contains("TCP");
        assert!(c.matches(Some("tcp")));
        assert!(c.matches(Some("xTcPx")));
        assert!(!c.matches(Some("udp")));
        assert!(!c.matches(None));
    }

    #[test]
    fn one_of_requires_exact_membership() {
        let c = Criterion::one_of(["高危", "中危"]);
        assert!(c.matches(Some("高危")));
        assert!(!c.matches(Some("高")));
        assert!(!c.matches(None));
    }
}

// ABOUTME: Tag predicate combinator shared by the food and exercise catalogs
// ABOUTME: Composes HasTag/AnyOf/AllOf with Not/And/Or over an item's tag set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Tag predicates
//!
//! Foods expose their descriptive tags and exercises expose their equipment
//! list through [`Tagged`], so restriction filters, meal rules and equipment
//! checks are all expressed as one [`TagPredicate`] tree.

use fitplan_core::constants::diet;
use fitplan_core::models::{ExerciseItem, FoodItem};
use std::collections::BTreeSet;
use std::ops::Not;

/// Items with a set of string tags
pub trait Tagged {
    /// The tag set predicates are evaluated against
    fn tags(&self) -> &BTreeSet<String>;
}

impl Tagged for FoodItem {
    fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }
}

impl Tagged for ExerciseItem {
    fn tags(&self) -> &BTreeSet<String> {
        &self.equipment
    }
}

/// Boolean expression over tag-set membership
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagPredicate {
    /// The tag is present
    HasTag(String),
    /// At least one of the tags is present (false when empty)
    AnyOf(Vec<String>),
    /// Every tag is present (true when empty)
    AllOf(Vec<String>),
    /// Negation
    Not(Box<TagPredicate>),
    /// Every sub-predicate holds (true when empty)
    And(Vec<TagPredicate>),
    /// Some sub-predicate holds (false when empty)
    Or(Vec<TagPredicate>),
}

impl TagPredicate {
    /// Single-tag membership
    pub fn has(tag: impl Into<String>) -> Self {
        Self::HasTag(tag.into())
    }

    /// Membership of any tag in `tags`
    pub fn any_of<I>(tags: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::AnyOf(tags.into_iter().map(Into::into).collect())
    }

    /// Membership of every tag in `tags`
    pub fn all_of<I>(tags: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::AllOf(tags.into_iter().map(Into::into).collect())
    }

    /// Allow-list predicate for a dietary restriction, `None` when unknown
    #[must_use]
    pub fn for_restriction(restriction: &str) -> Option<Self> {
        diet::allowed_tags(restriction).map(|tags| Self::any_of(tags.iter().copied()))
    }

    /// Conjunction with `other`
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match self {
            Self::And(mut parts) => {
                parts.push(other);
                Self::And(parts)
            }
            first => Self::And(vec![first, other]),
        }
    }

    /// Disjunction with `other`
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Or(mut parts) => {
                parts.push(other);
                Self::Or(parts)
            }
            first => Self::Or(vec![first, other]),
        }
    }

    /// Evaluate against a raw tag set
    #[must_use]
    pub fn matches_tags(&self, tags: &BTreeSet<String>) -> bool {
        match self {
            Self::HasTag(tag) => tags.contains(tag),
            Self::AnyOf(wanted) => wanted.iter().any(|tag| tags.contains(tag)),
            Self::AllOf(wanted) => wanted.iter().all(|tag| tags.contains(tag)),
            Self::Not(inner) => !inner.matches_tags(tags),
            Self::And(parts) => parts.iter().all(|part| part.matches_tags(tags)),
            Self::Or(parts) => parts.iter().any(|part| part.matches_tags(tags)),
        }
    }

    /// Evaluate against an item
    #[must_use]
    pub fn matches<T: Tagged + ?Sized>(&self, item: &T) -> bool {
        self.matches_tags(item.tags())
    }
}

impl Not for TagPredicate {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Self::Not(inner) => *inner,
            other => Self::Not(Box::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| (*v).to_owned()).collect()
    }

    #[test]
    fn test_any_and_all() {
        let set = tags(&["vegan", "fiber"]);
        assert!(TagPredicate::any_of(["vegan", "plant_based"]).matches_tags(&set));
        assert!(!TagPredicate::all_of(["vegan", "plant_based"]).matches_tags(&set));
        assert!(!TagPredicate::AnyOf(Vec::new()).matches_tags(&set));
        assert!(TagPredicate::AllOf(Vec::new()).matches_tags(&set));
    }

    #[test]
    fn test_combinators() {
        let set = tags(&["breakfast", "high_protein"]);
        let predicate = TagPredicate::has("breakfast").and(!TagPredicate::has("snack"));
        assert!(predicate.matches_tags(&set));

        let predicate = TagPredicate::has("snack").or(TagPredicate::has("quick_energy"));
        assert!(!predicate.matches_tags(&set));
    }

    #[test]
    fn test_double_negation_collapses() {
        let predicate = !!TagPredicate::has("vegan");
        assert_eq!(predicate, TagPredicate::has("vegan"));
    }

    #[test]
    fn test_unknown_restriction() {
        assert!(TagPredicate::for_restriction("keto").is_none());
        assert_eq!(
            TagPredicate::for_restriction("vegan"),
            Some(TagPredicate::any_of(["vegan", "plant_based"]))
        );
    }
}

// ABOUTME: Profile storage abstraction and the default concurrent in-memory implementation
// ABOUTME: Assigns sequential identifiers and replaces profiles wholesale on update
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::intelligence::UserProfile;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use fitplan_core::errors::{AppError, AppResult, ErrorCode};

/// Storage for computed user profiles
///
/// Implementations must be shareable across threads so a web layer can hold
/// one planner behind an `Arc`.
pub trait ProfileStore: Send + Sync {
    /// Identifier for the next profile created without one
    fn next_id(&self) -> String;

    /// Store a new profile
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` when the identifier is taken
    fn insert(&self, profile: UserProfile) -> AppResult<()>;

    /// Fetch a profile by identifier
    fn get(&self, user_id: &str) -> Option<UserProfile>;

    /// Replace an existing profile
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when no profile has the identifier
    fn replace(&self, profile: UserProfile) -> AppResult<()>;

    /// Number of stored profiles
    fn len(&self) -> usize;

    /// True when no profiles are stored
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory profile store backed by a sharded concurrent map
///
/// Generated identifiers count up from "1", skipping identifiers that
/// callers already chose.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: DashMap<String, UserProfile>,
}

impl InMemoryProfileStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self {
            profiles: DashMap::new(),
        }
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn next_id(&self) -> String {
        (self.profiles.len() + 1..)
            .map(|n| n.to_string())
            .find(|id| !self.profiles.contains_key(id))
            .unwrap_or_default()
    }

    fn insert(&self, profile: UserProfile) -> AppResult<()> {
        match self.profiles.entry(profile.user_id().to_owned()) {
            Entry::Occupied(existing) => Err(AppError::new(
                ErrorCode::ResourceAlreadyExists,
                format!("User profile '{}' already exists", existing.key()),
            )),
            Entry::Vacant(slot) => {
                slot.insert(profile);
                Ok(())
            }
        }
    }

    fn get(&self, user_id: &str) -> Option<UserProfile> {
        self.profiles.get(user_id).map(|entry| entry.value().clone())
    }

    fn replace(&self, profile: UserProfile) -> AppResult<()> {
        match self.profiles.get_mut(profile.user_id()) {
            Some(mut entry) => {
                *entry = profile;
                Ok(())
            }
            None => Err(AppError::not_found(format!(
                "User profile '{}'",
                profile.user_id()
            ))),
        }
    }

    fn len(&self) -> usize {
        self.profiles.len()
    }
}

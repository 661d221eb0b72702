//! Member name lookup.

use crate::events::PlayerId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Resolves a participant id to the name shown on leaderboards
pub trait MemberDirectory {
    /// Display name for `user_id`, or `None` if the member is unknown
    fn display_name(&self, user_id: &str) -> Option<String>;

    /// Display name, falling back to the raw id
    fn label(&self, user_id: &str) -> String {
        self.display_name(user_id)
            .unwrap_or_else(|| user_id.to_string())
    }
}

/// User profile fields relevant to display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberProfile {
    #[serde(default)]
    pub display_name: Option<String>,
    pub email: String,
}

impl MemberProfile {
    /// Display name if set and non-blank, otherwise the email address
    pub fn label(&self) -> &str {
        match self.display_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.email,
        }
    }
}

impl MemberDirectory for HashMap<PlayerId, String> {
    fn display_name(&self, user_id: &str) -> Option<String> {
        self.get(user_id).cloned()
    }
}

impl MemberDirectory for HashMap<PlayerId, MemberProfile> {
    fn display_name(&self, user_id: &str) -> Option<String> {
        self.get(user_id).map(|profile| profile.label().to_string())
    }
}

/// Directory that knows nobody; every label is the raw id
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDirectory;

impl MemberDirectory for NoDirectory {
    fn display_name(&self, _user_id: &str) -> Option<String> {
        None
    }
}

//! Email message kinds and the provider request they render to.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sender name stamped on every email
pub const APP_NAME: &str = "Poker Nights";

/// Reply-to used for messages nobody should answer
pub const NO_REPLY: &str = "noreply@suckingout.com";

/// Provider-side template ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailTemplates {
    pub event_invite: String,
    pub group_invite: String,
    pub event_cancel: String,
}

impl Default for EmailTemplates {
    fn default() -> Self {
        Self {
            event_invite: "event_invite".to_string(),
            group_invite: "group_invite".to_string(),
            event_cancel: "event_cancel".to_string(),
        }
    }
}

impl EmailTemplates {
    /// Defaults overridden by `EMAIL_TEMPLATE_EVENT_INVITE`,
    /// `EMAIL_TEMPLATE_GROUP_INVITE` and `EMAIL_TEMPLATE_EVENT_CANCEL`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            event_invite: std::env::var("EMAIL_TEMPLATE_EVENT_INVITE")
                .unwrap_or(defaults.event_invite),
            group_invite: std::env::var("EMAIL_TEMPLATE_GROUP_INVITE")
                .unwrap_or(defaults.group_invite),
            event_cancel: std::env::var("EMAIL_TEMPLATE_EVENT_CANCEL")
                .unwrap_or(defaults.event_cancel),
        }
    }
}

/// Event details shared by invitations and cancellations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSummary {
    pub title: String,
    /// Already formatted for the recipient's timezone
    pub date: String,
    pub location: String,
}

/// Emails the application sends
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailMessage {
    /// Invitation to a single event
    EventInvite {
        to_email: String,
        event: EventSummary,
        buy_in: u64,
        link: String,
        reply_to: String,
    },

    /// Invitation to join a group
    GroupInvite {
        to_email: String,
        group_name: String,
        inviter_name: String,
        link: String,
        reply_to: String,
    },

    /// Notice that an event was called off
    EventCancelled { to_email: String, event: EventSummary },
}

/// A rendered request for the email provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingEmail {
    pub template_id: String,
    pub to_email: String,
    pub params: BTreeMap<String, String>,
}

impl OutgoingEmail {
    pub fn subject(&self) -> Option<&str> {
        self.params.get("subject").map(String::as_str)
    }
}

impl EmailMessage {
    pub fn to_email(&self) -> &str {
        match self {
            Self::EventInvite { to_email, .. }
            | Self::GroupInvite { to_email, .. }
            | Self::EventCancelled { to_email, .. } => to_email,
        }
    }

    pub fn subject(&self) -> String {
        match self {
            Self::EventInvite { event, .. } => format!("You're invited to {}", event.title),
            Self::GroupInvite {
                group_name,
                inviter_name,
                ..
            } => format!("{inviter_name} invited you to join {group_name}"),
            Self::EventCancelled { event, .. } => format!("{} has been cancelled", event.title),
        }
    }

    /// Template id plus the parameter map the provider fills it with
    pub fn render(&self, templates: &EmailTemplates) -> OutgoingEmail {
        let mut params = BTreeMap::new();
        let mut set = |key: &str, value: String| {
            params.insert(key.to_string(), value);
        };

        set("to_email", self.to_email().to_string());
        set("subject", self.subject());
        set("app_name", APP_NAME.to_string());
        set("from_name", APP_NAME.to_string());

        let template_id = match self {
            Self::EventInvite {
                event,
                buy_in,
                link,
                reply_to,
                ..
            } => {
                set("event_title", event.title.clone());
                set("event_date", event.date.clone());
                set("event_location", event.location.clone());
                set("event_buyin", buy_in.to_string());
                set("event_link", link.clone());
                set("reply_to", reply_to.clone());
                &templates.event_invite
            }
            Self::GroupInvite {
                group_name,
                inviter_name,
                link,
                reply_to,
                ..
            } => {
                set("group_name", group_name.clone());
                set("inviter_name", inviter_name.clone());
                set("group_link", link.clone());
                set("reply_to", reply_to.clone());
                &templates.group_invite
            }
            Self::EventCancelled { event, .. } => {
                set("event_title", event.title.clone());
                set("event_date", event.date.clone());
                set("event_location", event.location.clone());
                set("reply_to", NO_REPLY.to_string());
                &templates.event_cancel
            }
        };

        OutgoingEmail {
            template_id: template_id.clone(),
            to_email: self.to_email().to_string(),
            params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> EventSummary {
        EventSummary {
            title: "Friday Game".to_string(),
            date: "March 6th, 2026 7:30 PM".to_string(),
            location: "Sam's".to_string(),
        }
    }

    #[test]
    fn test_render_event_invite() {
        let email = EmailMessage::EventInvite {
            to_email: "pat@example.com".to_string(),
            event: summary(),
            buy_in: 40,
            link: "https://example.com/events/e1".to_string(),
            reply_to: "host@example.com".to_string(),
        }
        .render(&EmailTemplates::default());

        assert_eq!(email.template_id, "event_invite");
        assert_eq!(email.to_email, "pat@example.com");
        assert_eq!(email.subject(), Some("You're invited to Friday Game"));
        assert_eq!(email.params["event_buyin"], "40");
        assert_eq!(email.params["app_name"], APP_NAME);
        assert_eq!(email.params["from_name"], APP_NAME);
    }

    #[test]
    fn test_render_group_invite() {
        let email = EmailMessage::GroupInvite {
            to_email: "cy@example.com".to_string(),
            group_name: "Thursday Crew".to_string(),
            inviter_name: "Ana".to_string(),
            link: "https://example.com/groups/g1".to_string(),
            reply_to: "ana@example.com".to_string(),
        }
        .render(&EmailTemplates::default());

        assert_eq!(email.template_id, "group_invite");
        assert_eq!(
            email.subject(),
            Some("Ana invited you to join Thursday Crew")
        );
        assert_eq!(email.params["group_link"], "https://example.com/groups/g1");
    }

    #[test]
    fn test_render_cancellation_uses_no_reply() {
        let email = EmailMessage::EventCancelled {
            to_email: "ben@example.com".to_string(),
            event: summary(),
        }
        .render(&EmailTemplates::default());

        assert_eq!(email.template_id, "event_cancel");
        assert_eq!(email.subject(), Some("Friday Game has been cancelled"));
        assert_eq!(email.params["reply_to"], NO_REPLY);
    }
}

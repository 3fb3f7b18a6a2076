//! # Wire data model
//!
//! The types exchanged with the milestone backend, serialized with the
//! camelCase field names the REST contract uses. Dates travel as bare
//! `YYYY-MM-DD` strings, which is [`chrono::NaiveDate`]'s default serde
//! format. Optional request fields are omitted entirely when `None` so a
//! partial update never sends explicit nulls.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Title substituted when a milestone is toggled with a blank title.
pub const UNTITLED: &str = "Untitled Milestone";

/// The signed-in user's identity, as returned by `/auth/me` and `/auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// A user-defined goal with optional target and completion dates.
///
/// The client never owns persistence: this is a transient copy of the
/// server's record, refreshed after every mutation. `completed_date` is set
/// iff `completed` is true — enforced by [`Milestone::toggle_update`] on the
/// way out, not trusted on the way in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achieve_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<NaiveDate>,
    #[serde(default)]
    pub user_id: i64,
}

impl Milestone {
    /// Whether a pending milestone's target date has already passed.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.achieve_date.is_some_and(|d| d < today)
    }

    /// Build the full-field update that flips this milestone's completion.
    ///
    /// Always sends the complete field set (a blank title becomes
    /// [`UNTITLED`]). Transitioning to complete stamps `completed_date`
    /// with `today`; transitioning back omits the field so no stale date
    /// can travel with `completed == false`.
    pub fn toggle_update(&self, today: NaiveDate) -> UpdateMilestoneRequest {
        let completed = !self.completed;
        UpdateMilestoneRequest {
            title: Some(if self.title.trim().is_empty() {
                UNTITLED.to_string()
            } else {
                self.title.clone()
            }),
            description: self.description.clone(),
            achieve_date: self.achieve_date,
            completed: Some(completed),
            completed_date: completed.then_some(today),
        }
    }

    /// Target date within `[today, today + 7 days]`, for the dashboard's
    /// "upcoming" count. Completed milestones never qualify.
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        if self.completed {
            return false;
        }
        let Some(date) = self.achieve_date else {
            return false;
        };
        date >= today && date <= today + Duration::days(7)
    }
}

/// Body of `POST /milestones`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMilestoneRequest {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achieve_date: Option<NaiveDate>,
}

/// Body of `PUT /milestones/{id}`. Fields left `None` are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMilestoneRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achieve_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<NaiveDate>,
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/signup`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Response of both auth endpoints. `token`/`user` are present only on a
/// successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn milestone() -> Milestone {
        Milestone {
            id: 7,
            title: "Run 5k".to_string(),
            description: Some("Couch to 5k".to_string()),
            completed: false,
            achieve_date: Some(date("2025-01-10")),
            created_date: Some(date("2024-12-01")),
            completed_date: None,
            user_id: 1,
        }
    }

    #[test]
    fn test_milestone_wire_format() {
        let json = serde_json::to_value(milestone()).unwrap();
        assert_eq!(json["title"], "Run 5k");
        assert_eq!(json["achieveDate"], "2025-01-10");
        assert_eq!(json["createdDate"], "2024-12-01");
        assert_eq!(json["userId"], 1);
        // Unset optionals are omitted, not null
        assert!(json.get("completedDate").is_none());
    }

    #[test]
    fn test_milestone_parses_minimal_record() {
        let m: Milestone = serde_json::from_str(
            r#"{"id":1,"title":"A","completed":false,"userId":2}"#,
        )
        .unwrap();
        assert_eq!(m.id, 1);
        assert!(m.achieve_date.is_none());
        assert!(m.created_date.is_none());
    }

    #[test]
    fn test_toggle_to_complete_stamps_today() {
        let today = date("2025-03-04");
        let update = milestone().toggle_update(today);

        assert_eq!(update.completed, Some(true));
        assert_eq!(update.completed_date, Some(today));
        // Full field set travels with the flip
        assert_eq!(update.title.as_deref(), Some("Run 5k"));
        assert_eq!(update.achieve_date, Some(date("2025-01-10")));
    }

    #[test]
    fn test_toggle_back_omits_completed_date() {
        let mut m = milestone();
        m.completed = true;
        m.completed_date = Some(date("2025-01-02"));

        let update = m.toggle_update(date("2025-03-04"));
        assert_eq!(update.completed, Some(false));
        assert_eq!(update.completed_date, None);

        // And the field is absent from the serialized body entirely
        let json = serde_json::to_value(&update).unwrap();
        assert!(json.get("completedDate").is_none());
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn test_toggle_defaults_blank_title() {
        let mut m = milestone();
        m.title = "   ".to_string();
        let update = m.toggle_update(date("2025-03-04"));
        assert_eq!(update.title.as_deref(), Some(UNTITLED));
    }

    #[test]
    fn test_overdue_only_when_pending() {
        let today = date("2025-02-01");
        let mut m = milestone();
        assert!(m.is_overdue(today));

        m.completed = true;
        assert!(!m.is_overdue(today));

        m.completed = false;
        m.achieve_date = Some(today);
        assert!(!m.is_overdue(today));
    }

    #[test]
    fn test_auth_response_without_token() {
        let resp: AuthResponse =
            serde_json::from_str(r#"{"success":false,"message":"Invalid credentials"}"#).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.message, "Invalid credentials");
        assert!(resp.token.is_none());
        assert!(resp.user.is_none());
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A support ticket as served by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub user_id: i64,
    pub subject: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub admin_reply: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_status() -> String {
    "open".to_string()
}

impl Ticket {
    pub fn is_open(&self) -> bool {
        self.status == "open"
    }

    /// Single-line summary for the dashboard listing
    pub fn summary_line(&self) -> String {
        let when = self
            .created_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        format!(
            "#{:<5} [{}] {} (user {}, {})",
            self.id, self.status, self.subject, self.user_id, when
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ticket_row() {
        let json = r#"{
            "id": 7,
            "user_id": 42,
            "subject": "printer on fire",
            "message": "please help",
            "status": "answered",
            "admin_reply": "water applied",
            "created_at": "2026-08-01T12:30:00+00:00",
            "updated_at": null
        }"#;

        let ticket: Ticket = serde_json::from_str(json).expect("ticket should parse");
        assert_eq!(ticket.id, 7);
        assert_eq!(ticket.user_id, 42);
        assert!(!ticket.is_open());
        assert_eq!(ticket.admin_reply.as_deref(), Some("water applied"));
    }

    #[test]
    fn test_status_defaults_to_open() {
        let json = r#"{"id": 1, "user_id": 2, "subject": "hi"}"#;
        let ticket: Ticket = serde_json::from_str(json).expect("ticket should parse");
        assert!(ticket.is_open());
    }

    #[test]
    fn test_summary_line() {
        let json = r#"{"id": 3, "user_id": 9, "subject": "refund", "status": "open"}"#;
        let ticket: Ticket = serde_json::from_str(json).expect("ticket should parse");
        let line = ticket.summary_line();
        assert!(line.contains("#3"));
        assert!(line.contains("[open]"));
        assert!(line.contains("refund"));
        assert!(line.contains("user 9"));
    }
}

use serde::{Deserialize, Serialize};

/// A keyword-triggered canned reply configured in the admin panel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoReply {
    pub id: i64,
    pub trigger: String,
    pub reply: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_auto_reply_row() {
        let json = r#"{"id": 2, "trigger": "hours", "reply": "Open 9-17", "is_active": false}"#;
        let auto: AutoReply = serde_json::from_str(json).expect("auto-reply should parse");
        assert_eq!(auto.trigger, "hours");
        assert!(!auto.is_active);
    }

    #[test]
    fn test_active_defaults_to_true() {
        let json = r#"{"id": 1, "trigger": "hi", "reply": "hello"}"#;
        let auto: AutoReply = serde_json::from_str(json).expect("auto-reply should parse");
        assert!(auto.is_active);
    }
}

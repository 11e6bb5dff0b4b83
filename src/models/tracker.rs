use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use utoipa::ToSchema;

/// 对话主机发来的一次动作调用
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActionCall {
    pub next_action: String,
    #[serde(default)]
    pub sender_id: Option<String>,
    pub tracker: Tracker,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub domain: Value,
    #[serde(default)]
    pub version: Option<String>,
}

/// 会话快照（只读）
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct Tracker {
    pub sender_id: String,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub slots: HashMap<String, Value>,
    #[serde(default)]
    pub latest_message: LatestMessage,
    #[serde(default)]
    pub events: Vec<TrackerEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct LatestMessage {
    #[serde(default)]
    pub text: Option<String>,
}

/// 会话历史中的事件；只关心 user 与 slot 两类
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrackerEvent {
    pub event: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub value: Value,
}

fn slot_value_as_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

impl Tracker {
    /// 取槽位值；数字和布尔值按字符串读取，null 视为未填
    pub fn get_slot(&self, name: &str) -> Option<String> {
        self.slots.get(name).and_then(slot_value_as_string)
    }

    pub fn latest_text(&self) -> Option<&str> {
        self.latest_message.text.as_deref()
    }

    /// 最近一次用户发言之后被设置的槽位（按出现顺序、去重）。
    /// 没有事件历史时返回 None，由调用方决定回退策略。
    pub fn slots_set_since_last_user_message(&self) -> Option<Vec<(String, Option<String>)>> {
        if self.events.is_empty() {
            return None;
        }
        let start = self
            .events
            .iter()
            .rposition(|e| e.event == "user")
            .map(|i| i + 1)
            .unwrap_or(0);

        let mut slots: Vec<(String, Option<String>)> = Vec::new();
        for event in &self.events[start..] {
            if event.event != "slot" {
                continue;
            }
            let Some(name) = &event.name else { continue };
            let value = slot_value_as_string(&event.value);
            match slots.iter_mut().find(|(n, _)| n == name) {
                Some(existing) => existing.1 = value,
                None => slots.push((name.clone(), value)),
            }
        }
        Some(slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tracker_from(value: Value) -> Tracker {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_minimal_tracker_defaults() {
        let tracker = tracker_from(json!({ "sender_id": "u1" }));
        assert_eq!(tracker.sender_id, "u1");
        assert!(tracker.slots.is_empty());
        assert_eq!(tracker.latest_text(), None);
        assert!(tracker.slots_set_since_last_user_message().is_none());
    }

    #[test]
    fn test_get_slot_renders_scalars() {
        let tracker = tracker_from(json!({
            "sender_id": "u1",
            "slots": {
                "contact_number": 1234567890u64,
                "address": "12 Baker Street",
                "feedback_text": null
            }
        }));
        assert_eq!(tracker.get_slot("contact_number").as_deref(), Some("1234567890"));
        assert_eq!(tracker.get_slot("address").as_deref(), Some("12 Baker Street"));
        assert_eq!(tracker.get_slot("feedback_text"), None);
        assert_eq!(tracker.get_slot("missing"), None);
    }

    #[test]
    fn test_slots_set_since_last_user_message() {
        let tracker = tracker_from(json!({
            "sender_id": "u1",
            "events": [
                { "event": "slot", "name": "address", "value": "old" },
                { "event": "user", "text": "first" },
                { "event": "slot", "name": "contact_number", "value": "111" },
                { "event": "user", "text": "second" },
                { "event": "action", "name": "action_listen" },
                { "event": "slot", "name": "contact_number", "value": "123" },
                { "event": "slot", "name": "address", "value": null },
                { "event": "slot", "name": "contact_number", "value": "1234567890" }
            ]
        }));
        let slots = tracker.slots_set_since_last_user_message().unwrap();
        assert_eq!(
            slots,
            vec![
                ("contact_number".to_string(), Some("1234567890".to_string())),
                ("address".to_string(), None),
            ]
        );
    }
}

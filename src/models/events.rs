use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// 返回给对话主机的状态变更指令
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "event")]
pub enum Event {
    /// value 为 null 表示清空槽位
    #[serde(rename = "slot")]
    SlotSet {
        timestamp: Option<f64>,
        name: String,
        #[schema(value_type = Object)]
        value: Value,
    },
}

impl Event {
    pub fn set_slot(name: &str, value: impl Into<String>) -> Self {
        Event::SlotSet {
            timestamp: None,
            name: name.to_string(),
            value: Value::String(value.into()),
        }
    }

    pub fn clear_slot(name: &str) -> Self {
        Event::SlotSet {
            timestamp: None,
            name: name.to_string(),
            value: Value::Null,
        }
    }

    pub fn slot(name: &str, value: Option<String>) -> Self {
        match value {
            Some(v) => Event::set_slot(name, v),
            None => Event::clear_slot(name),
        }
    }
}

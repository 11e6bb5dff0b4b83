use super::events::Event;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// 快捷回复按钮
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Button {
    pub payload: String,
    pub title: String,
}

impl Button {
    pub fn new(payload: &str, title: &str) -> Self {
        Self {
            payload: payload.to_string(),
            title: title.to_string(),
        }
    }
}

/// 通过响应通道发给用户的一条消息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BotMessage {
    pub text: Option<String>,
    #[serde(default)]
    pub buttons: Vec<Button>,
    #[serde(default)]
    #[schema(value_type = Vec<Object>)]
    pub elements: Vec<Value>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub custom: Map<String, Value>,
    pub template: Option<String>,
    pub response: Option<String>,
    pub image: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub attachment: Option<Value>,
}

impl BotMessage {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            buttons: Vec::new(),
            elements: Vec::new(),
            custom: Map::new(),
            template: None,
            response: None,
            image: None,
            attachment: None,
        }
    }

    pub fn with_buttons(mut self, buttons: Vec<Button>) -> Self {
        self.buttons = buttons;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ActionResponse {
    pub events: Vec<Event>,
    pub responses: Vec<BotMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActionInfo {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_wire_format() {
        let msg = BotMessage::text("Address saved!")
            .with_buttons(vec![Button::new("/order_done", "Make Payment")]);
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({
                "text": "Address saved!",
                "buttons": [{ "payload": "/order_done", "title": "Make Payment" }],
                "elements": [],
                "custom": {},
                "template": null,
                "response": null,
                "image": null,
                "attachment": null
            })
        );
    }
}

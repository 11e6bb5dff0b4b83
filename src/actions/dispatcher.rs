use crate::models::{BotMessage, Button};

/// 收集动作执行期间要发给用户的消息
#[derive(Debug, Default)]
pub struct Dispatcher {
    messages: Vec<BotMessage>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn utter_message(&mut self, text: impl Into<String>) {
        self.messages.push(BotMessage::text(text));
    }

    pub fn utter_with_buttons(&mut self, text: impl Into<String>, buttons: Vec<Button>) {
        self.messages.push(BotMessage::text(text).with_buttons(buttons));
    }

    pub fn into_messages(self) -> Vec<BotMessage> {
        self.messages
    }
}

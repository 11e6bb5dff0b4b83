use super::{Action, ActionContext, Dispatcher};
use crate::models::{Button, Event};
use async_trait::async_trait;

/// 主菜单快捷按钮
pub fn main_menu_buttons() -> Vec<Button> {
    vec![
        Button::new("/show_menu", "Show Menu"),
        Button::new("/track_order", "Track Order"),
        Button::new("/give_feedback", "Give Feedback"),
    ]
}

/// 套餐及价格，按钮的 payload 与标题相同
pub const COMBOS: [&str; 4] = [
    "Combo 1 - $10",
    "Combo 2 - $12",
    "Combo 3 - $15",
    "Combo 4 - $18",
];

pub struct ActionGreet;

#[async_trait]
impl Action for ActionGreet {
    fn name(&self) -> &'static str {
        "action_greet"
    }

    async fn run(&self, _ctx: &ActionContext<'_>, dispatcher: &mut Dispatcher) -> Vec<Event> {
        dispatcher.utter_with_buttons(
            "Welcome to FoodBot! How can I help you today?",
            main_menu_buttons(),
        );
        Vec::new()
    }
}

pub struct ActionShowMenu;

#[async_trait]
impl Action for ActionShowMenu {
    fn name(&self) -> &'static str {
        "action_show_menu"
    }

    async fn run(&self, _ctx: &ActionContext<'_>, dispatcher: &mut Dispatcher) -> Vec<Event> {
        let buttons = COMBOS.iter().map(|c| Button::new(c, c)).collect();
        dispatcher.utter_with_buttons("Here are our available combos:", buttons);
        Vec::new()
    }
}

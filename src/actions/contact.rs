use super::{Action, ActionContext, Dispatcher, FormValidator};
use crate::models::Event;
use crate::services::CustomerService;
use crate::utils::{generate_pin, is_valid_contact_number};
use async_trait::async_trait;

pub const CONTACT_NUMBER_SLOT: &str = "contact_number";

pub struct ActionAskContact;

#[async_trait]
impl Action for ActionAskContact {
    fn name(&self) -> &'static str {
        "action_ask_contact"
    }

    async fn run(&self, _ctx: &ActionContext<'_>, dispatcher: &mut Dispatcher) -> Vec<Event> {
        dispatcher.utter_message("Please provide your 10-digit contact number.");
        Vec::new()
    }
}

pub struct ValidateContactForm;

#[async_trait]
impl FormValidator for ValidateContactForm {
    fn form_name(&self) -> &'static str {
        "validate_contact_form"
    }

    fn slots(&self) -> &'static [&'static str] {
        &[CONTACT_NUMBER_SLOT]
    }

    async fn validate_slot(
        &self,
        _slot: &str,
        value: &str,
        _ctx: &ActionContext<'_>,
        dispatcher: &mut Dispatcher,
    ) -> Option<String> {
        if is_valid_contact_number(value) {
            Some(value.to_string())
        } else {
            dispatcher.utter_message("Please provide a valid 10-digit contact number.");
            None
        }
    }
}

/// 生成PIN、写入顾客记录，并把PIN直接发回给用户
pub struct ActionSendPin {
    customers: CustomerService,
}

impl ActionSendPin {
    pub fn new(customers: CustomerService) -> Self {
        Self { customers }
    }
}

#[async_trait]
impl Action for ActionSendPin {
    fn name(&self) -> &'static str {
        "action_send_pin"
    }

    async fn run(&self, ctx: &ActionContext<'_>, dispatcher: &mut Dispatcher) -> Vec<Event> {
        let mobile_number = ctx.tracker.get_slot(CONTACT_NUMBER_SLOT);
        let pin = generate_pin();

        if let Err(e) = self
            .customers
            .upsert_pin(ctx.sender_id(), mobile_number.as_deref(), &pin)
            .await
        {
            log::error!("Database error: {e}");
        }

        // 写库失败也照常回复PIN
        dispatcher.utter_message(format!(
            "Your verification PIN is {pin}. Please enter it to continue."
        ));
        Vec::new()
    }
}

/// 比对用户输入与已存PIN；通过时不回复，交给主机继续表单
pub struct ActionValidatePin {
    customers: CustomerService,
}

impl ActionValidatePin {
    pub fn new(customers: CustomerService) -> Self {
        Self { customers }
    }
}

#[async_trait]
impl Action for ActionValidatePin {
    fn name(&self) -> &'static str {
        "action_validate_pin"
    }

    async fn run(&self, ctx: &ActionContext<'_>, dispatcher: &mut Dispatcher) -> Vec<Event> {
        let entered = ctx.tracker.latest_text().unwrap_or_default();

        match self.customers.verify_pin(ctx.sender_id(), entered).await {
            Ok(true) => log::info!("PIN verified for sender {}", ctx.sender_id()),
            Ok(false) => dispatcher.utter_message("Invalid PIN. Please try again."),
            Err(e) => log::error!("Database error: {e}"),
        }
        Vec::new()
    }
}

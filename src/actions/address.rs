use super::{Action, ActionContext, Dispatcher, FormValidator};
use crate::models::{Button, Event};
use crate::services::CustomerService;
use crate::utils::is_complete_address;
use async_trait::async_trait;

pub const ADDRESS_SLOT: &str = "address";

pub struct ActionAskAddress;

#[async_trait]
impl Action for ActionAskAddress {
    fn name(&self) -> &'static str {
        "action_ask_address"
    }

    async fn run(&self, _ctx: &ActionContext<'_>, dispatcher: &mut Dispatcher) -> Vec<Event> {
        dispatcher.utter_message("Please provide your delivery address.");
        Vec::new()
    }
}

pub struct ValidateAddressForm;

#[async_trait]
impl FormValidator for ValidateAddressForm {
    fn form_name(&self) -> &'static str {
        "validate_address_form"
    }

    fn slots(&self) -> &'static [&'static str] {
        &[ADDRESS_SLOT]
    }

    async fn validate_slot(
        &self,
        _slot: &str,
        value: &str,
        _ctx: &ActionContext<'_>,
        dispatcher: &mut Dispatcher,
    ) -> Option<String> {
        if is_complete_address(value) {
            Some(value.to_string())
        } else {
            dispatcher.utter_message("Please provide a complete address with more details.");
            None
        }
    }
}

pub struct ActionSaveAddress {
    customers: CustomerService,
}

impl ActionSaveAddress {
    pub fn new(customers: CustomerService) -> Self {
        Self { customers }
    }
}

#[async_trait]
impl Action for ActionSaveAddress {
    fn name(&self) -> &'static str {
        "action_save_address"
    }

    async fn run(&self, ctx: &ActionContext<'_>, dispatcher: &mut Dispatcher) -> Vec<Event> {
        let address = ctx.tracker.get_slot(ADDRESS_SLOT);

        match self
            .customers
            .update_address(ctx.sender_id(), address.as_deref())
            .await
        {
            Ok(affected) => {
                if affected == 0 {
                    log::warn!("No customer record for sender {}", ctx.sender_id());
                }
                dispatcher.utter_with_buttons(
                    "Address saved! Make the payment by clicking on the button",
                    vec![Button::new("/order_done", "Make Payment")],
                );
            }
            Err(e) => log::error!("Database error: {e}"),
        }
        Vec::new()
    }
}

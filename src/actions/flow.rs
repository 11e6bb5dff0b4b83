use std::fmt;
use std::str::FromStr;

/// 下单流程所处阶段。
///
/// 对话主机决定调用哪个动作，这里只根据动作名推进阶段，
/// 用来发现乱序调用（例如未验证PIN就确认支付）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConversationStage {
    #[default]
    Idle,
    AwaitingContact,
    AwaitingPin,
    AwaitingAddress,
    AwaitingPayment,
}

impl ConversationStage {
    /// 保存阶段的槽位名，领域中声明了该槽位才会回写
    pub const SLOT: &'static str = "order_stage";

    pub fn as_str(&self) -> &'static str {
        match self {
            ConversationStage::Idle => "idle",
            ConversationStage::AwaitingContact => "awaiting_contact",
            ConversationStage::AwaitingPin => "awaiting_pin",
            ConversationStage::AwaitingAddress => "awaiting_address",
            ConversationStage::AwaitingPayment => "awaiting_payment",
        }
    }

    /// 当前阶段是否应该出现该动作；不属于下单流程的动作任何阶段都可以
    pub fn expects(self, action: &str) -> bool {
        use ConversationStage::*;
        match action {
            "action_ask_contact" | "validate_contact_form" | "action_send_pin" => {
                matches!(self, AwaitingContact | AwaitingPin)
            }
            "action_validate_pin" => self == AwaitingPin,
            "action_ask_address" => matches!(self, AwaitingPin | AwaitingAddress),
            "validate_address_form" | "action_save_address" => self == AwaitingAddress,
            "action_order_done" => self == AwaitingPayment,
            _ => true,
        }
    }

    pub fn next(self, action: &str) -> ConversationStage {
        use ConversationStage::*;
        match action {
            "action_order_item" => AwaitingContact,
            "action_send_pin" => AwaitingPin,
            // 主机只有在PIN通过后才会询问地址
            "action_ask_address" => AwaitingAddress,
            "action_save_address" => AwaitingPayment,
            "action_order_done" => Idle,
            _ => self,
        }
    }
}

impl fmt::Display for ConversationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConversationStage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idle" => Ok(ConversationStage::Idle),
            "awaiting_contact" => Ok(ConversationStage::AwaitingContact),
            "awaiting_pin" => Ok(ConversationStage::AwaitingPin),
            "awaiting_address" => Ok(ConversationStage::AwaitingAddress),
            "awaiting_payment" => Ok(ConversationStage::AwaitingPayment),
            other => Err(format!("unknown conversation stage: {other}")),
        }
    }
}

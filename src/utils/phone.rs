use regex::Regex;
use std::sync::LazyLock;

static CONTACT_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{10}$").expect("contact number pattern is valid"));

/// 联系电话必须是恰好 10 位数字
pub fn is_valid_contact_number(value: &str) -> bool {
    CONTACT_NUMBER.is_match(value)
}

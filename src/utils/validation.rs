/// 地址长度超过10个字符才视为完整
pub fn is_complete_address(value: &str) -> bool {
    value.chars().count() > 10
}

pub fn is_non_empty_feedback(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_length_boundary() {
        assert!(!is_complete_address("0123456789"));
        assert!(is_complete_address("01234567890"));
        assert!(!is_complete_address(""));
    }

    #[test]
    fn test_address_counts_characters() {
        // 10 个字符，多字节但不足 11 个字符
        assert!(!is_complete_address("北京市朝阳区建国路八"));
        assert!(is_complete_address("北京市朝阳区建国路八八号"));
    }

    #[test]
    fn test_feedback_text() {
        assert!(is_non_empty_feedback("great food"));
        assert!(is_non_empty_feedback("  ok "));
        assert!(!is_non_empty_feedback("   "));
        assert!(!is_non_empty_feedback(""));
    }
}

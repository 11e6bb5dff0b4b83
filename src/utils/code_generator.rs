use rand::Rng;

/// 生成4位数字订单号（1000-9999）
pub fn generate_order_id() -> String {
    let mut rng = rand::thread_rng();
    rng.gen_range(1000..=9999).to_string()
}

/// 生成4位验证PIN，不足4位左侧补零
pub fn generate_pin() -> String {
    let mut rng = rand::thread_rng();
    format!("{:04}", rng.gen_range(0..=9999))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_order_id() {
        for _ in 0..200 {
            let id = generate_order_id();
            assert_eq!(id.len(), 4);
            let n: u32 = id.parse().unwrap();
            assert!((1000..=9999).contains(&n));
        }
    }

    #[test]
    fn test_generate_pin() {
        for _ in 0..200 {
            let pin = generate_pin();
            assert_eq!(pin.len(), 4);
            assert!(pin.chars().all(|c| c.is_ascii_digit()));
        }
    }
}

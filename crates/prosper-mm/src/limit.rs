//! Position limit checks.
//!
//! Each candidate order is checked on its own against the position at the
//! start of the tick. Two orders on the same side in one tick are therefore
//! not summed: with the imbalance policy both legs can pass individually and
//! together overshoot the limit by up to one order size.

use prosper_core::{OrderSide, Quantity};

/// Symmetric per-product position limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionLimit {
    limit: Quantity,
}

impl PositionLimit {
    pub fn new(limit: Quantity) -> Self {
        Self { limit: limit.abs() }
    }

    pub fn limit(&self) -> Quantity {
        self.limit
    }

    /// `position + size <= limit`.
    pub fn can_buy(&self, position: Quantity, size: Quantity) -> bool {
        position + size.abs() <= self.limit
    }

    /// `position - size >= -limit`.
    pub fn can_sell(&self, position: Quantity, size: Quantity) -> bool {
        position - size.abs() >= -self.limit
    }

    pub fn allows(&self, side: OrderSide, position: Quantity, size: Quantity) -> bool {
        match side {
            OrderSide::Buy => self.can_buy(position, size),
            OrderSide::Sell => self.can_sell(position, size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(v: i64) -> Quantity {
        Quantity::new(v)
    }

    #[test]
    fn test_buy_boundary() {
        let limit = PositionLimit::new(q(50));
        assert!(limit.can_buy(q(35), q(15))); // 35 + 15 = 50
        assert!(!limit.can_buy(q(45), q(15))); // 45 + 15 = 60
        assert!(limit.can_buy(q(-50), q(15)));
    }

    #[test]
    fn test_sell_boundary() {
        let limit = PositionLimit::new(q(50));
        assert!(limit.can_sell(q(-35), q(15)));
        assert!(!limit.can_sell(q(-45), q(15)));
        assert!(limit.can_sell(q(50), q(15)));
    }

    #[test]
    fn test_allows_by_side() {
        let limit = PositionLimit::new(q(50));
        assert!(!limit.allows(OrderSide::Buy, q(41), q(10)));
        assert!(limit.allows(OrderSide::Sell, q(41), q(10)));
    }

    #[test]
    fn test_negative_limit_is_normalised() {
        assert_eq!(PositionLimit::new(q(-50)).limit(), q(50));
    }
}

//! Order decision rules.
//!
//! Both rules need a two-sided book: if either the best bid or the best ask
//! is missing they return no orders. Orders are emitted in a fixed order so
//! the harness sees the same sequence for the same book.

use prosper_core::{Order, OrderDepth, Price, Quantity, Symbol};
use rust_decimal::Decimal;
use tracing::trace;

use crate::limit::PositionLimit;

/// Fixed fair-value rule.
///
/// Buys `order_size` at the best bid when the bid is below `fair_value`, and
/// sells `order_size` at the best ask when the ask is above it. Each leg is
/// dropped if it would take the position past the limit.
pub fn fair_value_orders(
    symbol: &Symbol,
    depth: &OrderDepth,
    position: Quantity,
    limit: PositionLimit,
    fair_value: Price,
    order_size: Quantity,
) -> Vec<Order> {
    let mut orders = Vec::new();
    let Some(top) = depth.top_of_book() else {
        return orders;
    };

    if top.bid_price < fair_value && limit.can_buy(position, order_size) {
        orders.push(Order::buy(symbol.clone(), top.bid_price, order_size));
    }
    if top.ask_price > fair_value && limit.can_sell(position, order_size) {
        orders.push(Order::sell(symbol.clone(), top.ask_price, order_size));
    }

    orders
}

/// Top-of-book volume imbalance in [-1, 1].
///
/// `(bid_vol - ask_vol) / (bid_vol + ask_vol)` using the volume resting at
/// the best bid and best ask. Volumes are taken as magnitudes. Returns zero
/// when both are zero.
pub fn book_imbalance(depth: &OrderDepth) -> Decimal {
    let bid_vol = depth.best_bid_volume().abs().inner();
    let ask_vol = depth.best_ask_volume().abs().inner();
    let total = bid_vol + ask_vol;
    if total == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(bid_vol - ask_vol) / Decimal::from(total)
}

/// Imbalance-following rule.
///
/// - imbalance > threshold: buy at the ask, then buy at the bid
/// - imbalance < -threshold: sell at the bid, then sell at the ask
/// - otherwise: buy at the bid and sell at the ask
///
/// Every leg is limit-checked against the tick-start position on its own
/// (see [`PositionLimit`]).
pub fn imbalance_orders(
    symbol: &Symbol,
    depth: &OrderDepth,
    position: Quantity,
    limit: PositionLimit,
    threshold: Decimal,
    order_size: Quantity,
) -> Vec<Order> {
    let mut orders = Vec::new();
    let Some(top) = depth.top_of_book() else {
        return orders;
    };

    let imbalance = book_imbalance(depth);
    trace!(%symbol, %imbalance, %threshold, "Book imbalance");

    if imbalance > threshold {
        if limit.can_buy(position, order_size) {
            orders.push(Order::buy(symbol.clone(), top.ask_price, order_size));
        }
        if limit.can_buy(position, order_size) {
            orders.push(Order::buy(symbol.clone(), top.bid_price, order_size));
        }
    } else if imbalance < -threshold {
        if limit.can_sell(position, order_size) {
            orders.push(Order::sell(symbol.clone(), top.bid_price, order_size));
        }
        if limit.can_sell(position, order_size) {
            orders.push(Order::sell(symbol.clone(), top.ask_price, order_size));
        }
    } else {
        if limit.can_buy(position, order_size) {
            orders.push(Order::buy(symbol.clone(), top.bid_price, order_size));
        }
        if limit.can_sell(position, order_size) {
            orders.push(Order::sell(symbol.clone(), top.ask_price, order_size));
        }
    }

    orders
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn resin() -> Symbol {
        Symbol::from("RAINFOREST_RESIN")
    }

    fn kelp() -> Symbol {
        Symbol::from("KELP")
    }

    fn limit() -> PositionLimit {
        PositionLimit::new(Quantity::new(50))
    }

    fn fv(depth: &OrderDepth, position: i64) -> Vec<Order> {
        fair_value_orders(
            &resin(),
            depth,
            Quantity::new(position),
            limit(),
            Price::new(10_000),
            Quantity::new(15),
        )
    }

    fn imb(depth: &OrderDepth, position: i64) -> Vec<Order> {
        imbalance_orders(
            &kelp(),
            depth,
            Quantity::new(position),
            limit(),
            dec!(0.5),
            Quantity::new(10),
        )
    }

    fn order(symbol: Symbol, price: i64, qty: i64) -> Order {
        Order::new(symbol, Price::new(price), Quantity::new(qty))
    }

    #[test]
    fn test_fair_value_both_legs() {
        let depth = OrderDepth::new().with_bid(9995, 20).with_ask(10010, -20);
        assert_eq!(
            fv(&depth, 0),
            vec![order(resin(), 9995, 15), order(resin(), 10010, -15)]
        );
    }

    #[test]
    fn test_fair_value_bid_at_or_above_fair_suppresses_buy() {
        let depth = OrderDepth::new().with_bid(10005, 20).with_ask(10020, -20);
        assert_eq!(fv(&depth, 0), vec![order(resin(), 10020, -15)]);

        let depth = OrderDepth::new().with_bid(10000, 20).with_ask(10000, -20);
        assert!(fv(&depth, 0).is_empty());
    }

    #[test]
    fn test_fair_value_position_limit_boundary() {
        let depth = OrderDepth::new().with_bid(9995, 20).with_ask(10010, -20);

        // 45 + 15 = 60 > 50: buy dropped, sell kept
        assert_eq!(fv(&depth, 45), vec![order(resin(), 10010, -15)]);
        // 35 + 15 = 50: buy allowed
        assert_eq!(
            fv(&depth, 35),
            vec![order(resin(), 9995, 15), order(resin(), 10010, -15)]
        );
        // -40 - 15 = -55 < -50: sell dropped
        assert_eq!(fv(&depth, -40), vec![order(resin(), 9995, 15)]);
    }

    #[test]
    fn test_one_sided_book_yields_nothing() {
        let bids_only = OrderDepth::new().with_bid(9995, 20);
        let asks_only = OrderDepth::new().with_ask(10010, -20);
        for depth in [OrderDepth::new(), bids_only, asks_only] {
            assert!(fv(&depth, 0).is_empty());
            assert!(imb(&depth, 0).is_empty());
        }
    }

    #[test]
    fn test_book_imbalance() {
        let depth = OrderDepth::new().with_bid(2028, 30).with_ask(2032, -10);
        assert_eq!(book_imbalance(&depth), dec!(0.5));

        let depth = OrderDepth::new().with_bid(2028, 10).with_ask(2032, -30);
        assert_eq!(book_imbalance(&depth), dec!(-0.5));

        let depth = OrderDepth::new().with_bid(2028, 0).with_ask(2032, 0);
        assert_eq!(book_imbalance(&depth), Decimal::ZERO);

        assert_eq!(book_imbalance(&OrderDepth::new()), Decimal::ZERO);
    }

    #[test]
    fn test_imbalance_bid_heavy_buys_twice() {
        let depth = OrderDepth::new().with_bid(2028, 40).with_ask(2032, -5);
        assert_eq!(
            imb(&depth, 0),
            vec![order(kelp(), 2032, 10), order(kelp(), 2028, 10)]
        );
        assert!(imb(&depth, 41).is_empty());
    }

    #[test]
    fn test_imbalance_ask_heavy_sells_twice() {
        let depth = OrderDepth::new().with_bid(2028, 5).with_ask(2032, -40);
        assert_eq!(
            imb(&depth, 0),
            vec![order(kelp(), 2028, -10), order(kelp(), 2032, -10)]
        );
        assert!(imb(&depth, -41).is_empty());
    }

    #[test]
    fn test_imbalance_at_threshold_quotes_passively() {
        // Exactly 0.5 is not above the threshold.
        let depth = OrderDepth::new().with_bid(2028, 30).with_ask(2032, -10);
        assert_eq!(
            imb(&depth, 0),
            vec![order(kelp(), 2028, 10), order(kelp(), 2032, -10)]
        );
        assert_eq!(imb(&depth, 45), vec![order(kelp(), 2032, -10)]);
        assert_eq!(imb(&depth, -45), vec![order(kelp(), 2028, 10)]);
    }

    #[test]
    fn test_imbalance_legs_checked_independently() {
        // Each buy leg is checked against 40 alone (40 + 10 = 50), so both
        // are emitted and together they would reach 60.
        let depth = OrderDepth::new().with_bid(2028, 40).with_ask(2032, -5);
        assert_eq!(imb(&depth, 40).len(), 2);
    }

    #[test]
    fn test_single_order_never_breaches_limit() {
        let books = [
            OrderDepth::new().with_bid(9995, 20).with_ask(10010, -20),
            OrderDepth::new().with_bid(10005, 1).with_ask(10020, -30),
            OrderDepth::new().with_bid(9990, 30).with_ask(9998, -1),
            OrderDepth::new().with_bid(2028, 0).with_ask(2032, 0),
        ];

        for depth in &books {
            for position in -50..=50 {
                for o in fv(depth, position).into_iter().chain(imb(depth, position)) {
                    let after = position + o.quantity.inner();
                    assert!(
                        (-50..=50).contains(&after),
                        "{o} from position {position} ends at {after}"
                    );
                }
            }
        }
    }
}

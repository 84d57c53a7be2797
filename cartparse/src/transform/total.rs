//! Cart total computation.

use crate::models::CartItem;

/// Reduces parsed items to a cart total.
pub trait Aggregator {
    fn total(&self, items: &[CartItem]) -> f64;
}

/// Sums price * quantity with plain floating-point arithmetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceTotal;

impl Aggregator for PriceTotal {
    fn total(&self, items: &[CartItem]) -> f64 {
        calc_total(items)
    }
}

/// Sum of price * quantity over all items, 0 for an empty cart.
pub fn calc_total(items: &[CartItem]) -> f64 {
    items.iter().map(CartItem::extended_price).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: f64, quantity: f64) -> CartItem {
        CartItem {
            id: "1".into(),
            name: "Mollis consequat".into(),
            price,
            quantity,
        }
    }

    #[test]
    fn test_empty_total_is_zero() {
        assert_eq!(calc_total(&[]), 0.0);
    }

    #[test]
    fn test_single_item() {
        assert_eq!(calc_total(&[item(9.0, 2.0)]), 18.0);
    }

    #[test]
    fn test_several_items() {
        let total = PriceTotal.total(&[item(9.0, 2.0), item(10.5, 2.0), item(1.0, 3.0)]);
        assert_eq!(total, 42.0);
    }

    #[test]
    fn test_nan_quantity_propagates() {
        assert!(calc_total(&[item(9.0, 2.0), item(1.0, f64::NAN)]).is_nan());
    }
}

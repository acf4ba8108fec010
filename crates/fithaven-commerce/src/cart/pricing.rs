//! Cart pricing calculations.

use crate::cart::LineItem;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Default subtotal above which shipping is free ($500.00).
pub const DEFAULT_FREE_SHIPPING_THRESHOLD: Money = Money::from_units(500, Currency::USD);

/// Default flat shipping fee ($99.00).
pub const DEFAULT_FLAT_SHIPPING_FEE: Money = Money::from_units(99, Currency::USD);

/// Default sales tax rate (8%).
pub const DEFAULT_TAX_RATE: f64 = 0.08;

/// Shipping and tax rules applied to a cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PricingPolicy {
    /// Shipping is free when the subtotal is strictly above this amount.
    pub free_shipping_threshold: Money,
    /// Fee charged when the subtotal does not qualify for free shipping.
    pub flat_shipping_fee: Money,
    /// Tax rate applied to the subtotal (0.08 = 8%).
    pub tax_rate: f64,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            free_shipping_threshold: DEFAULT_FREE_SHIPPING_THRESHOLD,
            flat_shipping_fee: DEFAULT_FLAT_SHIPPING_FEE,
            tax_rate: DEFAULT_TAX_RATE,
        }
    }
}

impl PricingPolicy {
    /// Currency every amount is computed in.
    pub fn currency(&self) -> Currency {
        self.free_shipping_threshold.currency
    }

    /// Shipping fee for a subtotal.
    pub fn shipping_for(&self, subtotal: Money) -> Money {
        if subtotal.amount_cents > self.free_shipping_threshold.amount_cents {
            Money::zero(subtotal.currency)
        } else {
            self.flat_shipping_fee
        }
    }

    /// Tax for a subtotal, rounded to the cent.
    pub fn tax_for(&self, subtotal: Money) -> Money {
        subtotal.multiply_decimal(self.tax_rate)
    }

    /// Price a list of cart lines.
    ///
    /// An empty list prices to all zeroes; no shipping fee is charged on
    /// nothing.
    pub fn price(&self, items: &[LineItem]) -> Result<CartPricing, CommerceError> {
        let currency = self.currency();
        if items.is_empty() {
            return Ok(CartPricing::zero(currency));
        }

        let line_items = items
            .iter()
            .map(|item| {
                if item.unit_price.currency != currency {
                    return Err(CommerceError::CurrencyMismatch {
                        expected: currency.code().to_string(),
                        got: item.unit_price.currency.code().to_string(),
                    });
                }
                Ok(LineItemPricing {
                    product_id: item.product_id,
                    unit_price: item.unit_price,
                    quantity: item.quantity,
                    line_total: item.line_total()?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let subtotal = Money::try_sum(line_items.iter().map(|l| &l.line_total), currency)
            .ok_or(CommerceError::Overflow)?;
        let shipping = self.shipping_for(subtotal);
        let tax = self.tax_for(subtotal);
        let total = subtotal
            .try_add(&shipping)
            .and_then(|t| t.try_add(&tax))
            .ok_or(CommerceError::Overflow)?;

        Ok(CartPricing {
            subtotal,
            shipping,
            tax,
            total,
            line_items,
        })
    }
}

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Shipping cost.
    pub shipping: Money,
    /// Tax amount.
    pub tax: Money,
    /// Final total (subtotal + shipping + tax).
    pub total: Money,
    /// Per-line pricing breakdown.
    pub line_items: Vec<LineItemPricing>,
}

impl CartPricing {
    /// Pricing of an empty cart.
    pub fn zero(currency: Currency) -> Self {
        Self {
            subtotal: Money::zero(currency),
            shipping: Money::zero(currency),
            tax: Money::zero(currency),
            total: Money::zero(currency),
            line_items: Vec::new(),
        }
    }

    /// Check if shipping is free.
    pub fn has_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }

    /// Label for the shipping row ("FREE" or the fee).
    pub fn shipping_label(&self) -> String {
        if self.has_free_shipping() {
            "FREE".to_string()
        } else {
            self.shipping.display()
        }
    }
}

/// Pricing breakdown for a single line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItemPricing {
    /// Product on this line.
    pub product_id: ProductId,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: i64,
    /// unit_price * quantity.
    pub line_total: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: u32, dollars: i64, quantity: i64) -> LineItem {
        LineItem {
            product_id: ProductId::new(id),
            product_name: format!("Product {}", id),
            category: "Test".to_string(),
            image: String::new(),
            unit_price: Money::from_units(dollars, Currency::USD),
            quantity,
        }
    }

    #[test]
    fn test_reference_cart() {
        let pricing = PricingPolicy::default()
            .price(&[line(1, 899, 1), line(2, 299, 2)])
            .unwrap();

        assert_eq!(pricing.subtotal, Money::from_units(1497, Currency::USD));
        assert_eq!(pricing.shipping, Money::zero(Currency::USD));
        assert_eq!(pricing.tax, Money::new(11_976, Currency::USD));
        assert_eq!(pricing.total, Money::new(161_676, Currency::USD));
        assert_eq!(pricing.line_items[1].line_total.amount_cents, 59_800);
    }

    #[test]
    fn test_flat_fee_at_or_below_threshold() {
        let policy = PricingPolicy::default();
        let pricing = policy.price(&[line(1, 500, 1)]).unwrap();
        assert_eq!(pricing.shipping, DEFAULT_FLAT_SHIPPING_FEE);
        assert_eq!(pricing.shipping_label(), "$99.00");

        let pricing = policy
            .price(&[LineItem {
                unit_price: Money::new(50_001, Currency::USD),
                ..line(1, 0, 1)
            }])
            .unwrap();
        assert!(pricing.has_free_shipping());
        assert_eq!(pricing.shipping_label(), "FREE");
    }

    #[test]
    fn test_total_is_sum_of_parts() {
        let policy = PricingPolicy::default();
        for lines in [
            vec![line(1, 199, 1)],
            vec![line(1, 199, 3), line(2, 599, 1)],
            vec![line(1, 2499, 2), line(2, 1, 7)],
        ] {
            let p = policy.price(&lines).unwrap();
            assert_eq!(
                p.total.amount_cents,
                p.subtotal.amount_cents + p.shipping.amount_cents + p.tax.amount_cents
            );
            assert_eq!(p.shipping.is_zero(), p.subtotal.amount_cents > 50_000);
        }
    }

    #[test]
    fn test_empty_cart_prices_to_zero() {
        let pricing = PricingPolicy::default().price(&[]).unwrap();
        assert_eq!(pricing, CartPricing::zero(Currency::USD));
    }

    #[test]
    fn test_overflow_is_reported() {
        let result = PricingPolicy::default().price(&[LineItem {
            unit_price: Money::new(i64::MAX, Currency::USD),
            ..line(1, 0, 2)
        }]);
        assert_eq!(result, Err(CommerceError::Overflow));
    }

    #[test]
    fn test_currency_mismatch() {
        let result = PricingPolicy::default().price(&[LineItem {
            unit_price: Money::new(100, Currency::EUR),
            ..line(1, 0, 1)
        }]);
        assert!(matches!(result, Err(CommerceError::CurrencyMismatch { .. })));
    }
}

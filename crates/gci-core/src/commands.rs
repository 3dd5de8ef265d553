//! Player orders sent from the front end to the simulation.
//!
//! An order sets the desired heading of one interceptor. Orders are
//! validated one pair at a time: a bad pair is reported and dropped,
//! the rest of the submission still applies.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Steer one interceptor toward a new heading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Interceptor identifier (the `N` in `fN`).
    pub unit: u32,
    /// Desired heading in degrees; normalized when applied.
    pub heading: f64,
}

/// Why a single order was rejected. Never fatal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderError {
    #[error("invalid order format near `{token}`: {reason}")]
    InvalidOrderFormat { token: String, reason: &'static str },
    #[error("interceptor {unit} does not exist")]
    UnknownUnitReference { unit: u32 },
}

/// Result of parsing one line of orders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedOrders {
    pub orders: Vec<Order>,
    pub errors: Vec<OrderError>,
}

impl Order {
    pub fn new(unit: u32, heading: f64) -> Self {
        Self { unit, heading }
    }
}

/// Parse a line such as `f1 150 f2 90`.
///
/// Tokens are read in `unit heading` pairs. A pair with a bad unit token or
/// a bad heading is dropped; a trailing token without a partner is reported
/// as unmatched.
pub fn parse_orders(line: &str) -> ParsedOrders {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let mut parsed = ParsedOrders::default();

    for pair in tokens.chunks(2) {
        let [unit_token, heading_token] = pair else {
            parsed.errors.push(OrderError::InvalidOrderFormat {
                token: pair[0].to_string(),
                reason: "unit has no heading",
            });
            continue;
        };

        let unit = match parse_unit(unit_token) {
            Ok(unit) => unit,
            Err(err) => {
                parsed.errors.push(err);
                continue;
            }
        };
        match parse_heading(heading_token) {
            Ok(heading) => parsed.orders.push(Order::new(unit, heading)),
            Err(err) => parsed.errors.push(err),
        }
    }

    parsed
}

/// `f3` / `F3` -> 3.
fn parse_unit(token: &str) -> Result<u32, OrderError> {
    let digits = token
        .strip_prefix('f')
        .or_else(|| token.strip_prefix('F'))
        .ok_or_else(|| OrderError::InvalidOrderFormat {
            token: token.to_string(),
            reason: "unit must be written as f<number>",
        })?;
    digits.parse().map_err(|_| OrderError::InvalidOrderFormat {
        token: token.to_string(),
        reason: "unit number is not a whole number",
    })
}

fn parse_heading(token: &str) -> Result<f64, OrderError> {
    match token.parse::<f64>() {
        Ok(heading) if heading.is_finite() => Ok(heading),
        _ => Err(OrderError::InvalidOrderFormat {
            token: token.to_string(),
            reason: "heading must be a number of degrees",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs_in_order() {
        let parsed = parse_orders("f1 150 f2 90 F3 -45.5");
        assert!(parsed.errors.is_empty());
        assert_eq!(
            parsed.orders,
            vec![
                Order::new(1, 150.0),
                Order::new(2, 90.0),
                Order::new(3, -45.5)
            ]
        );
    }

    #[test]
    fn empty_line_is_no_orders() {
        assert_eq!(parse_orders("   "), ParsedOrders::default());
    }

    #[test]
    fn bad_heading_drops_only_that_pair() {
        let parsed = parse_orders("f1 north f2 90");
        assert_eq!(parsed.orders, vec![Order::new(2, 90.0)]);
        assert_eq!(parsed.errors.len(), 1);
        assert!(matches!(
            &parsed.errors[0],
            OrderError::InvalidOrderFormat { token, .. } if token == "north"
        ));
    }

    #[test]
    fn bad_unit_token_drops_only_that_pair() {
        let parsed = parse_orders("x1 10 fx 20 f4 30");
        assert_eq!(parsed.orders, vec![Order::new(4, 30.0)]);
        assert_eq!(parsed.errors.len(), 2);
    }

    #[test]
    fn unmatched_trailing_unit_is_reported() {
        let parsed = parse_orders("f1 10 f2");
        assert_eq!(parsed.orders, vec![Order::new(1, 10.0)]);
        assert_eq!(
            parsed.errors,
            vec![OrderError::InvalidOrderFormat {
                token: "f2".to_string(),
                reason: "unit has no heading",
            }]
        );
    }

    #[test]
    fn non_finite_heading_is_rejected() {
        let parsed = parse_orders("f1 NaN f2 inf");
        assert!(parsed.orders.is_empty());
        assert_eq!(parsed.errors.len(), 2);
    }

    #[test]
    fn multi_digit_units_parse() {
        let parsed = parse_orders("f12 270");
        assert_eq!(parsed.orders, vec![Order::new(12, 270.0)]);
    }
}

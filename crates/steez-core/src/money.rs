//! # Money Module
//!
//! Amounts in Steez Sales are plain decimal numbers (`f64`), stored at full
//! input precision. Rounding happens in exactly one place: the create/update
//! response payload, which shows two decimals.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stored:    outstanding = 100.129                                       │
//! │  response:  outstanding = 100.13   ◄── round_currency()                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

/// Number of decimal places shown in response payloads.
pub const CURRENCY_DECIMALS: usize = 2;

/// Rounds an amount to two decimal places.
///
/// Rounds the exact binary value, so a tie such as `0.125` goes to the even
/// digit (`0.12`) and `0.015`, stored just below the midpoint, gives `0.01`.
/// Large finite amounts stay finite.
///
/// ## Example
/// ```rust
/// use steez_core::money::round_currency;
///
/// assert_eq!(round_currency(10.987), 10.99);
/// assert_eq!(round_currency(-3.333), -3.33);
/// ```
pub fn round_currency(amount: f64) -> f64 {
    format!("{:.*}", CURRENCY_DECIMALS, amount)
        .parse()
        .unwrap_or(amount)
}

// =============================================================================
// Unit Tests
// =============================================================================

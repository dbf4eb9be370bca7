//! Decimal <-> base-unit amount conversion
//!
//! Pure string-to-string conversion with no floating point anywhere: monetary
//! amounts must not drift. All arithmetic goes through `U256`.
//!
//! # Units
//!
//! - Human amounts: decimal strings, e.g. "1.5"
//! - Base units: integer strings, amount * 10^decimals, e.g.
//!   "1500000000000000000" for 1.5 of an 18-decimal token

use alloy_primitives::U256;

use crate::errors::AmountError;

/// Convert a human decimal string to a base-unit integer string.
///
/// The fractional part is padded (or truncated) to exactly `decimals` digits
/// before concatenation, so "1.5" with 18 decimals becomes
/// "1500000000000000000". Fails on any character other than digits and at
/// most one decimal point.
pub fn to_base_units(amount: &str, decimals: u32) -> Result<String, AmountError> {
    let amount = amount.trim();

    let (whole, frac) = match amount.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (amount, ""),
    };

    // A second decimal point lands in the fractional part after split_once.
    if frac.contains('.') {
        return Err(invalid(amount));
    }

    let mut frac = frac.to_string();
    frac.truncate(decimals as usize);
    while frac.len() < decimals as usize {
        frac.push('0');
    }

    let digits = format!("{whole}{frac}");
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(amount));
    }

    let value = U256::from_str_radix(&digits, 10).map_err(|_| invalid(amount))?;
    Ok(value.to_string())
}

/// Convert a base-unit integer string to a whole-number decimal string.
///
/// Integer division by 10^decimals: truncating display semantics, not
/// accounting. Fails on non-numeric input.
pub fn from_base_units(amount: &str, decimals: u32) -> Result<String, AmountError> {
    let amount = amount.trim();

    if amount.is_empty() || !amount.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(amount));
    }

    let value = U256::from_str_radix(amount, 10).map_err(|_| invalid(amount))?;
    let scale = U256::from(10).pow(U256::from(decimals));
    Ok((value / scale).to_string())
}

fn invalid(input: &str) -> AmountError {
    AmountError::InvalidFormat {
        input: input.to_string(),
    }
}

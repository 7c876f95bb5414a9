//! Conversions between integer token units and decimal strings.

use ethers::types::U256;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("{0:?} is not a decimal amount")]
    Malformed(String),
    #[error("{value:?} has more than {decimals} fractional digits")]
    TooPrecise { value: String, decimals: u32 },
    #[error("{0:?} does not fit into 256 bits")]
    Overflow(String),
}

/// Renders `raw` with `decimals` fractional digits. Trailing zeros are
/// dropped but one fractional digit is always kept: `100 * 10^18` with 18
/// decimals is `100.0`.
pub fn format_amount(raw: U256, decimals: u32) -> String {
    let (integer, fraction) = raw.div_mod(U256::exp10(decimals as usize));
    let fraction = format!("{:0>width$}", fraction.to_string(), width = decimals as usize);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        format!("{integer}.0")
    } else {
        format!("{integer}.{fraction}")
    }
}

/// Parses a decimal string such as `100` or `0.5` into integer units.
pub fn parse_amount(value: &str, decimals: u32) -> Result<U256, AmountError> {
    let value = value.trim();
    let (integer, fraction) = value.split_once('.').unwrap_or((value, ""));
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if integer.is_empty() || !all_digits(integer) || !all_digits(fraction) {
        return Err(AmountError::Malformed(value.to_owned()));
    }
    if fraction.len() > decimals as usize {
        return Err(AmountError::TooPrecise {
            value: value.to_owned(),
            decimals,
        });
    }

    let digits = format!("{integer}{fraction:0<width$}", width = decimals as usize);
    U256::from_dec_str(&digits).map_err(|_| AmountError::Overflow(value.to_owned()))
}

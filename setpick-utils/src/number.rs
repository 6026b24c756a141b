use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::{
    cmp::Ord,
    fmt::{Debug, Display},
    hash::Hash,
    str::FromStr,
};
use uint::construct_uint;

construct_uint! {
    pub struct U256(4);
}

impl U256 {
    pub const fn from_u128(value: u128) -> Self {
        let mut ret = [0; 4];
        ret[0] = value as u64;
        ret[1] = (value >> 64) as u64;
        U256(ret)
    }
}

/// Unsigned accumulator for point values.
///
/// Sums saturate at `MAX` instead of wrapping. A saturated sum still
/// compares `>=` every threshold representable in the same width, so goal
/// tests never flip because of overflow.
pub trait Points: Copy + Ord + Hash + Default + Debug + Display + Send + Sync + 'static {
    const WIDTH: ValueWidth;

    fn zero() -> Self;

    fn saturating_sum(self, other: Self) -> Self;

    fn from_dec_str(value: &str) -> Result<Self>;
}

impl Points for u64 {
    const WIDTH: ValueWidth = ValueWidth::U64;

    fn zero() -> Self {
        0
    }

    fn saturating_sum(self, other: Self) -> Self {
        self.saturating_add(other)
    }

    fn from_dec_str(value: &str) -> Result<Self> {
        parse_unsigned(value)?
            .parse::<u64>()
            .map_err(|e| anyhow!("'{}' does not fit in u64: {}", value, e))
    }
}

impl Points for u128 {
    const WIDTH: ValueWidth = ValueWidth::U128;

    fn zero() -> Self {
        0
    }

    fn saturating_sum(self, other: Self) -> Self {
        self.saturating_add(other)
    }

    fn from_dec_str(value: &str) -> Result<Self> {
        parse_unsigned(value)?
            .parse::<u128>()
            .map_err(|e| anyhow!("'{}' does not fit in u128: {}", value, e))
    }
}

impl Points for U256 {
    const WIDTH: ValueWidth = ValueWidth::U256;

    fn zero() -> Self {
        U256::zero()
    }

    fn saturating_sum(self, other: Self) -> Self {
        self.saturating_add(other)
    }

    fn from_dec_str(value: &str) -> Result<Self> {
        U256::from_dec_str(parse_unsigned(value)?)
            .map_err(|e| anyhow!("'{}' does not fit in u256: {:?}", value, e))
    }
}

// Rejects signs and empty strings up front so every width reports the same error.
fn parse_unsigned(value: &str) -> Result<&str> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(anyhow!("'{}' is not an unsigned decimal integer", value));
    }
    Ok(value)
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ValueWidth {
    U64,
    #[default]
    U128,
    U256,
}

impl ValueWidth {
    pub fn bits(&self) -> u32 {
        match self {
            ValueWidth::U64 => 64,
            ValueWidth::U128 => 128,
            ValueWidth::U256 => 256,
        }
    }
}

impl Display for ValueWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "u{}", self.bits())
    }
}

impl FromStr for ValueWidth {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "u64" | "64" => Ok(ValueWidth::U64),
            "u128" | "128" => Ok(ValueWidth::U128),
            "u256" | "256" => Ok(ValueWidth::U256),
            _ => Err(anyhow!("Unsupported value width '{}'", s)),
        }
    }
}

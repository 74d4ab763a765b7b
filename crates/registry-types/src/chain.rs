//! Chain identifiers.

use anyhow::{anyhow, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numeric identifier of a blockchain network (EIP-155 chain id).
///
/// Parses from a plain decimal string (no sign, no `0x`); leading-zero forms
/// normalize to the canonical rendering, so `"007"` and `"7"` are the same
/// key. Ordering is numeric, which keeps `BTreeMap<ChainId, _>` iteration
/// (and therefore the persisted key order of `networkAddresses`) ascending.
///
/// # Examples
///
/// ```
/// use registry_types::ChainId;
///
/// let id: ChainId = "11155111".parse().unwrap();
/// assert_eq!(id.value(), 11155111);
/// assert_eq!(id.to_string(), "11155111");
/// assert!("0x5".parse::<ChainId>().is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChainId(u64);

impl ChainId {
    /// The numeric chain id.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl FromStr for ChainId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(anyhow!("Invalid chain_id: \"{}\" must be a number", s));
        }
        let value = s
            .parse::<u64>()
            .map_err(|_| anyhow!("Invalid chain_id: \"{}\" is out of range", s))?;
        Ok(ChainId(value))
    }
}

impl TryFrom<String> for ChainId {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<u64> for ChainId {
    fn from(value: u64) -> Self {
        ChainId(value)
    }
}

impl From<ChainId> for String {
    fn from(id: ChainId) -> Self {
        id.0.to_string()
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!("1".parse::<ChainId>().unwrap(), ChainId::from(1));
        assert_eq!("0".parse::<ChainId>().unwrap(), ChainId::from(0));
        assert_eq!(
            "11155111".parse::<ChainId>().unwrap(),
            ChainId::from(11155111)
        );
    }

    #[test]
    fn test_leading_zeros_normalize() {
        let id = "007".parse::<ChainId>().unwrap();
        assert_eq!(id, ChainId::from(7));
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn test_rejects_non_decimal() {
        assert!("".parse::<ChainId>().is_err());
        assert!("-1".parse::<ChainId>().is_err());
        assert!("+1".parse::<ChainId>().is_err());
        assert!("0x5".parse::<ChainId>().is_err());
        assert!("1 ".parse::<ChainId>().is_err());
        assert!("chain".parse::<ChainId>().is_err());
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!("99999999999999999999999".parse::<ChainId>().is_err());
    }

    #[test]
    fn test_ordering_is_numeric() {
        let two = "2".parse::<ChainId>().unwrap();
        let ten = "10".parse::<ChainId>().unwrap();
        // Lexicographic order would put "10" before "2".
        assert!(two < ten);
    }
}

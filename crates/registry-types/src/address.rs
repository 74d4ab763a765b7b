//! EIP-55 checksummed Ethereum addresses.
//!
//! Addresses arrive in whatever case a deployer or CI job happened to emit.
//! Parsing re-derives the canonical mixed-case rendering, so two spellings
//! of the same 20-byte address always compare equal once parsed - the rest
//! of the registry never compares un-normalized strings.

use anyhow::{anyhow, Error, Result};
use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};
use std::fmt;
use std::str::FromStr;

/// A 20-byte Ethereum address in EIP-55 mixed-case checksum form.
///
/// # Examples
///
/// ```
/// use registry_types::ChecksummedAddress;
///
/// let addr: ChecksummedAddress = "0xaa46724893dedd72658219405185fb0fc91e091c"
///     .parse()
///     .unwrap();
/// assert_eq!(addr.as_str(), "0xAA46724893dedD72658219405185Fb0Fc91e091C");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChecksummedAddress(String);

impl ChecksummedAddress {
    /// The checksummed textual form, `0x`-prefixed.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn invalid(s: &str) -> Error {
    anyhow!(
        "Invalid contract_address: \"{}\" must be a valid Ethereum address (0x followed by 40 hex characters)",
        s
    )
}

impl FromStr for ChecksummedAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex_part = s.strip_prefix("0x").ok_or_else(|| invalid(s))?;
        let bytes = hex::decode(hex_part).map_err(|_| invalid(s))?;
        if bytes.len() != 20 {
            return Err(invalid(s));
        }

        // EIP-55: hash the lowercase hex ASCII; a hex digit is uppercased
        // when the corresponding hash nibble is >= 8.
        let lower = hex_part.to_ascii_lowercase();
        let digest = Keccak256::digest(lower.as_bytes());
        let mut out = String::with_capacity(42);
        out.push_str("0x");
        for (i, c) in lower.chars().enumerate() {
            let nibble = (digest[i / 2] >> (4 * (1 - i % 2))) & 0xf;
            if c.is_ascii_alphabetic() && nibble >= 8 {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
        }
        Ok(ChecksummedAddress(out))
    }
}

impl TryFrom<String> for ChecksummedAddress {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<ChecksummedAddress> for String {
    fn from(addr: ChecksummedAddress) -> Self {
        addr.0
    }
}

impl fmt::Display for ChecksummedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

use serde::Serialize;
use std::net::IpAddr;

pub const EMPTY_DOMAIN_MESSAGE: &str = "Empty domain parameter";
pub const INVALID_DOMAIN_MESSAGE: &str = "Invalid domain address.";

/// Body of `GET /service/ip`. Exactly one of the two keys is present.
#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum LookupResponse {
    Found {
        #[serde(rename = "IPs")]
        ips: Vec<IpAddr>,
    },
    Failed {
        #[serde(rename = "Error")]
        error: &'static str,
    },
}

impl LookupResponse {
    pub fn found(ips: Vec<IpAddr>) -> Self {
        Self::Found { ips }
    }

    pub fn empty_domain() -> Self {
        Self::Failed {
            error: EMPTY_DOMAIN_MESSAGE,
        }
    }

    pub fn invalid_domain() -> Self {
        Self::Failed {
            error: INVALID_DOMAIN_MESSAGE,
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct LookupParams {
    pub domain: String,
}

impl LookupParams {
    /// Picks the first `domain` pair; a missing parameter reads as empty.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let domain = pairs
            .into_iter()
            .find(|(key, _)| key == "domain")
            .map(|(_, value)| value)
            .unwrap_or_default();
        Self { domain }
    }
}

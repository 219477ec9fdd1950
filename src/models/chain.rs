use crate::error::GasboardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Ethereum,
    Polygon,
    Arbitrum,
}

impl Chain {
    pub fn all() -> [Chain; 3] {
        [Chain::Ethereum, Chain::Polygon, Chain::Arbitrum]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Chain::Ethereum => "Ethereum",
            Chain::Polygon => "Polygon",
            Chain::Arbitrum => "Arbitrum",
        }
    }

    pub fn has_l1_settlement(&self) -> bool {
        matches!(self, Chain::Arbitrum)
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Chain::Ethereum => "ethereum",
            Chain::Polygon => "polygon",
            Chain::Arbitrum => "arbitrum",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Chain {
    type Err = GasboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ethereum" | "eth" => Ok(Chain::Ethereum),
            "polygon" | "matic" => Ok(Chain::Polygon),
            "arbitrum" | "arb" => Ok(Chain::Arbitrum),
            _ => Err(GasboardError::UnknownChain(s.to_string())),
        }
    }
}

// One poller runs per descriptor; the polling logic itself is shared
#[derive(Debug, Clone)]
pub struct ChainDescriptor {
    pub chain: Chain,
    pub rpc_url: String,
    pub has_l1_settlement: bool,
}

impl ChainDescriptor {
    pub fn new(chain: Chain, rpc_url: impl Into<String>) -> Self {
        Self {
            chain,
            rpc_url: rpc_url.into(),
            has_l1_settlement: chain.has_l1_settlement(),
        }
    }
}

use crate::error::GasboardError;
use crate::models::{Chain, ChainDescriptor};
use async_trait::async_trait;
use ethers::{
    prelude::*,
    providers::{Http, Provider},
    types::BlockNumber,
};

// Pollers only see this trait, so tests can swap in scripted sources.
// Both values are wei.
#[async_trait]
pub trait FeeSource: Send + Sync {
    async fn base_fee(&self) -> Result<U256, GasboardError>;

    async fn priority_fee(&self) -> Result<U256, GasboardError>;
}

#[derive(Debug)]
pub struct RpcFeeSource {
    chain: Chain,
    provider: Provider<Http>,
}

impl RpcFeeSource {
    // Only parses the URL; the node is not contacted until the first poll,
    // so an unreachable endpoint delays data instead of blocking startup.
    pub fn connect(descriptor: &ChainDescriptor) -> Result<Self, GasboardError> {
        let provider = Provider::<Http>::try_from(descriptor.rpc_url.as_str()).map_err(|e| {
            GasboardError::Config(format!(
                "invalid RPC URL for {}: {}",
                descriptor.chain, e
            ))
        })?;

        Ok(Self {
            chain: descriptor.chain,
            provider,
        })
    }
}

#[async_trait]
impl FeeSource for RpcFeeSource {
    async fn base_fee(&self) -> Result<U256, GasboardError> {
        let block = self
            .provider
            .get_block(BlockNumber::Latest)
            .await?
            .ok_or(GasboardError::MissingBaseFee(self.chain))?;

        block
            .base_fee_per_gas
            .ok_or(GasboardError::MissingBaseFee(self.chain))
    }

    async fn priority_fee(&self) -> Result<U256, GasboardError> {
        let tip: U256 = self
            .provider
            .request("eth_maxPriorityFeePerGas", ())
            .await?;
        Ok(tip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethers::types::U256;
    use mockito::Matcher;

    fn descriptor(url: &str) -> ChainDescriptor {
        ChainDescriptor::new(Chain::Ethereum, url)
    }

    fn rpc_result(result: serde_json::Value) -> String {
        serde_json::json!({ "jsonrpc": "2.0", "id": 1, "result": result }).to_string()
    }

    fn block_json(base_fee_hex: Option<&str>) -> serde_json::Value {
        let zero_hash = format!("0x{}", "0".repeat(64));
        let mut block = serde_json::json!({
            "hash": zero_hash,
            "parentHash": zero_hash,
            "sha3Uncles": zero_hash,
            "miner": "0x0000000000000000000000000000000000000000",
            "stateRoot": zero_hash,
            "transactionsRoot": zero_hash,
            "receiptsRoot": zero_hash,
            "number": "0x112a880",
            "gasUsed": "0xd57f1e",
            "gasLimit": "0x1c9c380",
            "extraData": "0x",
            "logsBloom": format!("0x{}", "0".repeat(512)),
            "timestamp": "0x66f2aa00",
            "difficulty": "0x0",
            "totalDifficulty": "0x0",
            "sealFields": [],
            "uncles": [],
            "transactions": [],
            "size": "0x2cc",
            "mixHash": zero_hash,
            "nonce": "0x0000000000000000",
        });
        if let Some(fee) = base_fee_hex {
            block["baseFeePerGas"] = serde_json::json!(fee);
        }
        block
    }

    fn block_matcher() -> Matcher {
        Matcher::PartialJsonString(r#"{"method":"eth_getBlockByNumber"}"#.to_string())
    }

    #[tokio::test]
    async fn base_fee_reads_the_latest_block() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_body(block_matcher())
            .with_body(rpc_result(block_json(Some("0x6fc23ac00"))))
            .create_async()
            .await;

        let source = RpcFeeSource::connect(&descriptor(&server.url())).unwrap();
        let base = source.base_fee().await.unwrap();

        assert_eq!(base, U256::from(30_000_000_000u64));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn pre_london_block_reports_missing_base_fee() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .match_body(block_matcher())
            .with_body(rpc_result(block_json(None)))
            .create_async()
            .await;

        let source = RpcFeeSource::connect(&descriptor(&server.url())).unwrap();
        let err = source.base_fee().await.unwrap_err();

        assert!(matches!(err, GasboardError::MissingBaseFee(Chain::Ethereum)));
    }

    #[tokio::test]
    async fn priority_fee_queries_the_node() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .match_body(Matcher::PartialJsonString(
                r#"{"method":"eth_maxPriorityFeePerGas"}"#.to_string(),
            ))
            .with_body(rpc_result(serde_json::json!("0x77359400")))
            .create_async()
            .await;

        let source = RpcFeeSource::connect(&descriptor(&server.url())).unwrap();
        let tip = source.priority_fee().await.unwrap();

        assert_eq!(tip, U256::from(2_000_000_000u64));
    }

    #[tokio::test]
    async fn http_failure_surfaces_as_rpc_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(500)
            .create_async()
            .await;

        let source = RpcFeeSource::connect(&descriptor(&server.url())).unwrap();

        assert!(matches!(
            source.base_fee().await.unwrap_err(),
            GasboardError::Rpc(_)
        ));
    }

    #[test]
    fn connect_rejects_malformed_urls() {
        let err = RpcFeeSource::connect(&descriptor("not a url")).unwrap_err();
        assert!(matches!(err, GasboardError::Config(_)));
    }
}

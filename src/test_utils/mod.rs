// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! An in-memory [`ChainState`] for exercising the recovery pipeline, and a
//! canned JSON-RPC node for exercising the client.

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use async_trait::async_trait;
use cid::{Cid, multihash::Multihash};
use parking_lot::Mutex;
use serde_json::{Value, json};
use tokio::io::{AsyncBufReadExt as _, AsyncReadExt as _, AsyncWriteExt as _, BufReader};
use tokio::net::{TcpListener, TcpStream};

use crate::blocks::{Tipset, TipsetKey};
use crate::recovery::{ChainState, QueryError};
use crate::rpc::ClientError;
use crate::rpc::state::{SectorOnChainInfo, SectorPreCommitInfo, SectorPreCommitOnChainInfo};
use crate::rpc::types::ApiTipsetKey;
use crate::shim::{
    address::Address,
    clock::ChainEpoch,
    crypto::DomainSeparationTag,
    randomness::Randomness,
    sector::{RegisteredSealProofV4, SectorNumber, SectorSize, SectorSizeV4},
};

const DAG_CBOR: u64 = 0x71;
const IDENTITY: u64 = 0x00;
const FIL_COMMITMENT_SEALED: u64 = 0xf102;
const POSEIDON_BLS12_381_A1_FC1: u64 = 0x1012;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    SectorSize,
    Committed(SectorNumber),
    PreCommitted(SectorNumber),
    TipsetAtEpoch {
        epoch: ChainEpoch,
        search_from: Option<ChainEpoch>,
    },
    SealRandomness {
        epoch: ChainEpoch,
        tipset_epoch: ChainEpoch,
    },
}

/// A chain with a tipset at every epoch except the configured null rounds.
/// Tipset keys encode their epoch, and randomness is a function of epoch and
/// entropy, so results are predictable.
#[derive(Default)]
pub struct MockChainState {
    committed: HashMap<SectorNumber, SectorOnChainInfo>,
    pre_committed: HashMap<SectorNumber, SectorPreCommitOnChainInfo>,
    failing_sector_size: bool,
    failing_committed: HashSet<SectorNumber>,
    hanging_committed: HashSet<SectorNumber>,
    failing_tipsets: HashSet<ChainEpoch>,
    failing_randomness: HashSet<ChainEpoch>,
    null_rounds: HashSet<ChainEpoch>,
    calls: Mutex<Vec<MockCall>>,
}

impl MockChainState {
    pub const SECTOR_SIZE: SectorSizeV4 = SectorSizeV4::_2KiB;

    pub fn with_committed(mut self, sector_number: SectorNumber, activation: ChainEpoch) -> Self {
        self.committed
            .insert(sector_number, Self::committed_info(sector_number, activation));
        self
    }

    pub fn with_pre_committed(
        mut self,
        sector_number: SectorNumber,
        pre_commit_epoch: ChainEpoch,
    ) -> Self {
        self.pre_committed.insert(
            sector_number,
            Self::pre_commit_info(sector_number, pre_commit_epoch),
        );
        self
    }

    pub fn with_failing_sector_size(mut self) -> Self {
        self.failing_sector_size = true;
        self
    }

    pub fn with_failing_committed(mut self, sector_number: SectorNumber) -> Self {
        self.failing_committed.insert(sector_number);
        self
    }

    /// The committed-sector query for `sector_number` never completes.
    pub fn with_hanging_committed(mut self, sector_number: SectorNumber) -> Self {
        self.hanging_committed.insert(sector_number);
        self
    }

    pub fn with_failing_tipset(mut self, epoch: ChainEpoch) -> Self {
        self.failing_tipsets.insert(epoch);
        self
    }

    pub fn with_failing_randomness(mut self, epoch: ChainEpoch) -> Self {
        self.failing_randomness.insert(epoch);
        self
    }

    pub fn with_null_round(mut self, epoch: ChainEpoch) -> Self {
        self.null_rounds.insert(epoch);
        self
    }

    pub fn sealed_cid(sector_number: SectorNumber) -> Cid {
        Cid::new_v1(
            FIL_COMMITMENT_SEALED,
            Multihash::wrap(POSEIDON_BLS12_381_A1_FC1, &sector_number.to_be_bytes()).unwrap(),
        )
    }

    pub fn tipset_cid(epoch: ChainEpoch) -> Cid {
        Cid::new_v1(
            DAG_CBOR,
            Multihash::wrap(IDENTITY, &epoch.to_be_bytes()).unwrap(),
        )
    }

    pub fn randomness(epoch: ChainEpoch, entropy: &[u8]) -> Randomness {
        Randomness::new([epoch.to_be_bytes().as_slice(), entropy].concat())
    }

    pub fn committed_info(sector_number: SectorNumber, activation: ChainEpoch) -> SectorOnChainInfo {
        SectorOnChainInfo {
            sector_number,
            seal_proof: RegisteredSealProofV4::StackedDRG2KiBV1P1.into(),
            sealed_cid: Self::sealed_cid(sector_number),
            activation,
            expiration: activation + 180 * 2880,
        }
    }

    pub fn pre_commit_info(
        sector_number: SectorNumber,
        pre_commit_epoch: ChainEpoch,
    ) -> SectorPreCommitOnChainInfo {
        SectorPreCommitOnChainInfo {
            info: SectorPreCommitInfo {
                seal_proof: RegisteredSealProofV4::StackedDRG2KiBV1P1.into(),
                sector_number,
                sealed_cid: Self::sealed_cid(sector_number),
                seal_rand_epoch: pre_commit_epoch - 50,
                expiration: pre_commit_epoch + 180 * 2880,
            },
            pre_commit_epoch,
        }
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().clone()
    }

    pub fn committed_lookups(&self) -> Vec<SectorNumber> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                MockCall::Committed(it) => Some(it),
                _ => None,
            })
            .collect()
    }

    pub fn pre_commit_lookups(&self) -> Vec<SectorNumber> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                MockCall::PreCommitted(it) => Some(it),
                _ => None,
            })
            .collect()
    }

    /// `(epoch, epoch of the tipset searched from)` of each tipset lookup.
    pub fn tipset_lookups(&self) -> Vec<(ChainEpoch, Option<ChainEpoch>)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                MockCall::TipsetAtEpoch { epoch, search_from } => Some((epoch, search_from)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: MockCall) {
        self.calls.lock().push(call);
    }

    fn epoch_of(key: &TipsetKey) -> Result<ChainEpoch, QueryError> {
        let [cid] = key.cids() else {
            return Err(QueryError::Decode(format!("unknown tipset {key}")));
        };
        let digest = <[u8; 8]>::try_from(cid.hash().digest())
            .map_err(|_| QueryError::Decode(format!("unknown tipset {key}")))?;
        Ok(ChainEpoch::from_be_bytes(digest))
    }

    fn node_error(message: impl Into<String>) -> QueryError {
        QueryError::Rpc(ClientError::Custom(message.into()))
    }
}

#[async_trait]
impl ChainState for MockChainState {
    async fn provider_sector_size(&self, _: &Address) -> Result<SectorSize, QueryError> {
        self.record(MockCall::SectorSize);
        if self.failing_sector_size {
            return Err(Self::node_error("actor not found"));
        }
        Ok(Self::SECTOR_SIZE.into())
    }

    async fn committed_sector(
        &self,
        _: &Address,
        sector_number: SectorNumber,
    ) -> Result<Option<SectorOnChainInfo>, QueryError> {
        self.record(MockCall::Committed(sector_number));
        if self.hanging_committed.contains(&sector_number) {
            std::future::pending::<()>().await;
        }
        if self.failing_committed.contains(&sector_number) {
            return Err(Self::node_error("failed to load miner actor state"));
        }
        Ok(self.committed.get(&sector_number).cloned())
    }

    async fn pre_committed_sector(
        &self,
        _: &Address,
        sector_number: SectorNumber,
    ) -> Result<Option<SectorPreCommitOnChainInfo>, QueryError> {
        self.record(MockCall::PreCommitted(sector_number));
        Ok(self.pre_committed.get(&sector_number).cloned())
    }

    async fn tipset_at_epoch(
        &self,
        epoch: ChainEpoch,
        search_from: &ApiTipsetKey,
    ) -> Result<Tipset, QueryError> {
        let search_from = search_from.0.as_ref().map(Self::epoch_of).transpose()?;
        self.record(MockCall::TipsetAtEpoch { epoch, search_from });
        if self.failing_tipsets.contains(&epoch) {
            return Err(Self::node_error("failed to load tipset"));
        }
        if search_from.is_some_and(|head| epoch > head) {
            return Err(Self::node_error(
                "looking for tipset with height greater than start point",
            ));
        }
        let mut found = epoch;
        while self.null_rounds.contains(&found) {
            found -= 1;
        }
        Ok(Tipset::new(TipsetKey::from(Self::tipset_cid(found)), found))
    }

    async fn seal_randomness(
        &self,
        tag: DomainSeparationTag,
        epoch: ChainEpoch,
        entropy: &[u8],
        tipset: &TipsetKey,
    ) -> Result<Randomness, QueryError> {
        let tipset_epoch = Self::epoch_of(tipset)?;
        self.record(MockCall::SealRandomness {
            epoch,
            tipset_epoch,
        });
        if tag != DomainSeparationTag::SealRandomness {
            return Err(QueryError::Decode(format!("unexpected tag {tag}")));
        }
        if self.failing_randomness.contains(&epoch) {
            return Err(Self::node_error("randomness unavailable"));
        }
        Ok(Self::randomness(epoch, entropy))
    }
}

/// A JSON-RPC node on a loopback port which answers each method with a fixed
/// Lotus JSON result, over plain HTTP/1.1. Unknown methods get a
/// "method not found" error.
pub struct CannedRpc {
    url: url::Url,
    requests: Arc<Mutex<Vec<(String, Value)>>>,
}

impl CannedRpc {
    pub async fn serve(results: impl IntoIterator<Item = (&'static str, Value)>) -> Self {
        let results: Arc<HashMap<&'static str, Value>> = Arc::new(results.into_iter().collect());
        let requests = Arc::new(Mutex::new(vec![]));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/rpc/v1", listener.local_addr().unwrap())
            .parse()
            .unwrap();
        tokio::spawn({
            let requests = requests.clone();
            async move {
                while let Ok((stream, _)) = listener.accept().await {
                    tokio::spawn(Self::serve_connection(
                        stream,
                        results.clone(),
                        requests.clone(),
                    ));
                }
            }
        });
        Self { url, requests }
    }

    /// Lotus responses as returned by a node, including fields which are not decoded.
    pub async fn lotus_node() -> Self {
        Self::serve([
            (
                "Filecoin.StateMinerInfo",
                json!({
                    "Owner": "f01001",
                    "Worker": "f01002",
                    "WindowPoStProofType": 5,
                    "SectorSize": 2048,
                    "Multiaddrs": null
                }),
            ),
            (
                "Filecoin.StateSectorGetInfo",
                json!({
                    "SectorNumber": 7,
                    "SealProof": 5,
                    "SealedCID": {"/": MockChainState::sealed_cid(7).to_string()},
                    "DealIDs": null,
                    "Activation": 1200,
                    "Expiration": 1540000,
                    "InitialPledge": "0"
                }),
            ),
            ("Filecoin.StateSectorPreCommitInfo", json!(null)),
            (
                "Filecoin.ChainGetTipSetByHeight",
                json!({
                    "Cids": [{"/": MockChainState::tipset_cid(1200).to_string()}],
                    "Blocks": [],
                    "Height": 1200
                }),
            ),
            ("Filecoin.StateGetRandomnessFromTickets", json!("AQID")),
        ])
        .await
    }

    pub fn url(&self) -> url::Url {
        self.url.clone()
    }

    /// `(method, params)` of every request received so far.
    pub fn requests(&self) -> Vec<(String, Value)> {
        self.requests.lock().clone()
    }

    async fn serve_connection(
        stream: TcpStream,
        results: Arc<HashMap<&'static str, Value>>,
        requests: Arc<Mutex<Vec<(String, Value)>>>,
    ) {
        let (read, mut write) = stream.into_split();
        let mut read = BufReader::new(read);
        let mut line = String::new();
        // request line, then headers, then a `Content-Length` body
        while matches!(read.read_line(&mut line).await, Ok(n) if n > 0) {
            let mut content_length = 0;
            loop {
                line.clear();
                if !matches!(read.read_line(&mut line).await, Ok(n) if n > 0) {
                    return;
                }
                let header = line.trim_end();
                if header.is_empty() {
                    break;
                }
                if let Some((name, value)) = header.split_once(':') {
                    if name.eq_ignore_ascii_case("content-length") {
                        content_length = value.trim().parse().unwrap();
                    }
                }
            }
            let mut body = vec![0; content_length];
            read.read_exact(&mut body).await.unwrap();

            let request: Value = serde_json::from_slice(&body).unwrap();
            let method = request["method"].as_str().unwrap_or_default().to_string();
            requests
                .lock()
                .push((method.clone(), request["params"].clone()));
            let response = match results.get(method.as_str()) {
                Some(result) => json!({"jsonrpc": "2.0", "id": request["id"], "result": result}),
                None => json!({
                    "jsonrpc": "2.0",
                    "id": request["id"],
                    "error": {"code": -32601, "message": "Method not found"}
                }),
            }
            .to_string();
            let reply = format!(
                "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\n\r\n{response}",
                response.len()
            );
            if write.write_all(reply.as_bytes()).await.is_err() {
                return;
            }
            line.clear();
        }
    }
}

// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::{path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, DurationSeconds, serde_as};

use crate::recovery::DEFAULT_QUERY_TIMEOUT;
use crate::rpc_client::ApiInfo;

/// How to reach the node, and where to put the results.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Client {
    /// `[<token>:]<multiaddr>` of the node. `FULLNODE_API_INFO` takes precedence.
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_info: Option<ApiInfo>,
    /// Used when neither `--token` nor the API info carry a token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpc_token: Option<String>,
    /// Timeout for each chain query, in seconds.
    #[serde_as(as = "DurationSeconds<u64>")]
    pub query_timeout: Duration,
    pub output_dir: PathBuf,
}

impl Default for Client {
    fn default() -> Self {
        Self {
            api_info: None,
            rpc_token: None,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
            output_dir: PathBuf::from("."),
        }
    }
}

// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::{path::PathBuf, time::{Duration, Instant}};

use anyhow::Context as _;
use clap::Args;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::cli_shared::cli::Config;
use crate::recovery::{ProviderIdentity, QueryGuard, export_recovery_params};
use crate::rpc;
use crate::rpc_client::ApiInfo;
use crate::shim::sector::SectorNumber;
use crate::utils::io::write_atomically;

#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Storage provider address, e.g. `f01000`
    #[arg(long)]
    pub miner: String,
    /// Sector numbers to recover. Repeatable, and accepts comma separated lists
    #[arg(long, required = true, num_args = 1.., value_delimiter = ',')]
    pub sector: Vec<SectorNumber>,
    /// Directory to write `sectors-recovery-<miner>.json` into
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
    /// Timeout for each chain query, in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub query_timeout: Option<u64>,
}

impl ExportCommand {
    pub async fn run(self, config: &Config, token: Option<String>) -> anyhow::Result<()> {
        let start = Instant::now();
        let provider: ProviderIdentity = self.miner.parse()?;

        let mut api_info = ApiInfo::from_env_or(config.client.api_info.clone())?;
        if api_info.token.is_none() {
            api_info = api_info.set_token(config.client.rpc_token.clone());
        }
        let api_info = api_info.set_token(token);
        let client = rpc::Client::from_api_info(&api_info, None)
            .await
            .with_context(|| format!("couldn't connect to {}", api_info.multiaddr))?;
        info!(
            "Exporting {} sector(s) of {provider} from {}",
            self.sector.len(),
            client.base_url()
        );

        let timeout = self
            .query_timeout
            .map(Duration::from_secs)
            .unwrap_or(config.client.query_timeout);
        let cancel = CancellationToken::new();
        let interrupt = tokio::spawn({
            let cancel = cancel.clone();
            async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    warn!("Keyboard interrupt, cancelling.");
                    cancel.cancel();
                }
            }
        });
        let guard = QueryGuard::new(timeout, cancel);
        let outcome = export_recovery_params(&client, &guard, provider, &self.sector).await;
        interrupt.abort();
        let outcome = outcome?;

        let output_dir = self
            .output_dir
            .unwrap_or_else(|| config.client.output_dir.clone());
        let path = output_dir.join(outcome.params.file_name());
        write_atomically(&path, &outcome.params.to_json_pretty()?)?;
        info!("Recovery parameters written to {}", path.display());
        if !outcome.failures.is_empty() {
            warn!(
                "{} of {} sector(s) could not be fully recovered",
                outcome.failures.len(),
                self.sector.len()
            );
        }

        println!("{}", outcome.summary(start.elapsed()));
        Ok(())
    }
}

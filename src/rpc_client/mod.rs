// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Where to find a node, and how to authenticate with it.

use anyhow::Context as _;
use multiaddr::{Multiaddr, Protocol};
use std::{env, fmt, net::Ipv4Addr, str::FromStr};
use url::Url;

pub const API_INFO_KEY: &str = "FULLNODE_API_INFO";
pub const DEFAULT_PORT: u16 = 2345;

/// Token and address of a node, in the `FULLNODE_API_INFO` format:
/// `[<token>:]<multiaddr>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiInfo {
    pub multiaddr: Multiaddr,
    pub token: Option<String>,
}

impl fmt::Display for ApiInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(token) = &self.token {
            token.fmt(f)?;
            write!(f, ":")?;
        }
        self.multiaddr.fmt(f)?;
        Ok(())
    }
}

impl FromStr for ApiInfo {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (token, host) = match s.split_once(':') {
            Some((token, host)) => (Some(token), host),
            None => (None, s),
        };
        let multiaddr: Multiaddr = host
            .parse()
            .with_context(|| format!("invalid multiaddr {host:?}"))?;
        multiaddr2url(&multiaddr).context("couldn't convert multiaddr to URL")?;
        Ok(ApiInfo {
            multiaddr,
            token: token.map(String::from),
        })
    }
}

impl Default for ApiInfo {
    /// `/ip4/127.0.0.1/tcp/2345/http`
    fn default() -> Self {
        Self {
            multiaddr: Multiaddr::empty()
                .with(Protocol::Ip4(Ipv4Addr::LOCALHOST))
                .with(Protocol::Tcp(DEFAULT_PORT))
                .with(Protocol::Http),
            token: None,
        }
    }
}

impl ApiInfo {
    pub fn url(&self) -> anyhow::Result<Url> {
        multiaddr2url(&self.multiaddr)
            .with_context(|| format!("couldn't convert {} to URL", self.multiaddr))
    }

    /// Update API handle with new (optional) token
    pub fn set_token(self, token: Option<String>) -> Self {
        ApiInfo {
            token: token.or(self.token),
            ..self
        }
    }

    /// Get the API info environment variable if it exists, otherwise fall back
    /// to `configured`, then to the default multiaddress. Fails if the
    /// environment variable is malformed.
    pub fn from_env_or(configured: Option<ApiInfo>) -> anyhow::Result<Self> {
        match env::var(API_INFO_KEY) {
            Ok(it) => it
                .parse()
                .with_context(|| format!("malformed {API_INFO_KEY}")),
            Err(env::VarError::NotPresent) => Ok(configured.unwrap_or_default()),
            Err(it @ env::VarError::NotUnicode(_)) => Err(it.into()),
        }
    }
}

/// `"/dns/example.com/tcp/8080/http" -> "http://example.com:8080/"`
///
/// Returns [`None`] on unsupported formats, or if there is a URL parsing error.
///
/// Note that [`Multiaddr`]s do NOT support a (URL) `path`, so that must be handled
/// out-of-band.
fn multiaddr2url(m: &Multiaddr) -> Option<Url> {
    let mut components = m.iter().peekable();
    let host = match components.next()? {
        Protocol::Dns(it) | Protocol::Dns4(it) | Protocol::Dns6(it) | Protocol::Dnsaddr(it) => {
            it.to_string()
        }
        Protocol::Ip4(it) => it.to_string(),
        Protocol::Ip6(it) => format!("[{it}]"),
        _ => return None,
    };
    let port = match components.peek() {
        Some(Protocol::Tcp(port)) => {
            let port = *port;
            components.next();
            Some(port)
        }
        _ => None,
    };
    let scheme = match components.next()? {
        Protocol::Http => "http",
        Protocol::Https => "https",
        Protocol::Ws(it) if it == "/" => "ws",
        Protocol::Wss(it) if it == "/" => "wss",
        _ => return None,
    };
    let None = components.next() else { return None };
    let parse_me = match port {
        Some(port) => format!("{scheme}://{host}:{port}"),
        None => format!("{scheme}://{host}"),
    };
    parse_me.parse().ok()
}

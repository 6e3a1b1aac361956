//! Individual address discovery probes.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;

use async_trait::async_trait;
use hysteria_core::{PROJECT_NAME, VERSION};
use reqwest::Client;
use tokio::net::UdpSocket;

use crate::error::NetError;

/// A single way of learning the server's address.
#[async_trait]
pub trait IpProbe: Send + Sync {
    /// Short name used in logs and the run summary.
    fn name(&self) -> &'static str;

    /// Attempt discovery once.
    async fn probe(&self) -> Result<IpAddr, NetError>;
}

/// Queries a plain-text IP echo service over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpEchoProbe {
    url: String,
    timeout: Duration,
}

impl HttpEchoProbe {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }
}

#[async_trait]
impl IpProbe for HttpEchoProbe {
    fn name(&self) -> &'static str {
        "http-echo"
    }

    async fn probe(&self) -> Result<IpAddr, NetError> {
        let client = Client::builder()
            .user_agent(format!("{PROJECT_NAME}/{VERSION}"))
            .timeout(self.timeout)
            .build()?;
        let response = client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NetError::Status(status.as_u16()));
        }
        let body = response.text().await?;
        let body = body.trim();
        if body.is_empty() {
            return Err(NetError::EmptyBody);
        }
        Ok(body.parse()?)
    }
}

/// Reads the local address the OS would route outbound traffic from.
///
/// `connect` on a UDP socket only selects a route; nothing goes on the wire.
#[derive(Debug, Clone)]
pub struct UdpRouteProbe {
    target: String,
}

impl UdpRouteProbe {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

#[async_trait]
impl IpProbe for UdpRouteProbe {
    fn name(&self) -> &'static str {
        "udp-route"
    }

    async fn probe(&self) -> Result<IpAddr, NetError> {
        let target: SocketAddr = self.target.parse()?;
        let bind: SocketAddr = match target {
            SocketAddr::V4(_) => (Ipv4Addr::UNSPECIFIED, 0).into(),
            SocketAddr::V6(_) => (Ipv6Addr::UNSPECIFIED, 0).into(),
        };
        let socket = UdpSocket::bind(bind).await?;
        socket.connect(target).await?;
        let local = socket.local_addr()?.ip();
        if local.is_unspecified() {
            return Err(NetError::Unroutable);
        }
        Ok(local)
    }
}

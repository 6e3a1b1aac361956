//! Best-effort public address discovery.
//!
//! Probes run in order until one yields an address:
//!
//! 1. [`HttpEchoProbe`] asks a plain-text "what is my IP" service.
//! 2. [`UdpRouteProbe`] connects a UDP socket to a well-known address and
//!    reads the local end. No datagram is sent.
//!
//! When every probe fails the resolver answers with
//! [`PLACEHOLDER_IP`](hysteria_core::PLACEHOLDER_IP). Resolution never fails.
//!
//! # Usage
//!
//! ```rust,no_run
//! use hysteria_config::DiscoveryConfig;
//! use hysteria_net::IdentityResolver;
//!
//! # async fn example() {
//! let resolver = IdentityResolver::from_config(&DiscoveryConfig::default());
//! let resolved = resolver.resolve().await;
//! println!("{} ({})", resolved.ip, resolved.source);
//! # }
//! ```

pub mod error;
pub mod probe;
pub mod resolver;

pub use error::NetError;
pub use probe::{HttpEchoProbe, IpProbe, UdpRouteProbe};
pub use resolver::{IdentityResolver, ResolvedIdentity};

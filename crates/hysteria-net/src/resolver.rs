//! Probe chain with a placeholder fallback.

use std::time::Duration;

use hysteria_config::DiscoveryConfig;
use hysteria_core::{IdentitySource, PLACEHOLDER_IP};
use tracing::{debug, warn};

use crate::probe::{HttpEchoProbe, IpProbe, UdpRouteProbe};

/// Outcome of [`IdentityResolver::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIdentity {
    pub ip: String,
    pub source: IdentitySource,
}

/// Runs probes in order and returns the first address found.
pub struct IdentityResolver {
    probes: Vec<Box<dyn IpProbe>>,
}

impl std::fmt::Debug for IdentityResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<_> = self.probes.iter().map(|p| p.name()).collect();
        f.debug_struct("IdentityResolver")
            .field("probes", &names)
            .finish()
    }
}

impl IdentityResolver {
    /// HTTP echo first, then the UDP route probe.
    pub fn from_config(config: &DiscoveryConfig) -> Self {
        Self::with_probes(vec![
            Box::new(HttpEchoProbe::new(
                config.echo_url.clone(),
                Duration::from_secs(config.timeout_secs),
            )),
            Box::new(UdpRouteProbe::new(config.udp_target.clone())),
        ])
    }

    pub fn with_probes(probes: Vec<Box<dyn IpProbe>>) -> Self {
        Self { probes }
    }

    /// Resolve the server address. Always yields something.
    pub async fn resolve(&self) -> ResolvedIdentity {
        for probe in &self.probes {
            match probe.probe().await {
                Ok(ip) => {
                    debug!(probe = probe.name(), %ip, "address discovered");
                    return ResolvedIdentity {
                        ip: ip.to_string(),
                        source: IdentitySource::Detected(probe.name()),
                    };
                }
                Err(e) => debug!(probe = probe.name(), error = %e, "probe failed"),
            }
        }
        warn!(
            placeholder = PLACEHOLDER_IP,
            "could not determine server address, edit the generated configs by hand"
        );
        ResolvedIdentity {
            ip: PLACEHOLDER_IP.to_string(),
            source: IdentitySource::Placeholder,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::net::IpAddr;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::error::NetError;

    struct FixedProbe {
        name: &'static str,
        answer: Option<IpAddr>,
        calls: Arc<AtomicUsize>,
    }

    impl FixedProbe {
        fn boxed(
            name: &'static str,
            answer: Option<&str>,
            calls: &Arc<AtomicUsize>,
        ) -> Box<dyn IpProbe> {
            Box::new(Self {
                name,
                answer: answer.map(|a| a.parse().unwrap()),
                calls: calls.clone(),
            })
        }
    }

    #[async_trait]
    impl IpProbe for FixedProbe {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn probe(&self) -> Result<IpAddr, NetError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.answer.ok_or(NetError::EmptyBody)
        }
    }

    #[tokio::test]
    async fn first_success_wins() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let resolver = IdentityResolver::with_probes(vec![
            FixedProbe::boxed("a", Some("198.51.100.1"), &first),
            FixedProbe::boxed("b", Some("10.0.0.2"), &second),
        ]);
        let resolved = resolver.resolve().await;
        assert_eq!(resolved.ip, "198.51.100.1");
        assert_eq!(resolved.source, IdentitySource::Detected("a"));
        assert_eq!(second.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn falls_back_to_next_probe() {
        let calls = Arc::new(AtomicUsize::new(0));
        let resolver = IdentityResolver::with_probes(vec![
            FixedProbe::boxed("http-echo", None, &calls),
            FixedProbe::boxed("udp-route", Some("192.168.1.20"), &calls),
        ]);
        let resolved = resolver.resolve().await;
        assert_eq!(resolved.ip, "192.168.1.20");
        assert_eq!(resolved.source, IdentitySource::Detected("udp-route"));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn all_failing_yields_placeholder() {
        let calls = Arc::new(AtomicUsize::new(0));
        let resolver = IdentityResolver::with_probes(vec![
            FixedProbe::boxed("a", None, &calls),
            FixedProbe::boxed("b", None, &calls),
        ]);
        let resolved = resolver.resolve().await;
        assert_eq!(resolved.ip, "YOUR_SERVER_IP");
        assert_eq!(resolved.source, IdentitySource::Placeholder);
    }

    #[tokio::test]
    async fn ipv6_is_not_bracketed() {
        let calls = Arc::new(AtomicUsize::new(0));
        let resolver =
            IdentityResolver::with_probes(vec![FixedProbe::boxed("a", Some("2001:db8::5"), &calls)]);
        assert_eq!(resolver.resolve().await.ip, "2001:db8::5");
    }

    #[test]
    fn default_chain_order() {
        let resolver = IdentityResolver::from_config(&DiscoveryConfig::default());
        let dbg = format!("{resolver:?}");
        assert!(dbg.contains(r#"["http-echo", "udp-route"]"#));
    }
}

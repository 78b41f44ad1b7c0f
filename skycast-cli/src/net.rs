//! Reachability probe consulted before any request is sent.

use skycast_core::NetworkMonitor;
use std::net::{SocketAddr, TcpStream};
use std::time::Duration;

// Public resolver reachable from most networks; a TCP connect is enough to
// tell connected from offline.
const PROBE_ADDR: &str = "1.1.1.1:53";
const PROBE_TIMEOUT: Duration = Duration::from_millis(1500);

pub struct TcpProbe;

impl NetworkMonitor for TcpProbe {
    fn is_online(&self) -> bool {
        PROBE_ADDR
            .parse::<SocketAddr>()
            .ok()
            .and_then(|addr| TcpStream::connect_timeout(&addr, PROBE_TIMEOUT).ok())
            .is_some()
    }
}

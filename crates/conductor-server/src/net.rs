//! LAN address discovery.

use std::net::{IpAddr, Ipv4Addr, UdpSocket};

/// Best-effort local LAN address.
///
/// Uses the routing table via a connected UDP socket — no packet is sent.
/// Falls back to loopback when the host has no route out.
#[must_use]
pub fn local_ip() -> IpAddr {
    let probe = || -> std::io::Result<IpAddr> {
        let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))?;
        socket.connect(("8.8.8.8", 80))?;
        Ok(socket.local_addr()?.ip())
    };
    probe().unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

use mon_core::Result;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::PathBuf;

/// TCP socket states as numbered by the kernel (`include/net/tcp_states.h`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TcpState {
    Established,
    SynSent,
    SynRecv,
    FinWait1,
    FinWait2,
    TimeWait,
    Close,
    CloseWait,
    LastAck,
    Listen,
    Closing,
    NewSynRecv,
    Unknown(u8),
}

impl TcpState {
    pub fn from_code(code: u8) -> Self {
        match code {
            0x01 => Self::Established,
            0x02 => Self::SynSent,
            0x03 => Self::SynRecv,
            0x04 => Self::FinWait1,
            0x05 => Self::FinWait2,
            0x06 => Self::TimeWait,
            0x07 => Self::Close,
            0x08 => Self::CloseWait,
            0x09 => Self::LastAck,
            0x0A => Self::Listen,
            0x0B => Self::Closing,
            0x0C => Self::NewSynRecv,
            other => Self::Unknown(other),
        }
    }
}

/// One socket from the system-wide connection table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub local: SocketAddr,
    pub state: TcpState,
}

/// Enumerates the current network connections of the whole system.
pub trait ConnectionSource {
    fn connections(&self) -> Result<Vec<Connection>>;
}

/// [`ConnectionSource`] reading the Linux `/proc/net/tcp` tables.
#[derive(Debug, Clone)]
pub struct ProcNet {
    tables: Vec<PathBuf>,
}

impl ProcNet {
    const TCP: &'static str = "/proc/net/tcp";
    const TCP6: &'static str = "/proc/net/tcp6";

    pub fn new() -> Self {
        Self {
            tables: vec![PathBuf::from(Self::TCP), PathBuf::from(Self::TCP6)],
        }
    }
}

impl Default for ProcNet {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectionSource for ProcNet {
    /// A missing table is skipped (tcp6 is absent when IPv6 is disabled),
    /// but at least one must be readable.
    fn connections(&self) -> Result<Vec<Connection>> {
        let mut connections = Vec::new();
        let mut read = 0;
        for table in &self.tables {
            match std::fs::read_to_string(table) {
                Ok(content) => {
                    read += 1;
                    connections.extend(parse_table(&content));
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    tracing::debug!("'{}' not present", table.display());
                }
                Err(e) => return Err(e.into()),
            }
        }

        if read == 0 {
            let err = std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no TCP connection table could be read",
            );
            return Err(err.into());
        }
        Ok(connections)
    }
}

/// Parse every row of a `/proc/net/tcp`-style table, skipping the header and
/// any row that does not decode.
pub fn parse_table(content: &str) -> impl Iterator<Item = Connection> + '_ {
    content.lines().skip(1).filter_map(parse_line)
}

// Format: "sl local_address rem_address st tx_queue:rx_queue ..."
fn parse_line(line: &str) -> Option<Connection> {
    let mut fields = line.split_whitespace();
    let _slot = fields.next()?;
    let local = parse_socket_addr(fields.next()?)?;
    let _remote = fields.next()?;
    let state = u8::from_str_radix(fields.next()?, 16).ok()?;

    Some(Connection {
        local,
        state: TcpState::from_code(state),
    })
}

/// Decode `"0100007F:1F90"` into `127.0.0.1:8080`.
///
/// The address is the kernel's in-memory bytes printed as native-endian
/// 32-bit words, so each word is turned back into bytes little-endian first.
fn parse_socket_addr(hex: &str) -> Option<SocketAddr> {
    let (addr, port) = hex.split_once(':')?;
    let port = u16::from_str_radix(port, 16).ok()?;

    let ip = match addr.len() {
        8 => {
            let word = u32::from_str_radix(addr, 16).ok()?;
            IpAddr::V4(Ipv4Addr::from(word.to_le_bytes()))
        }
        32 => {
            let mut bytes = [0u8; 16];
            for (i, chunk) in bytes.chunks_exact_mut(4).enumerate() {
                let word = u32::from_str_radix(addr.get(i * 8..i * 8 + 8)?, 16).ok()?;
                chunk.copy_from_slice(&word.to_le_bytes());
            }
            IpAddr::V6(Ipv6Addr::from(bytes))
        }
        _ => return None,
    };

    Some(SocketAddr::new(ip, port))
}

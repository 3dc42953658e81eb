//! Parser for nmap's human-readable service table.

use crate::models::scan_result::{Protocol, ServicePort};

/// Extract every `PORT/proto STATE SERVICE [VERSION...]` line.
pub fn parse_service_table(output: &str) -> Vec<ServicePort> {
    output.lines().filter_map(parse_service_line).collect()
}

fn parse_service_line(line: &str) -> Option<ServicePort> {
    if !line.contains("/tcp") && !line.contains("/udp") {
        return None;
    }

    let mut parts = line.split_whitespace();
    let port_and_protocol = parts.next()?;
    let state = parts.next()?;
    let service = parts.next().unwrap_or("unknown");
    let version = parts.collect::<Vec<_>>().join(" ");

    let (port, protocol) = port_and_protocol.split_once('/')?;
    let port = port.parse::<u16>().ok()?;
    let protocol = match protocol {
        "tcp" => Protocol::Tcp,
        "udp" => Protocol::Udp,
        _ => return None,
    };

    Some(ServicePort {
        port,
        protocol,
        state: state.to_string(),
        service: service.to_string(),
        version,
    })
}

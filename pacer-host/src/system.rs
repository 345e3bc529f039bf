// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! OS and network introspection.

use sysinfo::{NetworkData, Networks, System};

/// A snapshot of what the platform reports about itself.
///
/// `platform`, `architecture` and `family` are compile-time constants and
/// always present; the remaining fields are `None` where the platform
/// declines to answer.
#[derive(Debug, Clone)]
pub struct OsInfo {
    /// Operating system name the crate was compiled for (`linux`, `macos`, `windows`, ...)
    pub platform: &'static str,
    /// CPU architecture (`x86_64`, `aarch64`, ...)
    pub architecture: &'static str,
    /// OS family (`unix`, `windows`)
    pub family: &'static str,
    pub hostname: Option<String>,
    /// Distribution or product name, e.g. `Ubuntu` or `Windows`
    pub distribution: Option<String>,
    pub os_version: Option<String>,
    pub kernel_version: Option<String>,
    /// Logical CPU count
    pub cpu_count: Option<usize>,
    /// Total memory in bytes
    pub total_memory: Option<u64>,
}

/// One network interface with its addresses.
#[derive(Debug, Clone)]
pub struct NetworkInterface {
    pub name: String,
    /// MAC address, `None` when unspecified (loopback, some virtual devices)
    pub mac: Option<String>,
    /// IP networks as `address/prefix`, sorted
    pub networks: Vec<String>,
}

/// Reads a snapshot of OS information.
#[must_use]
pub fn os_info() -> OsInfo {
    let sys = System::new_all();

    let cpu_count = match sys.cpus().len() {
        0 => None,
        count => Some(count),
    };
    let total_memory = match sys.total_memory() {
        0 => None,
        bytes => Some(bytes),
    };

    OsInfo {
        platform: std::env::consts::OS,
        architecture: std::env::consts::ARCH,
        family: std::env::consts::FAMILY,
        hostname: System::host_name(),
        distribution: System::name(),
        os_version: System::os_version(),
        kernel_version: System::kernel_version(),
        cpu_count,
        total_memory,
    }
}

/// Lists the host's network interfaces, sorted by name.
#[must_use]
pub fn network_interfaces() -> Vec<NetworkInterface> {
    let networks = Networks::new_with_refreshed_list();

    let mut interfaces: Vec<NetworkInterface> = networks
        .iter()
        .map(|(name, data)| {
            let mut nets: Vec<String> = data
                .ip_networks()
                .iter()
                .map(|net| format!("{}/{}", net.addr, net.prefix))
                .collect();
            nets.sort();
            NetworkInterface {
                name: name.clone(),
                mac: mac_string(data),
                networks: nets,
            }
        })
        .collect();

    interfaces.sort_by(|a, b| a.name.cmp(&b.name));
    interfaces
}

fn mac_string(data: &NetworkData) -> Option<String> {
    let mac = data.mac_address();
    if mac.is_unspecified() {
        None
    } else {
        Some(mac.to_string())
    }
}

//! Established-connection enumeration via procfs.
//!
//! `/proc/net/tcp` and `/proc/net/tcp6` list sockets with their state and
//! inode; the owning process is found by scanning each process's fd table
//! for a socket fd with a matching inode. Processes that vanish or deny
//! access mid-scan are skipped, same as every other per-process read.

use std::collections::HashSet;

use procfs::net::TcpState;
use procfs::process::FDTarget;

/// Socket inodes of every TCP connection currently in the Established state
fn established_inodes() -> HashSet<u64> {
    let mut inodes = HashSet::new();
    // Either table can be unreadable (no IPv6, restricted /proc); the other
    // still counts
    for table in [procfs::net::tcp(), procfs::net::tcp6()] {
        match table {
            Ok(entries) => {
                inodes.extend(
                    entries
                        .iter()
                        .filter(|e| e.state == TcpState::Established)
                        .map(|e| e.inode),
                );
            }
            Err(e) => log::debug!("tcp table read failed: {}", e),
        }
    }
    inodes
}

/// Pids of every process that owns at least one established TCP connection.
/// Returns an empty set when /proc is unreadable; the tick goes on either way.
pub fn connected_pids() -> HashSet<u32> {
    let inodes = established_inodes();
    let mut pids = HashSet::new();
    if inodes.is_empty() {
        return pids;
    }

    let all = match procfs::process::all_processes() {
        Ok(iter) => iter,
        Err(e) => {
            log::debug!("process enumeration failed: {}", e);
            return pids;
        }
    };

    for proc_entry in all {
        // Vanished between readdir and open
        let Ok(process) = proc_entry else { continue };
        // Access denied on other users' fd tables when unprivileged
        let Ok(fds) = process.fd() else { continue };
        for fd in fds.flatten() {
            if let FDTarget::Socket(inode) = fd.target {
                if inodes.contains(&inode) {
                    pids.insert(process.pid() as u32);
                    break;
                }
            }
        }
    }
    pids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(target_os = "linux")]
    fn connected_pids_scans_without_panicking() {
        // Contents depend on the host; only the contract is checkable here
        let pids = connected_pids();
        assert!(pids.iter().all(|&p| p > 0));
    }
}

//! Per-process traffic records and process termination.

use sysinfo::{Pid, ProcessesToUpdate, Signal, System};

/// One row of the process table: a process that owned at least one
/// established connection this tick
#[derive(Debug, Clone, PartialEq)]
pub struct ProcNetInfo {
    pub pid: u32,
    /// Display name as reported by the OS (not the full command line)
    pub name: String,
    /// Cumulative bytes written by the process, as of this tick
    pub total_written: u64,
    /// Cumulative bytes read by the process, as of this tick
    pub total_read: u64,
    /// Bytes written since the previous tick, in MB (0.0 on cold start)
    pub sent_rate: f64,
    /// Bytes read since the previous tick, in MB (0.0 on cold start)
    pub recv_rate: f64,
}

impl ProcNetInfo {
    /// Combined rate used for the table sort order
    pub fn total_rate(&self) -> f64 {
        self.sent_rate + self.recv_rate
    }
}

/// Sort busiest-first (total rate descending), pid ascending as tiebreak
/// so equal-rate rows keep a stable order across ticks
pub fn sort_by_traffic(records: &mut [ProcNetInfo]) {
    records.sort_by(|a, b| {
        b.total_rate()
            .partial_cmp(&a.total_rate())
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.pid.cmp(&b.pid))
    });
}

/// All pids whose display name matches `name` exactly.
/// The terminate action works on names, so every instance matches.
pub fn matching_pids<'a, I>(procs: I, name: &str) -> Vec<u32>
where
    I: IntoIterator<Item = (u32, &'a str)>,
{
    procs
        .into_iter()
        .filter(|(_, n)| *n == name)
        .map(|(pid, _)| pid)
        .collect()
}

/// Send SIGTERM to every live process whose name matches exactly.
/// Re-enumerates all processes first, so instances that never appeared in
/// the table are signalled too. Returns the number of processes signalled;
/// failures are logged and otherwise ignored — the next tick drops
/// whatever actually died.
pub fn terminate_by_name(name: &str) -> usize {
    let mut sys = System::new();
    sys.refresh_processes(ProcessesToUpdate::All, true);

    let pids = matching_pids(
        sys.processes()
            .iter()
            .map(|(pid, p)| (pid.as_u32(), p.name().to_str().unwrap_or(""))),
        name,
    );

    let mut signalled = 0;
    for pid in pids {
        let Some(proc_info) = sys.process(Pid::from_u32(pid)) else {
            continue;
        };
        match proc_info.kill_with(Signal::Term) {
            Some(true) => {
                log::info!("terminated process {} ({})", pid, name);
                signalled += 1;
            }
            Some(false) => {
                log::warn!("failed to terminate process {} ({})", pid, name);
            }
            // SIGTERM not supported on this platform: fall back to kill()
            None => {
                if proc_info.kill() {
                    log::info!("killed process {} ({})", pid, name);
                    signalled += 1;
                } else {
                    log::warn!("failed to kill process {} ({})", pid, name);
                }
            }
        }
    }
    signalled
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pid: u32, sent: f64, recv: f64) -> ProcNetInfo {
        ProcNetInfo {
            pid,
            name: format!("proc-{pid}"),
            total_written: 0,
            total_read: 0,
            sent_rate: sent,
            recv_rate: recv,
        }
    }

    #[test]
    fn sorts_busiest_first_with_pid_tiebreak() {
        let mut rows = vec![
            record(30, 0.0, 0.0),
            record(10, 0.5, 0.5),
            record(20, 0.0, 0.0),
            record(40, 2.0, 1.0),
        ];
        sort_by_traffic(&mut rows);
        let pids: Vec<u32> = rows.iter().map(|r| r.pid).collect();
        assert_eq!(pids, vec![40, 10, 20, 30]);
    }

    #[test]
    fn name_match_hits_every_instance() {
        let procs = vec![
            (100, "firefox"),
            (200, "curl"),
            (300, "firefox"),
            (400, "firefox-bin"),
        ];
        assert_eq!(matching_pids(procs, "firefox"), vec![100, 300]);
    }

    #[test]
    fn name_match_is_exact() {
        let procs = vec![(1, "ssh"), (2, "sshd")];
        assert_eq!(matching_pids(procs, "ssh"), vec![1]);
        assert!(matching_pids(vec![(1, "ssh")], "zsh").is_empty());
    }
}

//! One collection pass per tick: system-wide counter diffing plus the
//! per-process record rebuild.

use std::collections::HashMap;

use sysinfo::{Networks, Pid, ProcessesToUpdate, System};

use crate::app::App;
use crate::system::netstat;
use crate::system::network::{bytes_to_mb, NetSnapshot};
use crate::system::process::{sort_by_traffic, ProcNetInfo};

/// pid -> (cumulative written, cumulative read) at the previous tick
type IoBaseline = HashMap<u32, (u64, u64)>;

/// System data collector using the `sysinfo` crate, with connection
/// ownership resolved through procfs
pub struct Collector {
    sys: System,
    networks: Networks,
    /// Previous tick's system-wide counters
    prev_net: NetSnapshot,
    /// Previous per-process counters. Rebuilt wholesale each tick so
    /// vanished pids don't linger.
    prev_io: IoBaseline,
}

impl Collector {
    pub fn new() -> Self {
        let sys = System::new();
        let networks = Networks::new_with_refreshed_list();
        // Prime the baseline so the first tick diffs against startup
        // counters instead of zero (which would chart one giant spike)
        let prev_net = read_snapshot(&networks);

        Self {
            sys,
            networks,
            prev_net,
            prev_io: HashMap::new(),
        }
    }

    /// Refresh all monitored data and populate the App. Never fails; any
    /// per-process read that errors just drops that process for the tick.
    pub fn refresh(&mut self, app: &mut App) {
        if app.paused {
            return;
        }

        self.sys.refresh_processes(ProcessesToUpdate::All, true);

        self.collect_bandwidth(app);
        self.collect_proc_records(app);

        app.tick += 1;
    }

    /// Diff system-wide counters against the previous tick and append one
    /// sample per series to the rate history
    fn collect_bandwidth(&mut self, app: &mut App) {
        self.networks.refresh(true);

        let current = read_snapshot(&self.networks);
        let (sent, recv) = current.rates_since(&self.prev_net);
        self.prev_net = current;

        app.sent_history.push(sent);
        app.recv_history.push(recv);
        app.sent_rate = sent;
        app.recv_rate = recv;
        app.total_sent = current.bytes_sent;
        app.total_received = current.bytes_received;
    }

    /// Rebuild the per-process record set from scratch: one record per
    /// distinct pid owning an established connection
    fn collect_proc_records(&mut self, app: &mut App) {
        let mut observations = Vec::new();
        for pid in netstat::connected_pids() {
            // Vanished between the connection scan and now
            let Some(proc_info) = self.sys.process(Pid::from_u32(pid)) else {
                continue;
            };
            let io = proc_info.disk_usage();
            observations.push((
                pid,
                proc_info.name().to_string_lossy().into_owned(),
                io.total_written_bytes,
                io.total_read_bytes,
            ));
        }

        let (mut records, baseline) = build_records(observations, &self.prev_io);
        self.prev_io = baseline;

        sort_by_traffic(&mut records);
        app.replace_records(records);
    }
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

/// Sum cumulative counters across all interfaces
fn read_snapshot(networks: &Networks) -> NetSnapshot {
    let mut sent: u64 = 0;
    let mut received: u64 = 0;
    for (_name, data) in networks.iter() {
        sent += data.total_transmitted();
        received += data.total_received();
    }
    NetSnapshot::new(sent, received)
}

/// Turn this tick's (pid, name, written, read) observations into records,
/// diffing against the previous tick's baseline. A pid with no baseline
/// entry is a cold start and reports zero. Returns the records plus the
/// replacement baseline (only pids observed this tick).
fn build_records(
    observations: Vec<(u32, String, u64, u64)>,
    prev_io: &IoBaseline,
) -> (Vec<ProcNetInfo>, IoBaseline) {
    let mut records = Vec::with_capacity(observations.len());
    let mut baseline = IoBaseline::with_capacity(observations.len());

    for (pid, name, written, read) in observations {
        let (sent_rate, recv_rate) = match prev_io.get(&pid) {
            Some(&(prev_written, prev_read)) => (
                bytes_to_mb(written.saturating_sub(prev_written)),
                bytes_to_mb(read.saturating_sub(prev_read)),
            ),
            None => (0.0, 0.0),
        };

        baseline.insert(pid, (written, read));
        records.push(ProcNetInfo {
            pid,
            name,
            total_written: written,
            total_read: read,
            sent_rate,
            recv_rate,
        });
    }

    (records, baseline)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MB: u64 = 1024 * 1024;

    fn observe(pid: u32, written: u64, read: u64) -> (u32, String, u64, u64) {
        (pid, format!("proc-{pid}"), written, read)
    }

    #[test]
    fn first_observation_reports_zero() {
        let (records, baseline) =
            build_records(vec![observe(42, 5 * MB, 9 * MB)], &IoBaseline::new());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sent_rate, 0.0);
        assert_eq!(records[0].recv_rate, 0.0);
        assert_eq!(baseline[&42], (5 * MB, 9 * MB));
    }

    #[test]
    fn second_observation_diffs_against_baseline() {
        let (_, baseline) = build_records(vec![observe(42, 5 * MB, 9 * MB)], &IoBaseline::new());
        let (records, _) = build_records(vec![observe(42, 7 * MB, 9 * MB + 512 * 1024)], &baseline);
        assert_eq!(records[0].sent_rate, 2.0);
        assert_eq!(records[0].recv_rate, 0.5);
    }

    #[test]
    fn vanished_pid_is_dropped_from_records_and_baseline() {
        let (_, baseline) = build_records(
            vec![observe(1, 1000, 0), observe(2, 2000, 0)],
            &IoBaseline::new(),
        );
        assert_eq!(baseline.len(), 2);

        // pid 1 terminated between ticks
        let (records, baseline) = build_records(vec![observe(2, 3000, 0)], &baseline);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].pid, 2);
        assert!(!baseline.contains_key(&1));
    }

    #[test]
    fn pid_reuse_after_counter_drop_clamps_to_zero() {
        // Same pid, counters went backwards (process restart with reused id)
        let (_, baseline) = build_records(vec![observe(7, 10 * MB, 10 * MB)], &IoBaseline::new());
        let (records, _) = build_records(vec![observe(7, 1 * MB, 1 * MB)], &baseline);
        assert_eq!(records[0].sent_rate, 0.0);
        assert_eq!(records[0].recv_rate, 0.0);
    }
}

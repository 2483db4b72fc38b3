//! End-to-end checks of the sampling and action behavior the UI relies on.

use netmon::app::App;
use netmon::system::network::{NetSnapshot, RateHistory, HISTORY_LEN};
use netmon::system::process::{matching_pids, sort_by_traffic, ProcNetInfo};
use netmon::system::toggle::{NetworkToggle, ToggleState};

const MB: u64 = 1024 * 1024;

fn record(pid: u32, name: &str, sent: f64, recv: f64) -> ProcNetInfo {
    ProcNetInfo {
        pid,
        name: name.to_string(),
        total_written: 0,
        total_read: 0,
        sent_rate: sent,
        recv_rate: recv,
    }
}

#[test]
fn bandwidth_sample_matches_the_three_megabyte_example() {
    let a = NetSnapshot::new(100 * MB, 50 * MB);
    let b = NetSnapshot::new(103 * MB, 50 * MB);
    assert_eq!(b.rates_since(&a), (3.0, 0.0));
}

#[test]
fn both_series_stay_bounded_over_a_long_run() {
    let mut sent = RateHistory::new();
    let mut recv = RateHistory::new();
    for tick in 0..1000 {
        sent.push(tick as f64);
        recv.push((tick * 2) as f64);
        assert!(sent.len() <= HISTORY_LEN);
        assert!(recv.len() <= HISTORY_LEN);
    }
    // Oldest evicted first: the window holds the most recent samples
    assert_eq!(sent.samples()[0], (1000 - HISTORY_LEN) as f64);
    assert_eq!(recv.samples()[HISTORY_LEN - 1], 1998.0);
}

#[test]
fn terminate_targets_every_process_sharing_the_displayed_name() {
    let procs = vec![
        (10, "chromium"),
        (11, "chromium"),
        (12, "chromium"),
        (20, "spotify"),
    ];
    let pids = matching_pids(procs, "chromium");
    assert_eq!(pids, vec![10, 11, 12]);
}

#[test]
fn toggle_label_flips_regardless_of_command_outcome() {
    // Working command
    let mut ok = NetworkToggle::with_program("true");
    assert_eq!(ok.label(), "Disconnect");
    ok.toggle();
    assert_eq!(ok.label(), "Reconnect");

    // Spawn failure still flips the displayed state
    let mut broken = NetworkToggle::with_program("/no/such/binary");
    broken.toggle();
    assert_eq!(broken.state(), ToggleState::Disconnected);
    broken.toggle();
    assert_eq!(broken.state(), ToggleState::Connected);
}

#[test]
fn table_order_is_busiest_first_and_selection_sticks_to_pid() {
    let mut app = App::new();

    let mut tick1 = vec![
        record(1, "idle", 0.0, 0.0),
        record(2, "busy", 4.0, 4.0),
        record(3, "medium", 1.0, 0.0),
    ];
    sort_by_traffic(&mut tick1);
    app.replace_records(tick1);
    assert_eq!(app.records[0].name, "busy");

    // Select "medium" (row 1 after sort), then let rates shuffle the order
    app.select_next();
    assert_eq!(app.selected_process().unwrap().pid, 3);

    let mut tick2 = vec![
        record(1, "idle", 9.0, 0.0),
        record(2, "busy", 0.0, 0.0),
        record(3, "medium", 1.0, 0.0),
    ];
    sort_by_traffic(&mut tick2);
    app.replace_records(tick2);
    assert_eq!(app.selected_process().unwrap().pid, 3);
}

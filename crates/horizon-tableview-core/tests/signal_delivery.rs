//! Integration tests for signal delivery as seen by table view hosts.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use horizon_tableview_core::{ConnectionId, Signal};
use parking_lot::Mutex;

// A host that subscribes to refresh requests, the way a UI toolkit adapter would.
struct RecordingHost {
    reloads: Arc<AtomicUsize>,
    rows: Arc<Mutex<Vec<usize>>>,
}

impl RecordingHost {
    fn attach(reload: &Signal<()>, row_reload: &Signal<usize>) -> (Self, ConnectionId, ConnectionId) {
        let reloads = Arc::new(AtomicUsize::new(0));
        let rows = Arc::new(Mutex::new(Vec::new()));

        let reloads_clone = reloads.clone();
        let reload_id = reload.connect(move |_| {
            reloads_clone.fetch_add(1, Ordering::SeqCst);
        });

        let rows_clone = rows.clone();
        let row_id = row_reload.connect(move |&row| {
            rows_clone.lock().push(row);
        });

        (Self { reloads, rows }, reload_id, row_id)
    }
}

#[test]
fn test_host_receives_notifications_in_order() {
    let reload = Signal::<()>::new();
    let row_reload = Signal::<usize>::new();
    let (host, _, _) = RecordingHost::attach(&reload, &row_reload);

    reload.emit(());
    row_reload.emit(2);
    row_reload.emit(0);
    reload.emit(());

    assert_eq!(host.reloads.load(Ordering::SeqCst), 2);
    assert_eq!(*host.rows.lock(), vec![2, 0]);
}

#[test]
fn test_detached_host_stops_receiving() {
    let reload = Signal::<()>::new();
    let row_reload = Signal::<usize>::new();
    let (host, reload_id, row_id) = RecordingHost::attach(&reload, &row_reload);

    reload.emit(());
    assert!(reload.disconnect(reload_id));
    assert!(row_reload.disconnect(row_id));
    reload.emit(());
    row_reload.emit(1);

    assert_eq!(host.reloads.load(Ordering::SeqCst), 1);
    assert!(host.rows.lock().is_empty());
}

#[test]
fn test_blocked_signal_suppresses_batch_refreshes() {
    let reload = Signal::<()>::new();
    let row_reload = Signal::<usize>::new();
    let (host, _, _) = RecordingHost::attach(&reload, &row_reload);

    reload.set_blocked(true);
    for _ in 0..10 {
        reload.emit(());
    }
    reload.set_blocked(false);
    reload.emit(());

    assert_eq!(host.reloads.load(Ordering::SeqCst), 1);
}

#[test]
fn test_signal_can_move_to_another_thread() {
    let reload = Arc::new(Signal::<()>::new());
    let count = Arc::new(AtomicUsize::new(0));

    let count_clone = count.clone();
    reload.connect(move |_| {
        count_clone.fetch_add(1, Ordering::SeqCst);
    });

    let reload_clone = reload.clone();
    std::thread::spawn(move || reload_clone.emit(()))
        .join()
        .expect("emitting thread panicked");

    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_emit_with_trace_subscriber_installed() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("horizon_tableview_core=trace")
        .with_test_writer()
        .try_init();

    let reload = Signal::<()>::new();
    let row_reload = Signal::<usize>::new();
    let (host, _, _) = RecordingHost::attach(&reload, &row_reload);

    reload.set_blocked(true);
    reload.emit(());
    reload.set_blocked(false);
    reload.emit(());
    row_reload.emit(4);

    assert_eq!(host.reloads.load(Ordering::SeqCst), 1);
    assert_eq!(*host.rows.lock(), vec![4]);
}

use std::io;
use std::sync::{Arc, Mutex};

use pos_matroid::generate_matroids_slice;
use tracing::Level;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn logs_at(level: Level, run: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, run);
    let bytes = captured.0.lock().unwrap();
    String::from_utf8_lossy(&bytes).into_owned()
}

fn enumerate_slice() {
    let matroids = generate_matroids_slice(4, 2, 3).unwrap();
    assert!(!matroids.is_empty());
}

#[test]
fn rejected_candidates_stay_out_of_debug_output() {
    let logs = logs_at(Level::DEBUG, enumerate_slice);
    assert!(logs.contains("enumerated matroid slice"));
    assert!(!logs.contains("basis exchange fails"));
}

#[test]
fn rejected_candidates_are_visible_at_trace() {
    let logs = logs_at(Level::TRACE, enumerate_slice);
    assert!(logs.contains("basis exchange fails"));
}

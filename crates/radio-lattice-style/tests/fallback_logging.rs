//! Name fallbacks are reported on the style target.

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;
use radio_lattice_style::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_style_events(f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("radio_lattice_style::policy=debug"))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    captured.text()
}

#[test]
fn unknown_names_are_logged() {
    let output = capture_style_events(|| {
        assert_eq!(GroupStyle::from_name("inset"), GroupStyle::Standard);
        assert_eq!(Axis::from_name("diagonal"), Axis::Vertical);
    });

    assert!(output.contains("unknown group style, falling back to standard"), "{output}");
    assert!(output.contains("style=\"inset\""), "{output}");
    assert!(output.contains("unknown axis, falling back to vertical"), "{output}");
    assert!(output.contains("axis=\"diagonal\""), "{output}");
}

#[test]
fn known_names_are_silent() {
    let output = capture_style_events(|| {
        assert_eq!(GroupStyle::from_name("Grouped"), GroupStyle::Grouped);
        assert_eq!(Axis::from_name("vertical"), Axis::Vertical);
    });

    assert!(!output.contains("falling back"), "{output}");
}

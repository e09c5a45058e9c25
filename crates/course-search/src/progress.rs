use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use indicatif::ProgressBar;
use tracing_subscriber::fmt::MakeWriter;

const TICK_INTERVAL: Duration = Duration::from_millis(80);

/// Tracks the spinner currently on screen so log lines can be written around
/// it instead of into it.
///
/// Install a clone as the `tracing_subscriber` writer; every event is written
/// to stderr with the active spinner suspended.
#[derive(Clone, Default)]
pub struct SpinnerLog {
    active: Arc<Mutex<Option<ProgressBar>>>,
}

impl SpinnerLog {
    /// Draws a spinner on stderr until the returned guard is dropped. Nothing
    /// is drawn when stderr is not a terminal.
    pub fn start(&self, message: &str) -> Spinner {
        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(TICK_INTERVAL);
        bar.set_message(message.to_string());
        self.attach(bar)
    }

    fn attach(&self, bar: ProgressBar) -> Spinner {
        self.set_active(Some(bar.clone()));
        Spinner {
            bar,
            log: self.clone(),
        }
    }

    fn set_active(&self, bar: Option<ProgressBar>) {
        if let Ok(mut active) = self.active.lock() {
            *active = bar;
        }
    }

    fn active(&self) -> Option<ProgressBar> {
        self.active.lock().ok().and_then(|active| active.clone())
    }
}

pub struct Spinner {
    bar: ProgressBar,
    log: SpinnerLog,
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
        self.log.set_active(None);
    }
}

pub struct LogWriter {
    active: Option<ProgressBar>,
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &self.active {
            Some(bar) => bar.suspend(|| io::stderr().write_all(buf)).map(|()| buf.len()),
            None => io::stderr().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

impl<'a> MakeWriter<'a> for SpinnerLog {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            active: self.active(),
        }
    }
}

// Tracing setup for the browser.
//
// Events from this crate and from the store crate go through one subscriber
// and end up in the browser console.

use std::io;

use gloo_console as console;
use tracing::{subscriber::set_global_default, Level, Subscriber};
use tracing_subscriber::{
    filter,
    fmt::MakeWriter,
    layer::{Layer, SubscriberExt},
    Registry,
};

use crate::conf::Log;

static FRONTEND_CRATE_NAME: &str = "theme_frontend";
static STORE_CRATE_NAME: &str = "store";

pub struct TracingSubscriber {
    level: Level,
}

impl TracingSubscriber {
    pub fn new(conf: &Log) -> Self {
        Self {
            level: if conf.verbose {
                Level::TRACE
            } else {
                Level::INFO
            },
        }
    }

    /// Creates a [`tracing::Subscriber`] writing one formatted line per event
    /// into `sink`.
    pub fn build<Sink>(self, sink: Sink) -> impl Subscriber + Sync + Send
    where
        Sink: for<'a> MakeWriter<'a> + Sync + Send + 'static,
    {
        let target_filter = filter::Targets::new()
            .with_default(Level::WARN)
            .with_target(FRONTEND_CRATE_NAME, self.level)
            .with_target(STORE_CRATE_NAME, self.level);

        // no clock to read on wasm32-unknown-unknown
        let formatting_layer = tracing_subscriber::fmt::layer()
            .without_time()
            .with_writer(sink)
            .with_filter(target_filter);

        Registry::default().with(formatting_layer)
    }
}

/// Sets `subscriber` as the global default [`tracing::Subscriber`].
pub fn init_global_default(subscriber: impl Subscriber + Sync + Send) {
    if let Err(e) = set_global_default(subscriber) {
        console::error!(format!("failed to set tracing subscriber: {e}"));
    }
}

/// Buffers a single formatted event and logs it to the console when dropped.
#[derive(Default)]
pub struct ConsoleWriter {
    buf: Vec<u8>,
}

impl ConsoleWriter {
    pub fn make() -> Self {
        Self::default()
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if !self.buf.is_empty() {
            let line = String::from_utf8_lossy(&self.buf);
            console::log!(line.trim_end().to_owned());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn output(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn run_with(verbose: bool, f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let sink = {
            let captured = captured.clone();
            move || captured.clone()
        };
        let subscriber = TracingSubscriber::new(&Log { verbose }).build(sink);
        tracing::subscriber::with_default(subscriber, f);
        captured.output()
    }

    #[test]
    fn store_dispatch_reaches_the_sink_when_verbose() {
        let output = run_with(true, || {
            store::app_store(None).dispatch(store::Action::change_theme("dark"));
        });
        assert!(output.contains("action dispatched"), "{output}");
        assert!(output.contains("dark"), "{output}");
    }

    #[test]
    fn store_subscriptions_are_traced_when_verbose() {
        let output = run_with(true, || {
            let store = store::app_store(None);
            store.subscribe(|| {}).unsubscribe();
        });
        assert!(output.contains("listener subscribed"), "{output}");
        assert!(output.contains("listener unsubscribed"), "{output}");
    }

    #[test]
    fn debug_events_are_filtered_out_by_default() {
        let output = run_with(false, || {
            store::app_store(None).dispatch(store::Action::change_theme("dark"));
            tracing::debug!("connector notified");
        });
        assert!(output.is_empty(), "{output}");
    }

    #[test]
    fn frontend_info_events_pass_by_default() {
        let output = run_with(false, || tracing::info!("app mounted"));
        assert!(output.contains("app mounted"), "{output}");
    }

    #[test]
    fn foreign_targets_need_warn() {
        let output = run_with(true, || {
            tracing::info!(target: "yew", "scheduler tick");
            tracing::warn!(target: "yew", "scheduler stalled");
        });
        assert!(!output.contains("scheduler tick"), "{output}");
        assert!(output.contains("scheduler stalled"), "{output}");
    }
}

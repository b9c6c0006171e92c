use crossterm::event::{self, Event, KeyEvent};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::ui::dashboard::DashboardIntent;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// Result posted by the gateway worker.
    Dashboard(DashboardIntent),
}

/// Merges terminal input, ticks and worker results into one channel.
///
/// Input is read on a dedicated thread; the worker gets a sender through
/// [`EventHandler::sender`].
pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
    stop: Arc<AtomicBool>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            while !stop_flag.load(Ordering::Relaxed) {
                // Short poll timeout so the stop flag is checked often
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match event::poll(timeout) {
                    Ok(true) => {
                        let forwarded = match event::read() {
                            Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)),
                            Ok(Event::Resize(cols, rows)) => {
                                event_tx.send(AppEvent::Resize(cols, rows))
                            }
                            Ok(_) => Ok(()),
                            Err(err) => {
                                tracing::error!(error = %err, "failed to read terminal event");
                                break;
                            }
                        };
                        if forwarded.is_err() {
                            break;
                        }
                    }
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!(error = %err, "failed to poll terminal events");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx, stop }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

use std::io::Write;
use std::time::{Duration, Instant};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

const FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];
const TICK: Duration = Duration::from_millis(150);

/// Spinner on stderr while a refresh is in flight, with the time spent
/// waiting so far.
pub struct FetchSpinner {
    message: String,
    started: Option<Instant>,
    stop: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl FetchSpinner {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            started: None,
            stop: None,
            task: None,
        }
    }

    pub fn start(&mut self) {
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
        let message = self.message.clone();
        let started = Instant::now();

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(TICK);
            for frame in FRAMES.iter().cycle() {
                tokio::select! {
                    _ = ticker.tick() => {
                        eprint!("\r{}", Self::status_line(&message, frame, started.elapsed()));
                        let _ = std::io::stderr().flush();
                    }
                    _ = &mut stop_rx => break,
                }
            }
        });

        self.started = Some(started);
        self.stop = Some(stop_tx);
        self.task = Some(task);
    }

    pub async fn finish(&mut self, final_message: &str) {
        let elapsed = self.halt().await;
        Self::settle("✅", final_message, elapsed);
    }

    pub async fn fail(&mut self, error_message: &str) {
        let elapsed = self.halt().await;
        Self::settle("❌", error_message, elapsed);
    }

    fn status_line(message: &str, frame: &str, elapsed: Duration) -> String {
        format!("{frame} {message} ({:.1}s) ", elapsed.as_secs_f64())
    }

    fn settle(mark: &str, message: &str, elapsed: Duration) {
        eprint!("\r\x1b[K{mark} {message} in {:.2}s\n", elapsed.as_secs_f64());
        let _ = std::io::stderr().flush();
    }

    async fn halt(&mut self) -> Duration {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }

        self.started.take().map(|s| s.elapsed()).unwrap_or_default()
    }
}

use crossterm::{cursor, execute};
use std::io::{Write, stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tokio::time::sleep;

const DOT_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const FRAME_DELAY: Duration = Duration::from_millis(80);

/// Starts an inline spinner on stdout; stop it via the returned handle.
pub fn spawn(text: impl Into<String>) -> SpinnerHandle {
    let notify = Arc::new(Notify::new());
    let notify_clone = Arc::clone(&notify);
    let text = text.into();

    let join_handle = tokio::spawn(async move {
        run_spinner(text, notify_clone).await;
    });

    SpinnerHandle {
        notify,
        join_handle: Some(join_handle),
    }
}

pub struct SpinnerHandle {
    notify: Arc<Notify>,
    join_handle: Option<JoinHandle<()>>,
}

impl SpinnerHandle {
    pub async fn stop(&mut self) {
        self.notify.notify_waiters();

        if let Some(handle) = self.join_handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for SpinnerHandle {
    fn drop(&mut self) {
        self.notify.notify_waiters();

        if let Some(handle) = self.join_handle.take() {
            handle.abort();
        }
    }
}

async fn run_spinner(text: String, notify: Arc<Notify>) {
    if text.is_empty() {
        return;
    }

    let _ = execute!(stdout(), cursor::Hide);
    let start = Instant::now();
    let mut frame_index = 0;

    loop {
        let spinner = DOT_FRAMES[frame_index];
        let elapsed = format_elapsed(start.elapsed());
        print!("\r{spinner} {text} ({elapsed})   ");
        let _ = stdout().flush();

        tokio::select! {
            _ = notify.notified() => break,
            _ = sleep(FRAME_DELAY) => {}
        }

        frame_index = (frame_index + 1) % DOT_FRAMES.len();
    }

    print!("\r");
    let _ = stdout().flush();
    let _ = execute!(stdout(), cursor::Show);
}

pub fn format_elapsed(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    if total_secs == 0 {
        let millis = duration.subsec_millis();
        return format!("{millis}ms");
    }

    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes}m"));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(format!("{seconds}s"));
    }

    parts.join(" ")
}

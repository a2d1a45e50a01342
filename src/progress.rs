use atomic_counter::{AtomicCounter, RelaxedCounter};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// An indicatif progress bar fed from an atomic counter so it can be ticked
/// from inside a rayon iterator. A refresh thread pushes the counter into the
/// bar until the bar finishes or is dropped.
pub struct Bar {
    counter: Arc<RelaxedCounter>,
    /// An Arc wrapped ProgressBar from indicatif.
    pub pbar: Arc<ProgressBar>,
}

impl Bar {
    /// Creates a hidden Bar of the given length with a prefix text and a
    /// refresh rate in milliseconds.
    pub fn new(len: u64, refresh_rate: u64, prefix: String) -> Self {
        let progress_bar = ProgressBar::hidden();
        progress_bar.set_length(len);
        progress_bar.set_prefix(prefix);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{prefix}[{bar:40}] [{elapsed_precise}] {percent:>3}%")
                .progress_chars("=>-"),
        );
        let pbar = Arc::new(progress_bar);
        let counter = Arc::new(RelaxedCounter::new(0));
        let refresh_bar = pbar.clone();
        let refresh_counter = counter.clone();
        thread::spawn(move || {
            while Arc::strong_count(&refresh_counter) > 1
                && !refresh_bar.is_finished()
            {
                refresh_bar.set_position(refresh_counter.get() as u64);
                thread::sleep(Duration::from_millis(refresh_rate));
            }
        });
        Self { counter, pbar }
    }

    /// Creates a Bar and draws it to stderr straight away.
    pub fn visible(len: u64, refresh_rate: u64, prefix: String) -> Self {
        let bar = Self::new(len, refresh_rate, prefix);
        bar.pbar.set_draw_target(ProgressDrawTarget::stderr());
        bar
    }

    /// tick the progress bar
    pub fn tick(&self) {
        self.counter.inc();
    }
}

impl Drop for Bar {
    /// make sure we clear bars when the object is dropped
    fn drop(&mut self) {
        if !self.pbar.is_finished() {
            self.pbar.set_position(self.counter.get() as u64);
            self.pbar.finish_and_clear();
        }
    }
}

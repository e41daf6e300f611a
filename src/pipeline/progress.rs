// file: src/pipeline/progress.rs
// description: progress tracking and statistics for feed runs
// reference: uses indicatif for progress bars

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct FetchStats {
    pub feeds_fetched: usize,
    pub feeds_failed: usize,
    pub articles_collected: usize,
    pub total_bytes_fetched: u64,
    pub duration_secs: u64,
}

impl FetchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn articles_per_feed(&self) -> f64 {
        if self.feeds_fetched == 0 {
            return 0.0;
        }
        self.articles_collected as f64 / self.feeds_fetched as f64
    }

    pub fn success_rate(&self) -> f64 {
        let total = self.feeds_fetched + self.feeds_failed;
        if total == 0 {
            return 0.0;
        }
        (self.feeds_fetched as f64 / total as f64) * 100.0
    }
}

pub struct ProgressTracker {
    main_bar: ProgressBar,
    detail_bar: ProgressBar,
    feeds_fetched: Arc<AtomicUsize>,
    feeds_failed: Arc<AtomicUsize>,
    articles_collected: Arc<AtomicUsize>,
    bytes_fetched: Arc<AtomicU64>,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn new(total_feeds: usize) -> Self {
        Self::with_color(total_feeds, true)
    }

    pub fn with_color(total_feeds: usize, colored: bool) -> Self {
        let multi_progress = MultiProgress::new();

        let main_bar = create_progress_bar(&multi_progress, total_feeds as u64, colored);
        let detail_bar = create_detail_bar(&multi_progress);

        Self {
            main_bar,
            detail_bar,
            feeds_fetched: Arc::new(AtomicUsize::new(0)),
            feeds_failed: Arc::new(AtomicUsize::new(0)),
            articles_collected: Arc::new(AtomicUsize::new(0)),
            bytes_fetched: Arc::new(AtomicU64::new(0)),
            start_time: Instant::now(),
        }
    }

    pub fn inc_feeds_fetched(&self) {
        self.feeds_fetched.fetch_add(1, Ordering::SeqCst);
        self.main_bar.inc(1);
        self.update_detail_bar();
    }

    pub fn inc_feeds_failed(&self) {
        self.feeds_failed.fetch_add(1, Ordering::SeqCst);
        self.main_bar.inc(1);
        self.update_detail_bar();
    }

    pub fn add_articles(&self, count: usize) {
        self.articles_collected.fetch_add(count, Ordering::SeqCst);
    }

    pub fn add_bytes_fetched(&self, bytes: u64) {
        self.bytes_fetched.fetch_add(bytes, Ordering::SeqCst);
    }

    pub fn set_message(&self, message: String) {
        self.detail_bar.set_message(message);
    }

    pub fn finish(&self) {
        self.main_bar.finish_with_message("Feed retrieval complete");
        self.detail_bar.finish_and_clear();
    }

    pub fn get_stats(&self) -> FetchStats {
        let duration = self.start_time.elapsed().as_secs();

        FetchStats {
            feeds_fetched: self.feeds_fetched.load(Ordering::SeqCst),
            feeds_failed: self.feeds_failed.load(Ordering::SeqCst),
            articles_collected: self.articles_collected.load(Ordering::SeqCst),
            total_bytes_fetched: self.bytes_fetched.load(Ordering::SeqCst),
            duration_secs: duration,
        }
    }

    fn update_detail_bar(&self) {
        let articles = self.articles_collected.load(Ordering::SeqCst);
        let failed = self.feeds_failed.load(Ordering::SeqCst);

        let message = format!("Articles: {} | Failed feeds: {}", articles, failed);

        self.detail_bar.set_message(message);
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.finish();
    }
}

fn create_progress_bar(multi_progress: &MultiProgress, total: u64, colored: bool) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(total));
    if colored {
        bar.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}",
                )
                .expect("Failed to create progress bar template")
                .progress_chars("█▓▒░"),
        );
    } else {
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({eta}) {msg}")
                .expect("Failed to create progress bar template")
                .progress_chars("=>-"),
        );
    }
    bar
}

fn create_detail_bar(multi_progress: &MultiProgress) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(0));
    let style = ProgressStyle::default_bar()
        .template("{msg}")
        .expect("Failed to create detail bar template");
    bar.set_style(style);
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_stats_calculations() {
        let mut stats = FetchStats::new();
        stats.feeds_fetched = 9;
        stats.feeds_failed = 1;
        stats.articles_collected = 180;

        assert_eq!(stats.articles_per_feed(), 20.0);
        assert!((stats.success_rate() - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fetch_stats_zero_feeds() {
        let stats = FetchStats::new();
        assert_eq!(stats.articles_per_feed(), 0.0);
        assert_eq!(stats.success_rate(), 0.0);
    }

    #[test]
    fn test_progress_tracker_counters() {
        let tracker = ProgressTracker::new(12);

        tracker.inc_feeds_fetched();
        tracker.add_articles(25);
        tracker.add_bytes_fetched(2048);

        let stats = tracker.get_stats();
        assert_eq!(stats.feeds_fetched, 1);
        assert_eq!(stats.articles_collected, 25);
        assert_eq!(stats.total_bytes_fetched, 2048);
    }

    #[test]
    fn test_progress_tracker_failures() {
        let tracker = ProgressTracker::new(12);

        tracker.inc_feeds_failed();
        tracker.inc_feeds_failed();

        let stats = tracker.get_stats();
        assert_eq!(stats.feeds_failed, 2);
    }
}

use crate::errors::{AppError, AppResult};
use crate::processor::EncodingProgress;
use crate::utils::size::format_byte_count;
use std::io::Write;
use std::time::Instant;
use tracing::info;

/// Throttles progress output for long-running encodes
pub struct StandardProgressTracker {
    start_time: Option<Instant>,
    last_report: Option<Instant>,
    report_interval_ms: u64,
}

impl Default for StandardProgressTracker {
    fn default() -> Self {
        Self {
            start_time: None,
            last_report: None,
            report_interval_ms: 500, // Report every 500ms
        }
    }
}

impl StandardProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_interval_ms(report_interval_ms: u64) -> Self {
        Self {
            report_interval_ms,
            ..Self::default()
        }
    }

    pub fn start(&mut self) {
        let now = Instant::now();
        self.start_time = Some(now);
        self.last_report = Some(now);
    }

    /// True at most once per report interval; always true for the final update
    pub fn should_report(&mut self, progress: &EncodingProgress) -> bool {
        let now = Instant::now();
        if progress.is_complete() {
            self.last_report = Some(now);
            return true;
        }

        match self.last_report {
            Some(last) => {
                if now.duration_since(last).as_millis() > self.report_interval_ms as u128 {
                    self.last_report = Some(now);
                    true
                } else {
                    false
                }
            }
            None => {
                self.last_report = Some(now);
                true
            }
        }
    }

    pub fn elapsed_seconds(&self) -> f64 {
        match self.start_time {
            Some(start) => start.elapsed().as_secs_f64(),
            None => 0.0,
        }
    }
}

/// Progress reporting utilities
pub struct ProgressReporter;

impl ProgressReporter {
    /// Format elapsed seconds into human-readable time
    pub fn format_elapsed_time(elapsed_secs: f64) -> String {
        if elapsed_secs < 60.0 {
            format!("{:.1}s", elapsed_secs)
        } else if elapsed_secs < 3600.0 {
            let minutes = (elapsed_secs / 60.0).floor();
            let seconds = elapsed_secs % 60.0;
            format!("{}m {:.0}s ({:.1}s)", minutes, seconds, elapsed_secs)
        } else {
            let hours = (elapsed_secs / 3600.0).floor();
            let remaining = elapsed_secs % 3600.0;
            let minutes = (remaining / 60.0).floor();
            let seconds = remaining % 60.0;
            format!(
                "{}h {}m {:.0}s ({:.1}s)",
                hours, minutes, seconds, elapsed_secs
            )
        }
    }

    pub fn format_encoding_progress(progress: &EncodingProgress, elapsed: f64) -> String {
        format!(
            "Encoded: {} / {} ({:.1}%) | Elapsed: {}",
            format_byte_count(progress.bytes_processed as i64),
            format_byte_count(progress.total_bytes as i64),
            progress.fraction() * 100.0,
            Self::format_elapsed_time(elapsed)
        )
    }

    /// Rewrite the current stderr line (stdout carries the encoded output)
    pub fn print_progress_line(message: &str) -> AppResult<()> {
        let mut stderr = std::io::stderr();
        write!(stderr, "\r{}", message).map_err(AppError::Io)?;
        stderr.flush().map_err(AppError::Io)?;
        Ok(())
    }

    pub fn finish_progress_line() {
        eprintln!();
    }

    pub fn report_completion(operation: &str, total_bytes: u64, output_len: usize, elapsed: f64) {
        let rate = if elapsed > 0.0 {
            total_bytes as f64 / elapsed
        } else {
            0.0
        };
        info!("=== {} Completed ===", operation);
        info!("  Input bytes: {}", total_bytes);
        info!("  Output chars: {}", output_len);
        info!("  Time elapsed: {:.2}s", elapsed);
        info!("  Average rate: {:.1} bytes/sec", rate);
    }
}

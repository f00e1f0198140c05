//! Transfer progress display.

use indicatif::{ProgressBar, ProgressStyle};
use once_cell::sync::Lazy;

const BAR_STYLE: &str =
    "{spinner:.blue} {prefix:>10.cyan.bold} {wide_bar:.cyan/blue} {bytes}/{total_bytes} ({bytes_per_sec}, {eta})";

const SPINNER_STYLE: &str = "{spinner:.blue} {prefix:>10.cyan.bold} {bytes} ({bytes_per_sec})";

static BAR_TEMPLATE: Lazy<Option<ProgressStyle>> =
    Lazy::new(|| ProgressStyle::with_template(BAR_STYLE).ok());

static SPINNER_TEMPLATE: Lazy<Option<ProgressStyle>> =
    Lazy::new(|| ProgressStyle::with_template(SPINNER_STYLE).ok());

/// Byte-level progress for one transfer: a bar when the response declares a
/// content length, a spinner otherwise.
pub struct Tracker {
    pb: ProgressBar,
}

impl Tracker {
    pub fn new(len: Option<u64>) -> Self {
        let (pb, template) = match len {
            Some(len) => (ProgressBar::new(len), &BAR_TEMPLATE),
            None => (ProgressBar::new_spinner(), &SPINNER_TEMPLATE),
        };

        let pb = match template.as_ref() {
            Some(style) => pb.with_style(style.clone()),
            None => pb,
        };
        pb.set_prefix("download");

        Self { pb }
    }

    pub fn step(&self, len: u64) {
        self.pb.inc(len);
    }

    pub fn finish(self) {
        self.pb.finish_and_clear();
    }
}

//! Progress reporting while models are answering

use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use jargon_application::ProgressNotifier;
use jargon_domain::{AggregatedResponse, ModelResult, Term};
use std::sync::Mutex;

/// Reports progress with a progress bar on stderr
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn model_line(result: &ModelResult) -> String {
        let mark = if result.is_ok() {
            "v".green()
        } else {
            "x".red()
        };
        match result.latency_ms {
            Some(ms) => format!("{} {} ({} ms)", mark, result.display_name, ms),
            None => format!("{} {}", mark, result.display_name),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_dispatch_start(&self, term: &Term, total_models: usize) {
        let pb = ProgressBar::with_draw_target(
            Some(total_models as u64),
            ProgressDrawTarget::stderr(),
        );
        pb.set_style(Self::style());
        pb.set_prefix(format!("Explaining '{}'", term));
        pb.set_message("asking models...");
        pb.enable_steady_tick(std::time::Duration::from_millis(120));

        if let Ok(mut slot) = self.bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_model_complete(&self, result: &ModelResult) {
        if let Ok(slot) = self.bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            pb.set_message(Self::model_line(result));
            pb.inc(1);
        }
    }

    fn on_dispatch_complete(&self, _response: &AggregatedResponse) {
        if let Ok(mut slot) = self.bar.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }
}

/// Plain line-based progress (no redraws), written to stderr
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_dispatch_start(&self, term: &Term, total_models: usize) {
        eprintln!(
            "{} Explaining {} ({} models)",
            "->".cyan(),
            term.as_str().bold(),
            total_models
        );
    }

    fn on_model_complete(&self, result: &ModelResult) {
        eprintln!("  {}", ProgressReporter::model_line(result));
    }
}

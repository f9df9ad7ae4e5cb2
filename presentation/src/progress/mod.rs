//! Progress display

pub mod reporter;

use jargon_application::{NoProgress, ProgressNotifier};
use reporter::{ProgressReporter, SimpleProgress};
use std::io::IsTerminal;

/// Progress for one submission: a live bar on a terminal, plain lines when
/// stderr is redirected, nothing when disabled
pub fn progress_notifier(show: bool) -> Box<dyn ProgressNotifier> {
    notifier_for(show, std::io::stderr().is_terminal())
}

fn notifier_for(show: bool, stderr_is_terminal: bool) -> Box<dyn ProgressNotifier> {
    match (show, stderr_is_terminal) {
        (false, _) => Box::new(NoProgress),
        (true, true) => Box::new(ProgressReporter::new()),
        (true, false) => Box::new(SimpleProgress),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jargon_domain::Term;

    #[test]
    fn test_notifier_selection_runs_callbacks() {
        let term = Term::new("dns").unwrap();
        for (show, terminal) in [(false, true), (true, true), (true, false)] {
            let notifier = notifier_for(show, terminal);
            notifier.on_dispatch_start(&term, 3);
        }
    }
}

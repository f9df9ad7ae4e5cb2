//! REPL (Read-Eval-Print Loop) for explaining terms one after another

use crate::config::{OutputConfig, ReplConfig};
use crate::output::console::ConsoleFormatter;
use crate::progress::progress_notifier;
use jargon_application::{ExplainTermInput, ExplainTermUseCase, ModelTransport};
use jargon_domain::{OutputFormat, Temperature};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use tracing::warn;

const HISTORY_CAPACITY: usize = 500;

/// A slash command typed at the prompt
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    Quit,
    Help,
    Models,
    /// `/temp` with an optional new value
    Temperature(Option<String>),
    /// `/format` with an optional new format
    Format(Option<String>),
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line starting with `/`; other lines are terms
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if !line.starts_with('/') {
            return None;
        }
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, Some(arg.trim().to_string()).filter(|a| !a.is_empty())),
            None => (line, None),
        };
        Some(match name {
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/models" => ReplCommand::Models,
            "/temp" | "/temperature" => ReplCommand::Temperature(arg),
            "/format" => ReplCommand::Format(arg),
            _ => ReplCommand::Unknown(name.to_string()),
        })
    }
}

/// Interactive jargon REPL
pub struct JargonRepl<T: ModelTransport + 'static> {
    use_case: ExplainTermUseCase<T>,
    formatter: ConsoleFormatter,
    config: ReplConfig,
    format: OutputFormat,
}

impl<T: ModelTransport + 'static> JargonRepl<T> {
    pub fn new(use_case: ExplainTermUseCase<T>, config: ReplConfig, output: OutputConfig) -> Self {
        Self {
            use_case,
            formatter: ConsoleFormatter::from_terminal(),
            config,
            format: output.format,
        }
    }

    /// Run the interactive REPL until `/quit` or end of input
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut editor = Reedline::create();

        if let Some(path) = &self.config.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
                Ok(history) => editor = editor.with_history(Box::new(history)),
                Err(e) => warn!(path = %path.display(), error = %e, "History file unavailable"),
            }
        }

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("jargon".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    if let Some(command) = ReplCommand::parse(line) {
                        if self.handle_command(command) {
                            break;
                        }
                        continue;
                    }

                    self.process_term(line).await;
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                _ => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│          Jargon Buster - Interactive         │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        print!(
            "{}",
            ConsoleFormatter::format_models(self.use_case.dispatcher().catalog())
        );
        println!("Temperature: {}", self.config.temperature);
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Type a term to explain it. Prefix with TERM: to skip the IT keyword check.");
        println!();
        println!("Commands:");
        println!("  /temp <0.0-1.0>   - Show or set the temperature");
        println!("  /format <name>    - Show or set output (columns, stacked, json)");
        println!("  /models           - Show configured models");
        println!("  /help, /h, /?     - Show this help");
        println!("  /quit, /exit, /q  - Exit");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&mut self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Help => Self::print_help(),
            ReplCommand::Models => {
                println!();
                print!(
                    "{}",
                    ConsoleFormatter::format_models(self.use_case.dispatcher().catalog())
                );
                println!();
            }
            ReplCommand::Temperature(None) => {
                println!("Temperature: {}", self.config.temperature);
            }
            ReplCommand::Temperature(Some(value)) => {
                match value.parse::<f32>().map(Temperature::new) {
                    Ok(Ok(temperature)) => {
                        self.config.temperature = temperature;
                        println!("Temperature set to {}", temperature);
                    }
                    Ok(Err(e)) => println!("{}", e),
                    Err(_) => println!("Not a number: {}", value),
                }
            }
            ReplCommand::Format(None) => println!("Output: {}", self.format),
            ReplCommand::Format(Some(value)) => println!("{}", set_format(&mut self.format, &value)),
            ReplCommand::Unknown(name) => {
                println!("Unknown command: {}", name);
                println!("Type /help for available commands");
            }
        }
        false
    }

    async fn process_term(&self, raw_term: &str) {
        println!();

        let input =
            ExplainTermInput::new(raw_term).with_temperature(self.config.temperature.value());

        let progress = progress_notifier(self.config.show_progress);
        let result = self
            .use_case
            .execute_with_progress(input, progress.as_ref())
            .await;

        match result {
            Ok(outcome) => {
                println!("{}", self.formatter.format_outcome(&outcome, self.format));
            }
            Err(e) => {
                eprintln!("Error: {}", e);
            }
        }
    }
}

/// Switch the output format; returns the line to show
fn set_format(format: &mut OutputFormat, value: &str) -> String {
    match value.parse::<OutputFormat>() {
        Ok(new_format) => {
            *format = new_format;
            format!("Output set to {}", new_format)
        }
        Err(e) => format!("{} (columns, stacked, json)", e),
    }
}

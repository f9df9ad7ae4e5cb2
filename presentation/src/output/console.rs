//! Console output formatter for explanations

use super::columns::{self, CellStyle, Column};
use colored::Colorize;
use jargon_application::{Connectivity, ConnectivityReport, ExplainOutcome};
use jargon_domain::{AggregatedResponse, ModelCatalog, ModelResult, OutputFormat, Term};
use serde_json::json;

/// Terminal width used when the real size is unknown
pub const FALLBACK_WIDTH: usize = 120;

/// Formats aggregated responses for console display
pub struct ConsoleFormatter {
    width: usize,
}

impl ConsoleFormatter {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// Size to the current terminal
    pub fn from_terminal() -> Self {
        let width = crossterm::terminal::size()
            .map(|(cols, _)| cols as usize)
            .ok()
            .filter(|cols| *cols > 0)
            .unwrap_or(FALLBACK_WIDTH);
        Self::new(width)
    }

    /// Format any use case outcome in the requested format
    pub fn format_outcome(&self, outcome: &ExplainOutcome, format: OutputFormat) -> String {
        match (outcome, format) {
            (ExplainOutcome::Explained(response), OutputFormat::Columns) => {
                self.format_columns(response)
            }
            (ExplainOutcome::Explained(response), OutputFormat::Stacked) => {
                self.format_stacked(response)
            }
            (ExplainOutcome::Explained(response), OutputFormat::Json) => Self::format_json(response),
            (ExplainOutcome::Rejected { term, guidance }, OutputFormat::Json) => {
                Self::format_rejection_json(term, guidance)
            }
            (ExplainOutcome::Rejected { term, guidance }, _) => {
                Self::format_rejection(term, guidance)
            }
        }
    }

    /// One column per model, side by side
    pub fn format_columns(&self, response: &AggregatedResponse) -> String {
        let mut output = String::new();
        output.push_str(&self.header(response));
        output.push('\n');

        let cols: Vec<Column> = response
            .results
            .iter()
            .map(|result| {
                let (body, body_style) = Self::body(result);
                Column {
                    header: vec![
                        (result.display_name.clone(), CellStyle::Title),
                        (Self::status_line(result), Self::status_style(result)),
                    ],
                    body,
                    body_style,
                }
            })
            .collect();
        output.push_str(&columns::render(&cols, self.width));
        output.push_str(&self.footer());
        output
    }

    /// One section per model, top to bottom
    pub fn format_stacked(&self, response: &AggregatedResponse) -> String {
        let mut output = String::new();
        output.push_str(&self.header(response));

        for result in &response.results {
            let title = format!("── {} ──", result.display_name);
            let title = if result.is_ok() {
                title.yellow().bold()
            } else {
                title.red().bold()
            };
            output.push_str(&format!(
                "\n{} {}\n",
                title,
                Self::status_line(result).dimmed()
            ));

            let (body, _) = Self::body(result);
            for line in columns::wrap(&body, self.width) {
                if result.is_ok() {
                    output.push_str(&line);
                } else {
                    output.push_str(&line.red().to_string());
                }
                output.push('\n');
            }
        }

        output.push_str(&self.footer());
        output
    }

    /// Format as JSON
    pub fn format_json(response: &AggregatedResponse) -> String {
        serde_json::to_string_pretty(response).unwrap_or_else(|_| "{}".to_string())
    }

    /// Guidance shown when a term is not recognized
    pub fn format_rejection(term: &Term, guidance: &str) -> String {
        format!(
            "{} {}\n{}\n",
            "Not recognized:".yellow().bold(),
            term,
            guidance
        )
    }

    fn format_rejection_json(term: &Term, guidance: &str) -> String {
        serde_json::to_string_pretty(&json!({
            "term": term,
            "accepted": false,
            "guidance": guidance,
        }))
        .unwrap_or_else(|_| "{}".to_string())
    }

    /// Configured models, one per line
    pub fn format_models(catalog: &ModelCatalog) -> String {
        let mut output = format!("{}\n", "Configured models:".cyan().bold());
        for spec in catalog.specs() {
            output.push_str(&format!(
                "  {:<8} {} ({}, {})\n",
                spec.id.as_str().bold(),
                spec.display_name,
                spec.model,
                spec.transport.as_str().dimmed()
            ));
        }
        output
    }

    /// One status line per model, then a summary
    pub fn format_connectivity(reports: &[ConnectivityReport]) -> String {
        let mut output = format!("{}\n", "Model connectivity:".cyan().bold());
        for report in reports {
            let (mark, status) = match &report.connectivity {
                Connectivity::Reachable { reply } => {
                    ("v".green(), format!("reachable ({} ms): {}", report.latency_ms, reply))
                }
                Connectivity::Unauthorized { status } => (
                    "x".red(),
                    format!("unauthorized ({}): check the token's permissions", status),
                ),
                Connectivity::WrongRoute { status } => (
                    "!".yellow(),
                    format!(
                        "wrong route ({}): the endpoint exists but needs a different deployment route",
                        status
                    ),
                ),
                Connectivity::Failed { detail } => ("x".red(), format!("failed: {}", detail)),
            };
            output.push_str(&format!(
                "  {} {:<32} {}\n",
                mark,
                report.display_name.bold(),
                status
            ));
        }
        let reachable = reports
            .iter()
            .filter(|r| r.connectivity.is_reachable())
            .count();
        output.push_str(&format!("\n{} of {} models reachable\n", reachable, reports.len()));
        output
    }

    fn header(&self, response: &AggregatedResponse) -> String {
        let line = "=".repeat(self.width.min(100));
        format!(
            "{}\n{} {}   {} {}\n{}\n",
            line.cyan(),
            "Term:".cyan().bold(),
            response.term,
            "Temperature:".cyan().bold(),
            response.temperature,
            line.cyan()
        )
    }

    fn footer(&self) -> String {
        format!("{}\n", "=".repeat(self.width.min(100)).cyan())
    }

    fn status_line(result: &ModelResult) -> String {
        match result.latency_ms {
            Some(ms) => format!("{} · {} ms", result.status, ms),
            None => result.status.to_string(),
        }
    }

    fn status_style(result: &ModelResult) -> CellStyle {
        if result.is_ok() {
            CellStyle::Dim
        } else {
            CellStyle::Failed
        }
    }

    fn body(result: &ModelResult) -> (String, CellStyle) {
        match (&result.text, result.failure_message()) {
            (_, Some(message)) => (message, CellStyle::Failed),
            (Some(text), None) => (text.clone(), CellStyle::Plain),
            (None, None) => (String::new(), CellStyle::Plain),
        }
    }
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new(FALLBACK_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jargon_domain::{ModelId, ModelSpec, ResultStatus, Temperature, aggregate};

    fn response() -> AggregatedResponse {
        let catalog = ModelCatalog::default();
        let gpt = ModelSpec::default_for(ModelId::Gpt);
        let grok = ModelSpec::default_for(ModelId::Grok);
        aggregate(
            &catalog,
            Term::new("firewall").unwrap(),
            Temperature::default(),
            vec![
                ModelResult::ok(&gpt, "A firewall is a security guard for your network.")
                    .with_latency_ms(812),
                ModelResult::failure(&grok, ResultStatus::RateLimited, "HTTP 429: slow down"),
            ],
        )
    }

    #[test]
    fn test_columns_show_every_model_in_order() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::new(120).format_columns(&response());

        let gpt = output.find("GitHub Models GPT-4.1").unwrap();
        let mistral = output.find("GitHub Models Mistral Small 3.1").unwrap();
        let grok = output.find("xAI Grok-3").unwrap();
        assert!(gpt < mistral && mistral < grok);
        assert!(output.contains("ok · 812 ms"));
        assert!(output.contains("this model failed: rate limited"));
        assert!(output.contains("this model failed: transport error"));
    }

    #[test]
    fn test_stacked_lists_sections() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::new(80).format_stacked(&response());
        assert!(output.contains("── GitHub Models GPT-4.1 ──"));
        assert!(output.contains("security guard"));
        assert!(output.contains("Temperature: 0.4"));
    }

    #[test]
    fn test_json_output() {
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&response())).unwrap();
        assert_eq!(json["term"], "firewall");
        assert_eq!(json["results"].as_array().unwrap().len(), 3);
        assert_eq!(json["results"][0]["status"], "ok");
        assert_eq!(json["results"][2]["status"], "rate_limited");
    }

    #[test]
    fn test_rejection_formats() {
        colored::control::set_override(false);
        let outcome = ExplainOutcome::Rejected {
            term: Term::new("banana").unwrap(),
            guidance: jargon_domain::REJECTION_GUIDANCE,
        };
        let formatter = ConsoleFormatter::default();

        let text = formatter.format_outcome(&outcome, OutputFormat::Columns);
        assert!(text.contains("banana"));
        assert!(text.contains("TERM:FTP"));

        let json: serde_json::Value =
            serde_json::from_str(&formatter.format_outcome(&outcome, OutputFormat::Json)).unwrap();
        assert_eq!(json["accepted"], false);
    }

    #[test]
    fn test_format_connectivity() {
        colored::control::set_override(false);
        let report = |id: ModelId, connectivity: Connectivity| ConnectivityReport {
            model_id: id,
            display_name: ModelSpec::default_for(id).display_name,
            connectivity,
            latency_ms: 120,
        };
        let output = ConsoleFormatter::format_connectivity(&[
            report(
                ModelId::Gpt,
                Connectivity::Reachable {
                    reply: "OK".to_string(),
                },
            ),
            report(ModelId::Mistral, Connectivity::WrongRoute { status: 404 }),
            report(ModelId::Grok, Connectivity::Unauthorized { status: 401 }),
        ]);

        assert!(output.contains("reachable (120 ms): OK"));
        assert!(output.contains("wrong route (404)"));
        assert!(output.contains("unauthorized (401)"));
        assert!(output.contains("1 of 3 models reachable"));
        let gpt = output.find("GPT-4.1").unwrap();
        let grok = output.find("Grok-3").unwrap();
        assert!(gpt < grok);
    }

    #[test]
    fn test_format_models() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format_models(&ModelCatalog::default());
        assert!(output.contains("mistral-ai/mistral-small-2503"));
        assert!(output.contains("rest_json"));
    }
}

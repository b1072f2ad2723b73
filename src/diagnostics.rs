//! Fatal errors, advisories and debug output share one terminal format:
//! a coloured label, the message, then one `\t<label>: \t<value>` line per
//! named integer parameter.

use std::fmt;
use std::io::Write;

use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter, SetLoggerError};

use crate::Error;

/// Anything that can be rendered as a labelled diagnostic
pub trait Diagnostic {
    fn message(&self) -> String;

    /// Named integer parameters, in display order
    fn params(&self) -> Vec<(&'static str, i64)>;
}

/// Non-fatal anomaly found while building or running the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisoryKind {
    SelfLoop,
    ZeroLength,
    UnreachedBroadcast,
}

impl AdvisoryKind {
    /// Text printed after the `Note:` label
    pub fn message(&self) -> &'static str {
        match self {
            AdvisoryKind::SelfLoop => "A cycle was added to graph! Did you really mean that?",
            AdvisoryKind::ZeroLength => "An edge of zero length was added to graph!",
            AdvisoryKind::UnreachedBroadcast => {
                "Broadcasting from a vertex that was never reached!"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    pub kind: AdvisoryKind,
    pub params: Vec<(&'static str, i64)>,
}

impl Advisory {
    /// Creates an advisory with its named parameters
    pub fn new(kind: AdvisoryKind, params: Vec<(&'static str, i64)>) -> Self {
        Advisory { kind, params }
    }
}

impl Diagnostic for Advisory {
    fn message(&self) -> String {
        self.kind.message().to_string()
    }

    fn params(&self) -> Vec<(&'static str, i64)> {
        self.params.clone()
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.message())?;
        if !self.params.is_empty() {
            write!(f, "\n{}", param_table(&self.params))?;
        }
        Ok(())
    }
}

impl Diagnostic for Error {
    fn message(&self) -> String {
        self.to_string()
    }

    fn params(&self) -> Vec<(&'static str, i64)> {
        fn count(n: usize) -> i64 {
            i64::try_from(n).unwrap_or(i64::MAX)
        }

        match self {
            Error::EmptyEdgeList | Error::ConfigIo(_) | Error::ConfigParse(_) => Vec::new(),
            Error::MisalignedEdgeList { len } => vec![("Length", count(*len))],
            Error::NegativeRank { rank } | Error::VertexNotFound { rank } => {
                vec![("Vertex rank", *rank)]
            }
            Error::UnknownEndpoint { index, length } => {
                vec![("Vertex index", count(*index)), ("Length", *length)]
            }
            Error::ForeignEdge { rank, origin, edge } => vec![
                ("Vertex rank", *rank),
                ("Edge origin rank", *origin),
                ("Edge index", count(*edge)),
            ],
            Error::DuplicateTarget { rank, target } => {
                vec![("Current vertex rank", *rank), ("Leads to", *target)]
            }
            Error::DuplicateUndirectedEdge { first, second } => {
                vec![("First vertex rank", *first), ("Second vertex rank", *second)]
            }
            Error::NegativeLength { length } | Error::LengthOverInfinity { length } => {
                vec![("Length", *length)]
            }
            Error::RelaxVisited { rank, sender, candidate } => vec![
                ("Vertex rank", *rank),
                ("Sender rank", *sender),
                ("Offered distance", *candidate),
            ],
            Error::BrokenPredecessorChain { rank, steps } => {
                vec![("Vertex rank", *rank), ("Steps", count(*steps))]
            }
            Error::GraphSpent { origin } => vec![("Origin", *origin)],
        }
    }
}

/// Diagnostic severity, each with its own coloured label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Fatal,
    Note,
    Debug,
}

impl Severity {
    /// Coloured prefix printed before the message
    pub fn label(&self) -> ColoredString {
        match self {
            Severity::Fatal => "Runtime error: ".red().bold(),
            Severity::Note => "Note: ".yellow().bold(),
            Severity::Debug => "Debug: ".green().bold(),
        }
    }
}

/// One `\t<label>: \t<value>` line per parameter, without trailing newline
pub fn param_table(params: &[(&str, i64)]) -> String {
    params
        .iter()
        .map(|(label, value)| format!("\t{}: \t{}", label, value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full multi-line rendering of a diagnostic, ending with a newline
pub fn render(severity: Severity, diagnostic: &dyn Diagnostic) -> String {
    let mut out = format!("{}{}\n", severity.label(), diagnostic.message().white().bold());
    for line in param_table(&diagnostic.params()).lines() {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// One log record as printed by [`init_logger`]
///
/// Info records are plain; the other levels get the label and message styling
/// of [`render`].
pub fn log_line(level: Level, message: &str) -> String {
    let label = match level {
        Level::Error => Severity::Fatal.label(),
        Level::Warn => Severity::Note.label(),
        Level::Debug | Level::Trace => Severity::Debug.label(),
        Level::Info => return message.to_string(),
    };
    format!("{}{}", label, message.white().bold())
}

/// Installs the `env_logger` backend with the diagnostic labels.
///
/// `debug` opens the debug channel; otherwise `RUST_LOG` decides and the
/// default is warnings only. Fails if a logger is already installed.
pub fn init_logger(debug: bool) -> Result<(), SetLoggerError> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Warn).parse_default_env();
    if debug {
        builder.filter_module("broadcast_sssp", LevelFilter::Debug);
    }

    builder.format(|buf, record| {
        writeln!(buf, "{}", log_line(record.level(), &record.args().to_string()))
    });

    builder.try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_table() {
        assert_eq!(
            param_table(&[("Rank", -3), ("Length", 7)]),
            "\tRank: \t-3\n\tLength: \t7"
        );
        assert_eq!(param_table(&[]), "");
    }

    #[test]
    fn test_render_error() {
        colored::control::set_override(false);
        let err = Error::DuplicateTarget { rank: 1, target: 2 };
        assert_eq!(
            render(Severity::Fatal, &err),
            "Runtime error: Multiple edges lead to one vertex!\n\
             \tCurrent vertex rank: \t1\n\
             \tLeads to: \t2\n"
        );
    }

    #[test]
    fn test_render_advisory() {
        colored::control::set_override(false);
        let advisory = Advisory::new(AdvisoryKind::SelfLoop, vec![("Vertex rank where the cycle was found", 4)]);
        let text = render(Severity::Note, &advisory);
        assert!(text.starts_with("Note: A cycle was added to graph!"));
        assert!(text.ends_with("\tVertex rank where the cycle was found: \t4\n"));
    }

    #[test]
    fn test_error_without_params() {
        colored::control::set_override(false);
        assert_eq!(
            render(Severity::Fatal, &Error::EmptyEdgeList),
            "Runtime error: Edge list is empty!\n"
        );
    }

    #[test]
    fn test_log_line_matches_render_layout() {
        colored::control::set_override(false);
        let advisory = Advisory::new(AdvisoryKind::ZeroLength, vec![("Origin", 1), ("Target", 2)]);
        assert_eq!(
            format!("{}\n", log_line(Level::Warn, &advisory.to_string())),
            render(Severity::Note, &advisory)
        );
        assert_eq!(log_line(Level::Debug, "Visiting vertex"), "Debug: Visiting vertex");
        assert_eq!(log_line(Level::Info, "Visited 3 of 3"), "Visited 3 of 3");
    }

    #[test]
    fn test_init_logger_installs_once() {
        init_logger(false).ok();
        assert!(init_logger(true).is_err());
    }

    #[test]
    fn test_advisory_display_includes_params() {
        let advisory = Advisory::new(AdvisoryKind::ZeroLength, vec![("Origin", 1), ("Target", 2)]);
        assert_eq!(
            advisory.to_string(),
            "An edge of zero length was added to graph!\n\tOrigin: \t1\n\tTarget: \t2"
        );
    }
}

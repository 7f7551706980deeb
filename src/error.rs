use std::fmt::Display;
use std::io::Write;
use thiserror::Error;

/// The reasons a comment block can fail its structural match.
///
/// These never abort an extraction; they are reported through a
/// [`DiagnosticSink`] and processing moves on to the next comment block.
#[derive(Error, Debug, miette::Diagnostic, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    #[error("couldn't find all core properties @class, @extends, @example... missing something?")]
    #[diagnostic(
        code(classdoc::missing_core_tags),
        help("The class doc comment must carry @class, @extends and @example in that order.")
    )]
    MissingCoreTags,

    #[error("unable to parse params from @function doc comment. Please check comment syntax.\n    {raw}")]
    #[diagnostic(
        code(classdoc::malformed_param),
        help("Expected the shape `@param {{Type}} name description`.")
    )]
    MalformedParam { raw: String },
}

/// A diagnostic attributed to the file it came from.
///
/// Displays as `<filename> : <reason>` — one line, filename first, so log
/// output stays grep-friendly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub filename: String,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(filename: impl Into<String>, kind: DiagnosticKind) -> Self {
        Diagnostic {
            filename: filename.into(),
            kind,
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} : {}", self.filename, self.kind)
    }
}

/// Where diagnostics go. Implementations must not fail the extraction:
/// reporting is fire-and-forget.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Collects diagnostics for later inspection.
impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Writes each diagnostic as one line to the process error stream.
/// Write errors are swallowed; a broken stderr must not fail extraction.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        let _ = writeln!(std::io::stderr(), "{diagnostic}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display_is_filename_prefixed() {
        let diagnostic = Diagnostic::new("widget.js", DiagnosticKind::MissingCoreTags);
        let line = diagnostic.to_string();
        assert!(line.starts_with("widget.js : "));
        assert!(line.contains("@class, @extends, @example"));
    }

    #[test]
    fn test_malformed_param_carries_raw_text() {
        let diagnostic = Diagnostic::new(
            "widget.js",
            DiagnosticKind::MalformedParam {
                raw: "@param {String name".to_string(),
            },
        );
        assert!(diagnostic.to_string().contains("@param {String name"));
    }

    #[test]
    fn test_stderr_sink_report_does_not_panic() {
        let mut sink = StderrSink;
        sink.report(Diagnostic::new("x.js", DiagnosticKind::MissingCoreTags));
    }

    #[test]
    fn test_vec_sink_collects_in_order() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        sink.report(Diagnostic::new("a.js", DiagnosticKind::MissingCoreTags));
        sink.report(Diagnostic::new(
            "b.js",
            DiagnosticKind::MalformedParam { raw: "x".into() },
        ));
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0].filename, "a.js");
        assert_eq!(sink[1].filename, "b.js");
    }
}

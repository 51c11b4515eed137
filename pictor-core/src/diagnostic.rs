//! Non-fatal findings collected during a run.
//!
//! Skipped components, unreadable assets, duplicate keys and icons missing
//! upstream never abort a run; they are recorded here and reported to the
//! operator once the run finishes.

use std::fmt;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Something the operator should act on.
    Warning,
    /// Informational, e.g. an intentionally skipped component.
    Info,
}

impl Severity {
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Pipeline stage that produced it ("filter", "load", "catalog", ...).
    pub stage: &'static str,
    pub message: String,
    /// The icon, component or file the finding is about.
    pub subject: Option<String>,
}

impl Diagnostic {
    pub fn warning(stage: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            stage,
            message: message.into(),
            subject: None,
        }
    }

    pub fn info(stage: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            stage,
            message: message.into(),
            subject: None,
        }
    }

    /// Attach the subject of this diagnostic.
    pub fn about(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.subject {
            Some(subject) => write!(f, "{}: {}", subject, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Ordered list of diagnostics.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter().filter(|d| d.severity.is_warning())
    }

    pub fn infos(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter().filter(|d| !d.severity.is_warning())
    }

    /// Diagnostics produced by one stage.
    pub fn from_stage<'a>(&'a self, stage: &'a str) -> impl Iterator<Item = &'a Diagnostic> {
        self.0.iter().filter(move |d| d.stage == stage)
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<T: IntoIterator<Item = Diagnostic>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_subject() {
        let diag = Diagnostic::warning("load", "no <svg> root element").about("16/home.svg");
        assert_eq!(diag.to_string(), "16/home.svg: no <svg> root element");
    }

    #[test]
    fn test_counts_by_severity_and_stage() {
        let mut diags = Diagnostics::new();
        diags.push(Diagnostic::info("filter", "frame label contains a digit").about("Size16"));
        diags.push(Diagnostic::warning("catalog", "missing upstream").about("16/trash"));
        diags.push(Diagnostic::warning("load", "unreadable").about("24/home.svg"));

        assert_eq!(diags.warning_count(), 2);
        assert_eq!(diags.infos().count(), 1);
        assert_eq!(diags.from_stage("load").count(), 1);
        assert!(!diags.is_empty());
    }
}

use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for config operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Config text and its file name, for errors that point into the source.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// A validation error pointing at the value of `key`, when it can be found.
    pub fn invalid_value(
        &self,
        key: &str,
        message: impl Into<String>,
        help: Option<String>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: find_value_span(&self.src, key),
            message: message.into(),
            help,
        })
    }
}

/// Span of the value assigned to `key`, e.g. `"abc"` in `file_key = "abc"`.
fn find_value_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let indent = line.len() - line.trim_start().len();
        let value = line[indent..]
            .strip_prefix(key)
            .and_then(|rest| rest.trim_start().strip_prefix('='));
        if let Some(value) = value {
            // `value` is a suffix of `line`
            let leading = value.len() - value.trim_start().len();
            let start = offset + line.len() - value.len() + leading;
            return Some(SourceSpan::from((start, value.trim().len())));
        }
        offset += line.len();
    }
    None
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'pictor init' to create a pictor.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse pictor.toml")]
    #[diagnostic(code(pictor::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(pictor::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
        #[help]
        help: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_value_span() {
        let src = "[figma]\nfile_key = \"abc\"\nconcurrency=0\n";
        let span = find_value_span(src, "file_key").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "\"abc\"");

        let span = find_value_span(src, "concurrency").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "0");
    }

    #[test]
    fn test_find_value_span_missing_key() {
        assert!(find_value_span("[figma]\n", "file_key").is_none());
    }
}

//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.
//!
//! Errors raised by the prolongation engine point at the expression (or the index list) that
//! caused them. The offending input is rendered to a string when the error is created and stored
//! alongside it, so that a report can be printed without access to the caller's state.

use ariadne::{Color, Label, Report, ReportKind, Source};
use std::{any::Any, fmt::{self, Debug}, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Returns this error kind as [`Any`], so that callers can inspect the concrete kind.
    fn as_any(&self) -> &dyn Any;

    /// A one-line description of the error.
    fn message(&self) -> String;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)>;
}

/// Builds a report with the given message, one label per span, and an optional help message.
///
/// If there are fewer labels than spans, the extra spans are highlighted without a message. Empty
/// label strings are also rendered without a message.
pub fn labeled_report<'a>(
    src_id: &'a str,
    spans: &[Range<usize>],
    message: String,
    labels: &[String],
    help: Option<String>,
) -> Report<'a, (&'a str, Range<usize>)> {
    let offset = spans.first().map(|span| span.start).unwrap_or(0);
    let mut builder = Report::build(ReportKind::Error, src_id, offset)
        .with_message(message)
        .with_labels(
            spans.iter()
                .enumerate()
                .map(|(i, span)| {
                    let mut label = Label::new((src_id, span.clone()))
                        .with_color(EXPR);

                    if let Some(label_str) = labels.get(i).filter(|s| !s.is_empty()) {
                        label = label.with_message(label_str);
                    }

                    label
                })
                .collect::<Vec<_>>()
        );

    if let Some(help) = help {
        builder.set_help(help);
    }
    builder.finish()
}

/// An error associated with regions of a rendered input that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The rendered input that this error originated from.
    pub src: String,

    /// The regions of [`Error::src`] that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given source, spans, and kind.
    pub fn new(
        src: impl Into<String>,
        spans: Vec<Range<usize>>,
        kind: impl ErrorKind + 'static,
    ) -> Self {
        Self { src: src.into(), spans, kind: Box::new(kind) }
    }

    /// Creates a new error whose single span covers the entire source.
    pub fn spanning(src: impl Into<String>, kind: impl ErrorKind + 'static) -> Self {
        let src = src.into();
        let spans = vec![0..src.len()];
        Self { src, spans, kind: Box::new(kind) }
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<'a, (&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Returns true if the error is of the given kind.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Returns the kind of the error, if it is of the given kind.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Prints the report for this error to stderr.
    pub fn report_to_stderr(&self) -> std::io::Result<()> {
        self.build_report("input").eprint(("input", Source::from(&self.src)))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.message())
    }
}

impl std::error::Error for Error {}

//! Error kinds raised by the prolongation engine.

use ariadne::{Fmt, Report};
use prolong_error::{labeled_report, Error, ErrorKind, EXPR};
use prolong_symbolic::Expr;
use std::{any::Any, ops::Range};

/// The expression contains a node that the operation does not support.
#[derive(Debug, Clone, PartialEq)]
pub struct UnsupportedExpressionKind {
    /// The operation that was attempted, such as `differentiate`.
    pub operation: &'static str,

    /// A description of the unsupported node.
    pub kind: &'static str,

    /// The rendered node.
    pub expr: String,
}

impl ErrorKind for UnsupportedExpressionKind {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn message(&self) -> String {
        format!("cannot {} {}", self.operation, self.kind)
    }

    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        labeled_report(
            src_id,
            spans,
            self.message(),
            &["this expression".to_string()],
            Some(format!(
                "supported expressions are built from integers, variables, functions, sums, products, and {}",
                "integer powers".fg(EXPR),
            )),
        )
    }
}

/// An index into the independent or dependent variables is out of range.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexOutOfRange {
    /// What the index refers to, such as `dependent variable`.
    pub what: &'static str,

    /// The index that was given.
    pub index: usize,

    /// The number of variables of this kind.
    pub len: usize,
}

impl ErrorKind for IndexOutOfRange {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn message(&self) -> String {
        format!("{} index {} is out of range", self.what, self.index)
    }

    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        let help = match self.len {
            0 => format!("there are no {}s", self.what),
            1 => format!("there is 1 {}, so the only valid index is {}", self.what, "0".fg(EXPR)),
            len => format!(
                "there are {} {}s, so the index must be less than {}",
                len,
                self.what,
                len.fg(EXPR),
            ),
        };
        labeled_report(src_id, spans, self.message(), &["this index".to_string()], Some(help))
    }
}

/// A vector field coefficient was requested for an empty multi-index.
#[derive(Debug, Clone, PartialEq)]
pub struct EmptyMultiIndex;

impl ErrorKind for EmptyMultiIndex {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn message(&self) -> String {
        "cannot compute a vector field coefficient for an empty multi-index".to_string()
    }

    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        labeled_report(
            src_id,
            spans,
            self.message(),
            &["this multi-index".to_string()],
            Some("the coefficient for the empty multi-index is the `phi` function itself".to_string()),
        )
    }
}

/// A rendered request for a coefficient or derivative, `[i, j, ...], dep`, with the spans of its
/// parts.
struct RenderedRequest {
    src: String,
    multi_index: Range<usize>,
    entries: Vec<Range<usize>>,
    dependent: Range<usize>,
}

fn render_request(multi_index: &[usize], dependent: usize) -> RenderedRequest {
    let mut src = String::from("[");
    let mut entries = Vec::with_capacity(multi_index.len());
    for (i, index) in multi_index.iter().enumerate() {
        if i > 0 {
            src.push_str(", ");
        }
        let start = src.len();
        src.push_str(&index.to_string());
        entries.push(start..src.len());
    }
    src.push(']');
    let multi_index = 0..src.len();

    src.push_str(", ");
    let start = src.len();
    src.push_str(&dependent.to_string());
    let dependent = start..src.len();

    RenderedRequest { src, multi_index, entries, dependent }
}

/// Creates an [`UnsupportedExpressionKind`] error pointing at the given node.
pub(crate) fn unsupported(operation: &'static str, kind: &'static str, expr: &Expr) -> Error {
    let rendered = expr.to_string();
    Error::spanning(rendered.clone(), UnsupportedExpressionKind { operation, kind, expr: rendered })
}

/// Creates an [`IndexOutOfRange`] error for the dependent variable index of a request.
pub(crate) fn dependent_out_of_range(multi_index: &[usize], dependent: usize, len: usize) -> Error {
    let request = render_request(multi_index, dependent);
    Error::new(
        request.src,
        vec![request.dependent],
        IndexOutOfRange { what: "dependent variable", index: dependent, len },
    )
}

/// Creates an [`IndexOutOfRange`] error for the entry of the multi-index at the given position.
pub(crate) fn independent_out_of_range(
    multi_index: &[usize],
    dependent: usize,
    position: usize,
    len: usize,
) -> Error {
    let request = render_request(multi_index, dependent);
    Error::new(
        request.src,
        vec![request.entries[position].clone()],
        IndexOutOfRange { what: "independent variable", index: multi_index[position], len },
    )
}

/// Creates an [`EmptyMultiIndex`] error.
pub(crate) fn empty_multi_index(dependent: usize) -> Error {
    let request = render_request(&[], dependent);
    Error::new(request.src, vec![request.multi_index], EmptyMultiIndex)
}

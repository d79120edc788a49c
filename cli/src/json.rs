use evalexpr::{Error, Span, UserFacing};
use serde::Serialize;

use crate::Output;

/// One line of json output.
#[derive(Serialize)]
pub(crate) struct Report<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ast: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<Diagnostic>,
}

#[derive(Serialize)]
struct Diagnostic {
    desc: String,
    parse_failure: bool,
    spans: Vec<JsonSpan>,
}

#[derive(Serialize)]
struct JsonSpan {
    start: usize,
    end: usize,
}

impl From<Span> for JsonSpan {
    fn from(s: Span) -> Self {
        Self {
            start: s.start,
            end: s.end,
        }
    }
}

impl<'a> Report<'a> {
    pub(crate) fn new(input: &'a str, res: &'a evalexpr::Result<Output>) -> Self {
        let mut report = Self {
            input,
            value: None,
            ast: None,
            error: None,
        };
        match res {
            Ok(Output::Value(v)) => report.value = Some(*v),
            Ok(Output::Tree(t)) => report.ast = Some(t.as_str()),
            Err(e) => report.error = Some(Diagnostic::new(e)),
        }
        report
    }
}

impl Diagnostic {
    fn new(e: &Error) -> Self {
        Self {
            desc: e.to_string(),
            parse_failure: e.is_parse_failure(),
            spans: e.spans().into_iter().map(JsonSpan::from).collect(),
        }
    }
}

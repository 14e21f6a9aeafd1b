//! Document binding: the wire schema for expression and result documents.
//!
//! The shape mirrors the original markup exactly: a document holds an
//! ordered `expressions` collection, each entry an operation carrying an
//! `operationType` tag and either two integer `args` (leaf) or two nested
//! `operations` (composite). Results come back as an ordered
//! `expressionResults` collection of `{ result }` entries.
//!
//! Parsing and rendering here are pure string ↔ struct conversions; file
//! I/O goes through the `FileSystem` trait.

use serde::{Deserialize, Serialize};

/// Top-level input document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionDocument {
    #[serde(default)]
    pub expressions: Vec<OperationNode>,
}

/// One operation element, leaf or composite.
///
/// Which shape it is gets decided at ingestion, not here: a node with an
/// empty `operations` list is a leaf and must carry two `args`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OperationNode {
    pub operation_type: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<i64>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub operations: Vec<OperationNode>,
}

/// Top-level output document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResultsDocument {
    pub expression_results: Vec<ExpressionResult>,
}

/// One result, positionally matching its input expression.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionResult {
    pub result: f64,
}

impl ResultsDocument {
    pub fn from_values(values: Vec<f64>) -> Self {
        Self {
            expression_results: values
                .into_iter()
                .map(|result| ExpressionResult { result })
                .collect(),
        }
    }
}

/// Parse an expression document from its serialized form.
pub fn parse_expressions(content: &str) -> Result<ExpressionDocument, serde_json::Error> {
    serde_json::from_str(content)
}

/// Render a results document, pretty-printed or compact.
pub fn render_results(doc: &ResultsDocument, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(doc)
    } else {
        serde_json::to_string(doc)
    }
}

//! Expression document evaluation service
//!
//! Orchestrates the full pass: read the expression document, ingest its
//! records, reduce every record to a number, write the result document.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{DomainError, Evaluator, ExpressionRecord, OperationKind};
use crate::infrastructure::document::{
    self, ExpressionDocument, OperationNode, ResultsDocument,
};
use crate::infrastructure::traits::FileSystem;

/// Output from evaluating an expression document to a file.
#[derive(Debug, Clone)]
pub struct EvalOutput {
    /// Number of expressions evaluated
    pub count: usize,
    /// Where the result document was written
    pub output_path: PathBuf,
}

/// Service for evaluating expression documents.
pub struct CalculatorService {
    fs: Arc<dyn FileSystem>,
    evaluator: Evaluator,
}

impl CalculatorService {
    /// Create a new calculator service.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self {
            fs,
            evaluator: Evaluator::new(),
        }
    }

    /// Read and parse the expression document at `input`.
    pub fn load_document(&self, input: &Path) -> ApplicationResult<ExpressionDocument> {
        debug!("load_document: input={}", input.display());

        if !self.fs.exists(input) {
            return Err(ApplicationError::OperationFailed {
                context: format!("expression document not found: {}", input.display()),
                source: Box::new(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "file does not exist",
                )),
            });
        }

        let content = self.fs.read_to_string(input).map_err(|e| {
            ApplicationError::OperationFailed {
                context: format!("read expression document {}", input.display()),
                source: Box::new(e),
            }
        })?;

        document::parse_expressions(&content).map_err(|e| ApplicationError::OperationFailed {
            context: format!("parse expression document {}", input.display()),
            source: Box::new(e),
        })
    }

    /// Read, parse, and ingest the document into domain records.
    pub fn load_records(&self, input: &Path) -> ApplicationResult<Vec<ExpressionRecord>> {
        let doc = self.load_document(input)?;
        doc.expressions.iter().map(Self::ingest).collect()
    }

    /// Convert one wire operation node into a domain record.
    ///
    /// The node's kind is decided here, once: an empty `operations` list
    /// makes it a leaf, anything else a composite. Unknown tags and wrong
    /// arities fail immediately; `args` on a composite are ignored.
    fn ingest(node: &OperationNode) -> ApplicationResult<ExpressionRecord> {
        let op = OperationKind::from_tag(&node.operation_type)?;

        if node.operations.is_empty() {
            match node.args[..] {
                [left, right] => Ok(ExpressionRecord::leaf(op, left as f64, right as f64)),
                _ => Err(DomainError::MalformedLeaf {
                    got: node.args.len(),
                }
                .into()),
            }
        } else {
            match &node.operations[..] {
                [left, right] => Ok(ExpressionRecord::composite(
                    op,
                    Self::ingest(left)?,
                    Self::ingest(right)?,
                )),
                other => Err(DomainError::MalformedComposite { got: other.len() }.into()),
            }
        }
    }

    /// Evaluate every expression in the document, in document order.
    ///
    /// Either all records evaluate or the whole operation fails; there is
    /// no partial output.
    pub fn evaluate_document(&self, doc: &ExpressionDocument) -> ApplicationResult<Vec<f64>> {
        let records = doc
            .expressions
            .iter()
            .map(Self::ingest)
            .collect::<ApplicationResult<Vec<_>>>()?;
        Ok(self.evaluator.evaluate_all(&records))
    }

    /// Evaluate the document at `input` and return its results.
    pub fn evaluate(&self, input: &Path) -> ApplicationResult<Vec<f64>> {
        let doc = self.load_document(input)?;
        self.evaluate_document(&doc)
    }

    /// Evaluate the document at `input` and write the result document.
    pub fn evaluate_file(
        &self,
        input: &Path,
        output: &Path,
        pretty: bool,
    ) -> ApplicationResult<EvalOutput> {
        debug!(
            "evaluate_file: input={}, output={}",
            input.display(),
            output.display()
        );

        let results = self.evaluate(input)?;
        let count = results.len();

        let rendered = document::render_results(&ResultsDocument::from_values(results), pretty)
            .map_err(|e| ApplicationError::OperationFailed {
                context: format!("render result document for {}", input.display()),
                source: Box::new(e),
            })?;

        self.fs.ensure_parent(output).map_err(|e| {
            ApplicationError::OperationFailed {
                context: format!("create parent directory for {}", output.display()),
                source: Box::new(e),
            }
        })?;

        self.fs
            .write(output, &rendered)
            .map_err(|e| ApplicationError::OperationFailed {
                context: format!("write result document {}", output.display()),
                source: Box::new(e),
            })?;

        debug!("evaluate_file: wrote {} results", count);
        Ok(EvalOutput {
            count,
            output_path: output.to_path_buf(),
        })
    }

    /// Validate the document at `input` without evaluating or writing.
    ///
    /// Returns the number of expressions it holds.
    pub fn check(&self, input: &Path) -> ApplicationResult<usize> {
        debug!("check: input={}", input.display());
        Ok(self.load_records(input)?.len())
    }
}

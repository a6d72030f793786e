use super::{Field, Record};
use html5ever::tendril::StrTendril;
use html5ever::{Attribute, LocalName, Namespace, QualName};
use lol_html::html_content::{ContentType, EndTag};
use lol_html::{ElementContentHandlers, HandlerResult, RewriteStrSettings, Selector};
use scraper::node::{Element, Text};
use scraper::{Html, Node};
use std::borrow::Cow;
use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use thiserror::Error;

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Failures of a single append
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },
    #[error("cannot rewrite document: {0}")]
    Markup(String),
    #[error("no element with id '{id}' in document")]
    TableNotFound { id: String },
    #[error("element with id '{id}' has no closing tag")]
    TableNotClosed { id: String },
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Destination for submitted records
pub trait RecordSink {
    fn append(&self, record: &Record) -> Result<(), DocumentError>;
}

/// HTML page with a table that rows get appended to.
///
/// The source text is kept as is; an append only inserts the new row's markup
/// right before the table's closing tag.
pub struct TableDocument {
    markup: String,
}

impl TableDocument {
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
        }
    }

    /// Number of `tr` elements inside the table
    pub fn row_count(&self, table_id: &str) -> Result<usize, DocumentError> {
        let html = Html::parse_document(&self.markup);
        for error in &html.errors {
            log::debug!("html parser recovered: {}", error);
        }

        let table = html
            .tree
            .nodes()
            .find(|node| node.value().as_element().and_then(Element::id) == Some(table_id))
            .ok_or_else(|| not_found(table_id))?;

        Ok(table
            .descendants()
            .filter(|n| n.value().as_element().is_some_and(|e| e.name() == "tr"))
            .count())
    }

    /// Add one row of link cells as the last child of the table
    pub fn append_record(&mut self, table_id: &str, record: &Record) -> Result<(), DocumentError> {
        let selector: Selector = format!(
            "[id=\"{}\"]",
            table_id.replace('\\', "\\\\").replace('"', "\\\"")
        )
        .parse()
        .map_err(|e: lol_html::errors::SelectorError| DocumentError::Markup(e.to_string()))?;

        let row = row_markup(record);
        let matched = Rc::new(Cell::new(false));
        let closed = Rc::new(Cell::new(false));

        let on_table = Rc::clone(&matched);
        let on_close = Rc::clone(&closed);
        let handlers = ElementContentHandlers::default().element(move |el| {
            // first match only
            if on_table.replace(true) {
                return Ok(());
            }
            if let Some(end_tag_handlers) = el.end_tag_handlers() {
                let row = row.clone();
                let closed = Rc::clone(&on_close);
                end_tag_handlers.push(Box::new(move |end: &mut EndTag<'_>| -> HandlerResult {
                    end.before(&row, ContentType::Html);
                    closed.set(true);
                    Ok(())
                }));
            }
            Ok(())
        });

        let output = lol_html::rewrite_str(
            &self.markup,
            RewriteStrSettings {
                element_content_handlers: vec![(Cow::Owned(selector), handlers)],
                strict: false,
                ..RewriteStrSettings::default()
            },
        )
        .map_err(|e| DocumentError::Markup(e.to_string()))?;

        if !matched.get() {
            return Err(not_found(table_id));
        }
        if !closed.get() {
            return Err(DocumentError::TableNotClosed {
                id: table_id.to_string(),
            });
        }

        self.markup = output;
        Ok(())
    }

    pub fn as_html(&self) -> &str {
        &self.markup
    }
}

/// Serialized `<tr>` with one `<td><a href=v>v</a></td>` per field
fn row_markup(record: &Record) -> String {
    let mut fragment = Html::new_fragment();
    let mut root = fragment.tree.root_mut();

    let mut row = root.append(element("tr", Vec::new()));
    for (_, value) in record.iter() {
        let mut cell = row.append(element("td", Vec::new()));
        let href = Attribute {
            name: QualName::new(None, Namespace::from(""), LocalName::from("href")),
            value: StrTendril::from(value),
        };
        let mut anchor = cell.append(element("a", vec![href]));
        anchor.append(Node::Text(Text {
            text: StrTendril::from(value),
        }));
    }

    fragment.root_element().html()
}

fn element(local: &str, attributes: Vec<Attribute>) -> Node {
    let name = QualName::new(None, Namespace::from(HTML_NAMESPACE), LocalName::from(local));
    Node::Element(Element::new(name, attributes))
}

fn not_found(id: &str) -> DocumentError {
    DocumentError::TableNotFound { id: id.to_string() }
}

/// Code table living in an HTML file on disk. Each append rewrites the whole file.
#[derive(Debug, Clone)]
pub struct HtmlTable {
    path: PathBuf,
    table_id: String,
}

impl HtmlTable {
    pub fn new<P: AsRef<Path>>(path: P, table_id: impl Into<String>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            table_id: table_id.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<TableDocument, DocumentError> {
        let bytes = fs::read(&self.path).map_err(|source| DocumentError::Read {
            path: self.path.clone(),
            source,
        })?;
        let markup = String::from_utf8(bytes).map_err(|e| DocumentError::Parse {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        Ok(TableDocument::new(markup))
    }

    fn store(&self, document: &TableDocument) -> Result<(), DocumentError> {
        fs::write(&self.path, document.as_html()).map_err(|source| DocumentError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl RecordSink for HtmlTable {
    fn append(&self, record: &Record) -> Result<(), DocumentError> {
        let mut document = self.load()?;
        document.append_record(&self.table_id, record)?;
        let rows = document.row_count(&self.table_id)?;
        self.store(&document)?;

        log::info!(
            "appended entry '{}' to {} ({} rows)",
            record.get(Field::Name),
            self.path.display(),
            rows
        );
        Ok(())
    }
}

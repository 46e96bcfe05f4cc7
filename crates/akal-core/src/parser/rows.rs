//! Document parsing and schedule row selection
//!
//! The calendar renders each waste stream as a `.row` below `#nfoo` with
//! three cells: an icon, the "name[, period]" label and the free-text
//! list of collection days. Everything that knows about this layout lives
//! here and in `entry`.

use scraper::{ElementRef, Html, Selector};

use crate::error::{AkalError, Result};

/// CSS path of the schedule row container.
pub const ROW_SELECTOR: &str = "#nfoo > .row";

/// Number of child elements a schedule row has.
pub const ROW_CELLS: usize = 3;

/// Parsed upstream HTML
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse raw upstream bytes into a document.
    ///
    /// Invalid UTF-8 sequences are replaced rather than rejected, like a
    /// browser would render them.
    ///
    /// # Errors
    /// Returns `AkalError::MalformedDocument` if the body contains no markup at all.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let text = String::from_utf8_lossy(bytes);

        if !text.contains('<') {
            return Err(AkalError::MalformedDocument(
                "body contains no markup".to_string(),
            ));
        }

        Ok(Self::from_html(&text))
    }

    /// Parse an already decoded HTML string.
    pub fn from_html(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Select all elements matching a CSS selector.
    ///
    /// # Errors
    /// Returns `AkalError::MalformedDocument` if `css` is not a valid selector.
    pub fn select(&self, css: &str) -> Result<Vec<ElementRef<'_>>> {
        let selector = Selector::parse(css)
            .map_err(|e| AkalError::MalformedDocument(format!("invalid selector {css:?}: {e}")))?;
        Ok(self.html.select(&selector).collect())
    }
}

/// A schedule table row with exactly three child elements
#[derive(Debug, Clone)]
pub struct RawRow<'a> {
    cells: Vec<ElementRef<'a>>,
}

impl<'a> RawRow<'a> {
    /// Wrap an element if it has the shape of a schedule row.
    pub fn from_element(element: ElementRef<'a>) -> Option<Self> {
        let cells: Vec<ElementRef<'a>> = element.children().filter_map(ElementRef::wrap).collect();
        (cells.len() == ROW_CELLS).then_some(Self { cells })
    }

    /// Text of the "name[, period]" cell.
    pub fn label_text(&self) -> String {
        self.cells[1].text().collect()
    }

    /// Text of the collection days cell.
    pub fn dates_text(&self) -> String {
        self.cells[ROW_CELLS - 1].text().collect()
    }
}

/// Select the candidate schedule rows of a document, in document order.
///
/// Rows with a different number of child elements (headers, spacers)
/// are dropped without error.
pub fn select_rows(document: &Document) -> Result<Vec<RawRow<'_>>> {
    let rows: Vec<RawRow<'_>> = document
        .select(ROW_SELECTOR)?
        .into_iter()
        .filter_map(RawRow::from_element)
        .collect();

    tracing::debug!(rows = rows.len(), "selected schedule rows");
    Ok(rows)
}

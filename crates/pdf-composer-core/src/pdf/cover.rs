//! Cover page synthesis.
//!
//! # Coordinate System
//!
//! PDF uses a **bottom-left origin** coordinate system where:
//! - (0, 0) is at the bottom-left corner of the page
//! - X increases to the right
//! - Y increases upward
//!
//! The layout below is specified as offsets from the top edge, so every
//! vertical position is written as `A4_HEIGHT - offset`.
//!
//! # Overflow
//!
//! A long abstract can wrap to more lines than fit above the bottom margin.
//! Those lines are drawn off-page. Intended behavior under overflow is
//! unspecified, so the renderer does not clamp or paginate.

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use super::layout::wrap_text;
use super::metrics::FontMetrics;

// =============================================================================
// Layout Constants
// =============================================================================

/// A4 page width in points.
pub const A4_WIDTH: f32 = 595.28;

/// A4 page height in points.
pub const A4_HEIGHT: f32 = 841.89;

/// Left margin, also the X position of every text element (in points).
const MARGIN_X: f32 = 50.0;

/// Title baseline offset from the top edge (in points).
const TITLE_OFFSET: f32 = 150.0;

/// Title font size (in points).
const TITLE_SIZE: f32 = 28.0;

/// Subtitle baseline offset from the top edge (in points).
const SUBTITLE_OFFSET: f32 = 200.0;

/// Subtitle font size (in points).
const SUBTITLE_SIZE: f32 = 18.0;

/// Horizontal rule offset from the top edge (in points).
const RULE_OFFSET: f32 = 230.0;

/// First abstract baseline offset from the top edge (in points).
const ABSTRACT_OFFSET: f32 = 280.0;

/// Abstract font size (in points).
const ABSTRACT_SIZE: f32 = 12.0;

/// Vertical pitch between abstract lines (in points).
const ABSTRACT_LINE_PITCH: f32 = 18.0;

/// Footer baseline height above the bottom edge (in points).
const FOOTER_Y: f32 = 50.0;

/// Footer font size (in points).
const FOOTER_SIZE: f32 = 10.0;

/// Static footer attribution.
const FOOTER_TEXT: &str = "Generated with PDF Composer";

// =============================================================================
// Cover Page Data
// =============================================================================

/// Content for the synthesized cover page.
///
/// Produced by the suggestion service (or supplied manually) and consumed
/// once per merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverPageData {
    pub title: String,
    pub subtitle: String,
    // `abstract` is a reserved word in Rust; the wire name is kept via serde
    #[serde(rename = "abstract")]
    pub abstract_text: String,
}

// =============================================================================
// Rendering
// =============================================================================

/// Render a cover page as a standalone single-page A4 document.
///
/// The layout is deterministic given the same data: fixed offsets, fixed
/// sizes, greedy word wrap against the fixed text width.
pub fn render_cover_page(data: &CoverPageData) -> Result<Document> {
    let mut doc = Document::with_version("1.5");
    let page_tree_id = doc.new_object_id();

    let regular_id = doc.add_object(lopdf::Dictionary::from_iter([
        ("Type", Object::Name(b"Font".to_vec())),
        ("Subtype", Object::Name(b"Type1".to_vec())),
        (
            "BaseFont",
            Object::Name(FontMetrics::Helvetica.base_font().as_bytes().to_vec()),
        ),
    ]));
    let bold_id = doc.add_object(lopdf::Dictionary::from_iter([
        ("Type", Object::Name(b"Font".to_vec())),
        ("Subtype", Object::Name(b"Type1".to_vec())),
        (
            "BaseFont",
            Object::Name(FontMetrics::HelveticaBold.base_font().as_bytes().to_vec()),
        ),
    ]));

    let resources_id = doc.add_object(lopdf::Dictionary::from_iter([(
        "Font",
        Object::Dictionary(lopdf::Dictionary::from_iter([
            ("F1", Object::Reference(regular_id)),
            ("F2", Object::Reference(bold_id)),
        ])),
    )]));

    let content = Content {
        operations: cover_operations(data),
    };
    let content_bytes = content
        .encode()
        .map_err(|e| Error::Lopdf(format!("Failed to encode cover content: {e}")))?;
    let content_id = doc.add_object(Stream::new(lopdf::Dictionary::new(), content_bytes));

    let page_id = doc.add_object(lopdf::Dictionary::from_iter([
        ("Type", Object::Name(b"Page".to_vec())),
        ("Parent", Object::Reference(page_tree_id)),
        ("Contents", Object::Reference(content_id)),
        ("Resources", Object::Reference(resources_id)),
        (
            "MediaBox",
            Object::Array(vec![
                0.into(),
                0.into(),
                Object::Real(A4_WIDTH),
                Object::Real(A4_HEIGHT),
            ]),
        ),
    ]));

    let page_tree = lopdf::Dictionary::from_iter([
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(vec![Object::Reference(page_id)])),
        ("Count", Object::Integer(1)),
    ]);
    doc.objects.insert(page_tree_id, Object::Dictionary(page_tree));

    let catalog_id = doc.add_object(lopdf::Dictionary::from_iter([
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(page_tree_id)),
    ]));
    doc.trailer.set("Root", Object::Reference(catalog_id));

    Ok(doc)
}

/// Build the content stream operations for the cover layout.
fn cover_operations(data: &CoverPageData) -> Vec<Operation> {
    let text_width = A4_WIDTH - 2.0 * MARGIN_X;
    let mut ops = vec![Operation::new("q", vec![])];

    // Title: bold, near-black
    ops.extend(text_ops(
        &data.title,
        "F2",
        TITLE_SIZE,
        A4_HEIGHT - TITLE_OFFSET,
        (0.1, 0.1, 0.1),
    ));

    // Subtitle: regular, mid-grey
    ops.extend(text_ops(
        &data.subtitle,
        "F1",
        SUBTITLE_SIZE,
        A4_HEIGHT - SUBTITLE_OFFSET,
        (0.4, 0.4, 0.4),
    ));

    // Horizontal rule, dark-grey, full text width plus the right margin
    let rule_y = A4_HEIGHT - RULE_OFFSET;
    ops.push(Operation::new(
        "RG",
        vec![Object::Real(0.2), Object::Real(0.2), Object::Real(0.2)],
    ));
    ops.push(Operation::new("w", vec![Object::Real(1.0)]));
    ops.push(Operation::new(
        "m",
        vec![Object::Real(MARGIN_X), Object::Real(rule_y)],
    ));
    ops.push(Operation::new(
        "l",
        vec![Object::Real(A4_WIDTH - MARGIN_X), Object::Real(rule_y)],
    ));
    ops.push(Operation::new("S", vec![]));

    // Abstract: wrapped, medium-grey, fixed line pitch
    let metric = |s: &str, size: f32| FontMetrics::Helvetica.string_width(s, size);
    let lines = wrap_text(&data.abstract_text, text_width, metric, ABSTRACT_SIZE);
    for (i, line) in lines.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let y = A4_HEIGHT - ABSTRACT_OFFSET - (i as f32 * ABSTRACT_LINE_PITCH);
        ops.extend(text_ops(line, "F1", ABSTRACT_SIZE, y, (0.25, 0.25, 0.25)));
    }

    // Footer: light-grey attribution
    ops.extend(text_ops(
        FOOTER_TEXT,
        "F1",
        FOOTER_SIZE,
        FOOTER_Y,
        (0.6, 0.6, 0.6),
    ));

    ops.push(Operation::new("Q", vec![]));
    ops
}

/// Operations for one line of text at the left margin.
fn text_ops(text: &str, font: &str, size: f32, y: f32, color: (f32, f32, f32)) -> Vec<Operation> {
    vec![
        Operation::new("BT", vec![]),
        Operation::new(
            "rg",
            vec![
                Object::Real(color.0),
                Object::Real(color.1),
                Object::Real(color.2),
            ],
        ),
        Operation::new("Tf", vec![font.into(), Object::Real(size)]),
        Operation::new("Td", vec![Object::Real(MARGIN_X), Object::Real(y)]),
        Operation::new("Tj", vec![Object::string_literal(text)]),
        Operation::new("ET", vec![]),
    ]
}

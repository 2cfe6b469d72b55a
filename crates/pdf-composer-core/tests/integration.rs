//! Integration tests for pdf-composer-core
//!
//! These tests verify the end-to-end workflow:
//! - Smart-sort suggestion and reconciliation
//! - Cover page content generation with a mock backend
//! - Merging sources (with and without a cover page)
//! - Failure propagation from the suggestion service and the compositor

#![allow(clippy::unwrap_used, clippy::panic)]

use std::sync::Arc;

use async_trait::async_trait;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream};
use pdf_composer_core::{
    A4_WIDTH, AppConfig, ContentSuggester, CoverPageData, Error, FileRef, MergeRequest,
    PdfComposer, Result, SourceFile, normalize_output_name,
    suggest::SuggesterInfo,
};

// =============================================================================
// Mock Suggester for Testing
// =============================================================================

/// A mock suggestion backend that returns canned answers without network
/// calls, substituting for the remote service.
struct MockSuggester {
    /// Identifier order to return from `suggest_order`
    order: Vec<String>,
    /// Simulate failure if true
    should_fail: bool,
}

impl MockSuggester {
    fn with_order(order: &[&str]) -> Self {
        Self {
            order: order.iter().map(|s| (*s).to_string()).collect(),
            should_fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            order: Vec::new(),
            should_fail: true,
        }
    }
}

#[async_trait]
impl ContentSuggester for MockSuggester {
    fn info(&self) -> SuggesterInfo {
        SuggesterInfo {
            name: "mock",
            requires_endpoint: false,
        }
    }

    async fn suggest_order(&self, _files: &[FileRef]) -> Result<Vec<String>> {
        if self.should_fail {
            return Err(Error::RemoteStatus {
                status: 500,
                body: "mock failure".to_string(),
            });
        }
        Ok(self.order.clone())
    }

    async fn generate_cover(&self, description: &str) -> Result<CoverPageData> {
        if self.should_fail {
            return Err(Error::RemoteStatus {
                status: 500,
                body: "mock failure".to_string(),
            });
        }
        Ok(CoverPageData {
            title: "Generated Title".to_string(),
            subtitle: "Generated Subtitle".to_string(),
            abstract_text: format!("Summary of: {description}"),
        })
    }
}

// =============================================================================
// Test Fixtures
// =============================================================================

/// Build a minimal single-page PDF with the given MediaBox width.
fn test_pdf(width: i64) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let page_tree_id = doc.new_object_id();

    let font_id = doc.add_object(lopdf::Dictionary::from_iter([
        ("Type", Object::Name(b"Font".to_vec())),
        ("Subtype", Object::Name(b"Type1".to_vec())),
        ("BaseFont", Object::Name(b"Helvetica".to_vec())),
    ]));
    let resources_id = doc.add_object(lopdf::Dictionary::from_iter([(
        "Font",
        Object::Dictionary(lopdf::Dictionary::from_iter([(
            "F1",
            Object::Reference(font_id),
        )])),
    )]));

    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Td", vec![72.into(), 700.into()]),
            Operation::new("Tj", vec![Object::string_literal("fixture")]),
            Operation::new("ET", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(
        lopdf::Dictionary::new(),
        content.encode().unwrap(),
    ));

    let page_id = doc.add_object(lopdf::Dictionary::from_iter([
        ("Type", Object::Name(b"Page".to_vec())),
        ("Parent", Object::Reference(page_tree_id)),
        ("Contents", Object::Reference(content_id)),
        ("Resources", Object::Reference(resources_id)),
        (
            "MediaBox",
            Object::Array(vec![0.into(), 0.into(), width.into(), 792.into()]),
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

    let mut out = Vec::new();
    doc.save_to(&mut out).unwrap();
    out
}

fn source(id: &str, width: i64) -> SourceFile {
    SourceFile::new(id, format!("{id}.pdf"), test_pdf(width))
}

fn page_widths(bytes: &[u8]) -> Vec<f32> {
    let doc = Document::load_mem(bytes).unwrap();
    doc.get_pages()
        .into_values()
        .map(|page_id| {
            let Ok(Object::Dictionary(dict)) = doc.get_object(page_id) else {
                panic!("page is not a dictionary");
            };
            let Ok(Object::Array(media_box)) = dict.get(b"MediaBox") else {
                panic!("missing MediaBox");
            };
            match media_box[2] {
                #[allow(clippy::cast_precision_loss)]
                Object::Integer(i) => i as f32,
                Object::Real(r) => r,
                _ => panic!("unexpected MediaBox entry"),
            }
        })
        .collect()
}

fn composer(suggester: MockSuggester) -> PdfComposer {
    PdfComposer::with_suggester(Arc::new(suggester), AppConfig::default())
}

// =============================================================================
// Smart Sort Tests
// =============================================================================

#[tokio::test]
async fn test_smart_sort_applies_partial_order() {
    let composer = composer(MockSuggester::with_order(&["c", "a"]));
    let files = vec![
        source("a", 100),
        source("b", 110),
        source("c", 120),
        source("d", 130),
    ];

    let sorted = composer.smart_sort(files).await.unwrap();
    let ids: Vec<&str> = sorted.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "a", "b", "d"]);
}

#[tokio::test]
async fn test_smart_sort_empty_suggestion_keeps_order() {
    let composer = composer(MockSuggester::with_order(&[]));
    let files = vec![source("a", 100), source("b", 110)];

    let sorted = composer.smart_sort(files).await.unwrap();
    let ids: Vec<&str> = sorted.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[tokio::test]
async fn test_smart_sort_failure_propagates() {
    let composer = composer(MockSuggester::failing());
    let files = vec![source("a", 100)];

    let result = composer.smart_sort(files).await;
    assert!(matches!(result, Err(Error::RemoteStatus { status: 500, .. })));
}

// =============================================================================
// Cover Generation Tests
// =============================================================================

#[tokio::test]
async fn test_generate_cover_from_description() {
    let composer = composer(MockSuggester::with_order(&[]));

    let cover = composer
        .generate_cover("three invoices from March")
        .await
        .unwrap();
    assert_eq!(cover.title, "Generated Title");
    assert!(cover.abstract_text.contains("three invoices from March"));
}

#[tokio::test]
async fn test_generate_cover_failure_is_recoverable() {
    let composer = composer(MockSuggester::failing());

    let result = composer.generate_cover("anything").await;
    let err = result.unwrap_err();
    assert!(matches!(err, Error::RemoteStatus { .. }));
    // The user-facing message is the generic per-category one
    assert!(err.user_message().contains("AI service"));
}

// =============================================================================
// Merge Tests
// =============================================================================

#[tokio::test]
async fn test_sort_then_merge_end_to_end() {
    let composer = composer(MockSuggester::with_order(&["b", "a"]));
    let files = vec![source("a", 100), source("b", 110)];

    let sorted = composer.smart_sort(files).await.unwrap();
    let request = MergeRequest {
        ordered_files: sorted,
        output_name: "bundle".to_string(),
        cover: None,
    };

    let bytes = composer.merge(&request).unwrap();
    assert_eq!(page_widths(&bytes), vec![110.0, 100.0]);
    assert_eq!(normalize_output_name(&request.output_name), "bundle.pdf");
}

#[tokio::test]
async fn test_generated_cover_lands_on_page_one() {
    let composer = composer(MockSuggester::with_order(&[]));
    let cover = composer.generate_cover("a test bundle").await.unwrap();

    let request = MergeRequest {
        ordered_files: vec![source("a", 100), source("b", 110)],
        output_name: "covered".to_string(),
        cover: Some(cover),
    };

    let bytes = composer.merge(&request).unwrap();
    let widths = page_widths(&bytes);
    assert_eq!(widths.len(), 3);
    assert!((widths[0] - A4_WIDTH).abs() < 0.01);
    assert_eq!(&widths[1..], &[100.0, 110.0]);
}

#[tokio::test]
async fn test_merge_fail_fast_produces_no_bytes() {
    let composer = composer(MockSuggester::with_order(&[]));
    let request = MergeRequest {
        ordered_files: vec![
            source("a", 100),
            SourceFile::new("bad", "bad.pdf", b"garbage".to_vec()),
            source("c", 120),
        ],
        output_name: "broken".to_string(),
        cover: None,
    };

    let result = composer.merge(&request);
    match result {
        Err(e) => assert!(matches!(e, Error::PdfParse { .. })),
        Ok(bytes) => panic!("expected failure, got {} bytes", bytes.len()),
    }
}

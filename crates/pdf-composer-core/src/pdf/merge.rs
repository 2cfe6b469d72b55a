//! Multi-document PDF composition.
//!
//! The compositor owns a single output document per merge call: sources are
//! loaded and copied strictly in request order, an optional cover page is
//! rendered ahead of them, and the result is serialized once. A source that
//! fails to parse aborts the whole merge; no partial output is ever produced.

use std::collections::BTreeMap;

use lopdf::{Document, Object, ObjectId};
use tracing::{debug, info};

use crate::error::{Error, Result};
use super::cover::{CoverPageData, render_cover_page};

/// Base name used when the caller does not pick an output name.
pub const DEFAULT_OUTPUT_NAME: &str = "merged-document";

/// One user-supplied PDF, already resident in memory.
///
/// Immutable once created; the ordered collection the caller manipulates
/// owns it.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Opaque unique identifier
    pub id: String,
    /// Display name, used in diagnostics
    pub name: String,
    /// Raw PDF bytes
    pub bytes: Vec<u8>,
}

impl SourceFile {
    pub fn new(id: impl Into<String>, name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            bytes,
        }
    }

    /// Size of the raw content in bytes.
    pub fn byte_size(&self) -> usize {
        self.bytes.len()
    }
}

/// Everything one merge call needs. Sequence order of `ordered_files` is the
/// final page order.
#[derive(Debug, Clone)]
pub struct MergeRequest {
    pub ordered_files: Vec<SourceFile>,
    pub output_name: String,
    pub cover: Option<CoverPageData>,
}

/// Append `.pdf` to `name` unless it already ends with it (case-sensitive).
pub fn normalize_output_name(name: &str) -> String {
    if name.ends_with(".pdf") {
        name.to_string()
    } else {
        format!("{name}.pdf")
    }
}

/// Merge the request into a single PDF byte buffer.
///
/// Steps: render the cover page (if any), parse every source in order,
/// assemble one output document, serialize. Each failure aborts the merge
/// with no partial result.
pub fn merge(request: &MergeRequest) -> Result<Vec<u8>> {
    if request.cover.is_none() && request.ordered_files.is_empty() {
        return Err(Error::EmptyMerge);
    }

    let mut documents = Vec::with_capacity(request.ordered_files.len() + 1);

    if let Some(ref cover) = request.cover {
        debug!("Rendering cover page: {}", cover.title);
        documents.push(render_cover_page(cover)?);
    }

    for file in &request.ordered_files {
        let doc = Document::load_mem(&file.bytes).map_err(|e| Error::PdfParse {
            name: file.name.clone(),
            reason: e.to_string(),
        })?;
        debug!(
            "Loaded '{}' ({} bytes, {} pages)",
            file.name,
            file.byte_size(),
            doc.get_pages().len()
        );
        documents.push(doc);
    }

    let bytes = assemble(documents)?;
    info!(
        "Merged {} source file(s) into {} bytes",
        request.ordered_files.len(),
        bytes.len()
    );
    Ok(bytes)
}

/// Assemble loaded documents into one output document and serialize it.
///
/// Objects from every input are renumbered into a shared id space, page
/// objects are re-parented under a fresh Pages tree, and the Kids array is
/// built from an ordered walk so page order matches input order exactly,
/// including within multi-page sources.
fn assemble(documents: Vec<Document>) -> Result<Vec<u8>> {
    let mut max_id: u32 = 1;
    let mut page_order: Vec<ObjectId> = Vec::new();
    let mut page_objects: BTreeMap<ObjectId, Object> = BTreeMap::new();
    let mut objects: BTreeMap<ObjectId, Object> = BTreeMap::new();

    for mut doc in documents {
        doc.renumber_objects_with(max_id);
        max_id = doc.max_id + 1;

        // get_pages() is keyed by page number, so iteration preserves the
        // document's internal page order
        for page_id in doc.get_pages().into_values() {
            if let Ok(page_obj) = doc.get_object(page_id) {
                page_order.push(page_id);
                page_objects.insert(page_id, page_obj.clone());
            }
        }

        for (object_id, object) in doc.objects {
            match object.type_name().unwrap_or(b"") {
                b"Catalog" | b"Pages" | b"Page" | b"Outlines" | b"Outline" => {}
                _ => {
                    objects.insert(object_id, object);
                }
            }
        }
    }

    let mut document = Document::with_version("1.5");
    document.max_id = max_id;

    for (object_id, object) in objects {
        document.objects.insert(object_id, object);
    }

    let pages_id = document.new_object_id();

    for page_id in &page_order {
        if let Some(Object::Dictionary(dict)) = page_objects.get(page_id) {
            let mut new_dict = dict.clone();
            new_dict.set("Parent", Object::Reference(pages_id));
            document
                .objects
                .insert(*page_id, Object::Dictionary(new_dict));
        }
    }

    let kids: Vec<Object> = page_order
        .iter()
        .map(|&id| Object::Reference(id))
        .collect();

    #[allow(clippy::cast_possible_truncation)]
    let total_pages = page_order.len() as u32;

    let pages_dict = lopdf::Dictionary::from_iter([
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(i64::from(total_pages))),
    ]);
    document.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = document.new_object_id();
    let catalog_dict = lopdf::Dictionary::from_iter([
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]);
    document
        .objects
        .insert(catalog_id, Object::Dictionary(catalog_dict));

    document.trailer.set("Root", Object::Reference(catalog_id));

    #[allow(clippy::cast_possible_truncation)]
    let new_max_id = document.objects.len() as u32;
    document.max_id = new_max_id;

    document.renumber_objects();
    document.compress();

    let mut output = Vec::new();
    document
        .save_to(&mut output)
        .map_err(|e| Error::PdfSave(format!("Failed to save merged PDF: {e}")))?;

    Ok(output)
}

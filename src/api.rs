use crate::error::{Diagnostic, DiagnosticSink};
use crate::matcher::{apply_class_core, apply_function, apply_property};
use crate::record::ClassRecord;
use crate::segment::comment_bodies;

/// The result of extracting class documentation from one source file.
///
/// Carries the assembled record together with every diagnostic gathered
/// along the way, and provides serialization helpers so callers can hand
/// the record straight to a documentation renderer.
pub struct Extraction {
    pub record: ClassRecord,
    pub diagnostics: Vec<Diagnostic>,
}

impl Extraction {
    /// Serializes the record into a pretty-printed JSON string.
    ///
    /// # Errors
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.record)
    }

    /// Serializes the record into a YAML string.
    ///
    /// # Errors
    /// Returns a `serde_yaml::Error` if serialization fails.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self.record)
    }
}

/// Extracts the class documentation record from one file's contents.
///
/// This is the primary entry point. `filename` is used only to attribute
/// diagnostics; the core never touches the filesystem — locating and
/// reading sources is the caller's job.
///
/// Returns `None` when `@class` does not occur anywhere in `contents`
/// (absence is a defined outcome, not an error). Otherwise returns the
/// accumulated record plus any diagnostics; malformed sub-tags never fail
/// the extraction, they only surface as diagnostics or missing fields.
pub fn extract(contents: &str, filename: &str) -> Option<Extraction> {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let record = extract_with_sink(contents, filename, &mut diagnostics)?;
    Some(Extraction {
        record,
        diagnostics,
    })
}

/// Like [`extract`], but reports diagnostics through the injected sink as
/// they occur instead of collecting them. Sink writes are fire-and-forget;
/// a misbehaving sink cannot abort the extraction.
///
/// Dispatch is mutually exclusive per comment body, classified by the
/// first matching tag in priority order `@class`, `@prop`, `@function`.
/// Bodies carrying none of these tags are ignored.
pub fn extract_with_sink(
    contents: &str,
    filename: &str,
    sink: &mut dyn DiagnosticSink,
) -> Option<ClassRecord> {
    // Cheap short-circuit: no documentation intent, nothing to segment.
    if !contents.contains("@class") {
        log::debug!("{filename}: no @class tag, skipping");
        return None;
    }

    let mut record = ClassRecord::default();
    for body in comment_bodies(contents) {
        if body.contains("@class") {
            log::trace!("{filename}: matching class-core block");
            apply_class_core(&mut record, body, filename, sink);
        } else if body.contains("@prop") {
            log::trace!("{filename}: matching property block");
            apply_property(&mut record, body, filename);
        } else if body.contains("@function") {
            log::trace!("{filename}: matching function block");
            apply_function(&mut record, body, filename, sink);
        }
    }
    Some(record)
}

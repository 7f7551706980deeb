use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Diagnostic, DiagnosticKind, DiagnosticSink};
use crate::links::rewrite_links;
use crate::record::{ClassRecord, FunctionEntry, ParamEntry, PropertyEntry};
use crate::text::{normalize, strip_decoration};

/// ClassCore ::= "@class" Name .. "@extends" Name Description "@example" Example
///
/// One structural match for all four fragments: the tags are coupled by a
/// fixed order, so a single pattern is more robust against partial tag
/// soup than four independent searches.
static CLASS_CORE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)@class ([A-Za-z0-9_.]+).*@extends ([A-Za-z0-9_.]+)(.*)@example(.*)").unwrap()
});

/// Property ::= "@prop" "{" Type "}" Name "[" Default "]" Description
///
/// The default literal is confined to its own line; the description runs
/// to the end of the comment body.
static PROP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@prop \{([^}\n]*)\} (\S+) \[(.*)\]((?s:.*))").unwrap());

/// Function ::= "@function" Name Blob
static FUNCTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)@function (\S+)\s*(.*)").unwrap());

/// Param ::= "@param" "{" Type "}" Name Description
///
/// Anchored: tried at each literal `@param` occurrence in the blob, never
/// searched. The type token stays on its own line so an unclosed brace
/// cannot swallow a sibling param; the description stops at the next `*`
/// decoration boundary.
static PARAM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@param \{([^}\n]*)\} (\S+)\s*([^*]*)").unwrap());

/// The four raw fragments of a matched class-core block.
struct CoreMatch<'a> {
    name: &'a str,
    extends: &'a str,
    description: &'a str,
    example: &'a str,
}

fn match_class_core(body: &str) -> Option<CoreMatch<'_>> {
    let caps = CLASS_CORE_RE.captures(body)?;
    Some(CoreMatch {
        name: caps.get(1).map_or("", |m| m.as_str()),
        extends: caps.get(2).map_or("", |m| m.as_str()),
        description: caps.get(3).map_or("", |m| m.as_str()),
        example: caps.get(4).map_or("", |m| m.as_str()),
    })
}

/// The raw fragments of a matched `@prop` block.
struct PropMatch<'a> {
    ty: &'a str,
    name: &'a str,
    default: &'a str,
    description: &'a str,
}

fn match_property(body: &str) -> Option<PropMatch<'_>> {
    let caps = PROP_RE.captures(body)?;
    Some(PropMatch {
        ty: caps.get(1).map_or("", |m| m.as_str()),
        name: caps.get(2).map_or("", |m| m.as_str()),
        default: caps.get(3).map_or("", |m| m.as_str()),
        description: caps.get(4).map_or("", |m| m.as_str()),
    })
}

/// Populates the record's core fields from a body known to contain
/// `@class`. A body that does not carry all four fragments in order is
/// reported to the sink and leaves the record untouched; extraction of the
/// remaining comment blocks continues.
pub fn apply_class_core(
    record: &mut ClassRecord,
    body: &str,
    filename: &str,
    sink: &mut dyn DiagnosticSink,
) {
    match match_class_core(body) {
        Some(core) => {
            record.name = Some(normalize(core.name));
            record.extends = Some(normalize(core.extends));
            record.description = Some(rewrite_links(&normalize(core.description)));
            record.example = Some(normalize(core.example));
        }
        None => sink.report(Diagnostic::new(filename, DiagnosticKind::MissingCoreTags)),
    }
}

/// Appends one `PropertyEntry` from a body known to contain `@prop`.
/// A malformed property block is a recoverable omission, not a structural
/// failure of the class doc: it is skipped without a diagnostic.
pub fn apply_property(record: &mut ClassRecord, body: &str, filename: &str) {
    match match_property(body) {
        Some(prop) => record.properties.push(PropertyEntry {
            ty: normalize(prop.ty),
            name: normalize(prop.name),
            default: normalize(prop.default),
            description: rewrite_links(&normalize(prop.description)),
        }),
        None => log::trace!("{filename}: @prop block without structural match, skipped"),
    }
}

/// Appends one `FunctionEntry` from a body known to contain `@function`.
/// All `@param` fragments are excised from the blob first; whatever
/// remains is the function's own description.
pub fn apply_function(
    record: &mut ClassRecord,
    body: &str,
    filename: &str,
    sink: &mut dyn DiagnosticSink,
) {
    let Some(caps) = FUNCTION_RE.captures(body) else {
        log::trace!("{filename}: @function block without structural match, skipped");
        return;
    };
    let name = caps.get(1).map_or("", |m| m.as_str());
    let blob = caps.get(2).map_or("", |m| m.as_str());

    let (residual, params) = extract_params(blob, filename, sink);
    let description = rewrite_links(&normalize(&strip_decoration(&residual)));

    record.functions.push(FunctionEntry {
        name: normalize(name),
        description,
        params,
    });
}

/// Walks the blob left to right over every literal `@param` occurrence and
/// tries the anchored param pattern at each one. Matched fragments become
/// `ParamEntry`s and are excised from the residual text; an occurrence
/// that fails the structural match is reported with its raw line and
/// excised as well, so sibling params still extract. Visiting occurrences
/// by position keeps the scan deterministic regardless of any pattern
/// cursor state.
fn extract_params(
    blob: &str,
    filename: &str,
    sink: &mut dyn DiagnosticSink,
) -> (String, Vec<ParamEntry>) {
    let mut params = Vec::new();
    let mut residual = String::with_capacity(blob.len());
    let mut rest = blob;

    while let Some(at) = rest.find("@param") {
        residual.push_str(&rest[..at]);
        let tail = &rest[at..];
        match PARAM_RE.captures(tail) {
            Some(caps) => {
                params.push(ParamEntry {
                    ty: caps.get(1).map_or("", |m| m.as_str()).to_string(),
                    name: caps.get(2).map_or("", |m| m.as_str()).to_string(),
                    description: normalize(caps.get(3).map_or("", |m| m.as_str())),
                });
                let matched_end = caps.get(0).map_or(tail.len(), |m| m.end());
                rest = &tail[matched_end..];
            }
            None => {
                let line_end = tail.find('\n').unwrap_or(tail.len());
                sink.report(Diagnostic::new(
                    filename,
                    DiagnosticKind::MalformedParam {
                        raw: tail[..line_end].trim_end().to_string(),
                    },
                ));
                rest = &tail[line_end..];
            }
        }
    }

    residual.push_str(rest);
    (residual, params)
}

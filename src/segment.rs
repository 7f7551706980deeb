/// Comment-open and comment-close marker sequences.
const OPEN_MARKER: &str = "/**";
const CLOSE_MARKER: &str = "*/";

/// Splits raw source text into candidate documentation-comment bodies.
///
/// A candidate is the text between an `/**` opener and the nearest
/// following `*/`. Openers with no matching close marker contribute
/// nothing, so an unterminated comment never leaks trailing file content
/// into a candidate. Order is input order.
///
/// This stage is purely syntactic: it does not distinguish documentation
/// comments from any other block comment. Callers filter by tag presence.
pub fn comment_bodies(contents: &str) -> Vec<&str> {
    contents
        .split(OPEN_MARKER)
        .skip(1)
        .filter_map(|chunk| chunk.find(CLOSE_MARKER).map(|end| &chunk[..end]))
        .collect()
}

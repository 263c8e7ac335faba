/// Normalizes a raw comment for matching: plain Unicode lowercasing.
///
/// Accented characters are lowercased but never folded to their ASCII base
/// ("Opinión" becomes "opinión", not "opinion"), so rule patterns must spell
/// out accent variants explicitly where both forms occur in the wild.
pub fn normalize_comment(comment: &str) -> String {
    comment.to_lowercase()
}

/// Whitespace-delimited token count, used for the short-comment shortcut.
pub fn token_count(comment: &str) -> usize {
    comment.split_whitespace().count()
}

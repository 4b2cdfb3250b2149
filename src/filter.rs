use crate::model::JobListing;

/// Keyword-based relevance classifier. A listing passes when its title or
/// description contains at least one target keyword (case-sensitive
/// substring) and neither contains any exclude keyword. Listings without
/// a title or description never pass; there is nothing to classify.
pub fn is_relevant(
    listing: &JobListing,
    target_keywords: &[String],
    exclude_keywords: &[String],
) -> bool {
    if listing.title.is_empty() || listing.description.is_empty() {
        return false;
    }

    let mentioned = |keyword: &String| {
        listing.title.contains(keyword.as_str()) || listing.description.contains(keyword.as_str())
    };

    target_keywords.iter().any(mentioned) && !exclude_keywords.iter().any(mentioned)
}

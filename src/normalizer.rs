use crate::model::JobListing;

/// Collapses runs of whitespace (including line breaks) into single
/// spaces and trims both ends.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Applies `clean_text` to every field of a listing.
pub fn normalize(listing: JobListing) -> JobListing {
    JobListing {
        title: clean_text(&listing.title),
        location: clean_text(&listing.location),
        description: clean_text(&listing.description),
        requirements: clean_text(&listing.requirements),
    }
}

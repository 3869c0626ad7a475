//! Centralized filename conventions for the catalog.
//!
//! Raw uploads use terse names the product photographers settled on years
//! ago; generated files use descriptive names the storefront expects. Both
//! mappings live here so scan and process never hard-code a filename.
//!
//! | View | Raw input | Generated output |
//! |---|---|---|
//! | front | `f.jpg` | `front-large.jpg` |
//! | back | `b.jpg` | `back-large.jpg` |
//! | detail 1 | `1.jpg` | `detail-1-large.jpg` |
//! | detail 2 | `2.jpg` | `detail-2-large.jpg` |
//! | detail 3 | `3.jpg` | `detail-3-large.jpg` |
//! | thumbnail | — | `thumbs.jpg` |
//!
//! Input names are matched case-insensitively (`F.JPG` uploads happen);
//! outputs are always written lowercase. The presence of `thumbs.jpg` in a
//! directory marks it as already processed.

use crate::card::CardView;

/// Raw upload filename for a gallery view; `None` for the thumbnail, which
/// is never a raw input.
pub fn input_filename(view: CardView) -> Option<&'static str> {
    match view {
        CardView::Front => Some("f.jpg"),
        CardView::Back => Some("b.jpg"),
        CardView::Detail1 => Some("1.jpg"),
        CardView::Detail2 => Some("2.jpg"),
        CardView::Detail3 => Some("3.jpg"),
        CardView::Thumbs => None,
    }
}

/// Generated filename for a view.
pub fn output_filename(view: CardView) -> &'static str {
    match view {
        CardView::Front => "front-large.jpg",
        CardView::Back => "back-large.jpg",
        CardView::Detail1 => "detail-1-large.jpg",
        CardView::Detail2 => "detail-2-large.jpg",
        CardView::Detail3 => "detail-3-large.jpg",
        CardView::Thumbs => "thumbs.jpg",
    }
}

/// Case-insensitive filename comparison for catalog entries.
pub fn matches(file_name: &str, expected: &str) -> bool {
    file_name.eq_ignore_ascii_case(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_gallery_view_has_an_input_name() {
        let names: Vec<&str> = CardView::GALLERY
            .into_iter()
            .filter_map(input_filename)
            .collect();
        assert_eq!(names, ["f.jpg", "b.jpg", "1.jpg", "2.jpg", "3.jpg"]);
        assert_eq!(input_filename(CardView::Thumbs), None);
    }

    #[test]
    fn output_names_are_unique() {
        let mut names: Vec<&str> = CardView::ALL.into_iter().map(output_filename).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn thumbnail_output_is_the_sentinel_name() {
        assert_eq!(output_filename(CardView::Thumbs), "thumbs.jpg");
    }

    #[test]
    fn matching_ignores_case() {
        assert!(matches("F.JPG", "f.jpg"));
        assert!(matches("Thumbs.Jpg", "thumbs.jpg"));
        assert!(!matches("f.jpeg", "f.jpg"));
        assert!(!matches("front.jpg", "f.jpg"));
    }
}

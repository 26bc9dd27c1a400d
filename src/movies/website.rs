//! # Website Rendering
//!
//! Turns the catalog into a static HTML page using a deliberately small
//! template grammar:
//!
//! - The first `<li>` … `</li>` block is the per-movie fragment. It is
//!   repeated once per record, in store order, and the block is replaced by
//!   the concatenation.
//! - Inside the fragment, `__POSTER__`, `__TITLE__`, `__YEAR__` and
//!   `__RATING__` are substituted with the record's fields.
//! - `__TEMPLATE_TITLE__` anywhere in the page becomes the page title.
//!
//! Values are inserted verbatim; the template owns all markup.

use crate::error::{CatalogError, Result};
use crate::model::{format_rating, Movie};

pub const ITEM_START: &str = "<li>";
pub const ITEM_END: &str = "</li>";

const POSTER: &str = "__POSTER__";
const TITLE: &str = "__TITLE__";
const YEAR: &str = "__YEAR__";
const RATING: &str = "__RATING__";
const PAGE_TITLE: &str = "__TEMPLATE_TITLE__";

/// A template split around its single repeatable fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTemplate {
    head: String,
    item: String,
    tail: String,
}

impl PageTemplate {
    pub fn parse(source: &str) -> Result<Self> {
        let start = source.find(ITEM_START).ok_or_else(|| {
            CatalogError::Template(format!("missing list item start marker {}", ITEM_START))
        })?;
        let end = source[start..]
            .find(ITEM_END)
            .map(|offset| start + offset + ITEM_END.len())
            .ok_or_else(|| {
                CatalogError::Template(format!("missing list item end marker {}", ITEM_END))
            })?;

        Ok(Self {
            head: source[..start].to_string(),
            item: source[start..end].to_string(),
            tail: source[end..].to_string(),
        })
    }

    pub fn render_item(&self, movie: &Movie) -> String {
        self.item
            .replace(POSTER, &movie.poster)
            .replace(TITLE, &movie.title)
            .replace(YEAR, &movie.year.to_string())
            .replace(RATING, &format_rating(movie.rating))
    }

    pub fn render(&self, movies: &[Movie], page_title: &str) -> String {
        let items: String = movies.iter().map(|m| self.render_item(m)).collect();
        let mut page = String::with_capacity(self.head.len() + items.len() + self.tail.len());
        page.push_str(&self.head);
        page.push_str(&items);
        page.push_str(&self.tail);
        page.replace(PAGE_TITLE, page_title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "<html><title>__TEMPLATE_TITLE__</title><ol>\
<li><img src=\"__POSTER__\"/><b>__TITLE__</b> __YEAR__ (__RATING__)</li>\
</ol><h1>__TEMPLATE_TITLE__</h1></html>";

    #[test]
    fn renders_one_fragment_per_movie_in_order() {
        let template = PageTemplate::parse(TEMPLATE).unwrap();
        let movies = vec![
            Movie::new("Inception", 2010, 8.8).with_poster("i.jpg"),
            Movie::new("The Dark Knight", 2008, 9.0).with_poster("d.jpg"),
        ];

        let page = template.render(&movies, "My Movie App");
        assert_eq!(
            page,
            "<html><title>My Movie App</title><ol>\
<li><img src=\"i.jpg\"/><b>Inception</b> 2010 (8.8)</li>\
<li><img src=\"d.jpg\"/><b>The Dark Knight</b> 2008 (9.0)</li>\
</ol><h1>My Movie App</h1></html>"
        );
    }

    #[test]
    fn empty_catalog_removes_fragment() {
        let template = PageTemplate::parse(TEMPLATE).unwrap();
        let page = template.render(&[], "Empty");
        assert!(!page.contains("<li>"));
        assert!(page.contains("<ol></ol>"));
    }

    #[test]
    fn missing_markers_fail() {
        assert!(matches!(
            PageTemplate::parse("<ul></ul>"),
            Err(CatalogError::Template(_))
        ));
        assert!(matches!(
            PageTemplate::parse("<ul><li>__TITLE__</ul>"),
            Err(CatalogError::Template(_))
        ));
    }

    #[test]
    fn end_marker_before_start_is_ignored() {
        let template = PageTemplate::parse("</li><li>__TITLE__</li>").unwrap();
        let page = template.render(&[Movie::new("Alien", 1979, 8.5)], "t");
        assert_eq!(page, "</li><li>Alien</li>");
    }
}

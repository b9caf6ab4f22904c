//! Approximate page segmentation.
//!
//! Extracted plain text does not preserve the original PDF page breaks, so
//! pages are approximated by dividing the total line count evenly by the
//! parser-reported page count. Callers must treat the result as a heuristic
//! slice, not a faithful reconstruction of the printed page.

use crate::error::Error;

/// Which slice of the document a caller asked for. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSelector {
    Single(u32),
    Range { start: u32, end: u32 },
}

impl PageSelector {
    /// Build a selector from the tool's optional arguments.
    ///
    /// `page` wins when present; otherwise a complete `startPage`/`endPage`
    /// pair is required. An incomplete pair is a missing argument, not a
    /// partial range.
    pub fn from_args(page: Option<u32>, start_page: Option<u32>, end_page: Option<u32>) -> Result<Self, Error> {
        match (page, start_page, end_page) {
            (Some(page), _, _) => Ok(Self::Single(page)),
            (None, Some(start), Some(end)) => Ok(Self::Range { start, end }),
            _ => Err(Error::MissingArgument(
                "provide either page, or both startPage and endPage".to_string(),
            )),
        }
    }
}

/// Lines per approximate page: `ceil(totalLines / pageCount)`.
///
/// Fails when the parser reported zero pages, since the division is
/// undefined.
pub fn lines_per_page(total_lines: usize, page_count: u32) -> Result<usize, Error> {
    if page_count == 0 {
        return Err(Error::InvalidMetadata("document reports zero pages".to_string()));
    }
    let page_count = page_count as usize;
    Ok(total_lines.div_ceil(page_count))
}

/// Slice the document text by the selector.
///
/// Out-of-range pages and reversed ranges yield an empty string, never an
/// error; indices are clamped to the available lines.
pub fn slice_pages(full_text: &str, page_count: u32, selector: PageSelector) -> Result<String, Error> {
    let lines: Vec<&str> = full_text.split('\n').collect();
    let per_page = lines_per_page(lines.len(), page_count)?;

    let (start_page, end_page) = match selector {
        PageSelector::Single(page) => (page, page),
        PageSelector::Range { start, end } => (start, end),
    };

    if start_page == 0 || end_page == 0 {
        return Ok(String::new());
    }

    let start = (start_page as usize - 1).saturating_mul(per_page).min(lines.len());
    let end = (end_page as usize).saturating_mul(per_page).min(lines.len());
    if start >= end {
        return Ok(String::new());
    }

    Ok(lines[start..end].join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 50 numbered lines: "line 1" through "line 50".
    fn fifty_lines() -> String {
        (1..=50).map(|n| format!("line {n}")).collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn test_lines_per_page_ceiling() {
        assert_eq!(lines_per_page(50, 5).unwrap(), 10);
        assert_eq!(lines_per_page(51, 5).unwrap(), 11);
        assert_eq!(lines_per_page(0, 5).unwrap(), 0);
    }

    #[test]
    fn test_zero_pages_is_invalid_metadata() {
        let result = lines_per_page(50, 0);
        assert!(matches!(result, Err(Error::InvalidMetadata(_))));
    }

    #[test]
    fn test_single_page_slice() {
        let text = fifty_lines();
        let page = slice_pages(&text, 5, PageSelector::Single(2)).unwrap();

        let lines: Vec<&str> = page.split('\n').collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines.first(), Some(&"line 11"));
        assert_eq!(lines.last(), Some(&"line 20"));
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let text = fifty_lines();
        assert_eq!(slice_pages(&text, 5, PageSelector::Single(999)).unwrap(), "");
        assert_eq!(slice_pages(&text, 5, PageSelector::Single(0)).unwrap(), "");
    }

    #[test]
    fn test_range_slice() {
        let text = fifty_lines();
        let pages = slice_pages(&text, 5, PageSelector::Range { start: 2, end: 3 }).unwrap();

        let lines: Vec<&str> = pages.split('\n').collect();
        assert_eq!(lines.len(), 20);
        assert_eq!(lines.first(), Some(&"line 11"));
        assert_eq!(lines.last(), Some(&"line 30"));
    }

    #[test]
    fn test_reversed_range_is_empty() {
        let text = fifty_lines();
        let pages = slice_pages(&text, 5, PageSelector::Range { start: 5, end: 2 }).unwrap();
        assert_eq!(pages, "");
    }

    #[test]
    fn test_range_clamps_past_document_end() {
        let text = fifty_lines();
        let pages = slice_pages(&text, 5, PageSelector::Range { start: 4, end: 99 }).unwrap();

        let lines: Vec<&str> = pages.split('\n').collect();
        assert_eq!(lines.first(), Some(&"line 31"));
        assert_eq!(lines.last(), Some(&"line 50"));
    }

    #[test]
    fn test_uneven_final_page_is_partial() {
        // 7 lines over 3 pages: ceil(7/3) = 3 lines per page, page 3 holds one.
        let text = "a\nb\nc\nd\ne\nf\ng";
        let page = slice_pages(text, 3, PageSelector::Single(3)).unwrap();
        assert_eq!(page, "g");
    }

    #[test]
    fn test_selector_from_args_page_wins() {
        let selector = PageSelector::from_args(Some(2), Some(1), Some(5)).unwrap();
        assert_eq!(selector, PageSelector::Single(2));
    }

    #[test]
    fn test_selector_from_args_range() {
        let selector = PageSelector::from_args(None, Some(1), Some(5)).unwrap();
        assert_eq!(selector, PageSelector::Range { start: 1, end: 5 });
    }

    #[test]
    fn test_selector_from_args_incomplete() {
        assert!(matches!(
            PageSelector::from_args(None, Some(1), None),
            Err(Error::MissingArgument(_))
        ));
        assert!(matches!(
            PageSelector::from_args(None, None, None),
            Err(Error::MissingArgument(_))
        ));
    }
}

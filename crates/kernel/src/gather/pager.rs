//! Page slicing for listings.

use super::types::Page;

/// Slice `items` into the 1-based `page` of `per_page` entries.
///
/// Page 0 is treated as page 1 and pages past the end clamp to the last
/// page. `per_page == 0` yields an empty page with no page count.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let total = items.len();
    if per_page == 0 {
        return Page {
            items: Vec::new(),
            page: 1,
            per_page,
            total,
            total_pages: 0,
        };
    }

    let total_pages = total.div_ceil(per_page);
    let page = page.clamp(1, total_pages.max(1));
    let start = (page - 1) * per_page;
    let end = (start + per_page).min(total);

    Page {
        items: items.get(start..end).map(<[T]>::to_vec).unwrap_or_default(),
        page,
        per_page,
        total,
        total_pages,
    }
}

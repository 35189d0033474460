//! Pagination traversal
//!
//! Pages are requested strictly in order. Each request's offset is the
//! starting offset plus the number of items already collected, so short
//! pages never cause gaps or overlaps.

use searchads_domain::Selector;
use tracing::debug;

use super::ports::PageSource;

/// Fetch every page matching `selector` and concatenate the items.
///
/// Traversal stops when
/// - a page comes back empty,
/// - the starting offset plus the collected count reaches the reported
///   `totalResults` (the total is measured from offset 0), or
/// - no pagination metadata is reported and the page is shorter than the
///   requested limit.
///
/// Items are returned in server order without deduplication.
///
/// # Errors
/// The first page error aborts the traversal and is returned unchanged.
pub async fn collect_all_pages<T, S>(source: &S, selector: &Selector) -> Result<Vec<T>, S::Error>
where
    T: Send,
    S: PageSource<T> + ?Sized,
{
    let start = selector.pagination.offset;
    let limit = selector.pagination.limit;
    let mut request = selector.clone();
    let mut collected: Vec<T> = Vec::new();

    loop {
        let collected_count = u32::try_from(collected.len()).unwrap_or(u32::MAX);
        request.pagination.offset = start.saturating_add(collected_count);

        let page = source.fetch_page(&request).await?;
        let page_len = page.items.len();
        collected.extend(page.items);

        debug!(
            offset = request.pagination.offset,
            page_len,
            collected = collected.len(),
            total = page.page_info.map(|info| info.total_results),
            "fetched page"
        );

        if page_len == 0 {
            break;
        }

        let reached = start.saturating_add(u32::try_from(collected.len()).unwrap_or(u32::MAX));
        match page.page_info {
            Some(info) if reached >= info.total_results => break,
            Some(_) => {}
            None if page_len < limit as usize => break,
            None => {}
        }
    }

    Ok(collected)
}

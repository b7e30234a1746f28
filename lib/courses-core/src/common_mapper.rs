use crate::model::common::{GetListResponse, Paging};
use crate::model::list_query::ListPagination;

pub(crate) fn calculate_pages_count(total_items_count: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }

    (total_items_count / page_size) + std::cmp::min(total_items_count % page_size, 1)
}

/// Pages below 1 and pages past the last one resolve to the first page.
pub(crate) fn resolve_page_number(requested_page: i64, page_count: u64) -> u64 {
    match u64::try_from(requested_page) {
        Ok(page) if page >= 1 && page <= page_count => page,
        _ => 1,
    }
}

/// Cuts one page out of `items`, keeping their order.
pub(crate) fn paginate<T>(items: Vec<T>, pagination: ListPagination) -> GetListResponse<T> {
    let page_size = pagination.page_size;
    let total_number_of_items = items.len() as u64;
    let page_count = calculate_pages_count(total_number_of_items, page_size);
    let page_number = resolve_page_number(pagination.page, page_count);

    let offset = usize::try_from((page_number - 1).saturating_mul(page_size)).unwrap_or(usize::MAX);
    let limit = usize::try_from(page_size).unwrap_or(usize::MAX);

    GetListResponse {
        items: items.into_iter().skip(offset).take(limit).collect(),
        paging: Paging {
            page_count,
            page_size,
            page_number,
            total_number_of_items,
        },
    }
}

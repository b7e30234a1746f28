/// Requested page of a list, as received from the caller.
///
/// `page` is 1-based and not yet checked against the available pages, see
/// [`crate::common_mapper::paginate`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ListPagination {
    pub page: i64,
    pub page_size: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GetListResponse<ResponseItem> {
    pub items: Vec<ResponseItem>,
    pub paging: Paging,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Paging {
    pub page_count: u64,
    pub page_size: u64,
    pub page_number: u64,
    pub total_number_of_items: u64,
}

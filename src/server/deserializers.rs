pub const FIRST_PAGE: i64 = 1;

// Only the first `page` pair counts. `?page=abc` or `?page=` fall back to the first page
// instead of rejecting the request.
pub fn page_param(pairs: &[(String, String)]) -> i64 {
    pairs
        .iter()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.trim().parse::<i64>().ok())
        .unwrap_or(FIRST_PAGE)
}

#[derive(Debug, Default)]
pub struct FetchArgs {
    /// Date (in UTC) of the earliest records to be fetched (YYYY-MM-DD).
    /// Defaults to yesterday.
    pub start: Option<String>,
    /// Date (in UTC) of the most recent records to be fetched (YYYY-MM-DD).
    /// Defaults to today.
    pub end: Option<String>,
}

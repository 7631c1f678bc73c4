/// Products are keyed by the backend's short string code.
pub type ProductId = String;

/// All timestamps are UTC. Calendar dates are stored as UTC midnight.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

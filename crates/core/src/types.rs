/// Chapter and character primary keys are server-assigned integers.
pub type DbId = i64;

/// Project identifiers are opaque strings minted by the server
/// (UUIDs in the current backend). The client never generates one.
pub type ProjectId = String;

//! Connections between places

/// A documented relationship from one place to another
///
/// The target is identified only by the key under which the connection is
/// stored on its [`Place`](crate::Place). The fields here are cached display
/// metadata copied from the source record; nothing guarantees that the target
/// place is part of the same corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Connection {
    /// Kind of relationship, e.g. `"part_of_physical"` or `"succeeds"`
    pub connection_type: Option<String>,

    /// Title of the target place as recorded on the connection
    pub title: Option<String>,

    /// Start of the connection (decimal CE year)
    pub start: Option<i64>,

    /// End of the connection (decimal CE year)
    pub end: Option<i64>,
}

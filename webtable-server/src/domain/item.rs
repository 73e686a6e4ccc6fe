/// A name/value record. Immutable once created; the application never
/// updates or deletes items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Item {
    pub(crate) id: i64,
    pub(crate) name: String,
    pub(crate) value: String,
}

#[derive(Debug, Clone)]
pub(crate) struct NewItem {
    pub(crate) name: String,
    pub(crate) value: String,
}

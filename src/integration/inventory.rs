//! Read seam to the external inventory store.

/// Read-only view of the shelf inventory maintained by the external scan
/// pipeline.
///
/// The guidance crate never writes inventory or runs scans; the command
/// layer only reads counts through this trait to answer the `list` and
/// `alert` verbs.
pub trait InventoryStore {
    /// Current item counts, unordered. A count of zero means the item is
    /// known but out of stock.
    fn snapshot(&self) -> Vec<(String, u32)>;
}

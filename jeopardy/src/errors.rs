/// The error type for [`select_ids()`](crate::select_ids).
#[derive(Debug, PartialEq, Eq)]
pub struct InsufficientPool {
    pub requested: usize,
    pub available: usize,
}

impl std::error::Error for InsufficientPool {}

impl std::fmt::Display for InsufficientPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.available == 0 {
            write!(f, "Cannot pick {} categories from an empty pool", self.requested)
        } else {
            write!(
                f,
                "Cannot pick {} categories from a pool of only {}",
                self.requested, self.available
            )
        }
    }
}

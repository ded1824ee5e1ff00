/// Control actions an observer can return to a refiner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the refinement and return the best estimate found so far.
    ///
    /// During a scan this stops only the bracket being refined; the scan
    /// moves on to the next bracket.
    StopEarly,
}

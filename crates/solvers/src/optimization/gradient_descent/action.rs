/// Actions an observer can take during gradient descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current epoch and return the parameters reached so far.
    StopEarly,
}

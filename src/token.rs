/// A token representing an element linked into a `Queue`. It is
/// returned by every insert and can be used to look the element up or
/// unlink it from the middle of the queue. It carries a generation
/// number, so once its element has been removed the token stays
/// invalid even if another element comes to inhabit the same slot.
///
/// Tokens do not borrow the queue that created them. Using a `Token`
/// with a queue other than the one that created it is allowed by the
/// type system but will likely produce unexpected results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub(crate) ix: usize,
    pub(crate) generation: usize,
}

/// A sentence tagged with its position in the split sequence.
///
/// Identity is the position, not the text: two textually identical sentences
/// stay distinct through scoring and re-ordering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedSentence {
    pub index: usize,
    pub text: String,
}

impl IndexedSentence {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

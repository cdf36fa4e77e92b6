/// Errors that can occur when operating on the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceListError {
    EmptyCollection,

    IndexOutOfRange,
}
impl core::fmt::Display for SequenceListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.clone() {
            SequenceListError::EmptyCollection => f.write_str("list is empty"),
            SequenceListError::IndexOutOfRange => f.write_str("index is out of range"),
        }
    }
}
impl std::error::Error for SequenceListError {}

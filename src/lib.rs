mod errors;
mod node;
mod sequence_list;

pub use errors::SequenceListError;
pub use sequence_list::SequenceList;

pub mod group;
pub mod grouper;
pub mod reader;
pub mod splitter;

pub use group::SentenceGroup;
pub use grouper::{group, Grouper, GrouperConfig, DEFAULT_GROUP_SIZE};
pub use reader::InputReader;
pub use splitter::{is_blank, split_sentences};

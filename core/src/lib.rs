pub mod config;
pub mod differ;
pub mod encoding;
pub mod error;
pub mod parser;
mod persist;
pub mod session;
pub mod summary;
pub mod writer;


pub use config::{CheckerConfig, ReportOptions};
pub use differ::{classify, CheckItem, Classification, SectionView};
pub use encoding::Encoding;
pub use error::CheckerError;
pub use parser::{
    parse_key_file, parse_key_text, parse_value_file, parse_value_text, KeyMap, Line, ParsedFile,
    Section, ValueMap,
};
pub use session::{CheckSession, SaveOutcome};
pub use summary::{AttentionReason, CheckSummary};
pub use writer::{render_translation, write_translation, SaveOptions};

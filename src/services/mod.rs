pub mod key_loader;
pub mod matcher;
pub mod question_extractor;
pub mod reporter;

pub use key_loader::KeyLoader;
pub use matcher::Matcher;
pub use question_extractor::QuestionExtractor;
pub use reporter::Reporter;

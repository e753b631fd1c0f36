pub mod loader;
pub mod pinyin;

pub use loader::CedictLoader;
pub use pinyin::format_pinyin;

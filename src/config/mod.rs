mod reader;

pub use reader::{DECLARATION_KEYWORD, DEFAULT_CHECK_FILE, load_checks, parse_checks, read_checks};

pub mod reader;

pub use reader::{read_text_file, TextContent, TextEncoding};

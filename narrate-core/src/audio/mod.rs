pub mod save;

pub use save::{default_output_path, save_audio};

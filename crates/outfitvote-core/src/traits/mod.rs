mod clipboard;

pub use clipboard::Clipboard;

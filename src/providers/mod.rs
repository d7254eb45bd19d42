pub mod content;
pub mod cosmic;
pub mod json;
pub mod mem_content;

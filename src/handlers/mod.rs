pub mod responses;

pub use responses::{clear_handler, download_handler, index_handler, submit_handler};

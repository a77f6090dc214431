mod crlf_lines;

pub use crlf_lines::*;

pub mod parser;

pub use parser::assemble_boundary;

// Pynames - tree-sitter powered inventory of Python symbol names
//
// Parses a single Python source file and reports every function name and
// bare-identifier assignment target found anywhere in the tree, as a JSON
// array of strings. Static analysis only; the code is never executed.

pub mod cli;
pub mod error;
pub mod extractor;
pub mod language;

pub use error::ExtractError;
pub use extractor::extract_names;

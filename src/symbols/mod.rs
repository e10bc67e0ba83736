//! Identifier classification.
//!
//! - [`table`]: the insertion-ordered symbol table the scanner fills online
//! - [`refine`]: the offline pass that corrects roles once the whole token
//!   list is available

pub mod refine;
pub mod table;

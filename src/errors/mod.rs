//! Error types and error handling for the calculator.
//!
//! This module defines the errors raised while lexing and parsing a line:
//!
//! - Error structures with source position information
//! - Specific error variants for lexing and parsing
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;

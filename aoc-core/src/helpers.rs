/*
 * Helpers extracted from more than one year's solutions.
 * Example import: `use aoc_core::helpers::parse;`.
 */

pub mod grid;
pub mod paragraphs;
pub mod parse;

pub use paragraphs::paragraphs;

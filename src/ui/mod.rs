//! Console rendering.
//!
//! Formats ranking and search output as fixed-width text. Everything here
//! returns strings; writing them to the terminal is left to [`crate::app`].

mod table;

pub use table::{render_matches, render_ranking, render_word_error};

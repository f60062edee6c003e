//! sysman: a terminal browser for structured system manuals.
//!
//! A manual is a JSON document of categories, each holding entries with a description,
//! key/value content, command examples, expandable details, and notes. sysman loads manuals
//! from library directories named in `.sysman.toml`, ranks entries against free-text queries
//! with typo-tolerant scoring, and edits manuals in place (duplicating and adding categories
//! and entries without identifier collisions).

#![warn(missing_docs)]

pub mod cli;

//! Blogmark Core
//!
//! This crate provides the document model, traits, and error definitions
//! shared by every blogmark crate.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`BlockNode`] - One pre-parsed structural unit of a document
//! - [`InlineToken`], [`InlineMatch`] - Results of scanning a single line
//! - [`DataAccess`] - Read interface over a store of documents
//! - [`Feature`], [`ListType`] - Small closed enums
//! - [`BlogmarkError`] - Error types
//! - [`Span`] - Byte ranges within a line

pub mod access;
pub mod block;
pub mod enums;
pub mod error;
pub mod inline;
pub mod types;

pub use access::DataAccess;
pub use block::{BlockNode, KNOWN_BLOCK_KINDS};
pub use enums::{Feature, ListType};
pub use error::{BlogmarkError, Result};
pub use inline::{InlineMatch, InlineToken};
pub use types::Span;

#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    rustdoc::missing_crate_level_docs,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::bare_urls
)]
#![doc = include_str!("../README.md")]
//! # A Note on Offsets
//!
//! All offsets handled by this crate are **byte** offsets into the searched
//! text, exactly as reported by the [`regex`] crate. Every span produced by a
//! search therefore falls on `char` boundaries. The only offsets you can get
//! wrong are the ones you pass in yourself: [`Research::with_bounds`] panics
//! on offsets that are out of range or inside a multi-byte character, the
//! same way string slicing does.

mod error;
mod group;
mod macros;
mod research;

pub use error::*;
pub use group::*;
pub use research::*;

#[doc(hidden)]
pub use lazy_static;
#[doc(hidden)]
pub use regex;

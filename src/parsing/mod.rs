//! Export parsing.
//!
//! - [`twitter`] - raw Twitter export records and the single-pass classifier

pub mod twitter;

pub use twitter::{
    ExportRecord, RawFavorite, RawPost, RawReshareTarget, RawUser, parse_export, split_records,
};

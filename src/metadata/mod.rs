//! EXIF metadata extraction and normalization.
//!
//! This module provides the two halves of the metadata stage:
//!
//! - [`read_tag_set`] — decode the raw EXIF tags out of an encoded image
//! - [`PhotoMetadata::from_tags`] — map the tag set to the fixed caption
//!   fields, substituting a documented fallback for every absent tag
//!
//! Tag absence is never an error: an image without EXIF data yields an empty
//! [`ExifTagSet`] and a caption made entirely of fallbacks. Only a byte
//! stream that is not a recognizable image container fails.

mod normalize;
mod reader;

pub use normalize::PhotoMetadata;
pub use reader::{ExifTagSet, read_tag_set};

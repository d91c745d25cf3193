use std::collections::BTreeMap;
use std::io::Cursor;

use exif::{In, Reader, Value};

use crate::error::OverlayError;

/// The raw EXIF tags of an image: tag name → value, in source form.
///
/// Values keep the shape the file stores them in: rationals as
/// `"num/denom"`, integers as decimal strings, ASCII tags trimmed of NUL
/// padding. Read-only once produced; tags the caption does not use are kept
/// anyway so `--show-exif` can display them.
#[derive(Debug, Clone, Default)]
pub struct ExifTagSet(BTreeMap<String, String>);

impl ExifTagSet {
    /// Look up a tag by its EXIF name, e.g. `"Model"` or `"FNumber"`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Insert a raw tag value, keeping the first value seen for a name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.entry(name.into()).or_insert_with(|| value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate tags in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Decode the EXIF tag set embedded in `bytes`.
///
/// Fails with [`OverlayError::Decode`] only when the byte stream is not a
/// recognizable image container. A valid image that simply carries no EXIF
/// segment yields an empty tag set.
pub fn read_tag_set(bytes: &[u8]) -> Result<ExifTagSet, OverlayError> {
    let mut cursor = Cursor::new(bytes);
    let parsed = match Reader::new().read_from_container(&mut cursor) {
        Ok(parsed) => parsed,
        Err(exif::Error::NotFound(_)) | Err(exif::Error::BlankValue(_)) => {
            log::debug!("No EXIF data found in image");
            return Ok(ExifTagSet::default());
        }
        Err(e) => return Err(OverlayError::Decode(e.to_string())),
    };

    let mut tags = ExifTagSet::default();
    for field in parsed.fields() {
        // The thumbnail IFD repeats tag names; only the primary image counts.
        if field.ifd_num != In::PRIMARY {
            continue;
        }
        if let Some(value) = raw_value_string(&field.value) {
            tags.insert(field.tag.to_string(), value);
        }
    }

    log::debug!("Extracted {} EXIF tags", tags.len());
    Ok(tags)
}

/// Render a tag value in its raw EXIF form.
///
/// Rationals stay `"num/denom"` so the normalizer decides how to present
/// them. Values with no sensible text form (undefined blobs, empty arrays)
/// are dropped.
fn raw_value_string(value: &Value) -> Option<String> {
    match value {
        Value::Ascii(lines) => {
            let s = String::from_utf8_lossy(lines.first()?);
            let s = s.trim_matches(|c: char| c == '\0' || c.is_whitespace());
            if s.is_empty() { None } else { Some(s.to_string()) }
        }
        Value::Rational(v) => v.first().map(|r| format!("{}/{}", r.num, r.denom)),
        Value::SRational(v) => v.first().map(|r| format!("{}/{}", r.num, r.denom)),
        Value::Byte(v) => v.first().map(u8::to_string),
        Value::Short(v) => v.first().map(u16::to_string),
        Value::Long(v) => v.first().map(u32::to_string),
        Value::SByte(v) => v.first().map(i8::to_string),
        Value::SShort(v) => v.first().map(i16::to_string),
        Value::SLong(v) => v.first().map(i32::to_string),
        Value::Float(v) => v.first().map(f32::to_string),
        Value::Double(v) => v.first().map(f64::to_string),
        _ => None,
    }
}

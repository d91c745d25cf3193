use super::ExifTagSet;
use crate::error::OverlayError;

/// The normalized caption fields.
///
/// Always fully populated before rendering begins: every field falls back to
/// a fixed literal when its source tag is absent, so the renderer never sees
/// a missing value.
///
/// # Example
///
/// ```rust
/// use exif_overlay::metadata::{ExifTagSet, PhotoMetadata};
///
/// let mut tags = ExifTagSet::default();
/// tags.insert("Make", "Canon");
/// tags.insert("Model", "EOS 40D");
/// tags.insert("FNumber", "8/1");
///
/// let meta = PhotoMetadata::from_tags(&tags).unwrap();
/// assert_eq!(meta.camera, "Canon EOS 40D");
/// assert_eq!(meta.aperture, "f/8.0");
/// assert_eq!(meta.lens, "Unknown Lens");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoMetadata {
    /// `"{Make} {Model}"`, model alone, or `"Unknown Camera"`.
    pub camera: String,
    /// `LensModel` or `"Unknown Lens"`.
    pub lens: String,
    /// `"f/N.N"` (from a rational), `"f/N"` (plain), or `"f/?"`.
    pub aperture: String,
    /// `"Ns"` or `"?s"`.
    pub shutter: String,
    /// `"ISO N"` or `"ISO ?"`.
    pub iso: String,
    /// `"YYYY-MM-DD HH:MM:SS"` or `"Unknown Date"`.
    pub datetime: String,
}

impl PhotoMetadata {
    /// Map a raw tag set to the caption fields.
    ///
    /// Absent tags take their fallbacks; the only failure is a
    /// `DateTimeOriginal` value that does not split into a date and a time.
    pub fn from_tags(tags: &ExifTagSet) -> Result<Self, OverlayError> {
        Ok(Self {
            camera: camera(tags.get("Make"), tags.get("Model")),
            lens: lens(tags.get("LensModel")),
            aperture: aperture(tags.get("FNumber")),
            shutter: shutter(tags.get("ExposureTime")),
            iso: iso(tags.get("PhotographicSensitivity")),
            datetime: datetime(tags.get("DateTimeOriginal"))?,
        })
    }

    /// The exposure summary line: aperture, shutter and ISO joined by spaces.
    pub fn exposure_line(&self) -> String {
        format!("{} {} {}", self.aperture, self.shutter, self.iso)
    }
}

/// `"{make} {model}"` trimmed when both are present, model alone otherwise.
/// A make without a model is not enough to name the camera.
fn camera(make: Option<&str>, model: Option<&str>) -> String {
    match (make, model) {
        (Some(make), Some(model)) => format!("{make} {model}").trim().to_string(),
        (None, Some(model)) => model.to_string(),
        _ => "Unknown Camera".to_string(),
    }
}

fn lens(lens_model: Option<&str>) -> String {
    match lens_model {
        Some(lens) => lens.to_string(),
        None => "Unknown Lens".to_string(),
    }
}

/// F-numbers are usually stored as a rational; `"8/1"` becomes `"f/8.0"`.
/// A plain value passes through as-is, and a fraction that does not evaluate
/// (unparsable parts, zero denominator) carries no more information than an
/// absent tag.
fn aperture(f_number: Option<&str>) -> String {
    let Some(raw) = f_number else {
        return "f/?".to_string();
    };
    match raw.split_once('/') {
        Some((num, denom)) => match (num.trim().parse::<f64>(), denom.trim().parse::<f64>()) {
            (Ok(num), Ok(denom)) if denom != 0.0 => format!("f/{:.1}", num / denom),
            _ => "f/?".to_string(),
        },
        None => format!("f/{raw}"),
    }
}

fn shutter(exposure_time: Option<&str>) -> String {
    match exposure_time {
        Some(raw) => format!("{raw}s"),
        None => "?s".to_string(),
    }
}

fn iso(sensitivity: Option<&str>) -> String {
    match sensitivity {
        Some(raw) => format!("ISO {raw}"),
        None => "ISO ?".to_string(),
    }
}

/// Reformat `"YYYY:MM:DD HH:MM:SS"` to `"YYYY-MM-DD HH:MM:SS"`: the colons
/// in the date portion become hyphens, the time portion is untouched.
fn datetime(date_time_original: Option<&str>) -> Result<String, OverlayError> {
    let Some(raw) = date_time_original else {
        return Ok("Unknown Date".to_string());
    };

    let mut parts = raw.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(date), Some(time), None) if !date.is_empty() && !time.is_empty() => {
            Ok(format!("{} {time}", date.replace(':', "-")))
        }
        _ => Err(OverlayError::Format {
            value: raw.to_string(),
        }),
    }
}

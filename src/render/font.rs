use std::path::PathBuf;

use ab_glyph::FontVec;

/// Bundled DejaVu Sans Bold, the terminal resolver.
static FALLBACK_FONT: &[u8] = include_bytes!("../../assets/DejaVuSans-Bold.ttf");

/// Resolve the caption font from an ordered candidate list.
///
/// The first path that exists and parses as a font wins; a candidate that
/// exists but cannot be parsed logs a warning and is skipped. The embedded
/// fallback face always succeeds, so resolution can never abort the
/// pipeline.
pub fn resolve_font(candidates: &[PathBuf]) -> FontVec {
    for path in candidates {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(_) => continue,
        };
        match FontVec::try_from_vec(bytes) {
            Ok(font) => {
                log::debug!("Using font {}", path.display());
                return font;
            }
            Err(e) => log::warn!("Skipping unusable font {}: {e}", path.display()),
        }
    }

    log::debug!("No font candidate found, using embedded fallback");
    FontVec::try_from_vec(FALLBACK_FONT.to_vec()).expect("embedded font is a valid TTF")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ab_glyph::Font;
    use std::fs;
    use tempfile::TempDir;

    // ── resolve_font ─────────────────────────────────────────────────

    #[test]
    fn empty_candidate_list_uses_fallback() {
        let font = resolve_font(&[]);
        assert_ne!(font.glyph_id('A').0, 0);
    }

    #[test]
    fn missing_candidates_use_fallback() {
        let font = resolve_font(&[PathBuf::from("/nonexistent/font.ttf")]);
        assert_ne!(font.glyph_id('A').0, 0);
    }

    #[test]
    fn unusable_candidate_is_skipped() {
        let dir = TempDir::new().unwrap();
        let bogus = dir.path().join("bogus.ttf");
        fs::write(&bogus, b"not a font").unwrap();

        let font = resolve_font(&[bogus]);
        assert_ne!(font.glyph_id('A').0, 0);
    }

    #[test]
    fn first_usable_candidate_wins() {
        let dir = TempDir::new().unwrap();
        let bogus = dir.path().join("bogus.ttf");
        let usable = dir.path().join("usable.ttf");
        fs::write(&bogus, b"not a font").unwrap();
        fs::write(&usable, FALLBACK_FONT).unwrap();

        let font = resolve_font(&[bogus, usable]);
        assert_ne!(font.glyph_id('A').0, 0);
    }
}

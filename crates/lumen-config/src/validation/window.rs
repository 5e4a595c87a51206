//! Window size validation.

use crate::schema::LumenConfig;

use super::helpers::validate_range;

/// Largest dimension accepted for any window setting.
const MAX_DIMENSION: u32 = 16_384;

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &LumenConfig) {
    let w = &config.window;
    validate_range(errors, "window.min_width", w.min_width, 1, MAX_DIMENSION);
    validate_range(errors, "window.min_height", w.min_height, 1, MAX_DIMENSION);
    validate_range(errors, "window.width", w.width, w.min_width, MAX_DIMENSION);
    validate_range(errors, "window.height", w.height, w.min_height, MAX_DIMENSION);

    if w.title.trim().is_empty() {
        errors.push("window.title must not be empty".into());
    }
}

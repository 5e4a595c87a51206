//! Webview bounds derived from the window.

use winit::window::Window;

/// Logical rect covering `width` x `height` from the window origin.
pub fn content_rect(width: f64, height: f64) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(0.0, 0.0)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(width, height)),
    }
}

/// The whole client area of `window`, in logical coordinates.
pub fn window_content_rect(window: &Window) -> wry::Rect {
    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    content_rect(size.width, size.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_starts_at_origin() {
        let rect = content_rect(800.0, 600.0);
        match rect.position {
            wry::dpi::Position::Logical(pos) => {
                assert!(pos.x.abs() < f64::EPSILON);
                assert!(pos.y.abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical position"),
        }
    }

    #[test]
    fn rect_covers_requested_size() {
        let rect = content_rect(1280.0, 800.0);
        match rect.size {
            wry::dpi::Size::Logical(size) => {
                assert!((size.width - 1280.0).abs() < f64::EPSILON);
                assert!((size.height - 800.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical size"),
        }
    }
}

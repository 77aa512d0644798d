use glam::Vec2;

/// Bounds of the controlled element in page coordinates.
///
/// Must be refreshed whenever the element is resized or the page is
/// scrolled; the controls use it to normalize pointer positions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenRect {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl ScreenRect {
    /// Create a rect from its edges and size.
    #[must_use]
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Rect anchored at the origin, e.g. a whole window's client area.
    #[must_use]
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Whether the rect has a usable (non-zero) area.
    #[must_use]
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Width / height, or 1.0 for a degenerate rect.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        if self.has_area() {
            self.width / self.height
        } else {
            1.0
        }
    }

    /// Center point in page coordinates.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.left + self.width * 0.5,
            self.top + self.height * 0.5,
        )
    }

    /// Bounds of the whole browser window.
    #[cfg(feature = "web")]
    #[must_use]
    pub fn from_window(window: &web_sys::Window) -> Option<Self> {
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        Some(Self::from_size(width as f32, height as f32))
    }

    /// Bounds of a DOM element, offset by page scroll and the document's
    /// client border the same way jQuery's `offset()` computes them.
    #[cfg(feature = "web")]
    #[must_use]
    pub fn from_element(element: &web_sys::Element) -> Option<Self> {
        let window = web_sys::window()?;
        let rect = element.get_bounding_client_rect();
        let (client_left, client_top) = element
            .owner_document()
            .and_then(|doc| doc.document_element())
            .map_or((0, 0), |root| (root.client_left(), root.client_top()));
        let scroll_x = window.page_x_offset().unwrap_or(0.0);
        let scroll_y = window.page_y_offset().unwrap_or(0.0);
        Some(Self::new(
            (rect.left() + scroll_x - f64::from(client_left)) as f32,
            (rect.top() + scroll_y - f64::from(client_top)) as f32,
            rect.width() as f32,
            rect.height() as f32,
        ))
    }
}

//! `tiny-skia` backed canvas implementation.
//!
//! Strokes and fills are anti-aliased paths rendered into a
//! [`tiny_skia::Pixmap`]. Text is rasterized with `fontdue` glyph coverage
//! when a font has been configured; without one, labels degrade to whatever
//! marker the shape draws alongside them.

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};
use fontdue::Font;
use image::RgbaImage;
use tiny_skia::{
    Color, ColorU8, FillRule, Paint, PathBuilder, Pixmap, Stroke, StrokeDash, Transform,
};
use tracing::debug;

use super::{Canvas, LineStyle};
use crate::geometry::Point;

/// Production canvas over a `tiny-skia` pixel buffer.
///
/// # Example
///
/// ```
/// use vectile::canvas::{Canvas, Color, PixmapCanvas};
///
/// let mut canvas = PixmapCanvas::new(256, 256).unwrap();
/// canvas.fill(Color::WHITE);
/// let image = canvas.to_rgba_image();
/// assert_eq!(image.dimensions(), (256, 256));
/// ```
pub struct PixmapCanvas {
    pixmap: Pixmap,
    font: Option<Font>,
}

impl PixmapCanvas {
    /// Allocate a canvas of the given pixel dimensions.
    ///
    /// Returns `None` when either dimension is zero (the underlying pixmap
    /// cannot be allocated).
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Pixmap::new(width, height).map(|pixmap| Self { pixmap, font: None })
    }

    /// Attach a font for label rasterization.
    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    /// Borrow the underlying pixmap.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Consume the canvas, yielding the underlying pixmap.
    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    /// Copy the surface into an `image` RGBA buffer (straight alpha).
    pub fn to_rgba_image(&self) -> RgbaImage {
        let width = self.pixmap.width();
        let mut image = RgbaImage::new(width, self.pixmap.height());
        for (i, pixel) in self.pixmap.pixels().iter().enumerate() {
            let c = pixel.demultiply();
            let x = i as u32 % width;
            let y = i as u32 / width;
            image.put_pixel(x, y, image::Rgba([c.red(), c.green(), c.blue(), c.alpha()]));
        }
        image
    }

    /// Build an open path through `points`. `None` for fewer than two points.
    fn polyline_path(points: &[Point]) -> Option<tiny_skia::Path> {
        let (first, rest) = points.split_first()?;
        if rest.is_empty() {
            return None;
        }
        let mut builder = PathBuilder::new();
        builder.move_to(first.x, first.y);
        for point in rest {
            builder.line_to(point.x, point.y);
        }
        builder.finish()
    }

    /// Build a closed ring through `points`. `None` for fewer than three.
    fn polygon_path(points: &[Point]) -> Option<tiny_skia::Path> {
        if points.len() < 3 {
            return None;
        }
        let mut builder = PathBuilder::new();
        builder.move_to(points[0].x, points[0].y);
        for point in &points[1..] {
            builder.line_to(point.x, point.y);
        }
        builder.close();
        builder.finish()
    }

    fn solid_paint(color: Color) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(color);
        paint.anti_alias = true;
        paint
    }

    /// Source-over blend of `color` at glyph coverage into one pixel.
    fn blend_pixel(&mut self, x: i32, y: i32, color: Color, coverage: u8) {
        let width = self.pixmap.width() as i32;
        let height = self.pixmap.height() as i32;
        if x < 0 || y < 0 || x >= width || y >= height {
            return;
        }

        let index = (y * width + x) as usize;
        let dst = self.pixmap.pixels()[index].demultiply();
        let alpha = color.alpha() * f32::from(coverage) / 255.0;

        let blend = |src: f32, dst: u8| -> u8 {
            (src * 255.0 * alpha + f32::from(dst) * (1.0 - alpha)).round() as u8
        };
        let out = ColorU8::from_rgba(
            blend(color.red(), dst.red()),
            blend(color.green(), dst.green()),
            blend(color.blue(), dst.blue()),
            (alpha * 255.0 + f32::from(dst.alpha()) * (1.0 - alpha)).round() as u8,
        );
        self.pixmap.pixels_mut()[index] = out.premultiply();
    }
}

impl std::fmt::Debug for PixmapCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixmapCanvas")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .field("has_font", &self.font.is_some())
            .finish()
    }
}

impl Canvas for PixmapCanvas {
    fn width(&self) -> u32 {
        self.pixmap.width()
    }

    fn height(&self) -> u32 {
        self.pixmap.height()
    }

    fn fill(&mut self, color: Color) {
        self.pixmap.fill(color);
    }

    fn stroke_polyline(&mut self, points: &[Point], style: &LineStyle) {
        let Some(path) = Self::polyline_path(points) else {
            debug!(points = points.len(), "skipping degenerate polyline");
            return;
        };

        let mut stroke = Stroke {
            width: style.width,
            ..Stroke::default()
        };
        if let Some([on, off]) = style.dash {
            stroke.dash = StrokeDash::new(vec![on, off], 0.0);
        }

        self.pixmap.stroke_path(
            &path,
            &Self::solid_paint(style.color),
            &stroke,
            Transform::identity(),
            None,
        );
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        let Some(path) = Self::polygon_path(points) else {
            debug!(points = points.len(), "skipping degenerate polygon");
            return;
        };

        self.pixmap.fill_path(
            &path,
            &Self::solid_paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    fn draw_marker(&mut self, center: Point, radius: f32, color: Color) {
        let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) else {
            debug!(radius, "skipping degenerate marker");
            return;
        };

        self.pixmap.fill_path(
            &path,
            &Self::solid_paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    fn draw_text(&mut self, anchor: Point, text: &str, size: f32, color: Color) {
        let Some(font) = self.font.as_ref() else {
            debug!(text, "no font configured, skipping label");
            return;
        };

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings {
            x: anchor.x,
            y: anchor.y,
            ..LayoutSettings::default()
        });
        layout.append(std::slice::from_ref(font), &TextStyle::new(text, size, 0));

        // Rasterize all glyph coverage before blending; blending needs the
        // pixel buffer mutably while the layout borrows the font.
        let mut covered: Vec<(i32, i32, u8)> = Vec::new();
        for glyph in layout.glyphs() {
            if glyph.width == 0 {
                continue;
            }
            let (metrics, coverage) = font.rasterize_config(glyph.key);
            for (i, cov) in coverage.iter().enumerate() {
                if *cov == 0 {
                    continue;
                }
                let gx = glyph.x as i32 + (i % metrics.width) as i32;
                let gy = glyph.y as i32 + (i / metrics.width) as i32;
                covered.push((gx, gy, *cov));
            }
        }
        for (x, y, cov) in covered {
            self.blend_pixel(x, y, color, cov);
        }
    }
}

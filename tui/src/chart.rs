//! Chart rasterizing with half-block cells.
//!
//! Each terminal cell shows two vertically stacked pixels: the upper one as
//! the foreground of `▀`, the lower one as the background. The image is
//! scaled to fit the area (aspect ratio kept) and centered.

use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgba, RgbaImage};
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

use nbdeck_types::{Chart, ChartError};

const UPPER_HALF: &str = "▀";

/// Decode a notebook chart into RGBA pixels.
pub fn decode_chart(chart: &Chart) -> Result<RgbaImage, ChartError> {
    let bytes = chart.png_bytes()?;
    let image = image::load_from_memory_with_format(&bytes, ImageFormat::Png)?;
    Ok(image.to_rgba8())
}

/// Widget drawing an RGBA image composited over `background`.
pub struct ChartImage<'a> {
    image: &'a RgbaImage,
    background: (u8, u8, u8),
}

impl<'a> ChartImage<'a> {
    #[must_use]
    pub fn new(image: &'a RgbaImage, background: Color) -> Self {
        Self {
            image,
            background: rgb_of(background),
        }
    }
}

impl Widget for ChartImage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (width, height) = self.image.dimensions();
        if area.is_empty() || width == 0 || height == 0 {
            return;
        }

        let (fit_w, fit_h) = fit_within(
            width,
            height,
            u32::from(area.width),
            u32::from(area.height) * 2,
        );
        let scaled = imageops::resize(self.image, fit_w, fit_h, FilterType::Triangle);

        let cols = fit_w as u16;
        let rows = fit_h.div_ceil(2) as u16;
        let x0 = area.x + (area.width - cols) / 2;
        let y0 = area.y + (area.height - rows) / 2;

        for row in 0..rows {
            for col in 0..cols {
                let px = u32::from(col);
                let top = u32::from(row) * 2;
                let upper = self.blend(scaled.get_pixel(px, top));
                let lower = if top + 1 < fit_h {
                    self.blend(scaled.get_pixel(px, top + 1))
                } else {
                    Color::Rgb(self.background.0, self.background.1, self.background.2)
                };
                if let Some(cell) = buf.cell_mut((x0 + col, y0 + row)) {
                    cell.set_symbol(UPPER_HALF).set_fg(upper).set_bg(lower);
                }
            }
        }
    }
}

impl ChartImage<'_> {
    fn blend(&self, pixel: &Rgba<u8>) -> Color {
        let [r, g, b, a] = pixel.0;
        let (back_r, back_g, back_b) = self.background;
        let mix = |front: u8, back: u8| -> u8 {
            let a = u16::from(a);
            ((u16::from(front) * a + u16::from(back) * (255 - a)) / 255) as u8
        };
        Color::Rgb(mix(r, back_r), mix(g, back_g), mix(b, back_b))
    }
}

/// Largest size with the image's aspect ratio that fits `max_w` x `max_h`.
fn fit_within(width: u32, height: u32, max_w: u32, max_h: u32) -> (u32, u32) {
    let scale = f64::min(
        f64::from(max_w) / f64::from(width),
        f64::from(max_h) / f64::from(height),
    );
    let w = ((f64::from(width) * scale).floor() as u32).clamp(1, max_w.max(1));
    let h = ((f64::from(height) * scale).floor() as u32).clamp(1, max_h.max(1));
    (w, h)
}

fn rgb_of(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        Color::White => (255, 255, 255),
        Color::Gray => (192, 192, 192),
        Color::DarkGray => (128, 128, 128),
        _ => (0, 0, 0),
    }
}

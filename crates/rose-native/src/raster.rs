//! tiny-skia rasterization of composed frames

use rose_core::{Color, Curve, Frame, Style};
use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};

fn paint_for(color: Color, alpha: f32) -> Paint<'static> {
    let [r, g, b] = color.to_rgb();
    let mut paint = Paint::default();
    paint.set_color(
        tiny_skia::Color::from_rgba(r, g, b, alpha.clamp(0.0, 1.0))
            .unwrap_or(tiny_skia::Color::BLACK),
    );
    paint.anti_alias = true;
    paint
}

fn build_path(curve: &Curve) -> Option<Path> {
    let mut points = curve.points.iter();
    let first = points.next()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for p in points {
        pb.line_to(p.x, p.y);
    }
    pb.close();
    // degenerate curves (every point on the origin) yield None
    pb.finish()
}

/// Draw `frame` into `pixmap`: clear, move to the center, spin, then paint
/// commands in order.
pub fn render(pixmap: &mut Pixmap, frame: &Frame) {
    let [r, g, b] = frame.background.to_rgb();
    pixmap.fill(tiny_skia::Color::from_rgba(r, g, b, 1.0).unwrap_or(tiny_skia::Color::BLACK));

    let transform =
        Transform::from_rotate(frame.rotation_deg).post_translate(frame.center.x, frame.center.y);

    for cmd in &frame.commands {
        let Some(path) = build_path(&cmd.curve) else {
            continue;
        };
        match cmd.style {
            Style::Fill { color, alpha } => {
                let paint = paint_for(color, alpha);
                pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
            }
            Style::Stroke {
                color,
                alpha,
                weight,
            } => {
                let paint = paint_for(color, alpha);
                let stroke = Stroke {
                    width: weight,
                    ..Stroke::default()
                };
                pixmap.stroke_path(&path, &paint, &stroke, transform, None);
            }
        }
    }
}

/// Copy into a `0x00RRGGBB` surface buffer, nearest-neighbour scaled to the
/// destination size. The pixmap is opaque so premultiplication is a no-op.
pub fn blit(pixmap: &Pixmap, dst: &mut [u32], dst_width: usize, dst_height: usize) {
    let src_w = pixmap.width() as usize;
    let src_h = pixmap.height() as usize;
    if src_w == 0 || src_h == 0 || dst_width == 0 || dst_height == 0 {
        return;
    }
    let pixels = pixmap.pixels();
    for (y, row) in dst.chunks_mut(dst_width).take(dst_height).enumerate() {
        let sy = y * src_h / dst_height;
        for (x, out) in row.iter_mut().enumerate() {
            let sx = x * src_w / dst_width;
            let p = pixels[sy * src_w + sx];
            *out = ((p.red() as u32) << 16) | ((p.green() as u32) << 8) | p.blue() as u32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rose_core::{PipelineConfig, RenderLoop, CANVAS_SIZE};

    fn rendered_default() -> Pixmap {
        let mut rl = RenderLoop::new(PipelineConfig::default());
        let frame = rl.frame(None);
        let size = CANVAS_SIZE as u32;
        let mut pixmap = Pixmap::new(size, size).unwrap();
        render(&mut pixmap, &frame);
        pixmap
    }

    #[test]
    fn corners_stay_background_and_lobes_are_painted() {
        let pixmap = rendered_default();
        let corner = pixmap.pixel(0, 0).unwrap();
        assert_eq!((corner.red(), corner.green(), corner.blue()), (0, 0, 0));
        let painted = pixmap
            .pixels()
            .iter()
            .filter(|p| p.red() > 0 || p.green() > 0 || p.blue() > 0)
            .count();
        assert!(painted > 1000, "only {painted} pixels painted");
    }

    #[test]
    fn blit_packs_rgb() {
        let mut pixmap = Pixmap::new(2, 1).unwrap();
        pixmap.fill(tiny_skia::Color::from_rgba8(255, 128, 0, 255));
        let mut dst = vec![0u32; 2];
        blit(&pixmap, &mut dst, 2, 1);
        assert_eq!(dst, vec![0x00FF8000, 0x00FF8000]);
    }

    #[test]
    fn blit_scales_to_destination() {
        let pixmap = rendered_default();
        let mut dst = vec![0xFFFF_FFFFu32; 400 * 400];
        blit(&pixmap, &mut dst, 400, 400);
        assert_eq!(dst[0], 0);
        assert!(dst.iter().any(|p| *p != 0));
    }
}

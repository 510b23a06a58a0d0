//! Escape-time Mandelbrot rendering with per-pixel random perturbation.

use num_complex::Complex64;
use rand::Rng;

use crate::canvas::Canvas;
use crate::{palette, RenderConfig};

/// The complex-plane rectangle the pixel grid is mapped onto.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneWindow {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Default for PlaneWindow {
    fn default() -> Self {
        Self {
            xmin: -2.0,
            xmax: 2.0,
            ymin: -2.0,
            ymax: 2.0,
        }
    }
}

/// Map a pixel coordinate to its complex-plane coordinate.
///
/// Pixel (0, 0) maps to (xmin, ymin); pixel (width-1, height-1) maps to a
/// value just under (xmax, ymax).
pub fn pixel_to_complex(px: u32, py: u32, width: u32, height: u32, window: &PlaneWindow) -> Complex64 {
    let x = px as f64 / width as f64 * (window.xmax - window.xmin) + window.xmin;
    let y = py as f64 / height as f64 * (window.ymax - window.ymin) + window.ymin;
    Complex64::new(x, y)
}

/// Iterate `v = v^2 + c + delta` from v = 0 for up to `max_iterations`.
///
/// Returns `Some(n)` with the iteration index at which |v| first exceeded 2,
/// or `None` if the point never escaped. `delta` is drawn once per pixel and
/// held constant for that pixel's whole iteration.
pub fn escape_time(c: Complex64, delta: Complex64, max_iterations: u32) -> Option<u32> {
    let mut v = Complex64::new(0.0, 0.0);
    for n in 0..max_iterations {
        v = v * v + c + delta;
        if v.norm_sqr() > 4.0 {
            return Some(n);
        }
    }
    None
}

/// Render the full fractal into a fresh canvas, row-major.
///
/// Escaping pixels get a uniformly random palette color; the escape count is
/// deliberately not used for shading. Non-escaping pixels are black. The
/// perturbation half-amplitude comes from `config.perturbation`; zero gives
/// the deterministic classic set.
pub fn render<R: Rng + ?Sized>(config: &RenderConfig, rng: &mut R) -> Canvas {
    let mut canvas = Canvas::new(config.width, config.height);
    let a = config.perturbation;

    for py in 0..config.height {
        for px in 0..config.width {
            let c = pixel_to_complex(px, py, config.width, config.height, &config.window);
            let delta = Complex64::new(
                rng.gen::<f64>() * 2.0 * a - a,
                rng.gen::<f64>() * 2.0 * a - a,
            );
            let color = match escape_time(c, delta, config.max_iterations) {
                Some(_) => palette::random_color(rng),
                None => palette::BLACK,
            };
            canvas.put(px, py, color);
        }
    }

    log::debug!(
        "rendered {}x{} fractal ({} max iterations)",
        config.width,
        config.height,
        config.max_iterations
    );
    canvas
}

//! Fractpunk
//!
//! One-shot generator of a perturbed Mandelbrot-set PNG. Each run fetches a
//! short phrase from a chat-completion API, renders the fractal with a fresh
//! random perturbation per pixel, stamps a handful of speckle clusters and
//! one annotation mark on top, and writes the result to disk.
//!
//! The pipeline is fully sequential: oracle, renderer, overlay, writer. Any
//! failure along the way aborts the run; in particular, an oracle failure
//! happens before any image work and leaves no output file behind.
//!
//! # Example
//!
//! ```no_run
//! use fractpunk::{ChatCompletionOracle, OracleConfig, PlaceholderLineMark, RenderConfig};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! # fn main() -> fractpunk::Result<()> {
//! let config = RenderConfig::default();
//! let oracle = ChatCompletionOracle::new(OracleConfig::default())?;
//! let mut rng = StdRng::seed_from_u64(42);
//! fractpunk::run(&config, &oracle, &mut rng, &PlaceholderLineMark)?;
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use rand::Rng;

pub mod canvas;
pub mod error;
pub mod fractal;
pub mod oracle;
pub mod overlay;
pub mod palette;

pub use canvas::Canvas;
pub use error::{Error, Result};
pub use fractal::PlaneWindow;
pub use oracle::{ChatCompletionOracle, OracleConfig, PhraseSource};
pub use overlay::{MarkRenderer, PlaceholderLineMark};

/// Render parameters for one run.
///
/// Defaults reproduce the original output: a 1024x1024 grid over the
/// complex rectangle [-2, 2] x [-2, 2], 200 iterations, perturbation
/// half-amplitude 0.05, written to `fractpunk_fractal.png` in the working
/// directory.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Complex-plane rectangle the grid is mapped onto
    pub window: PlaneWindow,
    /// Escape-time iteration cap
    pub max_iterations: u32,
    /// Half-amplitude of the per-pixel perturbation; 0 disables it
    pub perturbation: f64,
    /// Output PNG path
    pub output_path: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 1024,
            window: PlaneWindow::default(),
            max_iterations: 200,
            perturbation: 0.05,
            output_path: PathBuf::from("fractpunk_fractal.png"),
        }
    }
}

/// Run the whole pipeline once: fetch the phrase, render, overlay, save.
pub fn run<R: Rng + ?Sized>(
    config: &RenderConfig,
    oracle: &dyn PhraseSource,
    rng: &mut R,
    mark: &dyn MarkRenderer,
) -> Result<()> {
    let phrase = oracle.fetch_phrase()?;
    log::info!("annotation phrase acquired ({} bytes)", phrase.len());

    let mut canvas = fractal::render(config, rng);
    overlay::add_flare(&mut canvas, &phrase, rng, mark);

    canvas.save_png(&config.output_path)?;
    log::info!("wrote {}", config.output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_the_fixed_parameters() {
        let config = RenderConfig::default();
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 1024);
        assert_eq!(config.max_iterations, 200);
        assert_eq!(config.perturbation, 0.05);
        assert_eq!(config.window, PlaneWindow::default());
        assert_eq!(config.output_path, PathBuf::from("fractpunk_fractal.png"));
    }
}

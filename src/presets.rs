//! A handful of well-known views of the set, by name.

use crate::errors::RenderError;
use crate::planes::Frame;

/// A named frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Preset {
    /// Name accepted on the command line.
    pub name: &'static str,
    /// Human-readable title.
    pub title: &'static str,
    bounds: (f64, f64, f64, f64),
}

impl Preset {
    const fn new(name: &'static str, title: &'static str, bounds: (f64, f64, f64, f64)) -> Preset {
        Preset {
            name,
            title,
            bounds,
        }
    }

    /// Every known preset.
    pub fn all() -> &'static [Preset] {
        &PRESETS
    }

    /// Looks a preset up by its command-line name.
    pub fn by_name(name: &str) -> Option<Preset> {
        PRESETS.iter().find(|p| p.name == name).cloned()
    }

    /// The command-line names, in display order.
    pub fn names() -> Vec<&'static str> {
        PRESETS.iter().map(|p| p.name).collect()
    }

    /// The region of the plane this preset shows.
    pub fn frame(&self) -> Result<Frame, RenderError> {
        let (real_min, real_max, imag_min, imag_max) = self.bounds;
        Frame::new(real_min, real_max, imag_min, imag_max)
    }

    /// The four bounds as they'd be typed on the command line.
    pub fn command_line(&self) -> String {
        let (a, b, c, d) = self.bounds;
        format!("{} {} {} {}", a, b, c, d)
    }
}

static PRESETS: [Preset; 4] = [
    Preset::new("full", "Full Picture", (-2.5, 1.5, -2.0, 2.0)),
    Preset::new("seahorse", "Seahorse Valley", (-0.75, -0.737, -0.132, -0.121)),
    Preset::new("elephant", "Elephant Valley", (0.175, 0.375, -0.1, 0.1)),
    Preset::new(
        "triple-spiral",
        "Triple Spiral Valley",
        (-0.188, -0.012, 0.554, 0.754),
    ),
];

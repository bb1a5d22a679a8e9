pub mod aspects;
pub mod style;
pub mod systems;

pub use aspects::{Aspect, aspect_order};
pub use style::{LabelPolicy, PlotStyle};
pub use systems::{System, system_order};

/// Plain RGB triple so the model stays independent of the drawing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLUE: Rgb = Rgb(0, 0, 255);
    pub const GREEN: Rgb = Rgb(0, 128, 0);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const SKYBLUE: Rgb = Rgb(135, 206, 235);
    pub const ORANGE: Rgb = Rgb(255, 165, 0);
}

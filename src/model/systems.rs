use serde::Serialize;

use crate::model::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum System {
    ExtractiveQa,
    GenerativeQa,
    ResponseSelector,
}

pub fn system_order() -> &'static [System] {
    &[
        System::ExtractiveQa,
        System::GenerativeQa,
        System::ResponseSelector,
    ]
}

impl System {
    /// 1-based index used in rating column names (`usefulness_2`).
    pub fn index(self) -> u8 {
        match self {
            System::ExtractiveQa => 1,
            System::GenerativeQa => 2,
            System::ResponseSelector => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            System::ExtractiveQa => "Extractive QA",
            System::GenerativeQa => "Generative QA",
            System::ResponseSelector => "Response Selector",
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            System::ExtractiveQa => Rgb::SKYBLUE,
            System::GenerativeQa => Rgb::ORANGE,
            System::ResponseSelector => Rgb::GREEN,
        }
    }
}

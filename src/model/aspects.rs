use serde::Serialize;

use crate::model::System;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Aspect {
    Completeness,
    Factuality,
    Usefulness,
}

/// Panel order, left to right.
pub fn aspect_order() -> &'static [Aspect] {
    &[Aspect::Completeness, Aspect::Factuality, Aspect::Usefulness]
}

impl Aspect {
    pub fn key(self) -> &'static str {
        match self {
            Aspect::Completeness => "completeness",
            Aspect::Factuality => "factuality",
            Aspect::Usefulness => "usefulness",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Aspect::Completeness => "Completeness",
            Aspect::Factuality => "Factuality",
            Aspect::Usefulness => "Overall Usefulness",
        }
    }

    pub fn column(self, system: System) -> String {
        format!("{}_{}", self.key(), system.index())
    }
}

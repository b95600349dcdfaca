//! Type-safe model selection for the car configurator
//!
//! Model trims are a closed set, so they are proper Rust enums rather than
//! bare characters. Parsing from user input goes through strum's `EnumString`,
//! which rejects anything outside E/L/X.

use serde::Serialize;
use std::fmt;
use strum::{Display, EnumIter, EnumString};

/// Vehicle trim level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Model {
    E,
    L,
    X,
}

impl Model {
    /// Base price of the trim, in whole currency units
    pub const fn base_price(self) -> u64 {
        match self {
            Self::E => 10_000,
            Self::L => 12_000,
            Self::X => 18_000,
        }
    }

    /// Single-letter code shown in menus
    pub const fn code(self) -> char {
        match self {
            Self::E => 'E',
            Self::L => 'L',
            Self::X => 'X',
        }
    }
}

/// The model slot of an order: either nothing chosen yet or one trim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ModelSelection {
    #[default]
    Unselected,
    Selected(Model),
}

impl ModelSelection {
    /// Base price contributed by the selection (0 when unselected)
    pub const fn base_price(self) -> u64 {
        match self {
            Self::Unselected => 0,
            Self::Selected(model) => model.base_price(),
        }
    }

    #[inline]
    pub const fn is_selected(self) -> bool {
        matches!(self, Self::Selected(_))
    }

    #[inline]
    pub const fn model(self) -> Option<Model> {
        match self {
            Self::Unselected => None,
            Self::Selected(model) => Some(model),
        }
    }
}

impl From<Model> for ModelSelection {
    fn from(model: Model) -> Self {
        Self::Selected(model)
    }
}

impl fmt::Display for ModelSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unselected => write!(f, "none"),
            Self::Selected(model) => write!(f, "{}", model),
        }
    }
}

//! Scale group table and the intermediate representation handed to generators

use serde::Serialize;

use crate::color::CanonicalColor;

/// How a group's four slots are sourced from the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleKind {
    /// Separate light, light alpha, dark and dark alpha scales.
    Standard,
    /// A single alpha scale reused for all four slots (Black, White).
    AlphaOnly,
}

/// One named entry of the palette list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleGroup {
    pub name: &'static str,
    pub kind: ScaleKind,
}

impl ScaleGroup {
    pub const fn standard(name: &'static str) -> Self {
        Self {
            name,
            kind: ScaleKind::Standard,
        }
    }

    pub const fn alpha_only(name: &'static str) -> Self {
        Self {
            name,
            kind: ScaleKind::AlphaOnly,
        }
    }

    /// Dataset export names for the light, light alpha, dark and dark alpha
    /// slots, in that order.
    pub fn dataset_keys(&self) -> [String; 4] {
        let base = lower_first(self.name);
        match self.kind {
            ScaleKind::Standard => [
                base.clone(),
                format!("{base}A"),
                format!("{base}Dark"),
                format!("{base}DarkA"),
            ],
            ScaleKind::AlphaOnly => {
                let alpha = format!("{base}A");
                [alpha.clone(), alpha.clone(), alpha.clone(), alpha]
            }
        }
    }
}

fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The palette list, in emission order.
pub const SCALE_GROUPS: &[ScaleGroup] = &[
    ScaleGroup::standard("Gray"),
    ScaleGroup::standard("Mauve"),
    ScaleGroup::standard("Slate"),
    ScaleGroup::standard("Sage"),
    ScaleGroup::standard("Olive"),
    ScaleGroup::standard("Sand"),
    ScaleGroup::standard("Gold"),
    ScaleGroup::standard("Bronze"),
    ScaleGroup::standard("Brown"),
    ScaleGroup::standard("Yellow"),
    ScaleGroup::standard("Amber"),
    ScaleGroup::standard("Orange"),
    ScaleGroup::standard("Tomato"),
    ScaleGroup::standard("Red"),
    ScaleGroup::standard("Ruby"),
    ScaleGroup::standard("Crimson"),
    ScaleGroup::standard("Pink"),
    ScaleGroup::standard("Plum"),
    ScaleGroup::standard("Purple"),
    ScaleGroup::standard("Violet"),
    ScaleGroup::standard("Iris"),
    ScaleGroup::standard("Indigo"),
    ScaleGroup::standard("Blue"),
    ScaleGroup::standard("Cyan"),
    ScaleGroup::standard("Teal"),
    ScaleGroup::standard("Jade"),
    ScaleGroup::standard("Green"),
    ScaleGroup::standard("Grass"),
    ScaleGroup::standard("Lime"),
    ScaleGroup::standard("Mint"),
    ScaleGroup::standard("Sky"),
    ScaleGroup::alpha_only("Black"),
    ScaleGroup::alpha_only("White"),
];

/// A fully normalized scale group, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaleSet {
    /// Identifier used for the generated function
    pub fn_name: String,
    /// Name as written in the table, used as the enum variant
    pub name: String,
    pub light: Vec<CanonicalColor>,
    pub light_alpha: Vec<CanonicalColor>,
    pub dark: Vec<CanonicalColor>,
    pub dark_alpha: Vec<CanonicalColor>,
}

impl ScaleSet {
    pub fn new(name: &str, [light, light_alpha, dark, dark_alpha]: [Vec<CanonicalColor>; 4]) -> Self {
        Self {
            fn_name: name.to_lowercase(),
            name: name.to_string(),
            light,
            light_alpha,
            dark,
            dark_alpha,
        }
    }
}

//! Assembles normalized scale sets from the group table and a palette dataset

use tracing::debug;

use crate::color::{normalize, CanonicalColor, ColorError};
use crate::model::{ScaleGroup, ScaleSet};
use crate::palette::{Palette, PaletteError, Scale};

const SLOTS: [&str; 4] = ["light", "light_alpha", "dark", "dark_alpha"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmitError {
    #[error("scale group '{group}'")]
    Palette {
        group: String,
        #[source]
        source: PaletteError,
    },

    #[error("scale group '{group}', {slot} step '{step}'")]
    Color {
        group: String,
        slot: &'static str,
        step: String,
        #[source]
        source: ColorError,
    },
}

/// Normalize every entry of a scale, preserving order.
pub fn make_scale(scale: &Scale) -> Result<Vec<CanonicalColor>, (String, ColorError)> {
    scale
        .iter()
        .map(|(step, value)| normalize(value).map_err(|e| (step.clone(), e)))
        .collect()
}

/// Build one scale set. Stops at the first bad entry.
pub fn build_scale_set(group: &ScaleGroup, palette: &Palette) -> Result<ScaleSet, EmitError> {
    let keys = group.dataset_keys();
    let mut slots: [Vec<CanonicalColor>; 4] = Default::default();

    for ((slot, key), out) in SLOTS.into_iter().zip(&keys).zip(&mut slots) {
        let scale = palette.scale(key).map_err(|source| EmitError::Palette {
            group: group.name.to_string(),
            source,
        })?;

        *out = make_scale(scale).map_err(|(step, source)| EmitError::Color {
            group: group.name.to_string(),
            slot,
            step,
            source,
        })?;
    }

    debug!(
        "{}: {} light / {} dark steps",
        group.name,
        slots[0].len(),
        slots[2].len()
    );

    Ok(ScaleSet::new(group.name, slots))
}

/// Build all scale sets in table order. The first failure aborts the run.
pub fn build_scale_sets(groups: &[ScaleGroup], palette: &Palette) -> Result<Vec<ScaleSet>, EmitError> {
    let sets = groups
        .iter()
        .map(|group| build_scale_set(group, palette))
        .collect::<Result<Vec<_>, _>>()?;

    for key in palette.keys() {
        if !groups
            .iter()
            .any(|g| g.dataset_keys().iter().any(|k| k == key))
        {
            debug!("Ignoring unreferenced palette scale '{}'", key);
        }
    }

    Ok(sets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Palette {
        Palette::from_json_str(
            r##"{
                "red": { "red1": "#FFFCFC", "red2": "#fff7f7" },
                "redA": { "redA1": "#ff000003", "redA2": "rgba(255, 0, 0, 0.5)" },
                "redDark": { "redDark1": "#191111", "redDark2": "#201314" },
                "redDarkA": { "redDarkA1": "#f4121209", "redDarkA2": "#f22f3e11" },
                "blackA": { "blackA1": "rgba(0, 0, 0, 0.05)", "blackA2": "#0000001a" }
            }"##,
        )
        .unwrap()
    }

    fn strings(colors: &[CanonicalColor]) -> Vec<String> {
        colors.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_standard_group() {
        let set = build_scale_set(&ScaleGroup::standard("Red"), &palette()).unwrap();

        assert_eq!(set.fn_name, "red");
        assert_eq!(strings(&set.light), ["#fffcfcff", "#fff7f7ff"]);
        assert_eq!(strings(&set.light_alpha), ["#ff000003", "#ff000080"]);
        assert_eq!(strings(&set.dark), ["#191111ff", "#201314ff"]);
        assert_eq!(strings(&set.dark_alpha), ["#f4121209", "#f22f3e11"]);
    }

    #[test]
    fn test_alpha_only_group_reuses_one_scale() {
        let set = build_scale_set(&ScaleGroup::alpha_only("Black"), &palette()).unwrap();

        assert_eq!(strings(&set.light), ["#0000000d", "#0000001a"]);
        assert_eq!(set.light, set.light_alpha);
        assert_eq!(set.light, set.dark);
        assert_eq!(set.light, set.dark_alpha);
    }

    #[test]
    fn test_missing_scale_fails() {
        let err = build_scale_set(&ScaleGroup::standard("Blue"), &palette()).unwrap_err();
        assert_eq!(
            err,
            EmitError::Palette {
                group: "Blue".to_string(),
                source: PaletteError::MissingScale {
                    key: "blue".to_string()
                },
            }
        );
    }

    #[test]
    fn test_bad_entry_aborts_run() {
        let palette = Palette::from_json_str(
            r##"{
                "blackA": { "blackA1": "#0000000d" },
                "whiteA": { "whiteA1": "#ffffff0d", "whiteA2": "hsl(0, 100%, 50%)" }
            }"##,
        )
        .unwrap();
        let groups = [
            ScaleGroup::alpha_only("Black"),
            ScaleGroup::alpha_only("White"),
        ];

        let err = build_scale_sets(&groups, &palette).unwrap_err();
        assert_eq!(
            err,
            EmitError::Color {
                group: "White".to_string(),
                slot: "light",
                step: "whiteA2".to_string(),
                source: ColorError::UnexpectedColorFormat("hsl(0, 100%, 50%)".to_string()),
            }
        );
    }

    #[test]
    fn test_error_message_leaves_cause_to_source() {
        let err = build_scale_set(&ScaleGroup::standard("Blue"), &palette()).unwrap_err();
        assert_eq!(err.to_string(), "scale group 'Blue'");
        assert_eq!(
            std::error::Error::source(&err).unwrap().to_string(),
            "scale 'blue' not found in palette dataset"
        );
    }

    #[test]
    fn test_sets_follow_table_order() {
        let groups = [
            ScaleGroup::alpha_only("Black"),
            ScaleGroup::standard("Red"),
        ];
        let sets = build_scale_sets(&groups, &palette()).unwrap();
        let names: Vec<_> = sets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Black", "Red"]);
    }
}

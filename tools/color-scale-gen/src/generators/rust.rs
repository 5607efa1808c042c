//! Declaration generator
//!
//! Renders each scale set through a handlebars template. The built-in
//! template produces Rust `DefaultColorScaleSet` constructors; any other host
//! language can be targeted by supplying a replacement template with the same
//! variables (`fn_name`, `name`, `light`, `light_alpha`, `dark`, `dark_alpha`).

use anyhow::{Context, Result};
use handlebars::Handlebars;

use crate::model::ScaleSet;

const TEMPLATE_NAME: &str = "scale";

/// Built-in template: one constructor function per scale group.
pub const DEFAULT_TEMPLATE: &str = r#"fn {{fn_name}}() -> DefaultColorScaleSet {
    DefaultColorScaleSet {
        scale: ColorScaleName::{{name}},
        light: [{{#each light}}"{{this}}"{{#unless @last}}, {{/unless}}{{/each}}],
        light_alpha: [{{#each light_alpha}}"{{this}}"{{#unless @last}}, {{/unless}}{{/each}}],
        dark: [{{#each dark}}"{{this}}"{{#unless @last}}, {{/unless}}{{/each}}],
        dark_alpha: [{{#each dark_alpha}}"{{this}}"{{#unless @last}}, {{/unless}}{{/each}}],
    }
}
"#;

/// Renders scale sets with a single registered template.
pub struct DeclarationGenerator<'reg> {
    registry: Handlebars<'reg>,
}

impl DeclarationGenerator<'_> {
    /// Generator using [`DEFAULT_TEMPLATE`].
    pub fn new() -> Result<Self> {
        Self::with_template(DEFAULT_TEMPLATE)
    }

    /// Generator using a caller supplied template.
    pub fn with_template(template: &str) -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);
        registry
            .register_template_string(TEMPLATE_NAME, template)
            .context("Failed to compile declaration template")?;

        Ok(Self { registry })
    }

    /// Render one declaration.
    pub fn render_scale(&self, set: &ScaleSet) -> Result<String> {
        self.registry
            .render(TEMPLATE_NAME, set)
            .with_context(|| format!("Failed to render scale '{}'", set.name))
    }

    /// Render all declarations, separated by blank lines, in input order.
    pub fn render(&self, sets: &[ScaleSet]) -> Result<String> {
        let decls = sets
            .iter()
            .map(|set| self.render_scale(set))
            .collect::<Result<Vec<_>>>()?;

        let mut output = decls.join("\n");
        if !output.is_empty() && !output.ends_with('\n') {
            output.push('\n');
        }
        Ok(output)
    }
}

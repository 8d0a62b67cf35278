//! Model file rendering.
//!
//! One embedded jinja-style template produces the generated source text; all
//! input shaping lives in [`context`].

pub mod context;

use minijinja::Environment;

use f3_modelgen_core::{Error, Result, TableSchema, TableSpec};

pub use context::{build_context, FieldContext, ModelContext};

const MODEL_TEMPLATE_NAME: &str = "model.py";
const MODEL_TEMPLATE: &str = include_str!("../templates/model.py.j2");

/// Renders generated model files from prepared contexts.
pub struct ModelRenderer {
    env: Environment<'static>,
}

impl ModelRenderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_template(MODEL_TEMPLATE_NAME, MODEL_TEMPLATE)
            .map_err(|err| Error::Render(err.to_string()))?;
        Ok(Self { env })
    }

    /// Render one model file for a reflected table.
    ///
    /// Deterministic given identical inputs and a fixed timestamp.
    pub fn render(&self, spec: &TableSpec, schema: &TableSchema, timestamp: &str) -> Result<String> {
        let context = build_context(spec, schema, timestamp)?;
        self.render_context(&context)
    }

    pub fn render_context(&self, context: &ModelContext) -> Result<String> {
        let template = self
            .env
            .get_template(MODEL_TEMPLATE_NAME)
            .map_err(|err| Error::Render(err.to_string()))?;
        template
            .render(context)
            .map_err(|err| Error::Render(err.to_string()))
    }
}

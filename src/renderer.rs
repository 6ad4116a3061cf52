//! Template engine wrapper for whydoc.
//! Isolates the MiniJinja templating capability behind a compile/render
//! split so template bodies fail fast at load time.

use minijinja::{Environment, UndefinedBehavior};

use crate::error::Result;

/// A template body compiled into its own MiniJinja environment.
///
/// Undefined lookups are strict: a template that unconditionally accesses
/// a missing value fails at render time instead of substituting nothing,
/// so missing documentation is caught at generation time.
#[derive(Debug)]
pub struct CompiledTemplate {
    env: Environment<'static>,
    name: String,
}

impl CompiledTemplate {
    /// Compiles `body` under the given template name.
    ///
    /// # Arguments
    /// * `name` - Template name, used in engine error messages
    /// * `body` - Template source to compile
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if the body is not valid template syntax
    pub fn compile(name: &str, body: &str) -> Result<Self> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_template_owned(name.to_string(), body.to_string())?;

        Ok(Self { env, name: name.to_string() })
    }

    /// Renders the compiled body against `context`.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` on any render failure, including strict
    ///   lookups of values absent from the context
    pub fn render(&self, context: &serde_json::Value) -> Result<String> {
        let template = self.env.get_template(&self.name)?;
        Ok(template.render(context)?)
    }
}

use crate::{
    error::Error,
    sink::{DiagnosticSink, UNKNOWN_DECLARATION},
};
use eqgen_core::{
    config::GenerationConfig,
    diagnostic::Diagnostic,
    generate::{GenerationResult, generate},
    render::JavaRenderer,
    spec::MethodSpec,
    synth::to_string::synthesize_to_string,
};
use eqgen_schema::node::ClassSchema;
use serde::Serialize;
use tracing::debug;

///
/// Output
/// Everything produced for one declaration.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Output {
    pub equality: GenerationResult,
    pub to_string: Option<MethodSpec>,
}

impl Output {
    /// Methods to splice, in order: `equals`, `canEqual`, `hashCode`,
    /// `toString`.
    #[must_use]
    pub fn methods(&self) -> Vec<&MethodSpec> {
        let mut methods = self.equality.methods();
        methods.extend(self.to_string.as_ref());

        methods
    }
}

///
/// Generator
///
/// Host-facing entry point. Holds the configuration and renderer and scopes
/// every failure to the declaration that caused it.
///

#[derive(Clone, Debug)]
pub struct Generator {
    config: GenerationConfig,
    renderer: JavaRenderer,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(GenerationConfig::default())
    }
}

impl Generator {
    #[must_use]
    pub fn new(config: GenerationConfig) -> Self {
        let renderer = JavaRenderer::new(&config);

        Self { config, renderer }
    }

    pub fn from_toml(s: &str) -> Result<Self, Error> {
        Ok(Self::new(GenerationConfig::from_toml_str(s)?))
    }

    #[must_use]
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Process one declaration, reporting warnings and the failure (if any)
    /// to `sink`.
    pub fn process(
        &self,
        schema: &ClassSchema,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Output, Error> {
        let declaration = schema.declaring_type.path();
        let equality = match generate(schema, &self.config) {
            Ok(result) => result,
            Err(err) => {
                let err = Error::from(err);
                sink.report(&declaration, &Diagnostic::error(err.message.as_str()));
                return Err(err);
            }
        };

        for diagnostic in equality.diagnostics() {
            sink.report(&declaration, &diagnostic);
        }

        let output = Output {
            equality,
            to_string: synthesize_to_string(schema, &self.config),
        };
        debug!(
            class = %declaration,
            methods = ?output.methods().iter().map(|m| m.name.as_str()).collect::<Vec<_>>(),
            "processed declaration"
        );

        Ok(output)
    }

    /// Decode a JSON-encoded schema and process it.
    pub fn process_json(
        &self,
        json: &str,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Output, Error> {
        let schema: ClassSchema = match serde_json::from_str(json) {
            Ok(schema) => schema,
            Err(err) => {
                let err = Error::from(err);
                sink.report(UNKNOWN_DECLARATION, &Diagnostic::error(err.message.as_str()));
                return Err(err);
            }
        };

        self.process(&schema, sink)
    }

    /// Process several declarations; a failure in one never affects another.
    pub fn process_batch(
        &self,
        schemas: &[ClassSchema],
        sink: &mut dyn DiagnosticSink,
    ) -> Vec<Result<Output, Error>> {
        let results: Vec<_> = schemas.iter().map(|s| self.process(s, &mut *sink)).collect();
        let failed = results.iter().filter(|r| r.is_err()).count();
        debug!(total = results.len(), failed, "processed batch");

        results
    }

    /// Render the output as Java source, methods separated by a blank line.
    #[must_use]
    pub fn render(&self, output: &Output) -> String {
        self.renderer.render_all(output.methods())
    }
}

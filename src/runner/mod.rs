//! Script runner: compiles and evaluates definitions through the engine.

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use rhai::{Dynamic, Engine, Scope};
use tokio::task;

use crate::params::Bindings;
use crate::registry::{TypeRegistry, Value};
use crate::script::ScriptDefinition;

pub struct ScriptRunner {
    engine: Arc<Engine>,
    registry: TypeRegistry,
}

impl ScriptRunner {
    pub fn new() -> Self {
        let mut engine = Engine::new();
        // Cap runaway snippets; configured scripts are a few expressions each.
        engine.set_max_operations(100_000);
        Self {
            engine: Arc::new(engine),
            registry: TypeRegistry::builtin(),
        }
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut TypeRegistry {
        &mut self.registry
    }

    /// Runs one definition: resolve its declared types, compile the source,
    /// evaluate with the bindings in scope, convert the raw result.
    pub async fn run(&self, definition: &ScriptDefinition, bindings: &Bindings) -> Result<Value> {
        for type_name in &definition.input_types {
            self.registry.resolve(type_name).with_context(|| {
                format!("script '{}': unresolvable input type", definition.name)
            })?;
        }
        let return_type = self
            .registry
            .resolve(&definition.return_type)
            .with_context(|| {
                format!("script '{}': unresolvable return type", definition.name)
            })?
            .clone();

        let ast = self
            .engine
            .compile(&definition.script)
            .map_err(|err| anyhow!("script '{}' failed to compile: {}", definition.name, err))?;

        let vars: Vec<(String, Dynamic)> = bindings
            .iter()
            .map(|(name, value)| (name.clone(), value.to_dynamic()))
            .collect();
        let engine = Arc::clone(&self.engine);
        let script_name = definition.name.clone();
        let raw = task::spawn_blocking(move || {
            let mut scope = Scope::new();
            for (var, value) in vars {
                scope.push_dynamic(var, value);
            }
            engine
                .eval_ast_with_scope::<Dynamic>(&mut scope, &ast)
                .map_err(|err| anyhow!("script '{}' failed: {}", script_name, err))
        })
        .await
        .context("script execution task failed")??;

        tracing::debug!(script = %definition.name, raw = %raw, "script produced raw result");

        return_type.convert(raw).with_context(|| {
            format!(
                "script '{}': result does not match declared return type {}",
                definition.name,
                return_type.name()
            )
        })
    }
}

impl Default for ScriptRunner {
    fn default() -> Self {
        Self::new()
    }
}

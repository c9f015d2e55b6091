use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::HostError;
use super::map::{Map, ValueKind};
use super::runtime::Core;

/// Callback behind a registered function: reads `args`, writes results or an error into `out`.
pub type PublicFunction = Arc<dyn Fn(&Map, &mut Map, &Core) + Send + Sync>;

/// Identity a plugin declares when it is loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PluginInfo {
    /// Reverse-DNS style unique identifier.
    pub identifier: String,
    /// Namespace functions are invoked under.
    pub namespace: String,
    /// Human-readable description, usually with a version.
    pub description: String,
}

/// One argument of a function signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArgSpec {
    /// Argument name.
    pub name: String,
    /// Value type.
    pub kind: ValueKind,
    /// Accepts any number of values (`[]`).
    pub array: bool,
    /// May be omitted (`:opt`).
    pub optional: bool,
}

impl ArgSpec {
    /// Parse a signature such as `files:data[];fpsnum:int:opt`.
    pub fn parse_signature(signature: &str) -> Result<Vec<ArgSpec>, HostError> {
        let invalid = |reason: String| HostError::InvalidSignature {
            signature: signature.to_string(),
            reason,
        };

        let mut specs: Vec<ArgSpec> = Vec::new();
        for part in signature.split(';').filter(|p| !p.is_empty()) {
            let mut fields = part.split(':');
            let name = fields.next().unwrap_or_default();
            if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(invalid(format!("bad argument name '{name}'")));
            }
            let ty = fields
                .next()
                .ok_or_else(|| invalid(format!("argument '{name}' has no type")))?;
            let (ty, array) = match ty.strip_suffix("[]") {
                Some(base) => (base, true),
                None => (ty, false),
            };
            let kind = match ty {
                "int" => ValueKind::Int,
                "float" => ValueKind::Float,
                "data" => ValueKind::Data,
                "clip" => ValueKind::Node,
                other => return Err(invalid(format!("unknown type '{other}'"))),
            };
            let mut optional = false;
            for flag in fields {
                match flag {
                    "opt" => optional = true,
                    other => return Err(invalid(format!("unknown flag '{other}'"))),
                }
            }
            if specs.iter().any(|s| s.name == name) {
                return Err(invalid(format!("argument '{name}' appears twice")));
            }
            specs.push(ArgSpec {
                name: name.to_string(),
                kind,
                array,
                optional,
            });
        }
        Ok(specs)
    }
}

/// A registered function.
#[derive(Clone)]
pub struct Function {
    name: String,
    signature: String,
    args: Vec<ArgSpec>,
    callback: PublicFunction,
}

impl Function {
    /// Function name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Signature text as registered.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Parsed arguments.
    pub fn args(&self) -> &[ArgSpec] {
        &self.args
    }

    /// Check `args` against the signature.
    pub fn check_args(&self, args: &Map) -> Result<(), HostError> {
        let mismatch = |reason: String| HostError::Arguments {
            function: self.name.clone(),
            reason,
        };

        for key in args.keys() {
            if !self.args.iter().any(|a| a.name == key) {
                return Err(mismatch(format!("no argument named '{key}'")));
            }
        }
        for spec in &self.args {
            let count = args.num_elements(&spec.name).unwrap_or(0);
            if count == 0 {
                if spec.optional {
                    continue;
                }
                return Err(mismatch(format!("argument '{}' is required", spec.name)));
            }
            if let Some(kind) = args.kind(&spec.name) {
                if kind != spec.kind {
                    return Err(mismatch(format!(
                        "argument '{}' must be {}, got {kind}",
                        spec.name, spec.kind
                    )));
                }
            }
            if !spec.array && count > 1 {
                return Err(mismatch(format!(
                    "argument '{}' takes a single value, got {count}",
                    spec.name
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn call(&self, args: &Map, out: &mut Map, core: &Core) {
        (self.callback)(args, out, core);
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// A plugin being loaded: identity plus registered functions.
#[derive(Debug, Default)]
pub struct Plugin {
    info: Option<PluginInfo>,
    functions: BTreeMap<String, Function>,
}

impl Plugin {
    /// Create an unconfigured plugin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the plugin identity.
    pub fn configure(&mut self, identifier: &str, namespace: &str, description: &str) {
        self.info = Some(PluginInfo {
            identifier: identifier.to_string(),
            namespace: namespace.to_string(),
            description: description.to_string(),
        });
    }

    /// Register a function under `name` with the given argument signature.
    pub fn register_function<F>(
        &mut self,
        name: &str,
        signature: &str,
        callback: F,
    ) -> Result<(), HostError>
    where
        F: Fn(&Map, &mut Map, &Core) + Send + Sync + 'static,
    {
        if self.info.is_none() {
            return Err(HostError::NotConfigured);
        }
        if self.functions.contains_key(name) {
            return Err(HostError::DuplicateFunction(name.to_string()));
        }
        let args = ArgSpec::parse_signature(signature)?;
        self.functions.insert(
            name.to_string(),
            Function {
                name: name.to_string(),
                signature: signature.to_string(),
                args,
                callback: Arc::new(callback),
            },
        );
        Ok(())
    }

    /// Identity, once configured.
    pub fn info(&self) -> Option<&PluginInfo> {
        self.info.as_ref()
    }

    /// Look up a registered function.
    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }

    /// Registered functions in name order.
    pub fn functions(&self) -> impl Iterator<Item = &Function> {
        self.functions.values()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/plugin.rs"]
mod tests;

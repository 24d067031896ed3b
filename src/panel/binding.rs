//! Resource bindings: which JSON resource feeds which display surface.

use thiserror::Error;

/// A remote JSON resource paired with the surface that displays it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceBinding {
    /// Path relative to the status server, starting with `/`.
    pub path: String,
    /// Identifier of the display surface.
    pub target_id: String,
}

impl ResourceBinding {
    pub fn new(path: impl Into<String>, target_id: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            target_id: target_id.into(),
        }
    }

    /// Panel title, e.g. `HEALTH`.
    pub fn title(&self) -> String {
        self.target_id.to_uppercase()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindingError {
    #[error("no resource bindings configured")]
    Empty,

    #[error("binding for {path} has an empty target id")]
    EmptyTarget { path: String },

    #[error("binding path '{path}' must start with '/'")]
    RelativePath { path: String },

    #[error("target id '{0}' is bound more than once")]
    DuplicateTarget(String),
}

/// The four status resources, in display order.
pub fn default_bindings() -> Vec<ResourceBinding> {
    ["health", "version", "system", "docker"]
        .into_iter()
        .map(|id| ResourceBinding::new(format!("/{}", id), id))
        .collect()
}

pub fn validate_bindings(bindings: &[ResourceBinding]) -> Result<(), BindingError> {
    if bindings.is_empty() {
        return Err(BindingError::Empty);
    }
    for (index, binding) in bindings.iter().enumerate() {
        if binding.target_id.trim().is_empty() {
            return Err(BindingError::EmptyTarget {
                path: binding.path.clone(),
            });
        }
        if !binding.path.starts_with('/') {
            return Err(BindingError::RelativePath {
                path: binding.path.clone(),
            });
        }
        if bindings[..index]
            .iter()
            .any(|earlier| earlier.target_id == binding.target_id)
        {
            return Err(BindingError::DuplicateTarget(binding.target_id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_are_in_display_order() {
        let bindings = default_bindings();
        let pairs: Vec<(&str, &str)> = bindings
            .iter()
            .map(|b| (b.path.as_str(), b.target_id.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("/health", "health"),
                ("/version", "version"),
                ("/system", "system"),
                ("/docker", "docker"),
            ]
        );
        assert!(validate_bindings(&bindings).is_ok());
    }

    #[test]
    fn rejects_malformed_binding_lists() {
        assert_eq!(validate_bindings(&[]), Err(BindingError::Empty));
        assert_eq!(
            validate_bindings(&[ResourceBinding::new("health", "health")]),
            Err(BindingError::RelativePath {
                path: "health".to_string()
            })
        );
        assert_eq!(
            validate_bindings(&[ResourceBinding::new("/health", " ")]),
            Err(BindingError::EmptyTarget {
                path: "/health".to_string()
            })
        );
        assert_eq!(
            validate_bindings(&[
                ResourceBinding::new("/health", "health"),
                ResourceBinding::new("/healthz", "health"),
            ]),
            Err(BindingError::DuplicateTarget("health".to_string()))
        );
    }
}

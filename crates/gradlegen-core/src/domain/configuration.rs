//! Custom dependency-resolution configurations and their customizations.

/// Mutation of one configuration: the targets it extends from, accumulated
/// across every `customize` call on the same target, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationCustomization {
    pub(crate) name: String,
    pub(crate) extends_from: Vec<String>,
}

impl ConfigurationCustomization {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends_from: Vec::new(),
        }
    }

    pub fn extends_from(&mut self, configuration: impl Into<String>) -> &mut Self {
        self.extends_from.push(configuration.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Declared configurations plus customizations of (declared or built-in)
/// configurations.
#[derive(Debug, Clone, Default)]
pub struct ConfigurationContainer {
    declared: Vec<String>,
    customizations: Vec<ConfigurationCustomization>,
}

impl ConfigurationContainer {
    /// Declare a custom configuration. Declaring the same name twice is a
    /// no-op.
    pub fn declare(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.declared.contains(&name) {
            self.declared.push(name);
        }
    }

    /// Customize a configuration by name. Repeated calls on the same target
    /// accumulate into one customization, in call order.
    pub fn customize(
        &mut self,
        name: &str,
        customize: impl FnOnce(&mut ConfigurationCustomization),
    ) {
        match self
            .customizations
            .iter_mut()
            .find(|customization| customization.name == name)
        {
            Some(existing) => customize(existing),
            None => {
                let mut customization = ConfigurationCustomization::new(name);
                customize(&mut customization);
                self.customizations.push(customization);
            }
        }
    }

    pub fn declared(&self) -> &[String] {
        &self.declared
    }

    pub fn customizations(&self) -> &[ConfigurationCustomization] {
        &self.customizations
    }

    /// Whether `name` was declared here (as opposed to a Gradle built-in).
    /// Declared configurations are referenced bare; built-ins go through the
    /// dialect's accessor form.
    pub fn is_declared(&self, name: &str) -> bool {
        self.declared.iter().any(|declared| declared == name)
    }

    pub fn is_empty(&self) -> bool {
        self.declared.is_empty() && self.customizations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customizations_on_same_target_accumulate_in_call_order() {
        let mut container = ConfigurationContainer::default();
        container.customize("runtimeClasspath", |c| {
            c.extends_from("custom");
        });
        container.customize("runtimeClasspath", |c| {
            c.extends_from("builtIn");
        });

        assert_eq!(container.customizations().len(), 1);
        assert_eq!(
            container.customizations()[0].extends_from,
            ["custom", "builtIn"]
        );
    }

    #[test]
    fn declare_is_idempotent() {
        let mut container = ConfigurationContainer::default();
        container.declare("developmentOnly");
        container.declare("developmentOnly");
        assert_eq!(container.declared().len(), 1);
        assert!(container.is_declared("developmentOnly"));
        assert!(!container.is_declared("runtimeClasspath"));
    }
}

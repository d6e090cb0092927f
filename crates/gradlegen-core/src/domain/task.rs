//! Task customizations, by task type and by task name.

use crate::domain::statement::StatementBlock;

/// Changes applied to every task of a given type.
///
/// The type name may be fully qualified (`org.jetbrains.kotlin.gradle.tasks.KotlinCompile`)
/// or short (`JavaCompile`). Fully-qualified names trigger exactly one
/// deduplicated import; short names never do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskTypeCustomization {
    pub(crate) type_name: String,
    pub(crate) block: StatementBlock,
}

impl TaskTypeCustomization {
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The unqualified type name used in the `withType` header.
    pub fn short_name(&self) -> &str {
        self.type_name
            .rsplit('.')
            .next()
            .unwrap_or(&self.type_name)
    }

    /// The import this customization requires, if the type is fully
    /// qualified.
    pub fn import_path(&self) -> Option<&str> {
        self.type_name
            .contains('.')
            .then_some(self.type_name.as_str())
    }

    pub fn block(&self) -> &StatementBlock {
        &self.block
    }
}

/// Changes applied to one named task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCustomization {
    pub(crate) name: String,
    pub(crate) block: StatementBlock,
}

impl TaskCustomization {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn block(&self) -> &StatementBlock {
        &self.block
    }
}

/// All task customizations of a build, in first-seen order per target.
/// Customizing the same target again merges into the existing statement
/// tree (see [`StatementBlock::nested`] for the nested-block merge rule).
#[derive(Debug, Clone, Default)]
pub struct TaskContainer {
    by_type: Vec<TaskTypeCustomization>,
    by_name: Vec<TaskCustomization>,
}

impl TaskContainer {
    pub fn customize_with_type(
        &mut self,
        type_name: &str,
        customize: impl FnOnce(&mut StatementBlock),
    ) {
        match self
            .by_type
            .iter_mut()
            .find(|task| task.type_name == type_name)
        {
            Some(existing) => customize(&mut existing.block),
            None => {
                let mut block = StatementBlock::new(type_name);
                customize(&mut block);
                self.by_type.push(TaskTypeCustomization {
                    type_name: type_name.to_string(),
                    block,
                });
            }
        }
    }

    pub fn customize(&mut self, name: &str, customize: impl FnOnce(&mut StatementBlock)) {
        match self.by_name.iter_mut().find(|task| task.name == name) {
            Some(existing) => customize(&mut existing.block),
            None => {
                let mut block = StatementBlock::new(name);
                customize(&mut block);
                self.by_name.push(TaskCustomization {
                    name: name.to_string(),
                    block,
                });
            }
        }
    }

    pub fn by_type(&self) -> &[TaskTypeCustomization] {
        &self.by_type
    }

    pub fn by_name(&self) -> &[TaskCustomization] {
        &self.by_name
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty() && self.by_name.is_empty()
    }
}

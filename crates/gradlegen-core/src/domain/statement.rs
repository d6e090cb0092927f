//! Statement trees for task and block customizations.
//!
//! Callers describe "what to do inside this block" through the mutator API on
//! [`StatementBlock`] (`set`, `invoke`, `nested`). Internally everything is a
//! plain tagged tree — no stateful callback objects — so merging repeated
//! customizations of the same block is a tree merge keyed by block name.

/// One statement inside a customization block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `target = value`. The value is an opaque, caller-rendered token.
    Assignment { target: String, value: String },
    /// A method call. Arguments are opaque tokens, rendered per dialect.
    Invocation { target: String, args: Vec<String> },
    /// A nested `name { … }` block.
    Nested(StatementBlock),
}

/// An ordered list of statements under a named block.
///
/// Adding a nested block whose name already exists under this parent does not
/// create a sibling: the children are appended to the existing block, in call
/// order. This holds across separate customization calls as well, because the
/// containers hand out the same underlying block each time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementBlock {
    pub(crate) name: String,
    pub(crate) statements: Vec<Statement>,
}

impl StatementBlock {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            statements: Vec::new(),
        }
    }

    /// Append an assignment statement.
    pub fn set(&mut self, target: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.statements.push(Statement::Assignment {
            target: target.into(),
            value: value.into(),
        });
        self
    }

    /// Append an invocation statement.
    pub fn invoke<I, S>(&mut self, target: impl Into<String>, args: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.statements.push(Statement::Invocation {
            target: target.into(),
            args: args.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Customize the nested block `name`, creating it on first use and
    /// merging into it on every subsequent call.
    pub fn nested(&mut self, name: &str, customize: impl FnOnce(&mut StatementBlock)) -> &mut Self {
        let existing = self.statements.iter_mut().find_map(|statement| match statement {
            Statement::Nested(block) if block.name == name => Some(block),
            _ => None,
        });
        match existing {
            Some(block) => customize(block),
            None => {
                let mut block = StatementBlock::new(name);
                customize(&mut block);
                self.statements.push(Statement::Nested(block));
            }
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

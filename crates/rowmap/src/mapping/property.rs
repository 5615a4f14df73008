use super::Actions;
use crate::{Result, Type, Value};

use std::borrow::Cow;

/// Assigns an already converted value to a property of `T`.
pub type Setter<T> = fn(&mut T, Value) -> Result<()>;

/// Declarative metadata for one property of a target type.
pub struct Property<T> {
    name: &'static str,
    ty: Type,
    nullable: bool,
    declared: &'static str,
    alias: Cow<'static, str>,
    actions: Actions,
    set: Setter<T>,
}

impl<T> Property<T> {
    /// Creates a property whose column alias defaults to its name.
    pub fn new(
        name: &'static str,
        ty: Type,
        nullable: bool,
        declared: &'static str,
        set: Setter<T>,
    ) -> Property<T> {
        Property {
            name,
            ty,
            nullable,
            declared,
            alias: Cow::Borrowed(name),
            actions: Actions::ALL,
            set,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<Cow<'static, str>>) -> Property<T> {
        self.alias = alias.into();
        self
    }

    pub fn with_actions(mut self, actions: Actions) -> Property<T> {
        self.actions = actions;
        self
    }

    /// The property's declared name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The type cells are converted to before the property is set.
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    /// The property's type as written in its declaration.
    pub fn declared(&self) -> &'static str {
        self.declared
    }

    /// The column alias the property binds to.
    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn actions(&self) -> Actions {
        self.actions
    }

    pub fn setter(&self) -> Setter<T> {
        self.set
    }

    pub(crate) fn set_alias(&mut self, alias: Cow<'static, str>) {
        self.alias = alias;
    }
}

impl<T> Clone for Property<T> {
    fn clone(&self) -> Self {
        Property {
            name: self.name,
            ty: self.ty.clone(),
            nullable: self.nullable,
            declared: self.declared,
            alias: self.alias.clone(),
            actions: self.actions,
            set: self.set,
        }
    }
}

impl<T> core::fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("Property")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("nullable", &self.nullable)
            .field("declared", &self.declared)
            .field("alias", &self.alias)
            .field("actions", &self.actions)
            .finish()
    }
}

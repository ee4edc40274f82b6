use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A shared, mutable handle to an [`Environment`].
///
/// Functions capture the environment that was current at their definition
/// site through this handle, so later assignments in that scope stay visible
/// to the closure. Captured environments may form reference cycles through
/// function values; the interpreter accepts that, no cycle collector runs.
pub type Env = Rc<RefCell<Environment>>;

/// A mapping from names to values with an optional enclosing scope.
///
/// Lookups walk the chain outward; writes always land in this scope.
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Env>,
}

impl Environment {
    /// Creates a fresh top-level environment.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::value::{core::Value, environment::Environment};
    ///
    /// let env = Environment::new();
    /// env.borrow_mut().set("x", Value::Integer(5));
    ///
    /// assert_eq!(env.borrow().get("x"), Some(Value::Integer(5)));
    /// assert_eq!(env.borrow().get("y"), None);
    /// ```
    #[must_use]
    pub fn new() -> Env {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates an environment whose lookups fall through to `outer`.
    ///
    /// Every function call allocates one of these around the function's
    /// captured environment.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::value::{core::Value, environment::Environment};
    ///
    /// let outer = Environment::new();
    /// outer.borrow_mut().set("x", Value::Integer(1));
    ///
    /// let inner = Environment::new_enclosed(&outer);
    /// inner.borrow_mut().set("y", Value::Integer(2));
    ///
    /// assert_eq!(inner.borrow().get("x"), Some(Value::Integer(1)));
    /// assert_eq!(outer.borrow().get("y"), None);
    /// ```
    #[must_use]
    pub fn new_enclosed(outer: &Env) -> Env {
        Rc::new(RefCell::new(Self { store: HashMap::new(),
                                    outer: Some(Rc::clone(outer)), }))
    }

    /// Returns the value bound to `name`, searching this scope and then the
    /// enclosing chain.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.store
            .get(name)
            .cloned()
            .or_else(|| self.outer.as_ref().and_then(|outer| outer.borrow().get(name)))
    }

    /// Binds `name` to `value` in this scope only.
    ///
    /// An existing binding with the same name in an enclosing scope is
    /// shadowed, not mutated.
    pub fn set(&mut self, name: &str, value: Value) {
        self.store.insert(name.to_string(), value);
    }
}

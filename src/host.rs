use std::collections::HashMap;
use std::fmt;

use log::{debug, trace, warn};

use crate::display::DateOffsetFormatter;
use crate::error::Error;

/// Name the dashboard looks up to turn a slider index into a date label.
pub const NUMBER_TO_DATE: &str = "numberToDate";

pub type Callback = Box<dyn Fn(f64) -> crate::Result<String> + Send + Sync>;

/// Named formatting callbacks handed to a host framework at start-up.
///
/// Nothing is registered implicitly; the host receives the registry by value and resolves
/// callbacks by name at render time.
#[derive(Default)]
pub struct FunctionRegistry {
    callbacks: HashMap<String, Callback>,
}

impl FunctionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding [`NUMBER_TO_DATE`] bound to the default 2020-01-01 formatter.
    pub fn with_defaults() -> Self {
        let mut callbacks: HashMap<String, Callback> = HashMap::new();
        let formatter = DateOffsetFormatter::default();
        callbacks.insert(
            NUMBER_TO_DATE.to_owned(),
            Box::new(move |value| formatter.format(value)),
        );
        Self { callbacks }
    }

    pub fn register<F>(&mut self, name: impl Into<String>, callback: F) -> crate::Result<()>
    where
        F: Fn(f64) -> crate::Result<String> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.callbacks.contains_key(&name) {
            warn!("Refusing to overwrite callback {name}");
            return Err(Error::DuplicateCallback(name));
        }

        debug!("Registering callback {name}");
        self.callbacks.insert(name, Box::new(callback));
        Ok(())
    }

    pub fn register_formatter(
        &mut self,
        name: impl Into<String>,
        formatter: DateOffsetFormatter,
    ) -> crate::Result<()> {
        self.register(name, move |value| formatter.format(value))
    }

    pub fn call(&self, name: &str, value: f64) -> crate::Result<String> {
        let Some(callback) = self.callbacks.get(name) else {
            warn!("No callback named {name}");
            return Err(Error::UnknownCallback(name.to_owned()));
        };

        trace!("{name}({value})");
        callback(value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.callbacks.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names = self.callbacks.keys().map(String::as_str).collect::<Vec<_>>();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("callbacks", &self.names())
            .finish()
    }
}

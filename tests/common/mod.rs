#![allow(dead_code)]

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use polyform::factory::{Element, ElementFactory};
use serde_json::Value;

/// What a [`RecordingFactory`] was asked to build and apply.
#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub element_type: String,
    pub args: Vec<Value>,
    pub applied: Vec<(String, Vec<Value>)>,
}

impl Recorded {
    pub fn applied_names(&self) -> Vec<&str> {
        self.applied.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn applied(&self, method: &str) -> Vec<&Vec<Value>> {
        self.applied
            .iter()
            .filter(|(n, _)| n == method)
            .map(|(_, a)| a)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boom(pub String);

impl fmt::Display for Boom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "boom: {}", self.0)
    }
}

/// Factory that records every call and renders `[type|arg,arg]` markers.
#[derive(Default)]
pub struct RecordingFactory {
    log: Rc<RefCell<Vec<Recorded>>>,
    /// Element types `create` returns `Ok(None)` for.
    pub silent: Vec<String>,
    /// Method names `apply` fails on.
    pub failing: Vec<String>,
}

impl RecordingFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> Vec<Recorded> {
        self.log.borrow().clone()
    }
}

pub struct RecordingElement {
    log: Rc<RefCell<Vec<Recorded>>>,
    index: usize,
    failing: Vec<String>,
}

impl ElementFactory for RecordingFactory {
    type Element = RecordingElement;
    type Error = Boom;

    fn create(&mut self, element_type: &str, args: &[Value]) -> Result<Option<RecordingElement>, Boom> {
        if element_type == "explode" {
            return Err(Boom(element_type.to_string()));
        }
        let mut log = self.log.borrow_mut();
        log.push(Recorded {
            element_type: element_type.to_string(),
            args: args.to_vec(),
            applied: vec![],
        });
        if self.silent.iter().any(|s| s == element_type) {
            return Ok(None);
        }
        Ok(Some(RecordingElement {
            log: Rc::clone(&self.log),
            index: log.len() - 1,
            failing: self.failing.clone(),
        }))
    }
}

impl Element for RecordingElement {
    type Error = Boom;

    fn apply(&mut self, method: &str, args: &[Value]) -> Result<(), Boom> {
        if self.failing.iter().any(|m| m == method) {
            return Err(Boom(method.to_string()));
        }
        self.log.borrow_mut()[self.index]
            .applied
            .push((method.to_string(), args.to_vec()));
        Ok(())
    }

    fn render(&self) -> String {
        let log = self.log.borrow();
        let recorded = &log[self.index];
        let args: Vec<String> = recorded
            .args
            .iter()
            .map(|v| v.as_str().map(str::to_string).unwrap_or_else(|| v.to_string()))
            .collect();
        format!("[{}|{}]", recorded.element_type, args.join(","))
    }
}

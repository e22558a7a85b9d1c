//! Collaborator traits the engine renders through.
//!
//! The engine never builds markup itself. It asks an [`ElementFactory`] for
//! one element per rendition, applies recorded modifiers to it by name, and
//! concatenates whatever [`Element::render`] returns. Errors raised by either
//! trait reach the caller unchanged.

use serde_json::Value;

use crate::locale::{LocaleSet, WireFormat};

/// Creates single renderable elements from a type and positional arguments.
pub trait ElementFactory {
    type Element: Element<Error = Self::Error>;
    type Error;

    /// Create an element.
    ///
    /// Returns `Ok(None)` for calls that change factory state but produce
    /// nothing renderable (binding a model, for instance). Modifiers are not
    /// applied in that case.
    fn create(&mut self, element_type: &str, args: &[Value]) -> Result<Option<Self::Element>, Self::Error>;

    /// Called by the engine whenever its locales or wire format are set, so
    /// factories that decode wire names read them the same way.
    fn configure(&mut self, _locales: &LocaleSet, _wire_format: WireFormat) {}
}

/// An element that accepts named method calls and renders to a string.
pub trait Element {
    type Error;

    /// Apply a named modifier with positional arguments.
    fn apply(&mut self, method: &str, args: &[Value]) -> Result<(), Self::Error>;

    fn render(&self) -> String;
}

impl<F: ElementFactory + ?Sized> ElementFactory for &mut F {
    type Element = F::Element;
    type Error = F::Error;

    fn create(&mut self, element_type: &str, args: &[Value]) -> Result<Option<Self::Element>, Self::Error> {
        (**self).create(element_type, args)
    }

    fn configure(&mut self, locales: &LocaleSet, wire_format: WireFormat) {
        (**self).configure(locales, wire_format)
    }
}

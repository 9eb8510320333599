//! Host Document Port - the page PhaseView renders into
//!
//! Implementations only need element lookup and template cloning; every
//! mutation is expressed on top of `element_mut`.

use thiserror::Error;

use crate::presentation::dom::{Element, Fragment, Node};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("Document has no element with id '{0}'")]
    MissingElement(String),
}

pub trait HostDocumentPort {
    fn element(&self, id: &str) -> Option<&Element>;

    fn element_mut(&mut self, id: &str) -> Option<&mut Element>;

    /// A fresh copy of the content of the `<template>` with `id`
    fn template(&self, id: &str) -> Option<Fragment>;

    fn contains(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    fn require_mut(&mut self, id: &str) -> Result<&mut Element, DocumentError> {
        self.element_mut(id)
            .ok_or_else(|| DocumentError::MissingElement(id.to_string()))
    }

    fn clear(&mut self, id: &str) -> Result<(), DocumentError> {
        self.require_mut(id)?.clear();
        Ok(())
    }

    fn set_text(&mut self, id: &str, text: &str) -> Result<(), DocumentError> {
        self.require_mut(id)?.set_text(text);
        Ok(())
    }

    fn append(&mut self, id: &str, node: Node) -> Result<(), DocumentError> {
        self.require_mut(id)?.append(node);
        Ok(())
    }

    fn append_fragment(&mut self, id: &str, fragment: Fragment) -> Result<(), DocumentError> {
        self.require_mut(id)?.append_fragment(fragment);
        Ok(())
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> Result<(), DocumentError> {
        self.require_mut(id)?.set_attr(name, value);
        Ok(())
    }

    fn inner_text(&self, id: &str) -> Option<String> {
        self.element(id).map(Element::inner_text)
    }
}

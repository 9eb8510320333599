//! In-memory host document
//!
//! Owns an element tree plus the page's `<template>` contents. Template
//! content is kept out of the tree so id lookups never match an element that
//! only exists inside a template.

use std::collections::BTreeMap;

use crate::ports::outbound::HostDocumentPort;
use crate::presentation::dom::{Element, Fragment, Node};
use crate::presentation::layout::DocumentLayout;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryDocument {
    root: Element,
    templates: BTreeMap<String, Fragment>,
}

impl MemoryDocument {
    pub fn from_root(root: Element) -> Self {
        Self {
            root,
            templates: BTreeMap::new(),
        }
    }

    /// The standard game page: every mount point in `layout`, mission
    /// indicators `1..=mission_count`, and the widget templates.
    pub fn game_page(layout: &DocumentLayout, mission_count: u8) -> Self {
        let indicators = (1..=mission_count).fold(
            Element::new("div").with_class("mission-indicators"),
            |row, n| {
                row.with_child(
                    Element::new("div")
                        .with_id(&layout.mission_indicator(n))
                        .with_class("mission-indicator"),
                )
            },
        );

        let root = Element::new("body")
            .with_child(Element::new("ol").with_id(&layout.player_order))
            .with_child(Element::new("h4").with_id(&layout.role_blurb))
            .with_child(indicators)
            .with_child(Element::new("pre").with_id(&layout.role_info))
            .with_child(
                Element::new("a")
                    .with_id(&layout.phase_tab)
                    .with_class("nav-link")
                    .with_text("Proposals"),
            )
            .with_child(Element::new("div").with_id(&layout.proposal_header))
            .with_child(Element::new("div").with_id(&layout.proposal_content))
            .with_child(Element::new("div").with_id(&layout.proposal_list))
            .with_child(Element::new("div").with_id(&layout.mission_body));

        let ids = &layout.templates;
        let mut document = Self::from_root(root);
        document.set_template(
            &ids.role_blurb,
            Fragment::new(vec![
                Element::new("span").with_class("role-name").into(),
                Element::new("span").with_class("team-tag").into(),
            ]),
        );
        document.set_template(
            &ids.proposal_picker,
            Fragment::new(vec![Element::new("select")
                .with_class("selectpicker")
                .with_attr("multiple", "multiple")
                .into()]),
        );
        document.set_template(
            &ids.vote_buttons,
            Fragment::new(vec![
                button("upvoteButton", "btn-success", "Upvote"),
                button("downvoteButton", "btn-danger", "Downvote"),
            ]),
        );
        document.set_template(
            &ids.on_mission,
            Fragment::new(vec![
                button("successButton", "btn-success", "Success"),
                button("failButton", "btn-danger", "Fail"),
                button("reverseButton", "btn-warning", "Reverse"),
            ]),
        );
        document.set_template(
            &ids.not_on_mission,
            Fragment::new(vec![Element::new("pre").into()]),
        );
        document.set_template(&ids.mission_passed, marker("mission-passed", "Passed"));
        document.set_template(&ids.mission_failed, marker("mission-failed", "Failed"));
        document
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn set_template(&mut self, id: &str, content: Fragment) {
        self.templates.insert(id.to_string(), content);
    }

    /// Append an empty `<div>` mount point to the root
    pub fn add_mount(&mut self, id: &str) {
        self.root.append(Element::new("div").with_id(id));
    }

    /// Remove an element or template by id
    pub fn remove_element(&mut self, id: &str) -> Option<Element> {
        if let Some(content) = self.templates.remove(id) {
            let mut template = Element::new("template").with_id(id);
            template.append_fragment(content);
            return Some(template);
        }
        self.root.remove(|el| el.id() == Some(id))
    }

    /// The tree followed by every template, deterministic for comparison
    pub fn to_html(&self) -> String {
        let mut html = self.root.to_html();
        for (id, content) in &self.templates {
            let mut template = Element::new("template").with_id(id);
            template.append_fragment(content.clone());
            html.push_str(&template.to_html());
        }
        html
    }
}

impl HostDocumentPort for MemoryDocument {
    fn element(&self, id: &str) -> Option<&Element> {
        if self.root.id() == Some(id) {
            return Some(&self.root);
        }
        self.root.find_by_id(id)
    }

    fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.root.id() == Some(id) {
            return Some(&mut self.root);
        }
        self.root.find_by_id_mut(id)
    }

    fn template(&self, id: &str) -> Option<Fragment> {
        self.templates.get(id).cloned()
    }
}

fn button(id: &str, style: &str, label: &str) -> Node {
    Element::new("button")
        .with_id(id)
        .with_class("btn")
        .with_class(style)
        .with_attr("type", "button")
        .with_text(label)
        .into()
}

fn marker(class: &str, label: &str) -> Fragment {
    Fragment::new(vec![Element::new("span")
        .with_class("mission-marker")
        .with_class(class)
        .with_attr("title", label)
        .into()])
}

//! Template library captured from the host document at construction

use crate::ports::outbound::HostDocumentPort;
use crate::presentation::dom::Fragment;
use crate::presentation::errors::IntegrationError;
use crate::presentation::layout::TemplateIds;

/// Immutable copies of every `<template>` PhaseView builds widgets from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateLibrary {
    pub(crate) role_blurb: Fragment,
    pub(crate) proposal_picker: Fragment,
    pub(crate) vote_buttons: Fragment,
    pub(crate) on_mission: Fragment,
    pub(crate) not_on_mission: Fragment,
    pub(crate) mission_passed: Fragment,
    pub(crate) mission_failed: Fragment,
}

impl TemplateLibrary {
    /// Capture every template, failing on the first one that is absent or
    /// lacks the part a widget builder fills in.
    pub fn capture<D>(document: &D, ids: &TemplateIds) -> Result<Self, IntegrationError>
    where
        D: HostDocumentPort + ?Sized,
    {
        let take = |name: &'static str, id: &str| {
            document
                .template(id)
                .ok_or_else(|| IntegrationError::MissingTemplate {
                    name,
                    id: id.to_string(),
                })
        };

        let role_blurb = take("role blurb", &ids.role_blurb)?;
        if role_blurb.count_tag("span") < 2 {
            return Err(malformed("role blurb", &ids.role_blurb, "pair of <span> slots"));
        }

        let proposal_picker = take("proposal picker", &ids.proposal_picker)?;
        if proposal_picker.find_tag("select").is_none() {
            return Err(malformed("proposal picker", &ids.proposal_picker, "<select>"));
        }

        let not_on_mission = take("not-on-mission panel", &ids.not_on_mission)?;
        if not_on_mission.find_tag("pre").is_none() {
            return Err(malformed("not-on-mission panel", &ids.not_on_mission, "<pre>"));
        }

        Ok(Self {
            role_blurb,
            proposal_picker,
            vote_buttons: take("vote buttons", &ids.vote_buttons)?,
            on_mission: take("on-mission panel", &ids.on_mission)?,
            not_on_mission,
            mission_passed: take("mission passed marker", &ids.mission_passed)?,
            mission_failed: take("mission failed marker", &ids.mission_failed)?,
        })
    }
}

fn malformed(name: &'static str, id: &str, missing: &'static str) -> IntegrationError {
    IntegrationError::MalformedTemplate {
        name,
        id: id.to_string(),
        missing,
    }
}

//! Element ids PhaseView expects in the host document
//!
//! Defaults match the standard game page. A host with different ids can
//! supply its own layout through configuration.

use serde::{Deserialize, Serialize};

/// The six regions PhaseView renders phase content into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    PlayerOrder,
    RoleInfo,
    ProposalHeader,
    ProposalContent,
    ProposalList,
    MissionBody,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::PlayerOrder,
        Region::RoleInfo,
        Region::ProposalHeader,
        Region::ProposalContent,
        Region::ProposalList,
        Region::MissionBody,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Region::PlayerOrder => "player order",
            Region::RoleInfo => "role info",
            Region::ProposalHeader => "proposal header",
            Region::ProposalContent => "proposal content",
            Region::ProposalList => "proposal list",
            Region::MissionBody => "mission body",
        }
    }
}

/// Ids of the `<template>` elements widgets are cloned from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TemplateIds {
    pub role_blurb: String,
    pub proposal_picker: String,
    pub vote_buttons: String,
    pub on_mission: String,
    pub not_on_mission: String,
    pub mission_passed: String,
    pub mission_failed: String,
}

impl Default for TemplateIds {
    fn default() -> Self {
        Self {
            role_blurb: "roleBlurbTemplate".into(),
            proposal_picker: "proposerSelectionListTemplate".into(),
            vote_buttons: "voteButtonsTemplate".into(),
            on_mission: "onMissionTemplate".into(),
            not_on_mission: "notOnMissionTemplate".into(),
            mission_passed: "missionPassedTemplate".into(),
            mission_failed: "missionFailedTemplate".into(),
        }
    }
}

impl TemplateIds {
    pub fn all(&self) -> [(&'static str, &str); 7] {
        [
            ("role blurb", &self.role_blurb),
            ("proposal picker", &self.proposal_picker),
            ("vote buttons", &self.vote_buttons),
            ("on-mission panel", &self.on_mission),
            ("not-on-mission panel", &self.not_on_mission),
            ("mission passed marker", &self.mission_passed),
            ("mission failed marker", &self.mission_failed),
        ]
    }
}

/// Mount point ids in the host document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentLayout {
    pub player_order: String,
    pub role_info: String,
    pub proposal_header: String,
    pub proposal_content: String,
    pub proposal_list: String,
    pub mission_body: String,
    /// Label of the proposal/vote tab
    pub phase_tab: String,
    pub role_blurb: String,
    /// Mission indicator ids are `{prefix}{n}{suffix}`, n starting at 1
    pub mission_indicator_prefix: String,
    pub mission_indicator_suffix: String,
    pub templates: TemplateIds,
}

impl Default for DocumentLayout {
    fn default() -> Self {
        Self {
            player_order: "playerOrderLocation".into(),
            role_info: "roleInformationLocation".into(),
            proposal_header: "proposalVoteHeader".into(),
            proposal_content: "proposalVoteContent".into(),
            proposal_list: "proposalListLocation".into(),
            mission_body: "missionBodyLocation".into(),
            phase_tab: "proposalVoteTab".into(),
            role_blurb: "roleBlurbLocation".into(),
            mission_indicator_prefix: "m".into(),
            mission_indicator_suffix: "Indicator".into(),
            templates: TemplateIds::default(),
        }
    }
}

impl DocumentLayout {
    pub fn region(&self, region: Region) -> &str {
        match region {
            Region::PlayerOrder => &self.player_order,
            Region::RoleInfo => &self.role_info,
            Region::ProposalHeader => &self.proposal_header,
            Region::ProposalContent => &self.proposal_content,
            Region::ProposalList => &self.proposal_list,
            Region::MissionBody => &self.mission_body,
        }
    }

    pub fn mission_indicator(&self, mission: u8) -> String {
        format!(
            "{}{}{}",
            self.mission_indicator_prefix, mission, self.mission_indicator_suffix
        )
    }

    /// Every mount point that must exist, labelled for error messages
    pub fn required_mounts(&self, mission_count: u8) -> Vec<(&'static str, String)> {
        let mut mounts: Vec<(&'static str, String)> = Region::ALL
            .iter()
            .map(|region| (region.label(), self.region(*region).to_string()))
            .collect();
        mounts.push(("phase tab", self.phase_tab.clone()));
        mounts.push(("role blurb", self.role_blurb.clone()));
        mounts.extend((1..=mission_count).map(|n| ("mission indicator", self.mission_indicator(n))));
        mounts
    }
}

//! Widget builders
//!
//! Each builder clones a captured template and fills it with phase data.
//! Nothing is shared between two builds of the same widget.

use thavalon_domain::{MissionResult, PlayerName, RoleInfo};

use crate::presentation::components::templates::TemplateLibrary;
use crate::presentation::dom::{Element, Fragment};
use crate::presentation::helpers::text;

/// Id the proposal picker's `<select>` carries once mounted
pub const PICKER_ID: &str = "proposedPlayerList";
/// Id of the wrapper around the mounted vote buttons
pub const VOTE_BUTTONS_ID: &str = "voteButtonPanel";
/// Id of the wrapper around the mounted mission card buttons
pub const CARD_PANEL_ID: &str = "missionCardPanel";

const MAX_OPTIONS_ATTR: &str = "data-max-options";
const SELECTED_ATTR: &str = "selected";

pub fn role_blurb(templates: &TemplateLibrary, role: &RoleInfo) -> Fragment {
    let mut blurb = templates.role_blurb.clone();
    if let Some(name_slot) = blurb.find_nth_tag_mut("span", 0) {
        name_slot.set_text(&text::role_sentence(&role.role_name));
    }
    if let Some(team_slot) = blurb.find_nth_tag_mut("span", 1) {
        team_slot.set_text(&text::team_tag(role.team));
        team_slot.add_class(text::team_class(role.team));
    }
    blurb
}

/// Multi-select picker with one option per player, capped at `cap`
/// selections. Names in `preselected` start selected.
pub fn proposal_picker(
    templates: &TemplateLibrary,
    players: &[PlayerName],
    cap: usize,
    preselected: &[PlayerName],
) -> Fragment {
    let mut picker = templates.proposal_picker.clone();
    if let Some(select) = picker.find_mut(|el| el.tag == "select") {
        select.set_attr("id", PICKER_ID);
        select.set_attr(MAX_OPTIONS_ATTR, &cap.to_string());
        select.clear();
        for name in players {
            let mut option = Element::new("option")
                .with_attr("value", name)
                .with_text(name);
            if preselected.contains(name) {
                option.set_attr(SELECTED_ATTR, SELECTED_ATTR);
            }
            select.append(option);
        }
    }
    picker
}

pub fn vote_buttons(templates: &TemplateLibrary) -> Fragment {
    wrapped(VOTE_BUTTONS_ID, templates.vote_buttons.clone())
}

pub fn on_mission_panel(templates: &TemplateLibrary) -> Fragment {
    wrapped(CARD_PANEL_ID, templates.on_mission.clone())
}

/// Template content inside a `<div>` the interactions can look up by id
fn wrapped(id: &str, content: Fragment) -> Fragment {
    let mut wrapper = Element::new("div").with_id(id);
    wrapper.append_fragment(content);
    Fragment::new(vec![wrapper.into()])
}

pub fn spectator_panel(templates: &TemplateLibrary, members: &[PlayerName]) -> Fragment {
    let mut panel = templates.not_on_mission.clone();
    if let Some(pre) = panel.find_mut(|el| el.tag == "pre") {
        pre.set_text(&text::spectating_sentence(members));
    }
    panel
}

pub fn mission_marker(templates: &TemplateLibrary, result: MissionResult) -> Fragment {
    match result {
        MissionResult::Pass => templates.mission_passed.clone(),
        MissionResult::Fail => templates.mission_failed.clone(),
    }
}

/// `<ul>` with one `<li>` per name, in order
pub fn name_list(names: &[PlayerName]) -> Element {
    names.iter().fold(Element::new("ul"), |list, name| {
        list.with_child(Element::new("li").with_text(name))
    })
}

// ---------------------------------------------------------------------------
// Picker state (read from and written to the mounted <select>)
// ---------------------------------------------------------------------------

/// Result of toggling a picker option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerChange {
    Changed,
    Unchanged,
    /// Selecting would exceed the cap
    Refused,
    /// No option carries that name
    NoSuchOption,
}

pub fn picker_cap(select: &Element) -> usize {
    select
        .attr(MAX_OPTIONS_ATTR)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(0)
}

pub fn selected_players(select: &Element) -> Vec<PlayerName> {
    select
        .find_all(|el| el.tag == "option" && el.has_attr(SELECTED_ATTR))
        .into_iter()
        .filter_map(|option| option.attr("value").map(str::to_string))
        .collect()
}

pub fn select_option(select: &mut Element, name: &str) -> PickerChange {
    let cap = picker_cap(select);
    let selected = selected_players(select).len();
    let Some(option) = select.find_mut(|el| el.tag == "option" && el.attr("value") == Some(name))
    else {
        return PickerChange::NoSuchOption;
    };
    if option.has_attr(SELECTED_ATTR) {
        return PickerChange::Unchanged;
    }
    if selected >= cap {
        return PickerChange::Refused;
    }
    option.set_attr(SELECTED_ATTR, SELECTED_ATTR);
    PickerChange::Changed
}

pub fn deselect_option(select: &mut Element, name: &str) -> PickerChange {
    match select.find_mut(|el| el.tag == "option" && el.attr("value") == Some(name)) {
        Some(option) => {
            if option.remove_attr(SELECTED_ATTR).is_some() {
                PickerChange::Changed
            } else {
                PickerChange::Unchanged
            }
        }
        None => PickerChange::NoSuchOption,
    }
}

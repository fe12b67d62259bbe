use super::ui::{UiLayout, UiNode};

/// One member row of the party panel.
#[derive(Clone, Debug, PartialEq)]
pub struct PartyEntry {
    pub player_name: String,
    pub zone_name: Option<String>,
    pub teleport: Option<UiNode>,
}

impl PartyEntry {
    /// Reads one entry; `None` when it has no name element.
    pub fn from_node(entry: &UiNode, layout: &UiLayout) -> Option<Self> {
        let player_name = entry.resolve(&layout.entry_name)?.text()?.trim().to_string();
        let zone_name = entry
            .resolve(&layout.entry_zone)
            .and_then(UiNode::text)
            .map(str::to_string);
        let teleport = entry.resolve(&layout.entry_teleport).cloned();

        Some(Self {
            player_name,
            zone_name,
            teleport,
        })
    }

    /// Teleport control, only while it is shown.
    pub fn teleport_button(&self) -> Option<&UiNode> {
        self.teleport.as_ref().filter(|node| node.visible)
    }
}

fn entries<'a>(panel: &'a UiNode, layout: &'a UiLayout) -> impl Iterator<Item = PartyEntry> + 'a {
    panel
        .resolve(&layout.party_entries)
        .into_iter()
        .flat_map(|list| list.children.iter())
        .filter_map(|entry| PartyEntry::from_node(entry, layout))
}

/// Names of every party member listed in `panel`.
pub fn party_members(panel: &UiNode, layout: &UiLayout) -> Vec<String> {
    entries(panel, layout)
        .map(|entry| entry.player_name)
        .filter(|name| !name.is_empty() && !name.eq_ignore_ascii_case(&layout.party_header))
        .collect()
}

/// The entry for `name` (case-insensitive), if listed.
pub fn leader_entry(panel: &UiNode, layout: &UiLayout, name: &str) -> Option<PartyEntry> {
    if name.is_empty() {
        return None;
    }
    entries(panel, layout).find(|entry| entry.player_name.eq_ignore_ascii_case(name))
}

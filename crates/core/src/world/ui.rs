use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{ScreenPoint, ScreenRect};

/// One element of the host's UI tree.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiNode {
    pub text: Option<String>,
    pub visible: bool,
    pub rect: ScreenRect,
    pub children: Vec<UiNode>,
}

impl UiNode {
    /// Visible node without text.
    pub fn container(children: Vec<UiNode>) -> Self {
        Self {
            text: None,
            visible: true,
            rect: ScreenRect::default(),
            children,
        }
    }

    /// Visible text node.
    pub fn label(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            visible: true,
            ..Self::default()
        }
    }

    /// Visible clickable node.
    pub fn button(text: impl Into<String>, rect: ScreenRect) -> Self {
        Self {
            text: Some(text.into()),
            visible: true,
            rect,
            children: Vec::new(),
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Click target (center of the rectangle), client-relative.
    pub fn click_point(&self) -> ScreenPoint {
        self.rect.center()
    }

    pub fn child(&self, index: usize) -> Option<&UiNode> {
        self.children.get(index)
    }

    /// Walks `path` from this node. Out-of-range indices yield `None`.
    pub fn resolve(&self, path: &UiPath) -> Option<&UiNode> {
        path.indices
            .iter()
            .try_fold(self, |node, &index| node.child(index))
    }
}

/// Named chain of child indices into the UI tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiPath {
    pub name: Cow<'static, str>,
    pub indices: Vec<usize>,
}

impl UiPath {
    pub fn new(name: impl Into<Cow<'static, str>>, indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            name: name.into(),
            indices: indices.into_iter().collect(),
        }
    }
}

impl fmt::Display for UiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:?}", self.name, self.indices)
    }
}

/// Where the pieces of the host UI the bot reads live.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiLayout {
    /// From the party panel to the list of member entries.
    pub party_entries: UiPath,
    /// Relative to one entry.
    pub entry_name: UiPath,
    pub entry_zone: UiPath,
    pub entry_teleport: UiPath,
    /// From the popup window to its dialog box.
    pub popup_dialog: UiPath,
    /// Relative to the dialog box.
    pub popup_message: UiPath,
    pub popup_confirm: UiPath,
    pub teleport_prompt: String,
    pub party_header: String,
}

impl UiLayout {
    pub const DEFAULT_TELEPORT_PROMPT: &'static str =
        "Are you sure you want to teleport to this player's location?";
    pub const DEFAULT_PARTY_HEADER: &'static str = "Party";
}

impl Default for UiLayout {
    fn default() -> Self {
        Self {
            party_entries: UiPath::new("party.entries", [0, 0]),
            entry_name: UiPath::new("party.entry.name", [0]),
            entry_zone: UiPath::new("party.entry.zone", [3]),
            entry_teleport: UiPath::new("party.entry.teleport", [4]),
            popup_dialog: UiPath::new("popup.dialog", [0, 0]),
            popup_message: UiPath::new("popup.message", [0]),
            popup_confirm: UiPath::new("popup.confirm", [3, 0]),
            teleport_prompt: Self::DEFAULT_TELEPORT_PROMPT.to_string(),
            party_header: Self::DEFAULT_PARTY_HEADER.to_string(),
        }
    }
}

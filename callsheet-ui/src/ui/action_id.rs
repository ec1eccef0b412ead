//! Typed action identifiers for the keybinding system.
//!
//! Each layer in `keybindings.toml` names its actions as strings; they are
//! parsed once at load time into these enums.

/// Panes reachable from a global switch binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaneId {
    Header,
    Crew,
    CallTimes,
    Schedule,
    Talent,
    Locations,
    Notes,
    Advance,
    Radio,
    Preview,
}

impl PaneId {
    /// Order used by next/previous pane cycling.
    pub const ALL: [PaneId; 10] = [
        PaneId::Header,
        PaneId::Crew,
        PaneId::CallTimes,
        PaneId::Schedule,
        PaneId::Talent,
        PaneId::Locations,
        PaneId::Notes,
        PaneId::Advance,
        PaneId::Radio,
        PaneId::Preview,
    ];

    /// Id of the pane registered in the `PaneManager`
    pub fn pane_id(self) -> &'static str {
        match self {
            PaneId::Header => "header",
            PaneId::Crew => "crew",
            PaneId::CallTimes => "call_times",
            PaneId::Schedule => "schedule",
            PaneId::Talent => "talent",
            PaneId::Locations => "locations",
            PaneId::Notes => "notes",
            PaneId::Advance => "advance",
            PaneId::Radio => "radio",
            PaneId::Preview => "preview",
        }
    }

    pub fn from_pane_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.pane_id() == id)
    }
}

macro_rules! define_action_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $variant:ident => $str:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant, )*
        }
        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $str, )*
                }
            }
            pub fn from_str(s: &str) -> Option<Self> {
                match s {
                    $( $str => Some($name::$variant), )*
                    _ => None,
                }
            }
        }
    }
}

/// Global layer actions (available in every pane)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalActionId {
    Quit,
    Save,
    Export,
    Email,
    ShareLink,
    NewSheet,
    Help,
    NextPane,
    PrevPane,
    RefreshScreen,
    SwitchPane(PaneId),
}

impl GlobalActionId {
    pub fn as_str(&self) -> &'static str {
        match self {
            GlobalActionId::Quit => "quit",
            GlobalActionId::Save => "save",
            GlobalActionId::Export => "export",
            GlobalActionId::Email => "email",
            GlobalActionId::ShareLink => "share_link",
            GlobalActionId::NewSheet => "new_sheet",
            GlobalActionId::Help => "help",
            GlobalActionId::NextPane => "next_pane",
            GlobalActionId::PrevPane => "prev_pane",
            GlobalActionId::RefreshScreen => "refresh_screen",
            GlobalActionId::SwitchPane(pane) => match pane {
                PaneId::Header => "switch:header",
                PaneId::Crew => "switch:crew",
                PaneId::CallTimes => "switch:call_times",
                PaneId::Schedule => "switch:schedule",
                PaneId::Talent => "switch:talent",
                PaneId::Locations => "switch:locations",
                PaneId::Notes => "switch:notes",
                PaneId::Advance => "switch:advance",
                PaneId::Radio => "switch:radio",
                PaneId::Preview => "switch:preview",
            },
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        if let Some(pane) = s.strip_prefix("switch:") {
            return PaneId::from_pane_id(pane).map(GlobalActionId::SwitchPane);
        }
        match s {
            "quit" => Some(GlobalActionId::Quit),
            "save" => Some(GlobalActionId::Save),
            "export" => Some(GlobalActionId::Export),
            "email" => Some(GlobalActionId::Email),
            "share_link" => Some(GlobalActionId::ShareLink),
            "new_sheet" => Some(GlobalActionId::NewSheet),
            "help" => Some(GlobalActionId::Help),
            "next_pane" => Some(GlobalActionId::NextPane),
            "prev_pane" => Some(GlobalActionId::PrevPane),
            "refresh_screen" => Some(GlobalActionId::RefreshScreen),
            _ => None,
        }
    }
}

define_action_enum! {
    /// Header form layer actions
    pub enum HeaderActionId {
        Prev => "prev",
        Next => "next",
        Top => "top",
        Bottom => "bottom",
        Edit => "edit",
        LoadLogo => "load_logo",
        ClearLogo => "clear_logo",
    }
}

define_action_enum! {
    /// Row table actions, shared by the list, ordered_list and schedule layers
    pub enum TableActionId {
        Up => "up",
        Down => "down",
        Left => "left",
        Right => "right",
        Top => "top",
        Bottom => "bottom",
        Edit => "edit",
        Add => "add",
        AddBanner => "add_banner",
        AddMove => "add_move",
        Remove => "remove",
        MoveUp => "move_up",
        MoveDown => "move_down",
    }
}

define_action_enum! {
    /// Print preview layer actions
    pub enum PreviewActionId {
        Up => "up",
        Down => "down",
        PageUp => "page_up",
        PageDown => "page_down",
        Top => "top",
        Bottom => "bottom",
        Print => "print",
    }
}

define_action_enum! {
    /// Help layer actions
    pub enum HelpActionId {
        Close => "close",
        Up => "up",
        Down => "down",
        Top => "top",
        Bottom => "bottom",
    }
}

define_action_enum! {
    /// Confirm dialog layer actions
    pub enum ConfirmActionId {
        Confirm => "confirm",
        Cancel => "cancel",
        Left => "left",
        Right => "right",
        Toggle => "toggle",
    }
}

define_action_enum! {
    /// Mode layer actions (text_edit)
    pub enum ModeActionId {
        TextConfirm => "text:confirm",
        TextCancel => "text:cancel",
    }
}

/// Any action a layer can resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionId {
    Global(GlobalActionId),
    Mode(ModeActionId),
    Header(HeaderActionId),
    Table(TableActionId),
    Preview(PreviewActionId),
    Help(HelpActionId),
    Confirm(ConfirmActionId),
}

impl ActionId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionId::Global(a) => a.as_str(),
            ActionId::Mode(a) => a.as_str(),
            ActionId::Header(a) => a.as_str(),
            ActionId::Table(a) => a.as_str(),
            ActionId::Preview(a) => a.as_str(),
            ActionId::Help(a) => a.as_str(),
            ActionId::Confirm(a) => a.as_str(),
        }
    }
}

/// Parse an action identifier from layer name and action string
pub fn parse_action_id(layer: &str, action: &str) -> Option<ActionId> {
    match layer {
        "global" => GlobalActionId::from_str(action).map(ActionId::Global),
        "header" => HeaderActionId::from_str(action).map(ActionId::Header),
        "list" | "ordered_list" | "schedule" => TableActionId::from_str(action).map(ActionId::Table),
        "preview" => PreviewActionId::from_str(action).map(ActionId::Preview),
        "help" => HelpActionId::from_str(action).map(ActionId::Help),
        "confirm" => ConfirmActionId::from_str(action).map(ActionId::Confirm),
        "text_edit" => ModeActionId::from_str(action).map(ActionId::Mode),
        "logo" => None, // No actions, handled via raw input
        _ => None,
    }
}

use crate::cards::{AffordanceId, Control};
use dispensa_catalog::CatalogSeed;

/// Commands to execute (user actions → state transitions or background tasks)
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    SelectNext,
    SelectPrevious,
    NavigateToTop,
    NavigateToBottom,

    // Navigation
    NavigateBack,
    OpenProducts {
        category: Option<String>,
    },

    // Data loading
    LoadCatalog,

    // Filter mode
    EnterFilterMode,
    ExitFilterMode,
    AppendFilterChar(char),
    DeleteFilterChar,
    NextFilterField,
    ClearFilter,

    // Card affordances and popup controls
    TriggerAffordance(AffordanceId),
    PressControl(Control),

    // Edit popup form
    AppendFormChar(char),
    DeleteFormChar,
    NextFormField,

    // Logout
    InitiateLogout,

    ToggleHelp,

    // Log screen
    NavigateToLogs,
    ScrollLogsUp,
    ScrollLogsDown,
    ScrollLogsPageUp,
    ScrollLogsPageDown,
    ScrollLogsToTop,
    ScrollLogsToBottom,

    // Key sequence state
    SetPendingKey(char),
    ClearPendingKey,

    // System
    Quit,
}

/// Events from background tasks (responses to commands)
#[derive(Debug, Clone)]
pub enum DataEvent {
    CatalogLoaded { seed: CatalogSeed },

    // Errors
    LoadError { error: String },
}

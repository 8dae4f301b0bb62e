use crate::domain::AddMode;

/// One user input event. Each widget interaction maps to exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Kind, horizon or rate moved to the params passed alongside the action
    ParamsChanged,
    /// "Add to Chart"
    AddCurrent,
    /// "Reset Chart"
    Reset,
    SetAddMode(AddMode),
}

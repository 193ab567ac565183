use crate::delegation::SelectorContext;

/// Application actions triggered by user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ShowMessage(String),
    ClearPopup,

    // Confirmation screen
    FocusNextLink,
    FocusPrevLink,
    OpenFocusedLink,
    CopyFocusedLink,
    ShowEarnRewardsInfo,
    OpenLearnMore,

    // Delegation selector
    OpenSelector(SelectorContext),
    SelectorInput(char),
    SelectorBackspace,
    SelectorClearQuery,
    SelectorNext,
    SelectorPrev,
    SelectorConfirm,
    SelectorCancel,
}

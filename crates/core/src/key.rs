//! Named keyboard keys understood by the input driver.
use serde::{Deserialize, Serialize};

/// Closed set of keys the bot can press.
///
/// Settings files carry the display name (`"Space"`, `"T"`, `"F5"`), parsed
/// case-insensitively.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Key {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    #[strum(serialize = "0")]
    Digit0,
    #[strum(serialize = "1")]
    Digit1,
    #[strum(serialize = "2")]
    Digit2,
    #[strum(serialize = "3")]
    Digit3,
    #[strum(serialize = "4")]
    Digit4,
    #[strum(serialize = "5")]
    Digit5,
    #[strum(serialize = "6")]
    Digit6,
    #[strum(serialize = "7")]
    Digit7,
    #[strum(serialize = "8")]
    Digit8,
    #[strum(serialize = "9")]
    Digit9,
    Space,
    Escape,
    Enter,
    Tab,
    Backspace,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    Shift,
    Control,
    Alt,
}

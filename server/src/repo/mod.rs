//! Data access over the two persistent collections, plus the ownership
//! rule that gates recipe mutations. All functions take an explicit
//! connection; nothing here holds global state.

pub mod comments;
pub mod recipes;

//! Stores the session functionality shared between different front ends
//! NB: The assumption is made that a tokio runtime has already been started
//! before any functions from this library are called

#![warn(unused_crate_dependencies)]


mod client;

pub use client::{
    assistant::TalentAssistant, AuthSettings, Client, LoginResult, UiCallBack,
};

//! photobook
//!
//! Terminal viewer for a paged photo book. Pages advance on their own,
//! pause as soon as the reader interacts, and resume after a quiet spell.
//!
//! The crate follows a Pure Core / Impure Shell split: [`viewer`] holds the
//! navigation, autoplay and input rules and never touches a clock or the
//! terminal; [`view`] owns the terminal and feeds the core events and time.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod view;
pub mod viewer;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;

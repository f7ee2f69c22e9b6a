//! Internal test modules - whitebox tests with crate access
//!
//! Harness-driven acceptance tests exercise the full shell (key, mouse and
//! focus handling, rendering, content reloads) against a `TestBackend` with
//! a virtual clock.

mod acceptance_rendering;

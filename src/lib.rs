//! Headless seat-planner canvas engine.
//!
//! This crate owns the editing model for a pannable, zoomable seat-layout
//! canvas: translating pointer events into scene mutations, maintaining
//! viewport state for pan/zoom, hit-testing shapes and resize handles,
//! generating bulk layouts and derived seat charts, and writing the final
//! seat count back to the event store. The host layer is responsible only
//! for wiring input events to the engine, rendering the scene from the
//! engine's state, and reacting to the returned [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`session`] | Host-facing session: init, auto-build, save |
//! | [`engine`] | Top-level [`engine::Editor`] and the gesture state machine |
//! | [`scene`] | Shape arena and seat-unit counting |
//! | [`viewport`] | Pan/zoom viewport, coordinate transform, grid snapping |
//! | [`input`] | Tool palette, buttons and the active-gesture union |
//! | [`hit`] | Hit-testing shape bodies and resize handles |
//! | [`chart`] | Read-only auto-build seat chart |
//! | [`store`] | Event store interface and in-memory backend |
//! | [`consts`] | Shared numeric constants (grid pitch, zoom limits, etc.) |

pub mod chart;
pub mod consts;
pub mod engine;
pub mod hit;
pub mod input;
pub mod scene;
pub mod session;
pub mod store;
pub mod viewport;

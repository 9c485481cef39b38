//! Bench device implementations
//!
//! This crate provides host-testable implementations of the device
//! traits defined in plyno-core:
//!
//! - Dirt detector (scripted readings)
//! - Drum engine (op log and runtime accounting)
//! - Water pump (drum volume model)
//!
//! Real board drivers live with the firmware; these stand-ins let a
//! full wash cycle run on the bench, including injected faults.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod detector;
pub mod engine;
pub mod pump;

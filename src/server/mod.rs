//! Server application core modules.
//!
//! This module contains all server-side functionality for the givebridge
//! application: HTTP routing, application intake and review, donor/student
//! record management, donated-inventory tracking, and the image pipeline for
//! donated item photos.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod events;
pub mod image;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod storage;

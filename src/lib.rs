pub mod command;
pub mod commands;
pub mod config;
pub mod controller;
pub mod error;
pub mod installers;
pub mod package;
pub mod registry;
pub mod runtime;
pub mod scratch;

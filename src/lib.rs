//! Draws the transgender pride flag in the terminal.
//!
//! The flag is five stripes (blue, pink, white, pink, blue) sized with fixed
//! proportions, optionally with a border, a centered message and a date stamp.
//!
//! # Modules
//!
//! - `stripes`: Proportional stripe allocation
//! - `render`: Flag geometry, producing colored lines
//! - `format`: Writing rendered lines as ANSI text, plain text or JSON
//! - `options`: Resolved rendering options and flag dimensions
//! - `preset`: Named flag sizes
//! - `palette`: Stripe, border and message colors
//! - `clock`: Date stamp formatting
//! - `terminal`: Terminal size detection
//! - `confirm`: Confirmation before drawing an oversized flag
//! - `sanitize`: Lenient parsing and length limits for user input
//! - `commands`: Command line definition
//! - `configuration`: Defaults read from the configuration file

pub mod clock;
pub mod commands;
pub mod configuration;
pub mod confirm;
pub mod error;
pub mod exit_codes;
pub mod format;
pub mod options;
pub mod palette;
pub mod preset;
pub mod render;
pub mod sanitize;
pub mod stripes;
pub mod terminal;

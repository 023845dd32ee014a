//! Command handlers, one module per subcommand.
//!
//! Handlers translate parsed arguments into core calls and render the
//! result. Business rules stay in `odoo-scaffold-core`.

pub mod completions;
pub mod config;
pub mod init;
pub mod names;
pub mod new;

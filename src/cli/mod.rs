//! CLI module - Command-line interface for Userbook
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

/// Userbook - a small user/address directory
#[derive(Parser)]
#[command(name = "userbook")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Walk through the full create/read/update/delete cycle
    #[command(alias = "d")]
    Demo,

    /// Add a user, optionally with a postal address
    #[command(alias = "a")]
    Add {
        /// Display name
        name: String,
        /// Unique username
        username: String,
        /// Email address
        email: String,
        /// Postal address text to link to the user
        #[arg(long)]
        address: Option<String>,
    },

    /// List all users
    #[command(alias = "ls", alias = "l")]
    List,

    /// Show a single user by id or username
    #[command(alias = "i")]
    Show {
        /// User ID or username
        user: String,
    },

    /// Change a user's display name
    Rename {
        /// User ID
        id: i32,
        /// New display name
        name: String,
    },

    /// Remove a user (its address row is kept)
    #[command(alias = "rm", alias = "r")]
    Remove {
        /// User ID to remove
        id: i32,
    },

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

pub use commands::*;

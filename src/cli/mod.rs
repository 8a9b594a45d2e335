//! CLI module for the team registry
//!
//! - `serve`: HTTP service (default)
//! - `demo`: run a scripted team lifecycle and print result codes

pub mod demo;
pub mod serve;

use clap::{Parser, Subcommand};

/// Team Registry - authoritative player/team membership
#[derive(Parser)]
#[command(name = "team-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP service
    Serve,

    /// Run a scripted team lifecycle against an in-memory registry
    Demo(demo::DemoArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_demo_args() {
        let cli = Cli::parse_from(["team-registry", "demo", "--leader", "7", "--members", "8,9"]);

        match cli.command {
            Some(Command::Demo(args)) => {
                assert_eq!(args.leader, 7);
                assert_eq!(args.members, vec![8, 9]);
                assert_eq!(args.capacity, 5);
            }
            _ => panic!("expected demo command"),
        }
    }

    #[test]
    fn test_default_command_is_none() {
        let cli = Cli::parse_from(["team-registry"]);
        assert!(cli.command.is_none());
    }
}

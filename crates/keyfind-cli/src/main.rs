// ABOUTME: Entry point for the keyfind command-line tool.
// ABOUTME: Prints the first usable SSH public key from ~/.ssh, or a hint when none exists.

use clap::Parser;

#[derive(Parser)]
#[command(name = "keyfind", about = "Locate and print the current user's SSH public key")]
#[command(version)]
struct Cli {}

fn main() {
    // Diagnostics go to stderr; stdout is reserved for the key itself.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // No arguments beyond --help/--version; parsing rejects anything else.
    Cli::parse();

    match keyfind_ssh::find_public_key() {
        Ok(key) => {
            eprintln!("# Found SSH key: {}", key.path.display());
            println!("{}", key.content);
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            eprintln!();
            eprintln!("To generate a new SSH key, run:");
            eprintln!("  ssh-keygen -t ed25519 -C 'your-email@example.com'");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn accepts_an_empty_command_line() {
        assert!(Cli::try_parse_from(["keyfind"]).is_ok());
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["keyfind", "extra"]).is_err());
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["keyfind", "--ssh-dir", "/tmp"]).is_err());
    }
}

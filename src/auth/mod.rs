//! Shared-secret gate: nothing runs until the password checks out.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};

use crate::config::Config;

/// Compare the configured secret against the user-provided one. Prompts on
/// stderr when no password was passed on the command line. A mismatch stops
/// the whole run; this is the only fatal error class in the dashboard.
pub fn verify(cfg: &Config, provided: Option<&str>) -> Result<()> {
    let expected = cfg.get("DASHBOARD_PASSWORD").unwrap_or_default();
    let given = match provided {
        Some(p) => p.to_string(),
        None => prompt_password()?,
    };
    if !secret_matches(&expected, &given) {
        bail!("incorrect password, access denied");
    }
    Ok(())
}

/// An empty expected secret never matches.
pub fn secret_matches(expected: &str, input: &str) -> bool {
    !expected.is_empty() && expected == input.trim()
}

fn prompt_password() -> Result<String> {
    eprint!("Password: ");
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::secret_matches;

    #[test]
    fn matches_trimmed_input() {
        assert!(secret_matches("greenmovement", "greenmovement\n"));
        assert!(secret_matches("greenmovement", "greenmovement"));
    }

    #[test]
    fn rejects_wrong_or_empty_secrets() {
        assert!(!secret_matches("greenmovement", "green"));
        assert!(!secret_matches("", ""));
        assert!(!secret_matches("", "anything"));
    }
}

//! Master-email check
//!
//! Identity comes from the external provider; the only rule owned here is
//! which signed-in emails see every athlete instead of just their own.

use std::env;

const DEFAULT_MASTER_EMAILS: [&str; 1] = ["wesley@goon.com"];

/// The master list: `MASTER_EMAILS` (comma-separated) when set, otherwise the
/// built-in default. Entries are trimmed and lowercased.
pub fn master_emails() -> Vec<String> {
  match env::var("MASTER_EMAILS") {
    Ok(valor) if !valor.trim().is_empty() => valor
      .split(',')
      .map(|email| email.trim().to_lowercase())
      .filter(|email| !email.is_empty())
      .collect(),
    _ => DEFAULT_MASTER_EMAILS.iter().map(|email| email.to_string()).collect(),
  }
}

/// Case-insensitive membership test; a missing email is never a master.
pub fn is_master_email(email: Option<&str>) -> bool {
  let Some(email) = email else {
    return false;
  };
  if email.trim().is_empty() {
    return false;
  }
  master_emails().contains(&email.trim().to_lowercase())
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  #[test]
  #[serial]
  fn test_default_master_list() {
    temp_env::with_var("MASTER_EMAILS", None::<&str>, || {
      assert_eq!(master_emails(), vec!["wesley@goon.com".to_string()]);
      assert!(is_master_email(Some("WESLEY@goon.com")));
      assert!(!is_master_email(Some("bonatto@goon.com")));
    });
  }

  #[test]
  #[serial]
  fn test_env_override_trims_and_lowercases() {
    temp_env::with_var("MASTER_EMAILS", Some(" Ana@Goon.com , carlos@goon.com ,"), || {
      assert_eq!(
        master_emails(),
        vec!["ana@goon.com".to_string(), "carlos@goon.com".to_string()]
      );
      assert!(is_master_email(Some("ana@goon.com")));
      // The default is replaced, not extended
      assert!(!is_master_email(Some("wesley@goon.com")));
    });
  }

  #[test]
  #[serial]
  fn test_missing_email_is_never_master() {
    temp_env::with_var("MASTER_EMAILS", None::<&str>, || {
      assert!(!is_master_email(None));
      assert!(!is_master_email(Some("")));
      assert!(!is_master_email(Some("   ")));
    });
  }
}

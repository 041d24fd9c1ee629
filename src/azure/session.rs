//! Authorized session for one subscription.

use super::cli::CommandRunner;
use super::parse::parse_json;
use crate::error::{AzError, Result};
use serde::Deserialize;

/// Subscription id plus the authorization handle every later call goes through.
///
/// Built once per process and only ever borrowed afterwards.
pub struct Session {
    pub subscription_id: String,
    /// Display name reported by `az account show`.
    pub subscription_name: String,
    runner: Box<dyn CommandRunner>,
}

#[derive(Deserialize, Debug)]
struct AccountShape {
    id: String,
    #[serde(default)]
    name: String,
}

impl Session {
    /// Session without a credential handshake.
    pub fn new(
        subscription_id: &str,
        subscription_name: &str,
        runner: Box<dyn CommandRunner>,
    ) -> Session {
        Session {
            subscription_id: subscription_id.to_string(),
            subscription_name: subscription_name.to_string(),
            runner,
        }
    }

    /// Check the `az` login context can see `subscription_id` and build a session for it.
    ///
    /// # Returns
    /// * `Ok(Session)` - The subscription is reachable with the ambient credentials
    /// * `Err(AzError::Authentication)` - No usable credentials, or unknown subscription
    pub fn establish(subscription_id: &str, runner: Box<dyn CommandRunner>) -> Result<Session> {
        log::info!("#Start Session::establish({subscription_id})");
        let auth_error = |source: AzError| AzError::Authentication {
            subscription_id: subscription_id.to_string(),
            source: Box::new(source),
        };

        let output = runner
            .run(&format!(
                "az account show --subscription '{subscription_id}' --output json"
            ))
            .map_err(auth_error)?;
        let account: AccountShape = parse_json(&output, "account").map_err(auth_error)?;

        if !account.id.eq_ignore_ascii_case(subscription_id) {
            return Err(auth_error(AzError::Config(format!(
                "az returned subscription '{}'",
                account.id
            ))));
        }
        log::info!(
            "Authorized for subscription '{}' ({})",
            account.name,
            account.id
        );

        Ok(Session::new(&account.id, &account.name, runner))
    }

    /// Run an `az` command line with this session's credentials.
    pub(crate) fn az(&self, cmd: &str) -> Result<String> {
        self.runner.run(cmd)
    }

    /// GET an absolute ARM URL through `az rest`.
    pub(crate) fn get(&self, url: &str) -> Result<String> {
        self.az(&format!("az rest --method get --url '{url}' --output json"))
    }

    /// Absolute ARM URL for a path below this subscription.
    pub(crate) fn arm_url(&self, path: &str, api_version: &str) -> String {
        let separator = if path.contains('?') { '&' } else { '?' };
        format!(
            "{endpoint}/subscriptions/{sub}{path}{separator}api-version={api_version}",
            endpoint = crate::config::ARM_ENDPOINT,
            sub = self.subscription_id,
        )
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("subscription_id", &self.subscription_id)
            .field("subscription_name", &self.subscription_name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::azure::cli::fake::FakeRunner;

    const SUB: &str = "11111111-2222-3333-4444-555555555555";

    #[test]
    fn test_establish_reads_account() {
        let runner = FakeRunner::new().respond_file("az account show", "account_show.json");
        let session = Session::establish(SUB, Box::new(runner)).expect("session");
        assert_eq!(session.subscription_id, SUB);
        assert_eq!(session.subscription_name, "contoso-dev");
    }

    #[test]
    fn test_establish_not_logged_in() {
        let runner = FakeRunner::new().fail(
            "az account show",
            "Please run 'az login' to setup account.",
        );
        let err = Session::establish(SUB, Box::new(runner)).unwrap_err();
        assert!(matches!(err, AzError::Authentication { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_establish_garbage_output() {
        let runner = FakeRunner::new().respond("az account show", "not json");
        let err = Session::establish(SUB, Box::new(runner)).unwrap_err();
        assert!(matches!(err, AzError::Authentication { .. }));
    }

    #[test]
    fn test_establish_other_subscription() {
        let runner = FakeRunner::new().respond(
            "az account show",
            r#"{"id": "99999999-0000-0000-0000-000000000000", "name": "other"}"#,
        );
        let err = Session::establish(SUB, Box::new(runner)).unwrap_err();
        assert!(matches!(err, AzError::Authentication { .. }));
    }

    #[test]
    fn test_establish_quotes_subscription() {
        let runner = FakeRunner::new().respond_file(
            &format!("--subscription '{SUB}' --output json"),
            "account_show.json",
        );
        let calls = runner.calls();
        Session::establish(SUB, Box::new(runner)).expect("session");
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn test_arm_url() {
        let session = Session::new("s1", "dev", Box::new(FakeRunner::new()));
        assert_eq!(
            session.arm_url("/resourcegroups", "2021-04-01"),
            "https://management.azure.com/subscriptions/s1/resourcegroups?api-version=2021-04-01"
        );
        assert_eq!(
            session.arm_url("/resources?$filter=x", "2021-04-01"),
            "https://management.azure.com/subscriptions/s1/resources?$filter=x&api-version=2021-04-01"
        );
    }
}

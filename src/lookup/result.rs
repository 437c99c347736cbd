use serde::Deserialize;

/// `GET /users/{login}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserResult {
    pub name: Option<String>,
    #[serde(rename = "public_repos")]
    pub public_repo_count: u64,
}

/// `GET /repos/{owner}/{repo}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepoResult {
    pub name: String,
    #[serde(rename = "stargazers_count")]
    pub star_count: u64,
}

/// A fetched payload, tagged with the kind that was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    User(UserResult),
    Repo(RepoResult),
}

impl From<UserResult> for LookupResult {
    fn from(user: UserResult) -> Self {
        LookupResult::User(user)
    }
}

impl From<RepoResult> for LookupResult {
    fn from(repo: RepoResult) -> Self {
        LookupResult::Repo(repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialize_user_payload() {
        let payload = r#"{"login":"defunkt","name":"Chris Wanstrath","public_repos":107,"followers":22000}"#;

        let user: UserResult = serde_json::from_str(payload).unwrap();

        assert_eq!(user.name.as_deref(), Some("Chris Wanstrath"));
        assert_eq!(user.public_repo_count, 107);
    }

    #[test]
    fn should_accept_user_without_display_name() {
        let user: UserResult = serde_json::from_str(r#"{"name":null,"public_repos":3}"#).unwrap();

        assert_eq!(user.name, None);
    }

    #[test]
    fn should_deserialize_repo_payload() {
        let payload = r#"{"name":"node","full_name":"nodejs/node","stargazers_count":100000}"#;

        let repo: RepoResult = serde_json::from_str(payload).unwrap();

        assert_eq!(
            repo,
            RepoResult {
                name: "node".to_owned(),
                star_count: 100000
            }
        );
    }

    #[test]
    fn should_reject_repo_payload_as_user() {
        let payload = r#"{"name":"node","stargazers_count":100000}"#;

        assert!(serde_json::from_str::<UserResult>(payload).is_err());
    }
}

use crate::lookup::LookupResult;
use itertools::Itertools;
use std::fmt::Display;

const EMPTY_PLACEHOLDER: &str = "Пока ничего не найдено";

/// Renders the last fetched result as two labeled lines.
pub struct ResultPanel<'a> {
    result: Option<&'a LookupResult>,
}

impl<'a> ResultPanel<'a> {
    pub fn new(result: Option<&'a LookupResult>) -> Self {
        ResultPanel { result }
    }

    pub fn lines(&self) -> Vec<String> {
        match self.result {
            Some(LookupResult::User(user)) => vec![
                format!("Имя: {}", user.name.as_deref().unwrap_or_default()),
                format!("Кол-во репозиториев: {}", user.public_repo_count),
            ],
            Some(LookupResult::Repo(repo)) => vec![
                format!("Имя репы: {}", repo.name),
                format!("Звёзд: {}", repo.star_count),
            ],
            None => vec![EMPTY_PLACEHOLDER.to_owned()],
        }
    }
}

impl Display for ResultPanel<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lines().iter().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::result::{RepoResult, UserResult};

    #[test]
    fn should_render_user() {
        let result = LookupResult::User(UserResult {
            name: Some("defunkt".to_owned()),
            public_repo_count: 7,
        });

        assert_eq!(
            ResultPanel::new(Some(&result)).lines(),
            vec!["Имя: defunkt", "Кол-во репозиториев: 7"]
        );
    }

    #[test]
    fn should_render_user_without_display_name() {
        let result = LookupResult::User(UserResult {
            name: None,
            public_repo_count: 0,
        });

        assert_eq!(
            ResultPanel::new(Some(&result)).lines(),
            vec!["Имя: ", "Кол-во репозиториев: 0"]
        );
    }

    #[test]
    fn should_render_repo() {
        let result = LookupResult::Repo(RepoResult {
            name: "node".to_owned(),
            star_count: 100000,
        });

        assert_eq!(
            ResultPanel::new(Some(&result)).to_string(),
            "Имя репы: node\nЗвёзд: 100000"
        );
    }

    #[test]
    fn should_render_placeholder_before_first_result() {
        assert_eq!(ResultPanel::new(None).to_string(), "Пока ничего не найдено");
    }
}

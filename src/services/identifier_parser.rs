use crate::errors::{RepoVetError, RepoVetResult};
use crate::structs::repo_identifier::RepoIdentifier;

pub struct IdentifierParser;

impl IdentifierParser {
    /// Parses `owner/repo`, optionally preceded by any host or URL prefix
    /// ("https://github.com/owner/repo", "github.com/owner/repo"). Matching
    /// anchors at the right end of the input; a trailing `/` and a trailing
    /// `.git` on the repository segment are tolerated.
    pub fn parse(input: &str) -> RepoVetResult<RepoIdentifier> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(RepoVetError::EmptyTarget);
        }

        // The identifier is whatever trails the last whitespace run.
        let tail = trimmed.split_whitespace().last().unwrap_or_default();

        let segments: Vec<&str> = tail.split('/').filter(|s| !s.is_empty()).collect();
        if segments.len() < 2 {
            return Err(RepoVetError::invalid_target(input));
        }

        let owner = segments[segments.len() - 2];
        let repo = match segments[segments.len() - 1].strip_suffix(".git") {
            Some(stem) if !stem.is_empty() => stem,
            Some(_) => return Err(RepoVetError::invalid_target(input)),
            None => segments[segments.len() - 1],
        };

        Ok(RepoIdentifier {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_plain_pair() {
        let id = IdentifierParser::parse("facebook/react").unwrap();
        assert_eq!(id.owner, "facebook");
        assert_eq!(id.repo, "react");
    }

    #[test]
    fn test_parses_full_url_and_strips_git_suffix() {
        let id = IdentifierParser::parse("https://github.com/vercel/next.js.git").unwrap();
        assert_eq!(id.owner, "vercel");
        assert_eq!(id.repo, "next.js");
    }

    #[test]
    fn test_parses_host_prefix() {
        let id = IdentifierParser::parse("github.com/rust-lang/cargo").unwrap();
        assert_eq!(id.owner, "rust-lang");
        assert_eq!(id.repo, "cargo");
    }

    #[test]
    fn test_tolerates_trailing_slash() {
        let id = IdentifierParser::parse("facebook/react/").unwrap();
        assert_eq!(id.full_name(), "facebook/react");
    }

    #[test]
    fn test_accepts_any_prefix_before_the_pair() {
        let id = IdentifierParser::parse("check out facebook/react").unwrap();
        assert_eq!(id.full_name(), "facebook/react");
    }

    #[test]
    fn test_rejects_empty_input() {
        assert!(matches!(IdentifierParser::parse(""), Err(RepoVetError::EmptyTarget)));
        assert!(matches!(IdentifierParser::parse("   "), Err(RepoVetError::EmptyTarget)));
    }

    #[test]
    fn test_rejects_input_without_a_pair() {
        assert!(matches!(
            IdentifierParser::parse("not-a-valid-string"),
            Err(RepoVetError::InvalidTargetFormat { .. })
        ));
    }

    #[test]
    fn test_rejects_repo_that_is_only_a_git_suffix() {
        assert!(matches!(
            IdentifierParser::parse("owner/.git"),
            Err(RepoVetError::InvalidTargetFormat { .. })
        ));
    }

    #[test]
    fn test_is_pure() {
        let a = IdentifierParser::parse("facebook/react").unwrap();
        let b = IdentifierParser::parse("facebook/react").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fixed_user_messages() {
        let empty = IdentifierParser::parse("").unwrap_err();
        assert_eq!(empty.user_message(), "Please enter a repository URL or owner/repo");

        let invalid = IdentifierParser::parse("nope").unwrap_err();
        assert_eq!(
            invalid.user_message(),
            "Invalid format. Use: owner/repo or https://github.com/owner/repo"
        );
    }
}

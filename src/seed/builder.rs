use tracing::error;

use crate::config::ReferenceSource;
use crate::models::ConversationTurn;
use crate::prompts::{
    DOCUMENT_INTRO_PREFIX, LEAD_ANALYST_ANSWER, LEAD_ANALYST_QUESTION, SUMMARIZE_REQUEST,
    SUMMARY_BODY, SUMMARY_HEADER,
};
use crate::seed::reference::{file_name, ReferenceDocument};

/// Turns placed before the live conversation, plus the documents that could
/// not be read while building them.
#[derive(Debug, Clone, Default)]
pub struct SeedHistory {
    pub turns: Vec<ConversationTurn>,
    pub failed_documents: Vec<String>,
}

impl SeedHistory {
    pub fn is_complete(&self) -> bool {
        self.failed_documents.is_empty()
    }
}

/// Builds the seed history from the configured reference documents.
///
/// Layout, in order:
/// 1. per document: a user turn carrying the file and a model turn summarising it
/// 2. the "summarize the data" exchange with its canned analytical summary
/// 3. the lead-analyst example exchange
///
/// An unreadable document is logged and replaced by a placeholder summary;
/// building never fails.
pub async fn build_seed_history(sources: &[ReferenceSource]) -> SeedHistory {
    let mut history = SeedHistory::default();
    let mut file_summaries = Vec::with_capacity(sources.len());

    for source in sources {
        let name = file_name(&source.path);
        match ReferenceDocument::load(source).await {
            Ok(doc) => {
                history.turns.push(ConversationTurn::user(format!(
                    "{DOCUMENT_INTRO_PREFIX} {}:\n\n{}",
                    doc.file_name, doc.content
                )));
                let summary = format!(
                    "* File: {} - Contains raw data related to VMAXX responses and backend data for {}.",
                    doc.file_name, doc.period
                );
                history.turns.push(ConversationTurn::assistant(summary.clone()));
                file_summaries.push(summary);
            }
            Err(e) => {
                error!("Error loading data from {}: {}", source.path.display(), e.details());
                history.turns.push(ConversationTurn::user(format!("{DOCUMENT_INTRO_PREFIX} {name}:")));
                let placeholder = format!("* Failed to load data from {name}.");
                history.turns.push(ConversationTurn::assistant(placeholder.clone()));
                file_summaries.push(placeholder);
                history.failed_documents.push(name);
            }
        }
    }

    history.turns.push(ConversationTurn::user(SUMMARIZE_REQUEST));
    history.turns.push(ConversationTurn::assistant(format!(
        "{SUMMARY_HEADER}\n{}{SUMMARY_BODY}",
        file_summaries.join("\n")
    )));
    history.turns.push(ConversationTurn::user(LEAD_ANALYST_QUESTION));
    history.turns.push(ConversationTurn::assistant(LEAD_ANALYST_ANSWER));

    history
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::models::MessageRole;

    fn sources(dir: &Path) -> Vec<ReferenceSource> {
        vec![
            ReferenceSource { path: dir.join("cge_hh_h12025.csv"), period: "H1 2025".into() },
            ReferenceSource { path: dir.join("cge_hh_h22024.csv"), period: "H2 2024".into() },
        ]
    }

    fn roles(history: &SeedHistory) -> Vec<MessageRole> {
        history.turns.iter().map(|t| t.role).collect()
    }

    #[tokio::test]
    async fn both_documents_produce_the_fixed_layout() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cge_hh_h12025.csv"), "parent,lead\nHelloFresh,Max\n").unwrap();
        std::fs::write(dir.path().join("cge_hh_h22024.csv"), "parent,lead\nAcme,Jo\n").unwrap();

        let history = build_seed_history(&sources(dir.path())).await;

        assert!(history.is_complete());
        assert_eq!(history.turns.len(), 8);
        use MessageRole::{Assistant as A, User as U};
        assert_eq!(roles(&history), vec![U, A, U, A, U, A, U, A]);

        assert_eq!(
            history.turns[0].content,
            "Here is the content of cge_hh_h12025.csv:\n\nparent,lead\nHelloFresh,Max\n"
        );
        assert!(history.turns[1].content.ends_with("backend data for H1 2025."));
        assert!(history.turns[3].content.ends_with("backend data for H2 2024."));
        assert_eq!(history.turns[4].content, "summarize the data");
        assert!(history.turns[5].content.starts_with(SUMMARY_HEADER));
        assert!(history.turns[5].content.contains("* File: cge_hh_h22024.csv"));
        assert!(history.turns[5].content.ends_with(SUMMARY_BODY));
        assert_eq!(history.turns[6].content, LEAD_ANALYST_QUESTION);
        assert_eq!(history.turns[7].content, LEAD_ANALYST_ANSWER);
    }

    #[tokio::test]
    async fn missing_document_yields_placeholder_and_keeps_other_turns() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("cge_hh_h12025.csv"), "parent\nHelloFresh\n").unwrap();

        let complete_dir = tempfile::tempdir().unwrap();
        std::fs::write(complete_dir.path().join("cge_hh_h12025.csv"), "parent\nHelloFresh\n").unwrap();
        std::fs::write(complete_dir.path().join("cge_hh_h22024.csv"), "parent\nAcme\n").unwrap();

        let partial = build_seed_history(&sources(dir.path())).await;
        let complete = build_seed_history(&sources(complete_dir.path())).await;

        assert_eq!(partial.failed_documents, vec!["cge_hh_h22024.csv".to_string()]);
        assert_eq!(partial.turns.len(), complete.turns.len());
        assert_eq!(roles(&partial), roles(&complete));
        assert_eq!(partial.turns[3].content, "* Failed to load data from cge_hh_h22024.csv.");
        assert_eq!(partial.turns[2].content, "Here is the content of cge_hh_h22024.csv:");

        assert_eq!(partial.turns[0], complete.turns[0]);
        assert_eq!(partial.turns[1], complete.turns[1]);
        assert_eq!(partial.turns[4..5], complete.turns[4..5]);
        assert_eq!(partial.turns[6..], complete.turns[6..]);
    }

    #[tokio::test]
    async fn no_documents_still_yields_canned_exchanges() {
        let dir = tempfile::tempdir().unwrap();
        let history = build_seed_history(&sources(dir.path())).await;

        assert_eq!(history.failed_documents.len(), 2);
        assert_eq!(history.turns.len(), 8);
        assert_eq!(history.turns[7].content, LEAD_ANALYST_ANSWER);
    }
}

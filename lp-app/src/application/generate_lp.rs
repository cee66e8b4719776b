use super::section_extractor::{extract_draft, extract_revision};
use super::summarize_competitor::CompetitorSummarizer;
use crate::domain::{Brief, LpPlan};
use crate::infrastructure::openai::{build_initial_prompt, build_revision_prompt, LlmProvider};
use crate::infrastructure::scraper::PageFetcher;
use lp_errors::AppError;
use std::sync::Arc;
use tracing::Instrument;
use uuid::Uuid;

/// Draft-then-revise LP generation.
///
/// Competitor summaries degrade to placeholders, and so do sections the LLM
/// did not produce. A failed draft or revision call fails the whole run.
pub struct GenerateLp {
    summarizer: CompetitorSummarizer,
    llm: Arc<dyn LlmProvider>,
}

impl GenerateLp {
    pub fn new(fetcher: Arc<dyn PageFetcher>, llm: Arc<dyn LlmProvider>) -> Self {
        Self {
            summarizer: CompetitorSummarizer::new(fetcher, llm.clone()),
            llm,
        }
    }

    pub async fn execute(&self, brief: &Brief) -> Result<LpPlan, AppError> {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("generate_lp", %request_id);

        self.run(brief).instrument(span).await
    }

    async fn run(&self, brief: &Brief) -> Result<LpPlan, AppError> {
        let urls: Vec<&str> = brief.competitor_urls().collect();
        tracing::info!("Generating LP plan with {} competitor(s)", urls.len());

        let competitor_summary = self.summarizer.summarize_all(urls).await;

        let initial_prompt = build_initial_prompt(brief, &competitor_summary);
        tracing::debug!("Initial prompt:\n{}", initial_prompt);
        let draft_text = self.llm.complete(&initial_prompt).await?;
        let draft = extract_draft(draft_text.trim());

        let revision_prompt = build_revision_prompt(&draft.appeal_point, &draft.structure_html);
        tracing::debug!("Revision prompt:\n{}", revision_prompt);
        let revision_text = self.llm.complete(&revision_prompt).await?;
        let revised = extract_revision(revision_text.trim());

        tracing::info!("LP plan generated");
        Ok(LpPlan::from_sections(draft, revised))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{COMPARISON_FAILED, NO_COMPETITOR_INFO, REVISED_STRUCTURE_FAILED};
    use crate::testing::{StubFetcher, StubLlm};

    const INITIAL_MARKER: &str = "あなたはLP構成の専門家です。";
    const REVISION_MARKER: &str = "【初回構成案】";
    const SUMMARY_MARKER: &str = "あなたはWebサイト分析の専門家です。";

    const DRAFT: &str = "<h3>競合との比較分析</h3>\n<p>競合は価格訴求が中心。</p>\n\n\
<h3>効果的な訴求ポイント</h3>\n<p>初期費用ゼロ</p>\n\n\
<div class='mb-4'>\n  <h4>Kv</h4>\n</div>\n<div class='mb-4'>\n  <h4>CTA</h4>\n</div>";

    const REVISION: &str = "<h3>効果的な訴求ポイント</h3>\n<p>初期費用ゼロで今日から</p>\n\n\
<h3>LP構成案</h3>\n<div class='mb-4'>\n  <h4>Kv</h4>\n  <strong>見出し：</strong> 0円で始める<br>\n</div>\n\
<div class='mb-4'>\n  <h4>FAQ</h4>\n</div>";

    fn pipeline(fetcher: StubFetcher, llm: StubLlm) -> (GenerateLp, Arc<StubLlm>) {
        let llm = Arc::new(llm);
        (GenerateLp::new(Arc::new(fetcher), llm.clone()), llm)
    }

    fn scripted_llm() -> StubLlm {
        StubLlm::new()
            .respond_to(REVISION_MARKER, REVISION)
            .respond_to(INITIAL_MARKER, DRAFT)
            .respond_to(SUMMARY_MARKER, "- 主な特徴：老舗")
    }

    fn canonical_brief() -> Brief {
        Brief {
            purpose: vec!["leads".to_string()],
            target_type: "SMB".to_string(),
            product: "Widget".to_string(),
            ..Brief::default()
        }
    }

    #[tokio::test]
    async fn test_comparison_from_draft_rest_from_revision() {
        let (generate, _) = pipeline(StubFetcher::new(), scripted_llm());

        let plan = generate.execute(&canonical_brief()).await.unwrap();

        assert_eq!(plan.comparison, "<p>競合は価格訴求が中心。</p>");
        assert_eq!(plan.appeal_point, "<p>初期費用ゼロで今日から</p>");
        assert_eq!(
            plan.lp_structure,
            "<div class='mb-4'>\n  <h4>Kv</h4>\n  <strong>見出し：</strong> 0円で始める<br>\n</div>\n\
<div class='mb-4'>\n  <h4>FAQ</h4>\n</div>"
        );
    }

    #[tokio::test]
    async fn test_no_competitors_uses_placeholder_and_two_calls() {
        let (generate, llm) = pipeline(StubFetcher::new(), scripted_llm());

        generate.execute(&canonical_brief()).await.unwrap();

        let prompts = llm.prompts();
        assert_eq!(prompts.len(), 2);
        assert!(prompts[0].contains(&format!("- 競合サイトの要約：{}\n", NO_COMPETITOR_INFO)));
        assert!(prompts[1].contains("<p>初期費用ゼロ</p>"));
        assert!(prompts[1].contains("<div class='mb-4'>\n  <h4>Kv</h4>\n</div>\n<div class='mb-4'>\n  <h4>CTA</h4>\n</div>"));
    }

    #[tokio::test]
    async fn test_unreachable_competitor_does_not_fail_request() {
        let brief = Brief {
            competitor: vec!["".to_string(), "https://down.example".to_string()],
            ..canonical_brief()
        };
        let (generate, llm) = pipeline(
            StubFetcher::new().with_failure("https://down.example", AppError::Timeout),
            scripted_llm(),
        );

        let plan = generate.execute(&brief).await.unwrap();

        assert_eq!(plan.comparison, "<p>競合は価格訴求が中心。</p>");
        let prompts = llm.prompts();
        assert_eq!(prompts.len(), 2);
        assert!(prompts[0].contains("（競合サイトの取得・要約に失敗しました: request timed out）"));
    }

    #[tokio::test]
    async fn test_competitor_summaries_reach_initial_prompt() {
        let brief = Brief {
            competitor: vec!["https://a.example".to_string(), "https://b.example".to_string()],
            ..canonical_brief()
        };
        let (generate, llm) = pipeline(
            StubFetcher::new()
                .with_page("https://a.example", "老舗の会計ソフト")
                .with_page("https://b.example", "クラウド会計"),
            scripted_llm(),
        );

        generate.execute(&brief).await.unwrap();

        let prompts = llm.prompts();
        assert_eq!(prompts.len(), 4);
        let initial = prompts
            .iter()
            .find(|p| p.contains(INITIAL_MARKER))
            .unwrap();
        assert!(initial.contains("- 競合サイトの要約：- 主な特徴：老舗\n\n- 主な特徴：老舗\n"));
    }

    #[tokio::test]
    async fn test_missing_comparison_keeps_other_sections() {
        let draft = DRAFT.replace("<h3>競合との比較分析</h3>", "<h3>分析</h3>");
        let llm = StubLlm::new()
            .respond_to(REVISION_MARKER, REVISION)
            .respond_to(INITIAL_MARKER, &draft);
        let (generate, _) = pipeline(StubFetcher::new(), llm);

        let plan = generate.execute(&canonical_brief()).await.unwrap();

        assert_eq!(plan.comparison, format!("<p>{}</p>", COMPARISON_FAILED));
        assert_eq!(plan.appeal_point, "<p>初期費用ゼロで今日から</p>");
        assert!(plan.lp_structure.contains("<h4>FAQ</h4>"));
    }

    #[tokio::test]
    async fn test_revision_without_blocks_uses_placeholder() {
        let llm = StubLlm::new()
            .respond_to(REVISION_MARKER, "<h3>効果的な訴求ポイント</h3><p>改善</p>")
            .respond_to(INITIAL_MARKER, DRAFT);
        let (generate, _) = pipeline(StubFetcher::new(), llm);

        let plan = generate.execute(&canonical_brief()).await.unwrap();

        assert_eq!(plan.appeal_point, "<p>改善</p>");
        assert_eq!(plan.lp_structure, REVISED_STRUCTURE_FAILED);
    }

    #[tokio::test]
    async fn test_draft_failure_propagates() {
        let llm = scripted_llm().fail_on(INITIAL_MARKER);
        let (generate, llm) = pipeline(StubFetcher::new(), llm);

        let err = generate.execute(&canonical_brief()).await.unwrap_err();

        assert!(matches!(err, AppError::LlmError(_)));
        assert_eq!(llm.prompts().len(), 1);
    }

    #[tokio::test]
    async fn test_revision_failure_propagates() {
        let llm = scripted_llm().fail_on(REVISION_MARKER);
        let (generate, _) = pipeline(StubFetcher::new(), llm);

        let err = generate.execute(&canonical_brief()).await.unwrap_err();

        assert!(matches!(err, AppError::LlmError(_)));
    }

    #[tokio::test]
    async fn test_repeated_runs_are_identical() {
        let brief = Brief {
            competitor: vec!["https://a.example".to_string()],
            ..canonical_brief()
        };
        let (generate, _) = pipeline(
            StubFetcher::new().with_page("https://a.example", "老舗"),
            scripted_llm(),
        );

        let first = generate.execute(&brief).await.unwrap();
        let second = generate.execute(&brief).await.unwrap();

        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }
}

//! Pulls the headed sections out of the LLM's HTML-flavoured replies.
//!
//! Each pattern is searched independently and unanchored, so text before or
//! after a section is ignored. A miss yields that section's placeholder.

use crate::domain::{DraftSections, RevisedSections};
use regex::Regex;
use std::sync::LazyLock;

pub const COMPARISON_FAILED: &str = "(比較分析の取得に失敗しました)";
pub const APPEAL_FAILED: &str = "(訴求ポイントの取得に失敗しました)";
pub const STRUCTURE_FAILED: &str = "(LP構成案の取得に失敗しました)";
pub const REVISED_APPEAL_FAILED: &str = "(改善された訴求ポイントの取得に失敗しました)";
pub const REVISED_STRUCTURE_FAILED: &str = "(改善された構成案の取得に失敗しました)";

static COMPARISON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<h3>競合との比較分析</h3>\s*<p>(.*?)</p>").expect("comparison pattern")
});

static APPEAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<h3>効果的な訴求ポイント</h3>\s*<p>(.*?)</p>").expect("appeal pattern")
});

// One or more `mb-4` blocks separated only by whitespace.
static STRUCTURE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<div class='mb-4'>.*?</div>(?:\s*<div class='mb-4'>.*?</div>)*")
        .expect("structure pattern")
});

pub fn extract_draft(text: &str) -> DraftSections {
    DraftSections {
        comparison: paragraph_after(&COMPARISON_RE, text).unwrap_or_else(|| COMPARISON_FAILED.to_string()),
        appeal_point: paragraph_after(&APPEAL_RE, text).unwrap_or_else(|| APPEAL_FAILED.to_string()),
        structure_html: structure_blocks(text).unwrap_or_else(|| STRUCTURE_FAILED.to_string()),
    }
}

pub fn extract_revision(text: &str) -> RevisedSections {
    RevisedSections {
        appeal_point: paragraph_after(&APPEAL_RE, text)
            .unwrap_or_else(|| REVISED_APPEAL_FAILED.to_string()),
        structure_html: structure_blocks(text)
            .unwrap_or_else(|| REVISED_STRUCTURE_FAILED.to_string()),
    }
}

fn paragraph_after(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

fn structure_blocks(text: &str) -> Option<String> {
    STRUCTURE_RE.find(text).map(|m| m.as_str().trim().to_string())
}

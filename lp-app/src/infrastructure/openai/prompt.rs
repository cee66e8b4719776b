use crate::domain::Brief;

/// Characters of competitor page text handed to the summary prompt.
pub const SUMMARY_INPUT_CHARS: usize = 3000;

pub fn build_summary_prompt(page_text: &str) -> String {
    let excerpt: String = page_text.chars().take(SUMMARY_INPUT_CHARS).collect();

    format!(
        r#"あなたはWebサイト分析の専門家です。
以下はある企業サイトの文章です。競合としてどのような特徴・強みを打ち出しているか簡潔にまとめてください。

{excerpt}

【出力形式】
- 主な特徴：...
- 訴求しているポイント：..."#,
        excerpt = excerpt
    )
}

pub fn build_initial_prompt(brief: &Brief, competitor_summary: &str) -> String {
    format!(
        r#"あなたはLP構成の専門家です。
以下の情報を元に、効果的な訴求ポイントを1つだけ抽出し、その訴求に沿ったLP構成案をHTML形式で提案してください。

【背景・目的】
- LPの目的：{purpose}
- ターゲット：{target_type}

【ペルソナ】
- 年齢：{age}
- 性別：{gender}
- 職業：{job}
- 興味関心：{interest}

【サービス情報】
- 業種：{industry}
- サービス・商品：{product}
- 地域：{region}
- 強み・特徴：{strength}
- 競合サイトの要約：{competitor_summary}

【出力形式】
<h3>競合との比較分析</h3>
<p>...内容...</p>

<h3>効果的な訴求ポイント</h3>
<p>...内容...</p>

なお、以下に示すのは一般的なセクション構成の一例です。
実際の構成では、フォームで入力された目的・商品・ターゲット情報に応じて、必要なものを選び、不必要なものは省略し、新たに必要と思われるセクションがあれば追加してください。

【一般的なLP構成の一例】
- Kv（キービジュアル）
- Issue（抱える課題）
- Solution（提供する解決策）
- Service（製品・サービスの強み）
- Works（実績）
- Voice（お客様の声）
- FAQ（よくある質問）
- CTA（資料請求・問い合わせ）
- Footer（会社情報など）

各セクションは以下のHTML構造で記述してください：
<div class='mb-4'>
  <h4>セクション名</h4>
  <strong>見出し：</strong> ...<br>
  <strong>含めるべきコンテンツ：</strong> ...<br>
</div>"#,
        purpose = brief.purpose.join(", "),
        target_type = brief.target_type,
        age = brief.age,
        gender = brief.gender,
        job = brief.job,
        interest = brief.interest,
        industry = brief.industry,
        product = brief.product,
        region = brief.region,
        strength = brief.strength,
        competitor_summary = competitor_summary,
    )
}

pub fn build_revision_prompt(initial_appeal: &str, initial_structure_html: &str) -> String {
    format!(
        r#"以下は初回に出力されたLP構成案です。
この中から「訴求ポイント」と「構成案」のクオリティをさらに高めてください。
比較分析部分はそのままで構いません。

【初回構成案】
<h3>効果的な訴求ポイント</h3>
<p>{initial_appeal}</p>

{initial_structure_html}

【出力形式】
<h3>効果的な訴求ポイント</h3>
<p>...</p>

<h3>LP構成案</h3>
<div class='mb-4'>...</div>"#,
        initial_appeal = initial_appeal,
        initial_structure_html = initial_structure_html,
    )
}

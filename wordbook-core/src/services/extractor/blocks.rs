//! 块扫描模式：按标题切分内容块 → 跨页

use std::sync::LazyLock;

use regex::Regex;

use crate::config::CoverPolicy;
use crate::types::{ContentBlock, ContentSpread, Locale, Spread, WordEntry};

/// `[메모: …]` / `[memo: …]`
static MEMO_TAG: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\[\s*(?i:메모|memo)\s*[:：]\s*([^\]]*?)\s*\]").ok());

/// `[사진: …]` / `[photo: …]`
static PHOTO_TAG: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\[\s*(?i:사진|photo)\s*[:：]\s*([^\]]*?)\s*\]").ok());

/// 进入封面/序言模式的标题关键字（小写比较）
const COVER_HEADINGS: &[&str] = &["표지", "cover", "intro", "프롤로그", "prologue"];

/// 扫描内容块序列
pub(super) fn extract_blocks(
    blocks: &[ContentBlock],
    policy: CoverPolicy,
    locale: Locale,
) -> Vec<Spread> {
    if blocks.is_empty() {
        log::warn!("No content blocks to scan; nothing to render");
        return Vec::new();
    }

    let mut scanner = BlockScanner::new(policy, locale);
    for block in blocks {
        scanner.feed(block);
    }
    scanner.finish()
}

/// 标签中最后一次出现的内容
fn last_tag(pattern: &LazyLock<Option<Regex>>, text: &str) -> Option<String> {
    let re = pattern.as_ref()?;
    re.captures_iter(text)
        .last()
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn is_cover_heading(text: &str) -> bool {
    let lowered = text.trim().to_lowercase();
    COVER_HEADINGS.contains(&lowered.as_str())
}

/// 表格行 → 单词条目；不足两列或单词为空的行跳过
fn parse_row(row: &[String]) -> Option<WordEntry> {
    let [headword, first, later @ ..] = row else {
        return None;
    };
    let headword = headword.trim();
    if headword.is_empty() {
        return None;
    }
    let later_attempts = later
        .iter()
        .map(|cell| cell.trim())
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect();
    Some(WordEntry::new(headword, first.trim(), later_attempts))
}

struct BlockScanner {
    policy: CoverPolicy,
    locale: Locale,
    spreads: Vec<Spread>,
    current: Option<ContentSpread>,
    /// 当前是否处于封面/序言段落
    in_intro: bool,
    cover_title: Option<String>,
    prologue: Vec<String>,
}

impl BlockScanner {
    fn new(policy: CoverPolicy, locale: Locale) -> Self {
        Self {
            policy,
            locale,
            spreads: Vec::new(),
            current: None,
            in_intro: policy == CoverPolicy::Synthetic,
            cover_title: None,
            prologue: Vec::new(),
        }
    }

    fn feed(&mut self, block: &ContentBlock) {
        match block {
            ContentBlock::Heading { text, .. } => self.start_section(text),
            ContentBlock::Paragraph { text } => self.paragraph(text),
            ContentBlock::Table { rows } => {
                if let Some(current) = self.current.as_mut() {
                    current
                        .words
                        .extend(rows.iter().filter_map(|row| parse_row(row)));
                }
            }
            ContentBlock::Other => {}
        }
    }

    fn start_section(&mut self, text: &str) {
        self.flush();

        if self.policy == CoverPolicy::Synthetic && is_cover_heading(text) {
            self.in_intro = true;
            self.cover_title = Some(text.trim().to_string());
            return;
        }

        self.in_intro = false;
        let title = match text.trim() {
            "" => format!("Spread {}", self.content_count() + 1),
            title => title.to_string(),
        };
        self.current = Some(ContentSpread::new(title));
    }

    fn paragraph(&mut self, text: &str) {
        if let Some(current) = self.current.as_mut() {
            // 两个标签互不影响，同一段落重复出现时以最后一次为准
            if let Some(memo) = last_tag(&MEMO_TAG, text) {
                current.memo = Some(memo);
            }
            if let Some(photo) = last_tag(&PHOTO_TAG, text) {
                current.photo_caption = Some(photo);
            }
            return;
        }

        if self.in_intro {
            self.prologue.extend(
                text.lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty() && !line.starts_with('['))
                    .map(str::to_string),
            );
        }
    }

    fn flush(&mut self) {
        if let Some(spread) = self.current.take() {
            self.spreads.push(Spread::Content(spread));
        }
    }

    fn content_count(&self) -> usize {
        self.spreads.len()
    }

    fn finish(mut self) -> Vec<Spread> {
        self.flush();

        if self.policy == CoverPolicy::Synthetic {
            let has_intro = self.cover_title.is_some() || !self.prologue.is_empty();
            if has_intro || !self.spreads.is_empty() {
                let title = self
                    .cover_title
                    .take()
                    .unwrap_or_else(|| self.locale.labels().cover_title.to_string());
                self.spreads
                    .insert(0, Spread::cover(title, self.prologue.join("\n\n")));
            }
        }

        if self.spreads.is_empty() {
            log::warn!("Content blocks contained no spreads");
        }
        self.spreads
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    fn content(spread: &Spread) -> &ContentSpread {
        match spread {
            Spread::Content(content) => content,
            Spread::Cover(_) => panic!("expected content spread"),
        }
    }

    fn example_blocks() -> Vec<ContentBlock> {
        vec![
            ContentBlock::heading(2, "Spread 1"),
            ContentBlock::paragraph("[메모: 연습]"),
            ContentBlock::table(vec![vec!["cat", "캣"], vec!["dog", "더그", "덕"]]),
        ]
    }

    #[test]
    fn heading_paragraph_table_scenario() {
        let spreads = extract_blocks(&example_blocks(), CoverPolicy::None, Locale::Ko);
        assert_eq!(spreads.len(), 1);

        let spread = content(&spreads[0]);
        assert_eq!(spread.title, "Spread 1");
        assert_eq!(spread.memo.as_deref(), Some("연습"));
        assert!(spread.photo_caption.is_none());
        assert_eq!(
            spread.words,
            vec![
                WordEntry::new("cat", "캣", vec![]),
                WordEntry::new("dog", "더그", vec!["덕".to_string()]),
            ]
        );
    }

    #[test]
    fn synthetic_cover_is_prepended() {
        let spreads = extract_blocks(&example_blocks(), CoverPolicy::Synthetic, Locale::Ko);
        assert_eq!(spreads.len(), 2);
        assert_eq!(spreads[0], Spread::cover("표지", ""));
        assert_eq!(content(&spreads[1]).words.len(), 2);
    }

    #[test]
    fn intro_paragraphs_become_prologue() {
        let blocks = vec![
            ContentBlock::paragraph("첫 문단\n\n[사진: 무시]\n  둘째 줄  "),
            ContentBlock::paragraph("셋째"),
            ContentBlock::heading(2, "Spread 1"),
        ];
        let spreads = extract_blocks(&blocks, CoverPolicy::Synthetic, Locale::Ko);
        assert_eq!(spreads[0], Spread::cover("표지", "첫 문단\n\n둘째 줄\n\n셋째"));
    }

    #[test]
    fn intro_paragraphs_ignored_without_cover() {
        let blocks = vec![
            ContentBlock::paragraph("intro"),
            ContentBlock::heading(2, "Spread 1"),
        ];
        let spreads = extract_blocks(&blocks, CoverPolicy::None, Locale::Ko);
        assert_eq!(spreads.len(), 1);
        assert!(!spreads[0].is_cover());
    }

    #[test]
    fn cover_heading_sets_title_and_collects_prologue() {
        let blocks = vec![
            ContentBlock::heading(1, "Prologue"),
            ContentBlock::paragraph("hello"),
            ContentBlock::heading(2, "Spread 1"),
            ContentBlock::paragraph("not prologue"),
        ];
        let spreads = extract_blocks(&blocks, CoverPolicy::Synthetic, Locale::En);
        assert_eq!(spreads.len(), 2);
        assert_eq!(spreads[0], Spread::cover("Prologue", "hello"));
    }

    #[test]
    fn memo_and_photo_tags_are_independent_and_last_wins() {
        let blocks = vec![
            ContentBlock::heading(2, "Spread 1"),
            ContentBlock::paragraph("[memo: one] [사진: 고양이] [메모: two]"),
        ];
        let spreads = extract_blocks(&blocks, CoverPolicy::None, Locale::Ko);
        let spread = content(&spreads[0]);
        assert_eq!(spread.memo.as_deref(), Some("two"));
        assert_eq!(spread.photo_caption.as_deref(), Some("고양이"));
    }

    #[test]
    fn photo_tag_alone() {
        let blocks = vec![
            ContentBlock::heading(2, "Spread 1"),
            ContentBlock::paragraph("[Photo: sunset]"),
        ];
        let spreads = extract_blocks(&blocks, CoverPolicy::None, Locale::Ko);
        let spread = content(&spreads[0]);
        assert!(spread.memo.is_none());
        assert_eq!(spread.photo_caption.as_deref(), Some("sunset"));
    }

    #[test]
    fn short_and_blank_rows_are_skipped() {
        let blocks = vec![
            ContentBlock::heading(2, "Spread 1"),
            ContentBlock::table(vec![
                vec!["only"],
                vec!["", "빈"],
                vec!["sun", "", " ", "썬"],
            ]),
        ];
        let spreads = extract_blocks(&blocks, CoverPolicy::None, Locale::Ko);
        assert_eq!(
            content(&spreads[0]).words,
            vec![WordEntry::new("sun", "", vec!["썬".to_string()])]
        );
    }

    #[test]
    fn each_heading_flushes_previous_spread() {
        let blocks = vec![
            ContentBlock::heading(2, "A"),
            ContentBlock::table(vec![vec!["a", "에이"]]),
            ContentBlock::heading(2, ""),
            ContentBlock::Other,
            ContentBlock::heading(2, "C"),
        ];
        let spreads = extract_blocks(&blocks, CoverPolicy::None, Locale::Ko);
        let titles: Vec<&str> = spreads.iter().map(Spread::title).collect();
        assert_eq!(titles, vec!["A", "Spread 2", "C"]);
        assert_eq!(spreads[0].word_count(), 1);
    }

    #[test]
    fn tables_outside_content_are_ignored() {
        let blocks = vec![ContentBlock::table(vec![vec!["a", "b"]])];
        let spreads = extract_blocks(&blocks, CoverPolicy::None, Locale::Ko);
        assert!(spreads.is_empty());
    }

    #[test]
    fn empty_input_yields_no_cover() {
        assert!(extract_blocks(&[], CoverPolicy::Synthetic, Locale::Ko).is_empty());
        assert!(extract_blocks(&[ContentBlock::Other], CoverPolicy::Synthetic, Locale::Ko).is_empty());
    }
}

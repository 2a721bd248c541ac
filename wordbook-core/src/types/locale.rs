//! 渲染用的本地化文本
//!
//! 与 TUI 的 i18n 一样采用纯结构体方案，编译期确定全部文本。

use serde::{Deserialize, Serialize};

/// 跨页渲染语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// 韩语
    #[default]
    Ko,
    /// 英语
    En,
}

/// 跨页渲染中出现的固定文本
pub struct SpreadLabels {
    /// 封面默认标题
    pub cover_title: &'static str,
    /// 没有备忘时的占位文本
    pub memo_placeholder: &'static str,
    /// 照片说明前缀
    pub photo_prefix: &'static str,
    /// 没有照片说明时的占位文本
    pub photo_placeholder: &'static str,
    /// 第一次发音标签
    pub first_attempt: &'static str,
    /// 之后发音标签
    pub later_attempt: &'static str,
}

const KO_LABELS: SpreadLabels = SpreadLabels {
    cover_title: "표지",
    memo_placeholder: "메모",
    photo_prefix: "사진: ",
    photo_placeholder: "사진 삽입 영역",
    first_attempt: "첫 발음",
    later_attempt: "발전",
};

const EN_LABELS: SpreadLabels = SpreadLabels {
    cover_title: "Cover",
    memo_placeholder: "Memo",
    photo_prefix: "Photo: ",
    photo_placeholder: "insert photo here",
    first_attempt: "First",
    later_attempt: "Later",
};

impl Locale {
    /// 获取该语言的固定文本
    pub fn labels(self) -> &'static SpreadLabels {
        match self {
            Self::Ko => &KO_LABELS,
            Self::En => &EN_LABELS,
        }
    }

    /// 语言代码
    pub fn code(self) -> &'static str {
        match self {
            Self::Ko => "ko",
            Self::En => "en",
        }
    }

    /// 从语言代码解析（接受 `ko`、`ko-KR`、`en`、`en-US` 等）
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "ko" => Some(Self::Ko),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    /// 照片说明文本
    pub fn photo_caption(self, caption: &str) -> String {
        format!("{}{caption}", self.labels().photo_prefix)
    }
}

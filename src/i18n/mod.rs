//! Static localization table
//!
//! English and Chinese display strings for every view, selected by
//! [`Language`]. The table is constant data, loaded once and never mutated.

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Supported display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Zh,
}

impl Language {
    pub fn toggle(&self) -> Self {
        match self {
            Language::En => Language::Zh,
            Language::Zh => Language::En,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }

    /// Label shown on the language toggle button
    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Zh => "中文",
        }
    }
}

/// Strings for the landing view
pub struct HomeText {
    pub title: &'static str,
    pub subtitle_prefix: &'static str,
    pub subtitle_highlight: &'static str,
    pub subtitle_suffix: &'static str,
    pub placeholder: &'static str,
    pub drop_files: &'static str,
    pub attach: &'static str,
    pub powered_by: &'static str,
    pub history: &'static str,
    pub no_history: &'static str,
    pub delete_presentation_title: &'static str,
    pub delete_presentation_confirm: &'static str,
    pub delete: &'static str,
    pub open: &'static str,
    pub suggestions: [&'static str; 4],
}

/// Strings for the outline review step
pub struct OutlineText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub generating: &'static str,
    pub parsing: &'static str,
    pub initializing: &'static str,
    pub parse_error: &'static str,
    pub generate_slides: &'static str,
    pub slide_label: &'static str,
    pub field_title: &'static str,
    pub field_content: &'static str,
    pub field_visual: &'static str,
    pub attached: &'static str,
    pub waiting_for_tokens: &'static str,
}

/// Strings for the deck view
pub struct SlideShowText {
    pub slide: &'static str,
    pub of: &'static str,
    pub processing: &'static str,
    pub export_pptx: &'static str,
    pub new_slide: &'static str,
    pub delete_slide_title: &'static str,
    pub delete_slide_confirm: &'static str,
    pub stop_generating: &'static str,
    pub generation_failed: &'static str,
    pub failed_desc: &'static str,
    pub ignore: &'static str,
    pub regenerate: &'static str,
    pub creating_visuals: &'static str,
    pub add_text: &'static str,
    pub edit_text_hint: &'static str,
    pub format_hint: &'static str,
    pub back_title: &'static str,
    pub undo: &'static str,
    pub redo: &'static str,
}

/// Strings for the modal dialogs
pub struct ModalText {
    pub regenerate_title: &'static str,
    pub regenerate_desc: &'static str,
    pub generate_new_image: &'static str,
    pub cancel: &'static str,
    pub add_slide_title: &'static str,
    pub add_slide_desc: &'static str,
    pub create_slide: &'static str,
    pub creating: &'static str,
    pub new_slide_placeholder: &'static str,
}

pub struct Translations {
    pub home: HomeText,
    pub outline: OutlineText,
    pub slide_show: SlideShowText,
    pub modals: ModalText,
}

static EN: Translations = Translations {
    home: HomeText {
        title: "Slide Deck",
        subtitle_prefix: "Turn your ideas into stunning slides with",
        subtitle_highlight: "Slide Deck",
        subtitle_suffix: "",
        placeholder: "Describe your presentation idea, or drop images, PDFs, or audio...",
        drop_files: "Drop files here...",
        attach: "Attach",
        powered_by: "Powered by Gemini",
        history: "History",
        no_history: "No presentations yet. Create your first one above!",
        delete_presentation_title: "Delete Presentation",
        delete_presentation_confirm:
            "Are you sure you want to delete this presentation? This action cannot be undone.",
        delete: "Delete",
        open: "Open",
        suggestions: [
            "What's an AI Agent?",
            "A pitch deck for a startup building AI coffee machines",
            "How to make perfect sourdough bread",
            "The future of renewable energy",
        ],
    },
    outline: OutlineText {
        title: "Slide Outline",
        subtitle: "Review and edit your structure before generating images.",
        generating: "AI Generating...",
        parsing: "Parsing structure...",
        initializing: "Initializing...",
        parse_error:
            "Could not auto-parse the outline. Please try again or wait for generation to complete.",
        generate_slides: "Generate Slides",
        slide_label: "SLIDE",
        field_title: "Title",
        field_content: "Content",
        field_visual: "Visual Prompt",
        attached: "Attached",
        waiting_for_tokens: "Waiting for tokens...",
    },
    slide_show: SlideShowText {
        slide: "Slide",
        of: "of",
        processing: "Processing",
        export_pptx: "Export PPTX",
        new_slide: "New Slide",
        delete_slide_title: "Delete Slide",
        delete_slide_confirm:
            "Are you sure you want to delete this slide? This action cannot be undone.",
        stop_generating: "Stop Generating",
        generation_failed: "GENERATION FAILED",
        failed_desc:
            "We couldn't generate the image for this slide. You can try again or continue without it.",
        ignore: "Ignore",
        regenerate: "Regenerate",
        creating_visuals: "CREATING VISUALS...",
        add_text: "Add Text",
        edit_text_hint: "Double-click text to edit",
        format_hint: "Select text to show formatting tools",
        back_title: "Back to Home",
        undo: "Undo",
        redo: "Redo",
    },
    modals: ModalText {
        regenerate_title: "Regenerate Slide Image",
        regenerate_desc:
            "Edit the visual description below to guide the AI in generating a new background image.",
        generate_new_image: "Generate New Image",
        cancel: "Cancel",
        add_slide_title: "Add New Slide",
        add_slide_desc:
            "Describe the content of the new slide. The AI will generate the title, bullet points, and background image for you.",
        create_slide: "Create Slide",
        creating: "Creating...",
        new_slide_placeholder:
            "e.g., A slide about the marketing strategy with a focus on social media growth...",
    },
};

static ZH: Translations = Translations {
    home: HomeText {
        title: "Slide Deck",
        subtitle_prefix: "用",
        subtitle_highlight: "Slide Deck",
        subtitle_suffix: "将您的想法转化为精美的演示文稿",
        placeholder: "描述您的演示文稿想法，或拖入图片、PDF 或音频...",
        drop_files: "拖放文件到这里...",
        attach: "附件",
        powered_by: "由 Gemini 驱动",
        history: "历史记录",
        no_history: "暂无演示文稿。在上方创建您的第一个演示文稿！",
        delete_presentation_title: "删除演示文稿",
        delete_presentation_confirm: "您确定要删除此演示文稿吗？此操作无法撤销。",
        delete: "删除",
        open: "打开",
        suggestions: [
            "什么是 AI Agent？",
            "一家制造 AI 咖啡机的初创公司的融资演讲稿",
            "如何制作完美的酸面团面包",
            "可再生能源的未来",
        ],
    },
    outline: OutlineText {
        title: "幻灯片大纲",
        subtitle: "在生成图像之前检查并编辑您的结构。",
        generating: "AI 生成中...",
        parsing: "解析结构中...",
        initializing: "初始化中...",
        parse_error: "无法自动解析大纲。请重试或等待生成完成。",
        generate_slides: "生成幻灯片",
        slide_label: "幻灯片",
        field_title: "标题",
        field_content: "内容",
        field_visual: "视觉提示词",
        attached: "已附加",
        waiting_for_tokens: "等待生成...",
    },
    slide_show: SlideShowText {
        slide: "幻灯片",
        of: "/",
        processing: "处理中",
        export_pptx: "导出 PPTX",
        new_slide: "新幻灯片",
        delete_slide_title: "删除幻灯片",
        delete_slide_confirm: "您确定要删除此幻灯片吗？此操作无法撤销。",
        stop_generating: "停止生成",
        generation_failed: "生成失败",
        failed_desc: "无法为此幻灯片生成图像。您可以重试或忽略。",
        ignore: "忽略",
        regenerate: "重新生成",
        creating_visuals: "正在创建视觉效果...",
        add_text: "添加文本",
        edit_text_hint: "双击文本进行编辑",
        format_hint: "选择文本以显示格式工具",
        back_title: "返回首页",
        undo: "撤销",
        redo: "重做",
    },
    modals: ModalText {
        regenerate_title: "重新生成幻灯片图像",
        regenerate_desc: "编辑下方的视觉描述以引导 AI 生成新的背景图像。",
        generate_new_image: "生成新图像",
        cancel: "取消",
        add_slide_title: "添加新幻灯片",
        add_slide_desc: "描述新幻灯片的内容。AI 将为您生成标题、要点和背景图像。",
        create_slide: "创建幻灯片",
        creating: "创建中...",
        new_slide_placeholder: "例如：关于营销策略的幻灯片，重点关注社交媒体增长...",
    },
};

/// Strings for a language
pub fn translations(language: Language) -> &'static Translations {
    match language {
        Language::En => &EN,
        Language::Zh => &ZH,
    }
}

/// Format a timestamp for history cards in the current language.
pub fn format_timestamp(ts: DateTime<Utc>, language: Language) -> String {
    match language {
        Language::En => ts.format("%b %e, %H:%M").to_string(),
        Language::Zh => format!(
            "{}月{}日 {:02}:{:02}",
            ts.month(),
            ts.day(),
            ts.hour(),
            ts.minute()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_toggle_flips_between_two_languages() {
        assert_eq!(Language::En.toggle(), Language::Zh);
        assert_eq!(Language::Zh.toggle(), Language::En);
        assert_eq!(Language::En.toggle().toggle(), Language::En);
    }

    #[test]
    fn test_language_serde_form() {
        assert_eq!(serde_json::to_string(&Language::En).unwrap(), "\"en\"");
        let lang: Language = serde_json::from_str("\"zh\"").unwrap();
        assert_eq!(lang, Language::Zh);
    }

    #[test]
    fn test_table_selection() {
        assert_eq!(translations(Language::En).home.history, "History");
        assert_eq!(translations(Language::Zh).home.history, "历史记录");
        assert_eq!(translations(Language::En).home.suggestions.len(), 4);
        assert_eq!(
            translations(Language::Zh).modals.regenerate_title,
            "重新生成幻灯片图像"
        );
    }

    #[test]
    fn test_timestamp_formatting() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 5, 14, 7, 0).unwrap();
        assert_eq!(format_timestamp(ts, Language::En), "Mar  5, 14:07");
        assert_eq!(format_timestamp(ts, Language::Zh), "3月5日 14:07");
    }
}

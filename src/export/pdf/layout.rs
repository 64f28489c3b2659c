//! PDF页面排版：折行与分页，与具体的PDF后端无关

use crate::store::ResultStore;

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const MARGIN_MM: f32 = 15.0;
pub const LINE_HEIGHT_MM: f32 = 10.0;
pub const HEADING_SIZE_PT: f32 = 14.0;
pub const BODY_SIZE_PT: f32 = 12.0;

/// Helvetica的平均字宽（em），取偏大值以免溢出右边距
const AVERAGE_GLYPH_WIDTH_EM: f32 = 0.55;
const MM_PER_PT: f32 = 25.4 / 72.0;
/// 基线相对行顶部的位置
const BASELINE_RATIO: f32 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Heading,
    Body,
}

impl LineStyle {
    pub fn font_size(&self) -> f32 {
        match self {
            LineStyle::Heading => HEADING_SIZE_PT,
            LineStyle::Body => BODY_SIZE_PT,
        }
    }

    /// 一行可容纳的字符数
    pub fn max_chars(&self) -> usize {
        let glyph_width_mm = self.font_size() * AVERAGE_GLYPH_WIDTH_EM * MM_PER_PT;
        ((PAGE_WIDTH_MM - 2.0 * MARGIN_MM) / glyph_width_mm).floor() as usize
    }
}

/// 已定位的一行文字，y为基线距页面底部的距离
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub style: LineStyle,
    pub x_mm: f32,
    pub y_mm: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub lines: Vec<PlacedLine>,
}

/// 将报告排版为若干页，至少一页
pub fn layout(store: &ResultStore) -> Vec<PageLayout> {
    let mut cursor = PageCursor::new();

    for (name, content) in store.iter() {
        for line in wrap_text(&sanitize_latin1(name), LineStyle::Heading.max_chars()) {
            cursor.place(line, LineStyle::Heading);
        }
        for line in wrap_text(&sanitize_latin1(content), LineStyle::Body.max_chars()) {
            cursor.place(line, LineStyle::Body);
        }
        cursor.skip_line();
    }

    cursor.finish()
}

struct PageCursor {
    pages: Vec<PageLayout>,
    current: PageLayout,
    /// 距页面顶部的距离
    offset_mm: f32,
}

impl PageCursor {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: PageLayout::default(),
            offset_mm: MARGIN_MM,
        }
    }

    fn place(&mut self, text: String, style: LineStyle) {
        if self.offset_mm + LINE_HEIGHT_MM > PAGE_HEIGHT_MM - MARGIN_MM {
            self.pages.push(std::mem::take(&mut self.current));
            self.offset_mm = MARGIN_MM;
        }

        self.current.lines.push(PlacedLine {
            text,
            style,
            x_mm: MARGIN_MM,
            y_mm: PAGE_HEIGHT_MM - self.offset_mm - LINE_HEIGHT_MM * BASELINE_RATIO,
        });
        self.offset_mm += LINE_HEIGHT_MM;
    }

    fn skip_line(&mut self) {
        self.offset_mm += LINE_HEIGHT_MM;
    }

    fn finish(mut self) -> Vec<PageLayout> {
        self.pages.push(self.current);
        self.pages
    }
}

/// 按词折行，保留显式换行；超长单词按字符切分
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_len = 0;

        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            while word.len() > max_chars {
                if line_len > 0 {
                    lines.push(std::mem::take(&mut line));
                    line_len = 0;
                }
                let rest = word.split_off(max_chars);
                lines.push(word.into_iter().collect());
                word = rest;
            }

            let needed = if line_len == 0 { word.len() } else { line_len + 1 + word.len() };
            if needed > max_chars {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line.extend(word.iter());
            line_len += word.len();
        }

        lines.push(line);
    }

    lines
}

/// 内置字体仅覆盖Latin-1，其余字符替换为 '?'
pub fn sanitize_latin1(text: &str) -> String {
    text.chars()
        .filter(|c| *c != '\r')
        .map(|c| match c {
            '\t' => ' ',
            '\n' => '\n',
            c if (c as u32) < 0x20 => ' ',
            c if (0x7F..=0x9F).contains(&(c as u32)) => '?',
            c if (c as u32) <= 0xFF => c,
            _ => '?',
        })
        .collect()
}

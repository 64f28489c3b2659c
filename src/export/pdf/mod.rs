//! PDF导出，依赖可选的 `pdf` feature（printpdf）

use super::ExportError;
use crate::store::ResultStore;

pub mod layout;

pub use layout::{PageLayout, layout};

pub const DOCUMENT_TITLE: &str = "Startup Report";

/// PDF导出能力探测
pub fn pdf_available() -> bool {
    cfg!(feature = "pdf")
}

/// 每个段落为加粗标题 + 正文，内容溢出时自动分页
pub fn to_pdf(store: &ResultStore) -> Result<Vec<u8>, ExportError> {
    if !pdf_available() {
        return Err(ExportError::Unavailable);
    }
    render(&layout(store))
}

#[cfg(feature = "pdf")]
fn render(pages: &[PageLayout]) -> Result<Vec<u8>, ExportError> {
    use layout::{LineStyle, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
    use printpdf::{BuiltinFont, Mm, PdfDocument};

    let render_error = |e: printpdf::Error| ExportError::Render(e.to_string());

    let (doc, first_page, first_layer) = PdfDocument::new(
        DOCUMENT_TITLE,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(render_error)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(render_error)?;

    for (index, page) in pages.iter().enumerate() {
        let (page_index, layer_index) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1")
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);

        for line in &page.lines {
            let font = match line.style {
                LineStyle::Heading => &bold,
                LineStyle::Body => &regular,
            };
            layer.use_text(
                line.text.as_str(),
                line.style.font_size(),
                Mm(line.x_mm),
                Mm(line.y_mm),
                font,
            );
        }
    }

    doc.save_to_bytes().map_err(render_error)
}

#[cfg(not(feature = "pdf"))]
fn render(_pages: &[PageLayout]) -> Result<Vec<u8>, ExportError> {
    Err(ExportError::Unavailable)
}

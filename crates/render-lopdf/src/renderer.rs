use crate::page::PageContext;
use crate::RenderError;
use caresheet_layout::PositionedElement;
use lopdf::{dictionary, Document, Object, Stream};

/// Renders one page of positioned elements into a complete PDF.
///
/// The font resources are the non-embedded base-14 Helvetica pair (`F1`
/// regular, `F2` bold) with WinAnsi encoding; element text is measured
/// against compatible metrics by the layout engine. The document carries
/// no timestamps, so identical input yields identical bytes.
pub fn render_page(
    elements: &[PositionedElement],
    page_width: f32,
    page_height: f32,
) -> Result<Vec<u8>, RenderError> {
    let mut ctx = PageContext::new(page_height);
    for el in elements {
        ctx.draw_element(el)?;
    }
    let content = ctx.finish();
    log::debug!(
        "rendering page: {} elements, {} content ops",
        elements.len(),
        content.operations.len()
    );

    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let font_regular = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let font_bold = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_regular,
            "F2" => font_bold,
        },
    });

    let content_id = doc.add_object(Stream::new(
        dictionary! {},
        content.encode().map_err(RenderError::Pdf)?,
    ));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.0.into(), 0.0.into(), page_width.into(), page_height.into()],
        "Contents" => content_id,
        "Resources" => resources_id,
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => 1,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| RenderError::Pdf(e.into()))?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use caresheet_layout::{LayoutElement, TextElement, TextStyle};
    use caresheet_types::{Color, Rect};

    fn text_el(content: &str, y: f32) -> PositionedElement {
        PositionedElement::new(
            Rect::new(40.0, y, 100.0, 10.0),
            LayoutElement::Text(TextElement {
                content: content.to_string(),
                style: TextStyle::regular(9.0, Color::default()),
            }),
        )
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn produces_pdf_with_text_in_content_stream() {
        let bytes = render_page(&[text_el("Maria Santos", 60.0)], 595.0, 842.0).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));
        // Content streams are not compressed, so the literal survives.
        assert!(contains(&bytes, b"(Maria Santos)"));
        assert!(contains(&bytes, b"Helvetica"));
    }

    #[test]
    fn identical_input_yields_identical_bytes() {
        let els = vec![text_el("Maria Santos", 60.0), text_el("Nurse", 80.0)];
        let a = render_page(&els, 595.0, 842.0).unwrap();
        let b = render_page(&els, 595.0, 842.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_page_still_renders() {
        let bytes = render_page(&[], 595.0, 842.0).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.7"));
    }
}

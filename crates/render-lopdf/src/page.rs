//! Translates positioned layout elements into PDF content-stream
//! operations. Layout coordinates are top-down; PDF's origin is the
//! bottom-left corner, so every y is flipped against the page height here
//! and nowhere else.

use crate::RenderError;
use caresheet_layout::{
    BoxElement, FontRole, LayoutElement, PositionedElement, RuleElement, TextElement,
};
use caresheet_types::Color;
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

/// Kappa for approximating a quarter circle with a cubic Bézier.
const ARC_K: f32 = 0.552_284_8;

pub(crate) struct PageContext {
    page_height: f32,
    content: Content,
    state: PageRenderState,
}

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font_name: &'static str,
    font_size: f32,
    fill_color: Option<Color>,
}

impl PageContext {
    pub(crate) fn new(page_height: f32) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: PageRenderState::default(),
        }
    }

    pub(crate) fn finish(self) -> Content {
        self.content
    }

    pub(crate) fn draw_element(&mut self, el: &PositionedElement) -> Result<(), RenderError> {
        match &el.element {
            LayoutElement::Text(text) => self.draw_text(text, el),
            LayoutElement::Box(boxed) => self.draw_box(boxed, el),
            LayoutElement::Rule(rule) => self.draw_rule(rule, el),
        }
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            self.op(
                "rg",
                vec![
                    (color.r as f32 / 255.0).into(),
                    (color.g as f32 / 255.0).into(),
                    (color.b as f32 / 255.0).into(),
                ],
            );
            self.state.fill_color = Some(color);
        }
    }

    fn set_font(&mut self, font: FontRole, size: f32) {
        let name = match font {
            FontRole::Regular => "F1",
            FontRole::Bold => "F2",
        };
        if self.state.font_name != name || self.state.font_size != size {
            self.op(
                "Tf",
                vec![Object::Name(name.as_bytes().to_vec()), size.into()],
            );
            self.state.font_name = name;
            self.state.font_size = size;
        }
    }

    fn draw_text(&mut self, text: &TextElement, el: &PositionedElement) -> Result<(), RenderError> {
        if text.content.trim().is_empty() {
            return Ok(());
        }
        self.set_fill_color(text.style.color);
        self.op("BT", vec![]);
        self.set_font(text.style.font, text.style.size);
        let baseline_y = el.y + text.style.size * 0.8;
        let pdf_y = self.page_height - baseline_y;
        self.op("Td", vec![el.x.into(), pdf_y.into()]);
        self.op(
            "Tj",
            vec![Object::String(
                to_win_ansi(&text.content),
                StringFormat::Literal,
            )],
        );
        self.op("ET", vec![]);
        Ok(())
    }

    fn draw_box(&mut self, boxed: &BoxElement, el: &PositionedElement) -> Result<(), RenderError> {
        self.set_fill_color(boxed.fill);
        let x = el.x;
        let y = self.page_height - (el.y + el.height);
        let r = boxed
            .corner_radius
            .min(el.width / 2.0)
            .min(el.height / 2.0)
            .max(0.0);

        if r == 0.0 {
            self.op(
                "re",
                vec![x.into(), y.into(), el.width.into(), el.height.into()],
            );
            self.op("f", vec![]);
            return Ok(());
        }

        let (w, h, k) = (el.width, el.height, ARC_K * r);
        // Clockwise from the bottom-left corner's arc end.
        self.op("m", vec![(x + r).into(), y.into()]);
        self.op("l", vec![(x + w - r).into(), y.into()]);
        self.op(
            "c",
            vec![
                (x + w - r + k).into(), y.into(),
                (x + w).into(), (y + r - k).into(),
                (x + w).into(), (y + r).into(),
            ],
        );
        self.op("l", vec![(x + w).into(), (y + h - r).into()]);
        self.op(
            "c",
            vec![
                (x + w).into(), (y + h - r + k).into(),
                (x + w - r + k).into(), (y + h).into(),
                (x + w - r).into(), (y + h).into(),
            ],
        );
        self.op("l", vec![(x + r).into(), (y + h).into()]);
        self.op(
            "c",
            vec![
                (x + r - k).into(), (y + h).into(),
                x.into(), (y + h - r + k).into(),
                x.into(), (y + h - r).into(),
            ],
        );
        self.op("l", vec![x.into(), (y + r).into()]);
        self.op(
            "c",
            vec![
                x.into(), (y + r - k).into(),
                (x + r - k).into(), y.into(),
                (x + r).into(), y.into(),
            ],
        );
        self.op("f", vec![]);
        Ok(())
    }

    fn draw_rule(&mut self, rule: &RuleElement, el: &PositionedElement) -> Result<(), RenderError> {
        self.op("w", vec![rule.thickness.into()]);
        self.op(
            "RG",
            vec![
                (rule.color.r as f32 / 255.0).into(),
                (rule.color.g as f32 / 255.0).into(),
                (rule.color.b as f32 / 255.0).into(),
            ],
        );
        let line_y = self.page_height - el.y;
        self.op("m", vec![el.x.into(), line_y.into()]);
        self.op("l", vec![(el.x + el.width).into(), line_y.into()]);
        self.op("S", vec![]);
        Ok(())
    }
}

fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| if c as u32 <= 255 { c as u8 } else { b'?' })
        .collect()
}

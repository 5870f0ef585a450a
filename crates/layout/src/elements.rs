use caresheet_types::{Color, Rect};

/// A simple, geometry-aware data structure representing a single drawable item.
/// This is the final output of the layout process, containing an absolute
/// position and final styling information. A page is a collection of these.
#[derive(Clone, Debug)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
}

impl PositionedElement {
    pub fn new(rect: Rect, element: LayoutElement) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            element,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// An enum representing the different types of drawable elements.
#[derive(Clone, Debug)]
pub enum LayoutElement {
    Text(TextElement),
    Box(BoxElement),
    Rule(RuleElement),
}

impl std::fmt::Display for LayoutElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutElement::Text(t) => write!(f, "Text(\"{}\")", t.content),
            LayoutElement::Box(_) => write!(f, "Box"),
            LayoutElement::Rule(_) => write!(f, "Rule"),
        }
    }
}

/// Which of the two page fonts a text element is set in. The renderer maps
/// these to its internal font resources.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontRole {
    Regular,
    Bold,
}

#[derive(Clone, Debug)]
pub struct TextStyle {
    pub font: FontRole,
    pub size: f32,
    pub color: Color,
}

impl TextStyle {
    pub fn regular(size: f32, color: Color) -> Self {
        Self {
            font: FontRole::Regular,
            size,
            color,
        }
    }

    pub fn bold(size: f32, color: Color) -> Self {
        Self {
            font: FontRole::Bold,
            size,
            color,
        }
    }
}

/// A run of text to be drawn. Content never contains newlines; multi-line
/// blocks are emitted as one element per wrapped line.
#[derive(Clone, Debug)]
pub struct TextElement {
    pub content: String,
    pub style: TextStyle,
}

/// A filled rectangle, optionally with rounded corners. Chips use a corner
/// radius; backgrounds and placeholders use zero.
#[derive(Clone, Debug)]
pub struct BoxElement {
    pub fill: Color,
    pub corner_radius: f32,
}

/// A horizontal divider line drawn along the top edge of its rect.
#[derive(Clone, Debug)]
pub struct RuleElement {
    pub color: Color,
    pub thickness: f32,
}

use ratatui::layout::Rect;

/// Height of the input panel including borders.
pub const INPUT_PANEL_HEIGHT: u16 = 9;

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub input: Rect,
    pub results: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let body_height = area.height.saturating_sub(header_height + footer_height);
    let input_height = INPUT_PANEL_HEIGHT.min(body_height);

    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let input = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: input_height,
    };
    let results = Rect {
        x: area.x,
        y: input.y + input_height,
        width: area.width,
        height: body_height.saturating_sub(input_height),
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    Regions {
        header,
        input,
        results,
        footer,
    }
}

use ratatui::layout::Rect;

const HEADER_HEIGHT: u16 = 3;
const FORM_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 3;

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub form: Rect,
    pub body: Rect,
    pub footer: Rect,
}

/// Splits `area` into header, form, body and footer. Fixed-height rows
/// shrink first on tiny terminals, then the body takes what is left.
pub fn layout_regions(area: Rect) -> Regions {
    let header_height = HEADER_HEIGHT.min(area.height);
    let form_height = FORM_HEIGHT.min(area.height.saturating_sub(header_height));
    let footer_height =
        FOOTER_HEIGHT.min(area.height.saturating_sub(header_height + form_height));
    let body_height = area
        .height
        .saturating_sub(header_height + form_height + footer_height);

    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let form = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: form_height,
    };
    let body = Rect {
        x: area.x,
        y: form.y + form_height,
        width: area.width,
        height: body_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };

    Regions {
        header,
        form,
        body,
        footer,
    }
}

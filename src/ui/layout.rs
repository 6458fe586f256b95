use ratatui::layout::Rect;

/// Width of the image panel including its border.
pub const IMAGE_PANEL_WIDTH: u16 = 27;
const CAPTION_HEIGHT: u16 = 1;
const BUTTON_HEIGHT: u16 = 3;
const BUTTON_WIDTH: u16 = 16;
const GAP: u16 = 1;

/// Screen regions. The image and button rects double as mouse hit areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageRegions {
    pub header: Rect,
    pub image: Rect,
    pub caption: Rect,
    pub button: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Lays out the stage column (image, caption, button) centered in the body.
///
/// `image_height` is the number of art lines; the panel adds two border rows.
/// On a small terminal the column is clipped to the body, never spilling into
/// header or footer.
pub fn stage_regions(area: Rect, image_height: u16) -> StageRegions {
    let (header, body, footer) = layout_regions(area);

    let image_panel_height = image_height.saturating_add(2);
    let column_height = image_panel_height + GAP + CAPTION_HEIGHT + GAP + BUTTON_HEIGHT;
    let top = body.y + body.height.saturating_sub(column_height) / 2;

    let image = column_rect(body, top, IMAGE_PANEL_WIDTH, image_panel_height);
    let caption_y = top + image_panel_height + GAP;
    let caption = column_rect(body, caption_y, body.width, CAPTION_HEIGHT);
    let button_y = caption_y + CAPTION_HEIGHT + GAP;
    let button = column_rect(body, button_y, BUTTON_WIDTH, BUTTON_HEIGHT);

    StageRegions {
        header,
        image,
        caption,
        button,
        footer,
    }
}

fn column_rect(body: Rect, y: u16, width: u16, height: u16) -> Rect {
    let width = width.min(body.width);
    let bottom = body.y + body.height;
    let y = y.min(bottom);
    Rect {
        x: body.x + (body.width - width) / 2,
        y,
        width,
        height: height.min(bottom - y),
    }
}

/// True when the cell at (`column`, `row`) lies inside `rect`.
pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && row >= rect.y
        && column < rect.x.saturating_add(rect.width)
        && row < rect.y.saturating_add(rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(width: u16, height: u16) -> Rect {
        Rect {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    #[test]
    fn column_is_stacked_and_centered() {
        let regions = stage_regions(screen(80, 40), 9);
        assert_eq!(regions.image.height, 11);
        assert!(regions.image.y >= 3);
        assert!(regions.caption.y > regions.image.y + regions.image.height - 1);
        assert!(regions.button.y > regions.caption.y);
        assert_eq!(regions.image.x, (80 - IMAGE_PANEL_WIDTH) / 2);
    }

    #[test]
    fn tiny_terminal_clips_to_body() {
        let regions = stage_regions(screen(10, 8), 9);
        let body_bottom = 8 - 3;
        for rect in [regions.image, regions.caption, regions.button] {
            assert!(rect.width <= 10);
            assert!(rect.y + rect.height <= body_bottom);
        }
    }

    #[test]
    fn contains_checks_bounds() {
        let rect = Rect {
            x: 2,
            y: 3,
            width: 4,
            height: 2,
        };
        assert!(contains(rect, 2, 3));
        assert!(contains(rect, 5, 4));
        assert!(!contains(rect, 6, 4));
        assert!(!contains(rect, 2, 5));
        assert!(!contains(rect, 1, 3));
    }

    #[test]
    fn zero_sized_rect_contains_nothing() {
        let rect = Rect::default();
        assert!(!contains(rect, 0, 0));
    }
}

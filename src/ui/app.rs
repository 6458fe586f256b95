use crate::controller::StageController;
use crate::random::RandomRange;
use crate::resources::EmbeddedResources;
use crate::ui::layout::{contains, stage_regions, StageRegions};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

pub type SessionController = StageController<Box<dyn RandomRange>>;

/// One interactive session: the stage controller plus what the terminal
/// front-end needs around it.
pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    controller: SessionController,
    resources: EmbeddedResources,
    mouse_enabled: bool,
}

impl App {
    pub fn new(controller: SessionController, mouse_enabled: bool) -> Self {
        Self {
            should_quit: false,
            size: None,
            controller,
            resources: EmbeddedResources::new(),
            mouse_enabled,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn controller(&self) -> &SessionController {
        &self.controller
    }

    pub fn resources(&self) -> &EmbeddedResources {
        &self.resources
    }

    pub fn mouse_enabled(&self) -> bool {
        self.mouse_enabled
    }

    pub fn on_tick(&mut self) {}

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// Layout for the last known terminal size.
    pub fn regions(&self) -> Option<StageRegions> {
        let (width, height) = self.size?;
        Some(self.regions_for(Rect {
            x: 0,
            y: 0,
            width,
            height,
        }))
    }

    pub fn regions_for(&self, area: Rect) -> StageRegions {
        let image_height = self.resources.max_image_height() as u16;
        stage_regions(area, image_height)
    }

    /// Image interaction.
    pub fn tap_image(&mut self) {
        self.controller.tap();
    }

    /// Button interaction. Does nothing while the button is disabled.
    pub fn press_button(&mut self) -> bool {
        if !self.controller.describe().button_enabled {
            return false;
        }
        self.controller.advance()
    }

    /// Left click on the image taps it, on the button presses it.
    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if !self.mouse_enabled {
            return;
        }
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some(regions) = self.regions() else {
            return;
        };
        if contains(regions.image, mouse.column, mouse.row) {
            self.tap_image();
        } else if contains(regions.button, mouse.column, mouse.row) {
            self.press_button();
        }
    }
}

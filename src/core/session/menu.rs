//=========================================================================
// Menus
//=========================================================================
//
// Pointer hit-testing for the main and pause menus.
//
// Drawing happens outside the core. This module only decides which
// button a pointer event lands on and which button is highlighted while
// the pointer is held down.
//
//   PointerDown(x, y) → highlight button under pointer
//   PointerUp(x, y)   → clear highlight, activate button under pointer
//
//=========================================================================

//=== MenuButton ==========================================================

/// Buttons across both menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuButton {
    Play,
    Resume,
    MainMenu,
    Quit,
}

//=== HitBox ==============================================================

/// Button region in screen space. Bounds are exclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitBox {
    pub button: MenuButton,
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl HitBox {
    const fn new(button: MenuButton, left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            button,
            left,
            right,
            top,
            bottom,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x > self.left && x < self.right && y > self.top && y < self.bottom
    }
}

const MAIN_BUTTONS: [HitBox; 2] = [
    HitBox::new(MenuButton::Play, 580.0, 700.0, 300.0, 355.0),
    HitBox::new(MenuButton::Quit, 590.0, 670.0, 400.0, 435.0),
];

const PAUSE_BUTTONS: [HitBox; 3] = [
    HitBox::new(MenuButton::Resume, 565.0, 710.0, 230.0, 260.0),
    HitBox::new(MenuButton::MainMenu, 550.0, 735.0, 330.0, 360.0),
    HitBox::new(MenuButton::Quit, 590.0, 670.0, 430.0, 460.0),
];

//=== MenuKind ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    Main,
    Pause,
}

impl MenuKind {
    pub fn buttons(self) -> &'static [HitBox] {
        match self {
            Self::Main => &MAIN_BUTTONS,
            Self::Pause => &PAUSE_BUTTONS,
        }
    }

    /// Button under `(x, y)`, if any.
    pub fn hit(self, x: f32, y: f32) -> Option<MenuButton> {
        self.buttons()
            .iter()
            .find(|b| b.contains(x, y))
            .map(|b| b.button)
    }
}

//=== MenuState ===========================================================

/// Press/release tracking for the menu currently on screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuState {
    highlighted: Option<MenuButton>,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_down(&mut self, kind: MenuKind, x: f32, y: f32) {
        self.highlighted = kind.hit(x, y);
    }

    /// Returns the activated button, if the pointer was released over one.
    pub fn pointer_up(&mut self, kind: MenuKind, x: f32, y: f32) -> Option<MenuButton> {
        self.highlighted = None;
        kind.hit(x, y)
    }

    pub fn highlighted(&self) -> Option<MenuButton> {
        self.highlighted
    }

    pub fn clear(&mut self) {
        self.highlighted = None;
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

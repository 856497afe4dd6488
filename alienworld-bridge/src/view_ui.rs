//! View / UI rendering.
//!
//! Maps the container's current scene onto the matching screen in `ui`.

use crate::app::AlienworldApp;
use crate::messages::Message;
use crate::ui;

use alienworld_core::{AppPhase, BootScene, Scene};

use iced::{Element, Theme};

// ────────────────────────────────────────────────────────────────
// Title & Theme
// ────────────────────────────────────────────────────────────────

pub fn title(app: &AlienworldApp) -> String {
    title_for(app.container.phase())
}

pub fn title_for(phase: AppPhase) -> String {
    format!("alienworld XP /// {}", phase.label())
}

pub fn theme(_: &AlienworldApp) -> Theme {
    Theme::Dark
}

// ────────────────────────────────────────────────────────────────
// View
// ────────────────────────────────────────────────────────────────

pub fn view(app: &AlienworldApp) -> Element<'_, Message> {
    match app.container.scene() {
        Scene::Boot(BootScene::Bios(scene)) => ui::bios::view(&scene),
        Scene::Boot(BootScene::XpBoot(scene)) => {
            ui::xp_boot::view(&scene, &app.settings.assets_dir)
        }
        Scene::Boot(BootScene::Complete(scene)) => ui::welcome::view(&scene),
        Scene::Logon(scene) => ui::logon::view(&scene),
        Scene::Desktop(desktop) => ui::desktop::view(&desktop),
    }
}

//! Demo flow tying the four screen templates together.
//!
//! Home is a button list with a power button; every other page returns to
//! Home. Power on Home ends the run.

use embedded_graphics::prelude::*;
use gui_components::prelude::*;
use gui_system::prelude::*;
use platform::{DisplaySink, InputSource};
use ui::prelude::*;

/// Pages of the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Main menu
    Home,
    /// Approve/reject grid with icons
    Sign,
    /// Four-way settings grid
    Settings,
    /// Static text
    About,
    /// Confirmation with text body
    Wipe,
}

const HOME_ITEMS: [(&str, Page); 4] = [
    ("Sign Message", Page::Sign),
    ("Settings", Page::Settings),
    ("About", Page::About),
    ("Wipe Device", Page::Wipe),
];

/// Run pages until the user powers off from Home.
pub fn run<D: DisplaySink>(
    renderer: &mut Renderer<D>,
    res: &mut Resources,
    input: &mut dyn InputSource,
) -> Result<()> {
    let mut page = Page::Home;
    loop {
        let next = step(page, renderer, res, input)?;
        match next {
            Some(next) => page = next,
            None => return Ok(()),
        }
    }
}

/// Show `page` once; `None` means power off.
pub fn step<D: DisplaySink>(
    page: Page,
    renderer: &mut Renderer<D>,
    res: &mut Resources,
    input: &mut dyn InputSource,
) -> Result<Option<Page>> {
    let size = renderer.size();
    let selection = match page {
        Page::Home => {
            let config = ButtonListConfig::new("Home", HOME_ITEMS.iter().map(|(label, _)| *label))
                .top_nav(TopNavConfig::new("Home").back_button(false).power_button(true));
            ButtonListScreen::new(config, size, res)?.display(renderer, input)?
        }
        Page::Sign => {
            let config = LargeButtonConfig::new(
                "Sign Message",
                [("Approve", Some("check")), ("Reject", Some("cross"))],
            );
            LargeButtonScreen::new(config, size, res)?.display(renderer, input)?
        }
        Page::Settings => {
            let config = LargeButtonConfig::new(
                "Settings",
                ["Display", "Keys", "Network", "Reset"].map(GridButton::text),
            );
            LargeButtonScreen::new(config, size, res)?.display(renderer, input)?
        }
        Page::About => {
            let config = TextTopNavConfig::new(
                "About",
                "Offline signing device simulator. Frames are written as PNG files.",
            );
            TextTopNavScreen::new(config, size, res)?.display(renderer, input)?
        }
        Page::Wipe => {
            let config = BottomButtonConfig::new(
                "Wipe Device",
                "Erase every key stored on this device?",
                ["Erase", "Cancel"],
            );
            BottomButtonScreen::new(config, size, res)?.display(renderer, input)?
        }
    };
    tracing::info!(?page, code = selection.code(), "page finished");

    Ok(match (page, selection) {
        (Page::Home, Selection::Power) => None,
        (Page::Home, Selection::Button(i)) => HOME_ITEMS.get(i).map(|(_, p)| *p).or(Some(Page::Home)),
        (Page::Home, Selection::Back) => Some(Page::Home),
        (_, Selection::Power) => None,
        _ => Some(Page::Home),
    })
}

//! Load Game screen: pick a save slot to continue or start fresh

use super::{GameContext, PlayState, Transition};
use crate::gui::{SlotChoice, SlotEntry, SlotMenu};
use crate::input::{Input, InputState};
use log::{error, info};
use sdl2::render::Canvas;
use sdl2::video::Window;

pub struct LoadScreen {
    menu: SlotMenu,
}

impl LoadScreen {
    pub fn new(ctx: &GameContext) -> Self {
        let slots = ctx
            .saves
            .list_slots()
            .into_iter()
            .map(|(slot, hero_name)| SlotEntry { slot, hero_name })
            .collect();

        LoadScreen {
            menu: SlotMenu::new(
                &ctx.messages.get("Load Game"),
                slots,
                &ctx.messages.get("Empty"),
                &ctx.messages.get("Quit"),
            ),
        }
    }

    pub fn logic(&mut self, input: &mut InputState, ctx: &mut GameContext) -> Transition {
        if input.take_press(Input::Up) {
            self.menu.navigate_up();
        }
        if input.take_press(Input::Down) {
            self.menu.navigate_down();
        }

        if input.take_press(Input::Cancel) {
            return Transition::Quit;
        }
        if !input.take_press(Input::Accept) {
            return Transition::Stay;
        }

        match self.menu.selected_option() {
            SlotChoice::NewGame(slot) => {
                info!("Starting character creation for slot {}", slot);
                Transition::NewGame { slot }
            }
            SlotChoice::Continue(slot) => match ctx.saves.load_game(slot) {
                Ok(save) => {
                    ctx.saves.set_game_slot(slot);
                    info!("Continuing '{}' from slot {}", save.metadata.player_name, slot);
                    input.lock_all = true;
                    Transition::Play(Box::new(PlayState::from_save(save)))
                }
                Err(e) => {
                    error!("Failed to load slot {}: {}", slot, e);
                    Transition::Stay
                }
            },
            SlotChoice::Quit => Transition::Quit,
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        self.menu.render(canvas)
    }
}

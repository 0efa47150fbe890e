//! New Game screen
//!
//! Character creation: the player cycles through preset hero appearances
//! (optionally limited by the selected class), names the hero, decides on
//! permadeath and starts the game in the save slot picked on the load
//! screen.
//!
//! # Name handling
//!
//! The name box follows the current preset's default name until the player
//! types something different. From then on the typed name survives preset
//! changes, unless the box is emptied, in which case the next preset's
//! name fills it again.

use super::{GameContext, PlayState, Transition};
use crate::config::{EngineSettings, HeroOption, HeroOptions, NewGameLayout};
use crate::gui::{
    Button, CheckBox, Label, ListBox, TabList, TextInput, Tooltip, TooltipData,
};
use crate::input::{Input, InputState};
use crate::messages::MessageCatalog;
use crate::render::{draw_panel, ImageInfo, ImageLoader, TextureCache};
use crate::text::menu_color;
use log::{debug, info, warn};
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::Canvas;
use sdl2::video::Window;

pub const LAYOUT_FILE: &str = "menus/gamenew.json";
pub const HERO_OPTIONS_FILE: &str = "engine/hero_options.json";
pub const PORTRAIT_BORDER_IMAGE: &str = "images/menus/portrait_border.png";
pub const BUTTON_PREV_IMAGE: &str = "images/menus/buttons/left.png";
pub const BUTTON_NEXT_IMAGE: &str = "images/menus/buttons/right.png";

const NAME_MAX_LENGTH: usize = 20;
const CLASS_LIST_ROWS: usize = 12;

/// Direction to move through the available hero options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cycle {
    /// Keep the current option if it is still available
    Reset,
    Next,
    Previous,
}

/// Picks the option id after moving `dir` from `current` within `available`
///
/// Ids missing from `available` snap to the first entry (or the last when
/// moving backwards). Both directions wrap.
pub fn cycle_option(current: usize, available: &[usize], dir: Cycle) -> usize {
    let (Some(&first), Some(&last)) = (available.first(), available.last()) else {
        return current;
    };
    let found = available.iter().position(|&id| id == current);

    match dir {
        Cycle::Reset => {
            if found.is_some() {
                current
            } else {
                first
            }
        }
        Cycle::Next => found
            .and_then(|i| available.get(i + 1).copied())
            .unwrap_or(first),
        Cycle::Previous => match found {
            Some(0) | None => last,
            Some(i) => available[i - 1],
        },
    }
}

/// Widgets reachable with Tab, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Exit,
    Create,
    Name,
    Permadeath,
    Prev,
    Next,
    ClassList,
}

pub struct NewGameScreen {
    layout: NewGameLayout,
    hero_options: HeroOptions,
    current_option: usize,
    modified_name: bool,
    game_slot: u8,

    button_exit: Button,
    button_create: Button,
    button_prev: Button,
    button_next: Button,
    input_name: TextInput,
    button_permadeath: CheckBox,
    class_list: ListBox,
    tip: Tooltip,
    tip_buf: TooltipData,

    label_portrait: Label,
    label_name: Label,
    label_permadeath: Label,
    label_classlist: Label,

    portrait_image: Option<ImageInfo>,
    portrait_border: Option<ImageInfo>,

    tablist: TabList<Focus>,
}

impl NewGameScreen {
    /// Builds the screen from the layout and hero option files
    pub fn new(ctx: &GameContext, images: &mut dyn ImageLoader, game_slot: u8) -> Self {
        let layout = NewGameLayout::load(&ctx.settings.data_path(LAYOUT_FILE));
        let hero_options =
            HeroOptions::load(&ctx.settings.data_path(HERO_OPTIONS_FILE), &ctx.messages);
        Self::with_data(ctx, images, game_slot, layout, hero_options)
    }

    /// Builds the screen from already-loaded layout and hero options
    pub fn with_data(
        ctx: &GameContext,
        images: &mut dyn ImageLoader,
        game_slot: u8,
        layout: NewGameLayout,
        hero_options: HeroOptions,
    ) -> Self {
        let msg = &ctx.messages;

        let mut button_exit = Button::new(msg.get("Cancel"));
        button_exit.set_base_pos(layout.button_exit);

        let mut button_create = Button::new(msg.get("Create"));
        button_create.enabled = false;
        button_create.set_base_pos(layout.button_create);

        let mut button_prev = Button::with_image(images, BUTTON_PREV_IMAGE, "<");
        button_prev.set_base_pos(layout.button_prev);

        let mut button_next = Button::with_image(images, BUTTON_NEXT_IMAGE, ">");
        button_next.set_base_pos(layout.button_next);

        let mut input_name = TextInput::new();
        input_name.max_length = NAME_MAX_LENGTH;
        input_name.set_base_pos(layout.name_input);

        let mut button_permadeath = CheckBox::new();
        button_permadeath.set_base_pos(layout.button_permadeath);
        if ctx.engine.death_penalty.permadeath {
            button_permadeath.enabled = false;
            button_permadeath.set_checked(true);
        }

        let mut class_list = ListBox::new(CLASS_LIST_ROWS);
        class_list.can_deselect = false;
        class_list.set_base_pos(layout.class_list);
        for class in &ctx.engine.hero_classes {
            class_list.append(msg.get(&class.name), class_tooltip(&class.description, msg));
        }
        if !class_list.is_empty() {
            class_list.select(0);
        }

        let color_normal = menu_color("menu_normal");
        let label_portrait = Label::new(
            layout.portrait_label.clone(),
            msg.get("Choose a Portrait"),
            color_normal,
        );
        let label_name = Label::new(layout.name_label.clone(), msg.get("Choose a Name"), color_normal);
        let label_permadeath = Label::new(
            layout.permadeath_label.clone(),
            msg.get("Permadeath?"),
            color_normal,
        );
        let label_classlist = Label::new(
            layout.classlist_label.clone(),
            msg.get("Choose a Class"),
            color_normal,
        );

        let portrait_border = images.load_image(PORTRAIT_BORDER_IMAGE);

        let mut tablist = TabList::new();
        for focus in [
            Focus::Exit,
            Focus::Create,
            Focus::Name,
            Focus::Permadeath,
            Focus::Prev,
            Focus::Next,
            Focus::ClassList,
        ] {
            tablist.add(focus);
        }

        let mut screen = NewGameScreen {
            layout,
            hero_options,
            current_option: 0,
            modified_name: false,
            game_slot,
            button_exit,
            button_create,
            button_prev,
            button_next,
            input_name,
            button_permadeath,
            class_list,
            tip: Tooltip::new(),
            tip_buf: TooltipData::new(),
            label_portrait,
            label_name,
            label_permadeath,
            label_classlist,
            portrait_image: None,
            portrait_border,
            tablist,
        };

        let first = screen.option(0);
        screen.load_portrait(images, &first.portrait);
        screen.set_name(&first.name);
        screen.set_hero_option(Cycle::Reset, &ctx.engine, images);

        screen.refresh_widgets(ctx);

        info!(
            "New game screen ready: {} hero options, {} classes, slot {}",
            screen.hero_options.all_options().len(),
            screen.class_list.len(),
            game_slot
        );
        screen
    }

    pub fn current_option(&self) -> usize {
        self.current_option
    }

    pub fn hero_name(&self) -> &str {
        self.input_name.text()
    }

    pub fn is_create_enabled(&self) -> bool {
        self.button_create.enabled
    }

    fn option(&self, id: usize) -> HeroOption {
        self.hero_options.get(id).cloned().unwrap_or_default()
    }

    fn load_portrait(&mut self, images: &mut dyn ImageLoader, path: &str) {
        self.portrait_image = None;
        if !path.is_empty() {
            self.portrait_image = images.load_image(path);
        }
    }

    /// Fills the name box with `default_name` unless the player has typed their own
    fn set_name(&mut self, default_name: &str) {
        if self.input_name.text().is_empty() || !self.modified_name {
            self.input_name.set_text(default_name);
            self.modified_name = false;
        }
    }

    /// Option ids allowed by the selected class, or every option
    fn available_options(&self, engine: &EngineSettings) -> Vec<usize> {
        if let Some(class) = self.class_list.selected().and_then(|i| engine.hero_class(i)) {
            if !class.options.is_empty() {
                let ids: Vec<usize> = class
                    .options
                    .iter()
                    .copied()
                    .filter(|&id| self.hero_options.get(id).is_some())
                    .collect();
                if !ids.is_empty() {
                    return ids;
                }
                warn!(
                    "Class '{}' has no valid hero options; showing all",
                    class.name
                );
            }
        }
        self.hero_options.all_options().to_vec()
    }

    fn set_hero_option(&mut self, dir: Cycle, engine: &EngineSettings, images: &mut dyn ImageLoader) {
        let available = self.available_options(engine);
        self.current_option = cycle_option(self.current_option, &available, dir);
        debug!("Hero option {:?} -> {}", dir, self.current_option);

        let option = self.option(self.current_option);
        self.load_portrait(images, &option.portrait);
        self.set_name(&option.name);
    }

    fn apply_focus(&mut self) {
        let tabs = &self.tablist;
        self.button_exit.in_focus = tabs.is_focused(Focus::Exit);
        self.button_create.in_focus = tabs.is_focused(Focus::Create);
        self.input_name.in_focus = tabs.is_focused(Focus::Name);
        self.button_permadeath.in_focus = tabs.is_focused(Focus::Permadeath);
        self.button_prev.in_focus = tabs.is_focused(Focus::Prev);
        self.button_next.in_focus = tabs.is_focused(Focus::Next);
        self.class_list.in_focus = tabs.is_focused(Focus::ClassList);
    }

    /// Portrait area in window coordinates
    fn portrait_rect(&self, frame: Point) -> Rect {
        let mut rect = self.layout.portrait.to_rect();
        rect.offset(frame.x(), frame.y());
        rect
    }

    /// Recomputes widget positions for the current view size
    pub fn refresh_widgets(&mut self, ctx: &GameContext) {
        let view = ctx.settings.view();
        let frame = ctx.frame_offset();
        let screen = Point::new(0, 0);

        self.button_exit.set_pos(screen, view);
        self.button_create.set_pos(screen, view);

        self.button_prev.set_pos(frame, view);
        self.button_next.set_pos(frame, view);
        self.button_permadeath.set_pos(frame, view);
        self.class_list.set_pos(frame, view);

        self.label_portrait.set_pos(frame);
        self.label_name.set_pos(frame);
        self.label_permadeath.set_pos(frame);
        self.label_classlist.set_pos(frame);

        self.input_name.set_pos(frame, view);
    }

    fn start_game(&self, ctx: &mut GameContext) -> PlayState {
        let option = self.option(self.current_option);
        let mut play = PlayState::new();

        let avatar = play.avatar_mut();
        avatar.gfx_base = option.base;
        avatar.gfx_head = option.head;
        avatar.gfx_portrait = option.portrait;
        avatar.name = self.input_name.text().to_string();
        avatar.permadeath = self.button_permadeath.is_checked();

        ctx.saves.set_game_slot(self.game_slot);
        play.reset_game();
        play.load_class(&ctx.engine, self.class_list.selected());

        info!(
            "Creating hero '{}' (option {}, permadeath {}) in slot {}",
            play.avatar().name,
            self.current_option,
            play.avatar().permadeath,
            ctx.saves.game_slot()
        );
        play
    }

    pub fn logic(
        &mut self,
        input: &mut InputState,
        ctx: &mut GameContext,
        images: &mut dyn ImageLoader,
    ) -> Transition {
        if input.window_resized() {
            self.refresh_widgets(ctx);
        }

        if !self.input_name.edit_mode && self.tablist.logic(input) {
            self.apply_focus();
        }

        self.input_name.logic(input);

        self.button_permadeath.check_click(input);
        if self.layout.show_classlist && self.class_list.check_click(input) {
            self.set_hero_option(Cycle::Reset, &ctx.engine, images);
        }

        // a hero needs a name
        self.button_create.enabled = !self.input_name.text().is_empty();

        if input.take_press(Input::Cancel) || self.button_exit.check_click(input) {
            info!("Character creation cancelled");
            return Transition::LoadGame;
        }

        if self.button_create.check_click(input) {
            input.lock_all = true;
            return Transition::Play(Box::new(self.start_game(ctx)));
        }

        if self.button_next.check_click(input) {
            self.set_hero_option(Cycle::Next, &ctx.engine, images);
        } else if self.button_prev.check_click(input) {
            self.set_hero_option(Cycle::Previous, &ctx.engine, images);
        }

        if self.input_name.text() != self.option(self.current_option).name {
            self.modified_name = true;
        }

        Transition::Stay
    }

    pub fn render(
        &mut self,
        canvas: &mut Canvas<Window>,
        images: &TextureCache,
        input: &InputState,
        ctx: &GameContext,
    ) -> Result<(), String> {
        self.button_exit.render(canvas, images)?;
        self.button_create.render(canvas, images)?;
        self.button_prev.render(canvas, images)?;
        self.button_next.render(canvas, images)?;
        self.input_name.render(canvas)?;
        self.button_permadeath.render(canvas)?;

        let dest = self.portrait_rect(ctx.frame_offset());
        let src = Rect::new(0, 0, dest.width(), dest.height());

        match self.portrait_image {
            Some(image) => {
                images.draw(canvas, image, Some(src), dest)?;
                if let Some(border) = self.portrait_border {
                    images.draw(canvas, border, Some(src), dest)?;
                }
            }
            None => draw_panel(canvas, dest, Color::RGB(20, 20, 28), Color::RGB(100, 100, 120))?,
        }

        if !self.label_portrait.is_hidden() {
            self.label_portrait.render(canvas)?;
        }
        if !self.label_name.is_hidden() {
            self.label_name.render(canvas)?;
        }
        if !self.label_permadeath.is_hidden() {
            self.label_permadeath.render(canvas)?;
        }

        if self.layout.show_classlist {
            if !self.label_classlist.is_hidden() {
                self.label_classlist.render(canvas)?;
            }
            self.class_list.render(canvas)?;

            let tip_new = self.class_list.check_tooltip(input.mouse);
            if !tip_new.is_empty() {
                // keep the buffered tooltip while the hovered row is unchanged
                if tip_new != self.tip_buf {
                    self.tip_buf = tip_new;
                }
                self.tip.render(canvas, &self.tip_buf, input.mouse)?;
            }
        }

        Ok(())
    }
}

fn class_tooltip(description: &str, messages: &MessageCatalog) -> String {
    if description.is_empty() {
        String::new()
    } else {
        messages.get(description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DeathPenalty, HeroClass};
    use crate::render::testing::FakeImages;
    use crate::settings::Settings;
    use tempfile::TempDir;

    const OPTIONS_JSON: &str = r#"{ "options": [
        { "index": 0, "base": "male", "head": "short", "portrait": "p0.png", "name": "Matthew" },
        { "index": 1, "base": "female", "head": "long", "portrait": "p1.png", "name": "Ayla" },
        { "index": 2, "base": "male", "head": "bald", "portrait": "p2.png", "name": "Bram" },
        { "index": 3, "base": "female", "head": "bun", "portrait": "p3.png", "name": "Cora" }
    ] }"#;

    struct Fixture {
        _dir: TempDir,
        ctx: GameContext,
        images: FakeImages,
        input: InputState,
    }

    fn fixture(permadeath: bool) -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::new(dir.path(), dir.path().join("saves"));
        let engine = EngineSettings {
            hero_classes: vec![
                HeroClass {
                    name: "Warrior".to_string(),
                    description: "Strong in melee.".to_string(),
                    physical: 2,
                    equipment: vec!["sword".to_string()],
                    ..HeroClass::default()
                },
                HeroClass {
                    name: "Mage".to_string(),
                    options: vec![2, 3],
                    mental: 2,
                    ..HeroClass::default()
                },
                HeroClass {
                    name: "Oddball".to_string(),
                    options: vec![17],
                    ..HeroClass::default()
                },
            ],
            death_penalty: DeathPenalty { permadeath },
            ..EngineSettings::default()
        };
        let ctx = GameContext::new(settings, engine, MessageCatalog::empty()).unwrap();
        Fixture {
            _dir: dir,
            ctx,
            images: FakeImages::new(),
            input: InputState::new(),
        }
    }

    fn screen(f: &mut Fixture) -> NewGameScreen {
        let options = HeroOptions::from_json_str(OPTIONS_JSON, &f.ctx.messages).unwrap();
        NewGameScreen::with_data(&f.ctx, &mut f.images, 3, NewGameLayout::default(), options)
    }

    fn center(rect: Rect) -> (i32, i32) {
        (rect.center().x(), rect.center().y())
    }

    fn click(f: &mut Fixture, screen: &mut NewGameScreen, rect: Rect) -> Transition {
        let (x, y) = center(rect);
        f.input.begin_frame();
        f.input.click(x, y);
        screen.logic(&mut f.input, &mut f.ctx, &mut f.images)
    }

    fn tick(f: &mut Fixture, screen: &mut NewGameScreen) -> Transition {
        f.input.begin_frame();
        screen.logic(&mut f.input, &mut f.ctx, &mut f.images)
    }

    fn class_row(screen: &NewGameScreen, row: i32) -> Rect {
        let list = screen.class_list.pos();
        Rect::new(list.x(), list.y() + row * 20, list.width(), 20)
    }

    #[test]
    fn test_cycle_option_moves_and_wraps() {
        let ids = [1, 3, 4];
        assert_eq!(cycle_option(3, &ids, Cycle::Next), 4);
        assert_eq!(cycle_option(4, &ids, Cycle::Next), 1);
        assert_eq!(cycle_option(3, &ids, Cycle::Previous), 1);
        assert_eq!(cycle_option(1, &ids, Cycle::Previous), 4);
        assert_eq!(cycle_option(3, &ids, Cycle::Reset), 3);
    }

    #[test]
    fn test_cycle_option_snaps_unknown_current() {
        let ids = [2, 3];
        assert_eq!(cycle_option(0, &ids, Cycle::Reset), 2);
        assert_eq!(cycle_option(0, &ids, Cycle::Next), 2);
        assert_eq!(cycle_option(0, &ids, Cycle::Previous), 3);
        assert_eq!(cycle_option(5, &[], Cycle::Next), 5);
    }

    #[test]
    fn test_initial_state() {
        let mut f = fixture(false);
        let screen = screen(&mut f);

        assert_eq!(screen.current_option(), 0);
        assert_eq!(screen.hero_name(), "Matthew");
        assert_eq!(screen.class_list.selected(), Some(0));
        assert!(screen.portrait_image.is_some());
        assert!(f.images.requested.contains(&"p0.png".to_string()));
        assert!(!screen.is_create_enabled());
        assert!(!screen.button_permadeath.is_checked());
    }

    #[test]
    fn test_next_and_prev_cycle_portraits_and_names() {
        let mut f = fixture(false);
        let mut screen = screen(&mut f);

        let next = screen.button_next.pos();
        click(&mut f, &mut screen, next);
        assert_eq!(screen.current_option(), 1);
        assert_eq!(screen.hero_name(), "Ayla");
        assert_eq!(f.images.last(), Some("p1.png"));
        assert!(screen.is_create_enabled());

        let prev = screen.button_prev.pos();
        click(&mut f, &mut screen, prev);
        click(&mut f, &mut screen, prev);
        assert_eq!(screen.current_option(), 3);
        assert_eq!(screen.hero_name(), "Cora");
    }

    #[test]
    fn test_class_restricts_options() {
        let mut f = fixture(false);
        let mut screen = screen(&mut f);

        let mage = class_row(&screen, 1);
        click(&mut f, &mut screen, mage);
        assert_eq!(screen.class_list.selected(), Some(1));
        assert_eq!(screen.current_option(), 2);
        assert_eq!(screen.hero_name(), "Bram");

        let next = screen.button_next.pos();
        click(&mut f, &mut screen, next);
        assert_eq!(screen.current_option(), 3);
        click(&mut f, &mut screen, next);
        assert_eq!(screen.current_option(), 2);

        // back to a class without a subset keeps the current option
        let warrior = class_row(&screen, 0);
        click(&mut f, &mut screen, warrior);
        assert_eq!(screen.current_option(), 2);
    }

    #[test]
    fn test_class_with_unknown_options_uses_all() {
        let mut f = fixture(false);
        let mut screen = screen(&mut f);

        let oddball = class_row(&screen, 2);
        click(&mut f, &mut screen, oddball);
        assert_eq!(screen.current_option(), 0);

        let next = screen.button_next.pos();
        click(&mut f, &mut screen, next);
        assert_eq!(screen.current_option(), 1);
    }

    #[test]
    fn test_typed_name_survives_option_change() {
        let mut f = fixture(false);
        let mut screen = screen(&mut f);

        // click into the name box, erase, type a new name
        let name_box = screen.input_name.pos();
        click(&mut f, &mut screen, name_box);
        assert!(screen.input_name.edit_mode);
        for _ in 0..7 {
            f.input.release(Input::Backspace);
            f.input.press(Input::Backspace);
            tick(&mut f, &mut screen);
        }
        f.input.release(Input::Backspace);
        assert_eq!(screen.hero_name(), "");
        assert!(!screen.is_create_enabled());

        f.input.begin_frame();
        f.input.type_text("Zed");
        screen.logic(&mut f.input, &mut f.ctx, &mut f.images);
        assert_eq!(screen.hero_name(), "Zed");
        assert!(screen.modified_name);

        let next = screen.button_next.pos();
        click(&mut f, &mut screen, next);
        assert_eq!(screen.current_option(), 1);
        assert_eq!(screen.hero_name(), "Zed");
    }

    #[test]
    fn test_empty_name_is_refilled_by_next_option() {
        let mut f = fixture(false);
        let mut screen = screen(&mut f);

        screen.input_name.set_text("");
        tick(&mut f, &mut screen);
        assert!(screen.modified_name);
        assert!(!screen.is_create_enabled());

        let next = screen.button_next.pos();
        click(&mut f, &mut screen, next);
        assert_eq!(screen.hero_name(), "Ayla");
        assert!(!screen.modified_name);
    }

    #[test]
    fn test_long_default_name_follows_preset() {
        let mut f = fixture(false);
        let json = r#"{ "options": [
            { "index": 0, "portrait": "p0.png", "name": "Bartholomew the Magnificent" },
            { "index": 1, "portrait": "p1.png", "name": "Ayla" }
        ] }"#;
        let options = HeroOptions::from_json_str(json, &f.ctx.messages).unwrap();
        let mut screen =
            NewGameScreen::with_data(&f.ctx, &mut f.images, 1, NewGameLayout::default(), options);
        assert_eq!(screen.hero_name(), "Bartholomew the Magnificent");

        tick(&mut f, &mut screen);
        assert!(!screen.modified_name);

        let next = screen.button_next.pos();
        click(&mut f, &mut screen, next);
        assert_eq!(screen.hero_name(), "Ayla");
    }

    #[test]
    fn test_create_disabled_without_name() {
        let mut f = fixture(false);
        let mut screen = screen(&mut f);
        screen.input_name.set_text("");

        let create = screen.button_create.pos();
        let transition = click(&mut f, &mut screen, create);
        assert!(matches!(transition, Transition::Stay));
        assert!(!f.ctx.saves.save_exists(3));
    }

    #[test]
    fn test_create_starts_play_with_choices() {
        let mut f = fixture(false);
        let mut screen = screen(&mut f);

        let next = screen.button_next.pos();
        click(&mut f, &mut screen, next);
        let permadeath = screen.button_permadeath.pos();
        click(&mut f, &mut screen, permadeath);
        assert!(screen.button_permadeath.is_checked());

        let create = screen.button_create.pos();
        let transition = click(&mut f, &mut screen, create);

        let Transition::Play(play) = transition else {
            panic!("expected play transition");
        };
        let avatar = play.avatar();
        assert_eq!(avatar.name, "Ayla");
        assert_eq!(avatar.gfx_base, "female");
        assert_eq!(avatar.gfx_head, "long");
        assert_eq!(avatar.gfx_portrait, "p1.png");
        assert!(avatar.permadeath);
        assert_eq!(avatar.class_name.as_deref(), Some("Warrior"));
        assert_eq!(avatar.stats.physical, 3);
        assert_eq!(avatar.equipment, vec!["sword".to_string()]);
        assert_eq!(f.ctx.saves.game_slot(), 3);
        assert!(f.input.lock_all);
    }

    #[test]
    fn test_forced_permadeath_cannot_be_unchecked() {
        let mut f = fixture(true);
        let mut screen = screen(&mut f);
        assert!(screen.button_permadeath.is_checked());
        assert!(!screen.button_permadeath.enabled);

        let permadeath = screen.button_permadeath.pos();
        click(&mut f, &mut screen, permadeath);
        assert!(screen.button_permadeath.is_checked());

        let create = screen.button_create.pos();
        let Transition::Play(play) = click(&mut f, &mut screen, create) else {
            panic!("expected play transition");
        };
        assert!(play.avatar().permadeath);
    }

    #[test]
    fn test_cancel_key_and_button_return_to_load() {
        let mut f = fixture(false);
        let mut screen = screen(&mut f);

        f.input.begin_frame();
        f.input.press(Input::Cancel);
        let transition = screen.logic(&mut f.input, &mut f.ctx, &mut f.images);
        assert!(matches!(transition, Transition::LoadGame));
        assert!(!f.input.is_pressed(Input::Cancel));

        f.input.release(Input::Cancel);
        let exit = screen.button_exit.pos();
        assert!(matches!(click(&mut f, &mut screen, exit), Transition::LoadGame));
    }

    #[test]
    fn test_cancel_while_typing_only_ends_editing() {
        let mut f = fixture(false);
        let mut screen = screen(&mut f);

        let name_box = screen.input_name.pos();
        click(&mut f, &mut screen, name_box);
        assert!(screen.input_name.edit_mode);

        f.input.begin_frame();
        f.input.press(Input::Cancel);
        let transition = screen.logic(&mut f.input, &mut f.ctx, &mut f.images);
        assert!(matches!(transition, Transition::Stay));
        assert!(!screen.input_name.edit_mode);
    }

    #[test]
    fn test_keyboard_tab_to_next_button() {
        let mut f = fixture(false);
        let mut screen = screen(&mut f);

        // Exit, Create, Name, Permadeath, Prev, Next
        for _ in 0..6 {
            f.input.release(Input::Tab);
            f.input.press(Input::Tab);
            tick(&mut f, &mut screen);
        }
        f.input.release(Input::Tab);
        assert!(screen.button_next.in_focus);

        f.input.press(Input::Accept);
        tick(&mut f, &mut screen);
        assert_eq!(screen.current_option(), 1);
    }

    #[test]
    fn test_hidden_class_list_ignores_clicks() {
        let mut f = fixture(false);
        let options = HeroOptions::from_json_str(OPTIONS_JSON, &f.ctx.messages).unwrap();
        let layout = NewGameLayout {
            show_classlist: false,
            ..NewGameLayout::default()
        };
        let mut screen = NewGameScreen::with_data(&f.ctx, &mut f.images, 1, layout, options);

        let mage = class_row(&screen, 1);
        click(&mut f, &mut screen, mage);
        assert_eq!(screen.class_list.selected(), Some(0));
    }

    #[test]
    fn test_resize_repositions_widgets() {
        let mut f = fixture(false);
        let mut screen = screen(&mut f);
        let before = screen.button_next.pos();

        f.ctx.settings.set_view_size(1000, 800);
        f.input.begin_frame();
        f.input.set_resized(1000, 800);
        screen.logic(&mut f.input, &mut f.ctx, &mut f.images);

        let after = screen.button_next.pos();
        assert_eq!(after.x() - before.x(), 100);
        assert_eq!(after.y() - before.y(), 100);
    }

    #[test]
    fn test_portrait_rect_follows_frame() {
        let mut f = fixture(false);
        let screen = screen(&mut f);
        assert_eq!(
            screen.portrait_rect(f.ctx.frame_offset()),
            Rect::new(236 + 80, 120 + 60, 160, 160)
        );
    }

    #[test]
    fn test_missing_portrait_leaves_no_image() {
        let mut f = fixture(false);
        f.images.mark_missing("p1.png");
        let mut screen = screen(&mut f);

        let next = screen.button_next.pos();
        click(&mut f, &mut screen, next);
        assert_eq!(screen.current_option(), 1);
        assert!(screen.portrait_image.is_none());
    }
}

use log::{error, info};
use sdl2::pixels::Color;
use std::time::Duration;

mod avatar;
mod config;
mod gui;
mod input;
mod messages;
mod render;
mod save;
mod settings;
mod state;
mod text;

use input::InputState;
use render::TextureCache;
use settings::Settings;
use state::{GameContext, LoadScreen, NewGameScreen, PlayState, Transition};
use text::{draw_text, menu_color, text_width};

const WINDOW_TITLE: &str = "Flare-style New Game";
const FRAME_DELAY: Duration = Duration::from_millis(16);

/// The screen currently receiving input
enum Screen {
    Load(LoadScreen),
    NewGame(NewGameScreen),
    Play(Box<PlayState>),
}

/// Draws a single "loading" frame while a screen is being built
fn render_loading(canvas: &mut sdl2::render::Canvas<sdl2::video::Window>, ctx: &GameContext) -> Result<(), String> {
    let label = ctx.messages.get("Loading...");
    let (w, h) = canvas.output_size()?;
    let x = (w as i32 - text_width(&label, 2) as i32) / 2;

    canvas.set_draw_color(Color::RGB(0, 0, 0));
    canvas.clear();
    draw_text(canvas, &label, x, h as i32 / 2, menu_color("menu_normal"), 2)?;
    canvas.present();
    Ok(())
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::from_env();
    info!(
        "Data dir: {}, save dir: {}",
        settings.data_dir.display(),
        settings.save_dir.display()
    );

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window(WINDOW_TITLE, settings.view_w, settings.view_h)
        .position_centered()
        .resizable()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;
    video_subsystem.text_input().start();

    let mut images = TextureCache::new(&texture_creator, settings.data_dir.clone());
    let mut ctx = GameContext::load(settings).map_err(|e| e.to_string())?;
    let mut input = InputState::new();
    let mut screen = Screen::Load(LoadScreen::new(&ctx));

    'running: loop {
        input.begin_frame();
        for event in event_pump.poll_iter() {
            input.handle_event(&event);
        }
        if input.quit_requested() {
            break 'running;
        }
        if let Some((w, h)) = input.resized_to() {
            ctx.settings.set_view_size(w, h);
        }

        let transition = match &mut screen {
            Screen::Load(load) => load.logic(&mut input, &mut ctx),
            Screen::NewGame(new_game) => new_game.logic(&mut input, &mut ctx, &mut images),
            Screen::Play(play) => play.logic(&mut input, &mut ctx, &mut images),
        };

        if transition.changes_screen() {
            render_loading(&mut canvas, &ctx)?;
        }
        match transition {
            Transition::Stay => {}
            Transition::Quit => break 'running,
            Transition::LoadGame => screen = Screen::Load(LoadScreen::new(&ctx)),
            Transition::NewGame { slot } => {
                screen = Screen::NewGame(NewGameScreen::new(&ctx, &mut images, slot));
            }
            Transition::Play(play) => screen = Screen::Play(play),
        }

        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.clear();
        let rendered = match &mut screen {
            Screen::Load(load) => load.render(&mut canvas),
            Screen::NewGame(new_game) => new_game.render(&mut canvas, &images, &input, &ctx),
            Screen::Play(play) => play.render(&mut canvas, &images, &ctx),
        };
        if let Err(e) = rendered {
            error!("Render error: {}", e);
        }
        canvas.present();

        std::thread::sleep(FRAME_DELAY);
    }

    info!("Shutting down");
    Ok(())
}

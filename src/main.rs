use bevy::prelude::*;

mod camera;
mod clock;
mod config;
mod exit;
mod input;
mod screens;

use bevy::window::WindowResolution;
use camera::CameraPlugin;
use clock::{ClockPlugin, Countdown};
use config::PromoConfig;
use exit::ExitPlugin;
use input::InputPlugin;
use screens::{RequestedRoute, ScreenPlugin};

fn main() {
    let route = parse_route_arg();

    let config = match PromoConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    // The initial screen is entered during the startup state transition,
    // ahead of any Startup system, so everything the screens read must be
    // in place before the app runs
    let countdown = Countdown::new(config.launch_in_secs);

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Warfront".into(),
            resolution: WindowResolution::new(1280, 800),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(config)
    .insert_resource(countdown)
    .insert_resource(route)
    .add_plugins(CameraPlugin)
    .add_plugins(InputPlugin)
    .add_plugins(ScreenPlugin)
    .add_plugins(ClockPlugin)
    .add_plugins(ExitPlugin);

    app.run();
}

/// Parse `--screen <name>`; any name other than "home" routes to the void
fn parse_route_arg() -> RequestedRoute {
    let mut args = pico_args::Arguments::from_env();
    match args.opt_value_from_str::<_, String>("--screen") {
        Ok(screen) => RequestedRoute(screen),
        Err(e) => {
            eprintln!("Invalid --screen argument: {e}");
            std::process::exit(2);
        }
    }
}

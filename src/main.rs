use log::{error, info, warn};
use macroquad::prelude::*;
use life::{
    PlayConfig, Simulation, catalog,
    input,
    rendering::MacroquadRenderer,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 800,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

/// Gosper gun near the top-left, gliders heading at each other further down
fn seed(sim: &mut Simulation) {
    let gliders = catalog::glider();
    let placements = [
        (catalog::glider_gun().clone(), (20, 8)),
        (gliders.clone(), (45, 45)),
        (gliders.rotate(1), (45, 55)),
        (gliders.flip_vertical(), (55, 45)),
        (gliders.rotate(2), (55, 55)),
    ];

    for (pattern, location) in &placements {
        if let Err(e) = sim.engine.insert(pattern, *location) {
            warn!("Skipping seed pattern: {e}");
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = PlayConfig::from_env();
    let mut sim = match Simulation::new(&config) {
        Ok(sim) => sim,
        Err(e) => {
            error!("Cannot start: {e}");
            return;
        }
    };
    seed(&mut sim);
    sim = sim.with_running(true);

    let mut renderer = MacroquadRenderer::new(config.cell_size);
    info!("Playing life. Space pauses, Escape quits.");

    loop {
        if input::quit_requested() {
            break;
        }
        sim = input::process_keyboard_input(sim);
        sim = sim.tick(get_frame_time());

        renderer.status = format!(
            "{:.0} gen/s  {}",
            sim.updates_per_second,
            if sim.is_running { "Running" } else { "Paused" }
        );
        sim.show(&mut renderer);

        next_frame().await;
    }
}

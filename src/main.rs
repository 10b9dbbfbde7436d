use savanna::simulation::config::SimulationConfig;
use savanna::simulation::species::Kind;
use savanna::{SimulationObserver, Simulator, StepSnapshot};

/// Logs a status line every few steps in place of a graphical view.
struct ConsoleView {
    log_every: u64,
}

impl SimulationObserver for ConsoleView {
    fn on_step(&mut self, snapshot: &StepSnapshot) {
        if snapshot.tick % self.log_every != 0 {
            return;
        }
        log::info!(
            "step {} | day {} {:02}:00 | weather: {} | population {} ({} kinds) | disease deaths {}",
            snapshot.tick,
            snapshot.day,
            snapshot.hour,
            snapshot.weather.status(),
            snapshot.total_population(),
            snapshot.kinds_present(),
            snapshot.disease_deaths
        );
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let mut config = SimulationConfig::default();
    if let Some(depth) = args.next().and_then(|arg| arg.parse().ok()) {
        config.depth = depth;
    }
    if let Some(width) = args.next().and_then(|arg| arg.parse().ok()) {
        config.width = width;
    }
    let steps: u64 = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(500);
    config.seed = std::env::var("SAVANNA_SEED")
        .ok()
        .and_then(|seed| seed.parse().ok());

    let mut simulator = Simulator::new(config);
    let mut view = ConsoleView { log_every: 25 };
    view.on_step(&simulator.snapshot());

    let taken = simulator.run(steps, &mut view);

    let finale = simulator.snapshot();
    log::info!("simulation ended after {} of {} steps", taken, steps);
    for kind in Kind::ALL {
        log::info!("  {:<8} {}", kind.as_str(), finale.population_of(kind));
    }
}

use anyhow::Result;
use chrono::Local;
use log::info;

use pawlog::backend::domain::summary::DailyTally;
use pawlog::backend::domain::DEFAULT_RECENT_LIMIT;
use pawlog::backend::Backend;

fn main() -> Result<()> {
    env_logger::init();
    info!("Starting PawLog backend");

    let mut backend = Backend::open_default()?;
    backend.start();

    let Some(pet) = backend.pet_store.active_pet() else {
        info!("No active pet");
        return Ok(());
    };

    let today = Local::now().date_naive();
    let tally = DailyTally::from_events(&backend.event_store.events_for_day(today, pet.id));
    if tally.is_empty() {
        info!("Nothing logged today for {}", pet.name);
    }
    for (event_type, count) in tally.non_zero_items() {
        info!("{}: {} x{}", pet.name, event_type.label(), count);
    }

    for event in backend.event_store.recent(pet.id, DEFAULT_RECENT_LIMIT) {
        info!(
            "Recent: {} at {}",
            event.event_type.label(),
            event.timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M")
        );
    }

    Ok(())
}

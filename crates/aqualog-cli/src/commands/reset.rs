use aqualog_core::store::TrackerStore;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut store = TrackerStore::open()?;
    let event = store.reset_today();
    println!("{}", serde_json::to_string_pretty(&event)?);
    Ok(())
}
